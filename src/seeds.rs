//! Fixed seeds for trying the engine out.
//!
//! All of them are indexed `[x][y]` like every other grid, so e.g.
//! `columns_25x25` has every odd `y` alive.

use std::fmt::{self, Display};
use std::str::FromStr;
use crate::grid::Grid;

fn pattern(width: usize, height: usize, alive: impl Fn(usize, usize) -> bool) -> Grid {
  let columns = (0..width)
    .map(|x| (0..height).map(|y| alive(x, y)).collect())
    .collect();
  // dimensions are non zero constants
  Grid::from_columns(columns).unwrap_or_else(|_| unreachable!())
}

pub fn all_alive_5x5() -> Grid {
  pattern(5, 5, |_, _| true)
}

pub fn all_dead_5x5() -> Grid {
  pattern(5, 5, |_, _| false)
}

pub fn every_other_5x5() -> Grid {
  pattern(5, 5, |x, y| (x + y) % 2 == 0)
}

pub fn every_other_alt_5x5() -> Grid {
  pattern(5, 5, |x, y| (x + y) % 2 == 1)
}

pub fn every_other_25x25() -> Grid {
  pattern(25, 25, |x, y| (x + y) % 2 == 0)
}

pub fn every_other_alt_25x25() -> Grid {
  pattern(25, 25, |x, y| (x + y) % 2 == 1)
}

pub fn columns_25x25() -> Grid {
  pattern(25, 25, |_, y| y % 2 == 1)
}

pub fn columns_alt_25x25() -> Grid {
  pattern(25, 25, |_, y| y % 2 == 0)
}

pub fn rows_25x25() -> Grid {
  pattern(25, 25, |x, _| x % 2 == 0)
}

pub fn rows_alt_25x25() -> Grid {
  pattern(25, 25, |x, _| x % 2 == 1)
}

/// Named seed, selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
  AllAlive5x5,
  AllDead5x5,
  EveryOther5x5,
  EveryOtherAlt5x5,
  EveryOther25x25,
  EveryOtherAlt25x25,
  Columns25x25,
  ColumnsAlt25x25,
  Rows25x25,
  RowsAlt25x25,
}

impl Preset {
  pub const ALL: [Preset; 10] = [
    Preset::AllAlive5x5,
    Preset::AllDead5x5,
    Preset::EveryOther5x5,
    Preset::EveryOtherAlt5x5,
    Preset::EveryOther25x25,
    Preset::EveryOtherAlt25x25,
    Preset::Columns25x25,
    Preset::ColumnsAlt25x25,
    Preset::Rows25x25,
    Preset::RowsAlt25x25,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      Preset::AllAlive5x5 => "all-alive-5x5",
      Preset::AllDead5x5 => "all-dead-5x5",
      Preset::EveryOther5x5 => "every-other-5x5",
      Preset::EveryOtherAlt5x5 => "every-other-alt-5x5",
      Preset::EveryOther25x25 => "every-other-25x25",
      Preset::EveryOtherAlt25x25 => "every-other-alt-25x25",
      Preset::Columns25x25 => "columns-25x25",
      Preset::ColumnsAlt25x25 => "columns-alt-25x25",
      Preset::Rows25x25 => "rows-25x25",
      Preset::RowsAlt25x25 => "rows-alt-25x25",
    }
  }

  pub fn grid(&self) -> Grid {
    match self {
      Preset::AllAlive5x5 => all_alive_5x5(),
      Preset::AllDead5x5 => all_dead_5x5(),
      Preset::EveryOther5x5 => every_other_5x5(),
      Preset::EveryOtherAlt5x5 => every_other_alt_5x5(),
      Preset::EveryOther25x25 => every_other_25x25(),
      Preset::EveryOtherAlt25x25 => every_other_alt_25x25(),
      Preset::Columns25x25 => columns_25x25(),
      Preset::ColumnsAlt25x25 => columns_alt_25x25(),
      Preset::Rows25x25 => rows_25x25(),
      Preset::RowsAlt25x25 => rows_alt_25x25(),
    }
  }
}

impl Display for Preset {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Preset {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.to_ascii_lowercase().replace('_', "-");
    Preset::ALL.iter()
      .copied()
      .find(|preset| preset.name() == normalized)
      .ok_or_else(|| format!("unknown preset {:?}", s))
  }
}
