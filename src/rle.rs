use std::fs;
use std::path::{Path, PathBuf};
use itertools::Itertools;
use regex::Regex;
use tracing::info;
use crate::error::*;
use crate::grid::Grid;
use crate::rule::GAME_OF_LIFE;

/// Read a Life pattern from a RLE string.
///
/// The header's `x` and `y` become the grid dimensions, so a pattern written
/// by [`write`] comes back with the same torus size.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
pub fn read(src: impl AsRef<str>) -> Result<Grid> {
  let header_re = Regex::new(
    r"^x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)\s*(?:,\s*rule\s*=\s*(\S+)\s*)?$"
  ).unwrap();

  let mut lines = src.as_ref()
    .lines()
    .enumerate()
    .map(|(i, line)| (i + 1, line.trim()))
    .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

  let (header_line, header) = lines.next()
    .ok_or_else(|| Error::rle(1, "missing header line"))?;
  let caps = header_re.captures(header)
    .ok_or_else(|| Error::rle(header_line, format!("invalid header {:?}", header)))?;

  let parse_dim = |i: usize| -> Result<usize> {
    caps[i].parse().map_err(|_| Error::rle(header_line, "dimension out of range"))
  };
  let width = parse_dim(1)?;
  let height = parse_dim(2)?;
  if let Some(rule) = caps.get(3) {
    check_rule(rule.as_str())?;
  }

  let mut grid = Grid::new(width, height)?;
  let mut x = 0;
  let mut y = 0;
  let mut last_line = header_line;

  for (line_no, line) in lines {
    last_line = line_no;
    let mut num: Option<usize> = None;

    for c in line.chars() {
      if c.is_whitespace() {
        continue;
      }

      if let Some(d) = c.to_digit(10) {
        num = num.unwrap_or(0)
          .checked_mul(10)
          .and_then(|n| n.checked_add(d as usize));
        if num.is_none() {
          return Err(Error::rle(line_no, "run count out of range"));
        }
        continue;
      }

      let count = num.take().unwrap_or(1);
      let advance = |pos: usize| pos.checked_add(count)
        .ok_or_else(|| Error::rle(line_no, "run count out of range"));
      match c {
        'b' => {
          x = advance(x)?;
          if x > width {
            return Err(Error::rle(line_no, format!("row {} is wider than {}", y, width)));
          }
        }
        'o' => {
          let end = advance(x)?;
          if y >= height || end > width {
            return Err(Error::rle(line_no,
              format!("live cells at ({}, {}) fall outside {}x{}", x, y, width, height)));
          }
          for i in x..end {
            grid.set(i, y, true);
          }
          x = end;
        }
        '$' => {
          x = 0;
          y = advance(y)?;
        }
        '!' => {
          return Ok(grid);
        }
        _ => {
          return Err(Error::rle(line_no, format!("invalid character {:?}", c)));
        }
      }
    }

    if num.is_some() {
      return Err(Error::rle(line_no, "run count at end of line"));
    }
  }

  Err(Error::rle(last_line, "unexpected end of input, missing '!'"))
}

fn check_rule(rule: &str) -> Result<()> {
  let rule = rule.to_ascii_uppercase();
  if rule == GAME_OF_LIFE.to_string() || rule == "23/3" {
    Ok(())
  } else {
    Err(Error::UnsupportedRule(rule))
  }
}

/// Write a Life pattern to a RLE string.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
pub fn write(grid: &Grid) -> String {
  let mut output = format!("x = {}, y = {}, rule = {}\n",
    grid.width(), grid.height(), GAME_OF_LIFE);

  let mut num_next_rows = 0;
  for y in 0..grid.height() {
    let groups = (0..grid.width())
      .map(|x| grid.get(x, y))
      .group_by(|&alive| alive);
    let mut runs = groups.into_iter()
      .map(|(alive, run)| (alive, run.count()))
      .collect_vec();
    if let Some(&(false, _)) = runs.last() {
      runs.pop();
    }

    if runs.is_empty() {
      num_next_rows += 1;
      continue;
    }

    if num_next_rows > 0 {
      RleUnit::NextRow.write(num_next_rows, &mut output);
    }
    for (alive, num) in runs {
      let unit = if alive { RleUnit::Alive } else { RleUnit::Dead };
      unit.write(num, &mut output);
    }
    num_next_rows = 1;
  }

  output.push('!');
  output.push('\n');
  output
}

pub fn load(path: impl AsRef<Path>) -> Result<Grid> {
  let src = fs::read_to_string(path)?;
  read(src)
}

pub fn save(path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
  fs::write(path, write(grid))?;
  Ok(())
}

/// Saves `grid` into `dir` under a name made from the current time, and
/// returns the path written.
pub fn save_timestamped(dir: impl AsRef<Path>, grid: &Grid) -> Result<PathBuf> {
  let now = chrono::Utc::now();
  let name = format!("savedSeed-{}.{:06}.rle", now.timestamp(), now.timestamp_subsec_micros());
  let path = dir.as_ref().join(name);
  save(&path, grid)?;
  info!("saved seed to {}", path.display());
  Ok(path)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RleUnit {
  Dead,
  Alive,
  NextRow,
}

impl RleUnit {
  fn write(&self, num: usize, s: &mut String) {
    let c = match self {
      Self::Dead => 'b',
      Self::Alive => 'o',
      Self::NextRow => '$',
    };

    let buf = if num == 1 {
      c.to_string()
    } else {
      format!("{}{}", num, c)
    };

    if s.len() - s.rfind('\n').map_or(0, |i| i + 1) + buf.len() > 70 {
      s.push('\n');
    }

    s.push_str(&buf);
  }
}
