use indexmap::IndexMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use crate::grid::Grid;

/// The last few generations, used to notice a simulation that keeps
/// repeating itself.
pub struct History {
  /// generation -> the generation number it was last seen at, oldest first
  seen: IndexMap<Grid, u64, BuildHasherDefault<FxHasher>>,
  window: usize,
}

impl History {
  /// Remembers at most `window` generations. A window of 0 remembers
  /// nothing.
  pub fn new(window: usize) -> Self {
    Self {
      seen: IndexMap::default(),
      window,
    }
  }

  /// Records `grid` as generation `generation`, returning the period if the
  /// same grid was recorded within the window.
  pub fn record(&mut self, grid: &Grid, generation: u64) -> Option<u64> {
    if self.window == 0 {
      return None;
    }

    if let Some(&last) = self.seen.get(grid) {
      return Some(generation - last);
    }

    if self.seen.len() == self.window {
      self.seen.shift_remove_index(0);
    }
    self.seen.insert(grid.clone(), generation);
    None
  }

  pub fn len(&self) -> usize {
    self.seen.len()
  }

  pub fn is_empty(&self) -> bool {
    self.seen.is_empty()
  }

  pub fn clear(&mut self) {
    self.seen.clear();
  }
}
