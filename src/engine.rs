use tracing::trace;
use crate::error::*;
use crate::grid::Grid;
use crate::render::{render_text, Glyphs};
use crate::rule::*;
use crate::seed::*;

/// Moore neighborhood. Only the count of live neighbors matters, so the
/// order is arbitrary.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
  (-1, -1),
  (0, -1),
  (1, -1),
  (1, 0),
  (1, 1),
  (0, 1),
  (-1, 1),
  (-1, 0),
];

/// Game of Life on a torus.
///
/// Owns the current generation and, once [`step`](LifeEngine::step) has run,
/// the generation before it.
#[derive(Debug, Clone)]
pub struct LifeEngine {
  current: Grid,
  previous: Option<Grid>,
  generation: u64,
}

impl LifeEngine {
  /// Starts from `seed`, indexed as `seed[x][y]`.
  ///
  /// A missing seed, or one without any columns, is replaced by a random
  /// 25x25 seed. Empty columns or columns of differing length are rejected.
  pub fn new(seed: Option<Vec<Vec<bool>>>) -> Result<Self> {
    match seed {
      Some(columns) if !columns.is_empty() => {
        Ok(Self::with_grid(Grid::from_columns(columns)?))
      }
      _ => Ok(Self::random()),
    }
  }

  pub fn with_grid(seed: Grid) -> Self {
    Self {
      current: seed,
      previous: None,
      generation: 0,
    }
  }

  pub fn random() -> Self {
    // default dimensions are non zero
    let seed = generate_seed(DEFAULT_SEED_WIDTH, DEFAULT_SEED_HEIGHT, 0)
      .unwrap_or_else(|_| unreachable!());
    Self::with_grid(seed)
  }

  /// Advances one generation.
  pub fn step(&mut self) {
    let width = self.current.width();
    let height = self.current.height();

    let mut next = self.current.clone();
    for y in 0..height {
      for x in 0..width {
        next.set(x, y, next_cell(&self.current, x, y));
      }
    }

    trace!(
      generation = self.generation + 1,
      population = next.population(),
      "stepped"
    );

    self.previous = Some(std::mem::replace(&mut self.current, next));
    self.generation += 1;
  }

  /// Copy of the current generation.
  pub fn current_state(&self) -> Grid {
    self.current.clone()
  }

  /// Copy of the generation before the last step, `None` before the first
  /// step.
  pub fn previous_state(&self) -> Option<Grid> {
    self.previous.clone()
  }

  pub fn current(&self) -> &Grid {
    &self.current
  }

  pub fn previous(&self) -> Option<&Grid> {
    self.previous.as_ref()
  }

  pub fn set_current_state(&mut self, state: Grid) -> &mut Self {
    self.current = state;
    self
  }

  /// Validates `columns` and installs them as the current generation.
  pub fn set_current_cells(&mut self, columns: Vec<Vec<bool>>) -> Result<&mut Self> {
    let state = Grid::from_columns(columns)?;
    Ok(self.set_current_state(state))
  }

  pub fn set_previous_state(&mut self, state: Grid) -> &mut Self {
    self.previous = Some(state);
    self
  }

  pub fn grid_width(&self) -> usize {
    self.current.width()
  }

  pub fn grid_height(&self) -> usize {
    self.current.height()
  }

  /// Number of steps taken since construction.
  pub fn generation(&self) -> u64 {
    self.generation
  }

  /// Whether the last step left the grid unchanged.
  pub fn is_stalled(&self) -> bool {
    self.previous.as_ref() == Some(&self.current)
  }

  /// Cells whose state differs between the previous and current generation.
  pub fn changed_cells(&self) -> Result<Vec<(usize, usize)>> {
    let previous = self.previous.as_ref().ok_or_else(|| {
      Error::UninitializedState("no previous generation before the first step".to_owned())
    })?;
    if previous.width() != self.current.width() || previous.height() != self.current.height() {
      return Err(Error::InvalidGrid(format!(
        "previous generation is {}x{}, current is {}x{}",
        previous.width(), previous.height(),
        self.current.width(), self.current.height())));
    }

    Ok(self.current.cells()
      .filter(|&(x, y, alive)| previous.get(x, y) != alive)
      .map(|(x, y, _)| (x, y))
      .collect())
  }

  pub fn render(&self, glyphs: &Glyphs) -> String {
    render_text(&self.current, glyphs)
  }
}

impl Default for LifeEngine {
  fn default() -> Self {
    Self::random()
  }
}

/// State of `(x, y)` in the generation after `grid`.
pub fn next_cell(grid: &Grid, x: usize, y: usize) -> bool {
  GAME_OF_LIFE.next(grid.get(x, y), living_neighbors(grid, x, y))
}

/// Number of live cells around `(x, y)`, wrapping around the edges.
pub fn living_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
  let width = grid.width();
  let height = grid.height();
  NEIGHBOR_OFFSETS.iter()
    .filter(|&&(dx, dy)| {
      let nx = wrap(x as isize + dx, width);
      let ny = wrap(y as isize + dy, height);
      grid.get(nx, ny)
    })
    .count() as u8
}

/// Brings a coordinate at most one step outside `[0, size)` back inside.
///
/// Only a single wrap is corrected: `c` must be in `[-1, size]`.
pub fn wrap(c: isize, size: usize) -> usize {
  let size = size as isize;
  debug_assert!(c >= -1 && c <= size, "{} is more than one step outside 0..{}", c, size);
  let c = if c < 0 { size + c } else { c };
  let c = if c >= size { c - size } else { c };
  c as usize
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::seeds;
  use pretty_assertions::assert_eq;
  use rand::seq::SliceRandom;
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;

  fn grid(rows: &[&str]) -> Grid {
    Grid::from_rows(rows, '#').unwrap()
  }

  #[test]
  fn test_wrap() {
    assert_eq!(wrap(-1, 5), 4);
    assert_eq!(wrap(5, 5), 0);
    assert_eq!(wrap(0, 5), 0);
    assert_eq!(wrap(4, 5), 4);
    assert_eq!(wrap(-1, 1), 0);
    assert_eq!(wrap(1, 1), 0);
  }

  #[test]
  fn corner_neighbor_wraps_diagonally() {
    let g = grid(&[
      "#....",
      ".....",
      ".....",
      ".....",
      ".....",
    ]);
    assert_eq!(living_neighbors(&g, 4, 4), 1);
    assert_eq!(living_neighbors(&g, 4, 0), 1);
    assert_eq!(living_neighbors(&g, 0, 4), 1);
    assert_eq!(living_neighbors(&g, 2, 2), 0);
    assert_eq!(living_neighbors(&g, 0, 0), 0);
  }

  #[test]
  fn neighbor_count_of_all_alive() {
    let g = seeds::all_alive_5x5();
    for y in 0..5 {
      for x in 0..5 {
        assert_eq!(living_neighbors(&g, x, y), 8);
      }
    }
  }

  #[test]
  fn new_without_seed_is_random_25x25() {
    let engine = LifeEngine::new(None).unwrap();
    assert_eq!(engine.grid_width(), 25);
    assert_eq!(engine.grid_height(), 25);
    assert!(engine.previous_state().is_none());

    let engine = LifeEngine::new(Some(vec![])).unwrap();
    assert_eq!(engine.grid_width(), 25);
  }

  #[test]
  fn new_rejects_malformed_seeds() {
    let ragged = vec![vec![true, false], vec![true]];
    assert!(matches!(LifeEngine::new(Some(ragged)), Err(Error::InvalidGrid(_))));

    let empty_columns = vec![vec![], vec![]];
    assert!(matches!(LifeEngine::new(Some(empty_columns)), Err(Error::InvalidGrid(_))));
  }

  #[test]
  fn dimensions_follow_current_state() {
    let mut engine = LifeEngine::with_grid(seeds::all_dead_5x5());
    let columns = vec![vec![false; 3]; 7];
    engine.set_current_cells(columns.clone()).unwrap();
    assert_eq!(engine.grid_width(), columns.len());
    assert_eq!(engine.grid_height(), columns[0].len());

    assert!(engine.set_current_cells(vec![vec![true], vec![]]).is_err());
    assert_eq!(engine.grid_width(), 7);
  }

  #[test]
  fn block_is_still() {
    let block = grid(&[
      ".....",
      ".##..",
      ".##..",
      ".....",
      ".....",
    ]);
    let mut engine = LifeEngine::with_grid(block.clone());
    engine.step();
    assert_eq!(engine.current_state(), block);
    assert!(engine.is_stalled());
  }

  #[test]
  fn all_dead_stays_dead() {
    let mut engine = LifeEngine::with_grid(seeds::all_dead_5x5());
    engine.step();
    assert_eq!(engine.current_state(), seeds::all_dead_5x5());
  }

  #[test]
  fn all_alive_dies() {
    let mut engine = LifeEngine::with_grid(seeds::all_alive_5x5());
    engine.step();
    assert_eq!(engine.current_state(), seeds::all_dead_5x5());
    assert_eq!(engine.previous_state(), Some(seeds::all_alive_5x5()));
    assert!(!engine.is_stalled());
  }

  #[test]
  fn blinker_oscillates() {
    let horizontal = grid(&[
      ".....",
      ".....",
      ".###.",
      ".....",
      ".....",
    ]);
    let vertical = grid(&[
      ".....",
      "..#..",
      "..#..",
      "..#..",
      ".....",
    ]);
    let mut engine = LifeEngine::with_grid(horizontal.clone());
    engine.step();
    assert_eq!(engine.current(), &vertical);
    engine.step();
    assert_eq!(engine.current(), &horizontal);
    assert_eq!(engine.previous(), Some(&vertical));
    assert_eq!(engine.generation(), 2);
  }

  #[test]
  fn glider_crosses_the_edge() {
    let mut engine = LifeEngine::with_grid(grid(&[
      "..#..",
      "...#.",
      ".###.",
      ".....",
      ".....",
    ]));
    // a glider moves one cell diagonally every 4 generations
    for _ in 0..12 {
      engine.step();
    }
    assert_eq!(engine.current(), &grid(&[
      "##..#",
      ".....",
      ".....",
      "#....",
      ".#...",
    ]));
    for _ in 0..8 {
      engine.step();
    }
    assert_eq!(engine.current(), &grid(&[
      "..#..",
      "...#.",
      ".###.",
      ".....",
      ".....",
    ]));
  }

  #[test]
  fn identical_seeds_step_identically() {
    let seed = generate_seed_with(&mut ChaCha8Rng::seed_from_u64(9), 30, 20, 0).unwrap();
    let mut a = LifeEngine::with_grid(seed.clone());
    let mut b = LifeEngine::with_grid(seed);
    for _ in 0..10 {
      a.step();
      b.step();
      assert_eq!(a.current(), b.current());
    }
  }

  #[test]
  fn next_generation_ignores_update_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let seed = generate_seed_with(&mut rng, 17, 11, 0).unwrap();

    let mut coords: Vec<_> = seed.cells().map(|(x, y, _)| (x, y)).collect();
    coords.shuffle(&mut rng);
    let mut shuffled = Grid::new(17, 11).unwrap();
    for (x, y) in coords {
      shuffled.set(x, y, next_cell(&seed, x, y));
    }

    let mut engine = LifeEngine::with_grid(seed);
    engine.step();
    assert_eq!(engine.current(), &shuffled);
  }

  #[test]
  fn returned_state_is_a_copy() {
    let mut engine = LifeEngine::with_grid(seeds::all_dead_5x5());
    let mut state = engine.current_state();
    state.set(2, 2, true);
    assert_eq!(engine.current().population(), 0);

    engine.step();
    let mut previous = engine.previous_state().unwrap();
    previous.set(0, 0, true);
    assert!(engine.is_stalled());
  }

  #[test]
  fn changed_cells_needs_a_previous_generation() {
    let mut engine = LifeEngine::with_grid(grid(&[
      ".....",
      ".....",
      ".###.",
      ".....",
      ".....",
    ]));
    assert!(matches!(engine.changed_cells(), Err(Error::UninitializedState(_))));

    engine.step();
    assert_eq!(engine.changed_cells().unwrap(), vec![(2, 1), (1, 2), (3, 2), (2, 3)]);
  }

  #[test]
  fn set_previous_state() {
    let mut engine = LifeEngine::with_grid(seeds::all_dead_5x5());
    engine.set_previous_state(seeds::all_dead_5x5());
    assert!(engine.is_stalled());
  }
}
