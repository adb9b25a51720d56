use std::convert::TryFrom;
use crate::error::*;

/// A rectangular field of cells, addressed as `(x, y)`.
///
/// `x` is the column in `[0, width)` and `y` the row in `[0, height)`. Cells
/// are stored column-major, so `cells[x * height + y]` is the cell at
/// `(x, y)`. A grid always has at least one cell.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Grid {
  width: usize,
  height: usize,
  cells: Vec<bool>,
}

impl Grid {
  /// An all-dead grid.
  pub fn new(width: usize, height: usize) -> Result<Self> {
    if width == 0 || height == 0 {
      return Err(Error::InvalidGrid(
        format!("grid must not be empty, got {}x{}", width, height)));
    }

    let too_large = || Error::InvalidGrid(
      format!("{}x{} grid is too large", width, height));
    let len = width.checked_mul(height).ok_or_else(too_large)?;
    let mut cells = Vec::new();
    cells.try_reserve_exact(len).map_err(|_| too_large())?;
    cells.resize(len, false);

    Ok(Self {
      width,
      height,
      cells,
    })
  }

  /// Builds a grid from columns, where `columns[x][y]` is the cell at
  /// `(x, y)`.
  pub fn from_columns(columns: Vec<Vec<bool>>) -> Result<Self> {
    let width = columns.len();
    let height = match columns.first() {
      Some(column) => column.len(),
      None => return Err(Error::InvalidGrid("grid has no columns".to_owned())),
    };
    if height == 0 {
      return Err(Error::InvalidGrid("first column is empty".to_owned()));
    }

    if let Some((x, column)) = columns.iter()
      .enumerate()
      .find(|(_, column)| column.len() != height)
    {
      return Err(Error::InvalidGrid(format!(
        "ragged grid: column {} has {} cells, expected {}",
        x, column.len(), height)));
    }

    Ok(Self {
      width,
      height,
      cells: columns.into_iter().flatten().collect(),
    })
  }

  /// Builds a grid from text rows; `rows[y]` is row `y` and every char equal
  /// to `alive` is a live cell.
  pub fn from_rows(rows: &[&str], alive: char) -> Result<Self> {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.chars().count());
    let mut grid = Self::new(width, height)?;

    for (y, row) in rows.iter().enumerate() {
      let len = row.chars().count();
      if len != width {
        return Err(Error::InvalidGrid(format!(
          "ragged grid: row {} has {} cells, expected {}", y, len, width)));
      }
      for (x, c) in row.chars().enumerate() {
        grid.set(x, y, c == alive);
      }
    }

    Ok(grid)
  }

  pub fn width(&self) -> usize {
    self.width
  }

  pub fn height(&self) -> usize {
    self.height
  }

  pub fn get(&self, x: usize, y: usize) -> bool {
    self.cells[self.index(x, y)]
  }

  pub fn set(&mut self, x: usize, y: usize, alive: bool) {
    let i = self.index(x, y);
    self.cells[i] = alive;
  }

  /// Number of live cells.
  pub fn population(&self) -> usize {
    self.cells.iter().filter(|&&alive| alive).count()
  }

  pub fn to_columns(&self) -> Vec<Vec<bool>> {
    self.cells.chunks(self.height)
      .map(|column| column.to_vec())
      .collect()
  }

  /// All cells as `(x, y, alive)`, row by row.
  pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
    (0..self.height)
      .flat_map(move |y| (0..self.width).map(move |x| (x, y, self.get(x, y))))
  }

  fn index(&self, x: usize, y: usize) -> usize {
    assert!(x < self.width && y < self.height,
      "({}, {}) is outside a {}x{} grid", x, y, self.width, self.height);
    x * self.height + y
  }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
  type Error = Error;

  fn try_from(columns: Vec<Vec<bool>>) -> Result<Self> {
    Self::from_columns(columns)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn from_columns_indexes_x_first() {
    let grid = Grid::from_columns(vec![
      vec![true, false, false],
      vec![false, false, true],
    ]).unwrap();

    assert_eq!(grid.width(), 2);
    assert_eq!(grid.height(), 3);
    assert!(grid.get(0, 0));
    assert!(grid.get(1, 2));
    assert!(!grid.get(1, 0));
    assert_eq!(grid.population(), 2);
  }

  #[test]
  fn ragged_columns_are_rejected() {
    let err = Grid::from_columns(vec![
      vec![true, false],
      vec![true],
    ]).unwrap_err();
    assert!(matches!(err, Error::InvalidGrid(_)));
  }

  #[test]
  fn empty_grids_are_rejected() {
    assert!(matches!(Grid::from_columns(vec![]), Err(Error::InvalidGrid(_))));
    assert!(matches!(Grid::from_columns(vec![vec![], vec![]]), Err(Error::InvalidGrid(_))));
    assert!(matches!(Grid::new(0, 4), Err(Error::InvalidGrid(_))));
    assert!(matches!(Grid::from_rows(&[], '#'), Err(Error::InvalidGrid(_))));
  }

  #[test]
  fn oversized_grids_are_rejected() {
    assert!(matches!(Grid::new(usize::MAX, 2), Err(Error::InvalidGrid(_))));
    assert!(matches!(Grid::new(usize::MAX / 2, usize::MAX / 2), Err(Error::InvalidGrid(_))));
  }

  #[test]
  fn from_rows_matches_from_columns() {
    let rows = Grid::from_rows(&[
      "#..",
      "..#",
    ], '#').unwrap();
    let columns = Grid::from_columns(vec![
      vec![true, false],
      vec![false, false],
      vec![false, true],
    ]).unwrap();

    assert_eq!(rows, columns);
    assert_eq!(rows.to_columns(), columns.to_columns());
  }

  #[test]
  fn ragged_rows_are_rejected() {
    let err = Grid::from_rows(&["##", "#"], '#').unwrap_err();
    assert!(matches!(err, Error::InvalidGrid(_)));
  }

  #[test]
  fn cells_are_row_major() {
    let grid = Grid::from_rows(&["#.", ".#"], '#').unwrap();
    let cells: Vec<_> = grid.cells().collect();
    assert_eq!(cells, vec![
      (0, 0, true), (1, 0, false),
      (0, 1, false), (1, 1, true),
    ]);
  }
}
