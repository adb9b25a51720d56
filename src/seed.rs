use rand::Rng;
use crate::error::*;
use crate::grid::Grid;

pub const DEFAULT_SEED_WIDTH: usize = 25;
pub const DEFAULT_SEED_HEIGHT: usize = 25;

/// Random `width` x `height` seed, see [`generate_seed_with`].
pub fn generate_seed(width: usize, height: usize, max_living: usize) -> Result<Grid> {
  generate_seed_with(&mut rand::thread_rng(), width, height, max_living)
}

/// Random seed where every cell is alive on a fair coin flip.
///
/// When `max_living > 0` at most `max_living` cells are alive: once that many
/// have been placed every remaining cell is dead. Cells are visited row by row
/// (`y` outer, `x` inner), so with a cap the live cells cluster towards the
/// top rows, and the same RNG state always yields the same grid.
pub fn generate_seed_with<R>(
  rng: &mut R,
  width: usize,
  height: usize,
  max_living: usize,
) -> Result<Grid>
where
  R: Rng + ?Sized
{
  let mut grid = Grid::new(width, height)?;

  let mut living = 0;
  for y in 0..height {
    for x in 0..width {
      let mut alive = rng.gen::<bool>();
      if alive && max_living > 0 && living >= max_living {
        alive = false;
      }
      if alive {
        living += 1;
        grid.set(x, y, true);
      }
    }
  }

  Ok(grid)
}
