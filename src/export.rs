use std::convert::TryFrom;
use std::path::Path;
use image::{ImageBuffer, Luma};
use tracing::info;
use crate::error::*;
use crate::grid::Grid;

/// One pixel per cell, live cells white on black.
pub fn to_image(grid: &Grid) -> Result<ImageBuffer<Luma<u8>, Vec<u8>>> {
  let width = dimension(grid.width())?;
  let height = dimension(grid.height())?;
  Ok(ImageBuffer::from_fn(width, height, |x, y| {
    if grid.get(x as usize, y as usize) {
      Luma([255u8])
    } else {
      Luma([0u8])
    }
  }))
}

fn dimension(len: usize) -> Result<u32> {
  u32::try_from(len)
    .map_err(|_| Error::InvalidGrid(format!("{} cells do not fit in an image", len)))
}

/// Saves `grid` as an image, the format follows the file extension.
pub fn save_image(grid: &Grid, path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  to_image(grid)?.save(path)?;
  info!("saved snapshot to {}", path.display());
  Ok(())
}
