use itertools::Itertools;
use serde::{Deserialize, Serialize};
use crate::grid::Grid;

/// Characters drawn for live and dead cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyphs {
  pub alive: char,
  pub dead: char,
}

impl Default for Glyphs {
  fn default() -> Self {
    Self {
      alive: '\u{2588}',
      dead: '\u{2591}',
    }
  }
}

/// One line per row, one glyph per cell, followed by a single blank line.
pub fn render_text(grid: &Grid, glyphs: &Glyphs) -> String {
  let mut text = (0..grid.height())
    .map(|y| {
      (0..grid.width())
        .map(|x| if grid.get(x, y) { glyphs.alive } else { glyphs.dead })
        .collect::<String>()
    })
    .join("\n");
  text.push_str("\n\n");
  text
}

/// ANSI sequence moving the cursor back over a frame rendered by
/// [`render_text`], so the next frame overwrites it.
pub fn repaint_prefix(width: usize, height: usize) -> String {
  format!("\x1b[{}A\x1b[{}D", height + 1, width)
}
