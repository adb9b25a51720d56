//! Settings for an animated run.

use std::fs;
use std::path::Path;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::error::*;
use crate::render::Glyphs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
  /// Width of a generated random seed
  pub width: usize,
  /// Height of a generated random seed
  pub height: usize,
  /// Maximum live cells in a generated seed, 0 for no limit
  pub max_living: usize,
  /// Generations to run before stopping
  pub generations: u64,
  /// Pause before each generation
  pub frame_delay_ms: u64,
  /// Generations remembered for cycle detection, 0 to only detect stalls
  pub history_window: usize,
  pub glyphs: Glyphs,
  /// Seed for the random seed generator, random when absent
  pub rng_seed: Option<u64>,
}

impl Default for RunConfig {
  fn default() -> Self {
    Self {
      width: 100,
      height: 25,
      max_living: 0,
      generations: 1250,
      frame_delay_ms: 20,
      history_window: 16,
      glyphs: Glyphs::default(),
      rng_seed: None,
    }
  }
}

impl RunConfig {
  /// Reads a JSON config file. Missing fields keep their defaults.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let src = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&src)?)
  }

  pub fn frame_delay(&self) -> Duration {
    Duration::from_millis(self.frame_delay_ms)
  }
}
