use std::io::Write;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};
use crate::config::RunConfig;
use crate::engine::LifeEngine;
use crate::error::*;
use crate::history::History;
use crate::render::{render_text, repaint_prefix, Glyphs};

/// One rendered generation.
pub struct Frame<'a> {
  pub text: &'a str,
  pub width: usize,
  pub height: usize,
  pub generation: u64,
  /// Set only for the seed, which has nothing to draw over.
  pub first: bool,
}

/// Where frames go.
pub trait Screen {
  fn present(&mut self, frame: &Frame) -> Result<()>;

  fn pause(&mut self, delay: Duration);
}

/// Draws frames over each other on an ANSI terminal.
pub struct TerminalScreen<W> {
  out: W,
}

impl<W: Write> TerminalScreen<W> {
  pub fn new(out: W) -> Self {
    Self { out }
  }

  pub fn into_inner(self) -> W {
    self.out
  }
}

impl<W: Write> Screen for TerminalScreen<W> {
  fn present(&mut self, frame: &Frame) -> Result<()> {
    if !frame.first {
      self.out.write_all(repaint_prefix(frame.width, frame.height).as_bytes())?;
    }
    self.out.write_all(frame.text.as_bytes())?;
    self.out.flush()?;
    Ok(())
  }

  fn pause(&mut self, delay: Duration) {
    thread::sleep(delay);
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  /// Ran every requested generation.
  Completed { generation: u64 },
  /// A step left the grid unchanged.
  Stalled { generation: u64 },
  /// The grid repeated one seen `period` generations earlier.
  Cycled { generation: u64, period: u64 },
}

/// Steps an engine, showing every generation, until it runs out of
/// generations or stops changing.
pub struct Runner<S> {
  engine: LifeEngine,
  screen: S,
  history: History,
  generations: u64,
  delay: Duration,
  glyphs: Glyphs,
}

impl<S: Screen> Runner<S> {
  pub fn new(engine: LifeEngine, config: &RunConfig, screen: S) -> Self {
    Self {
      engine,
      screen,
      history: History::new(config.history_window),
      generations: config.generations,
      delay: config.frame_delay(),
      glyphs: config.glyphs,
    }
  }

  pub fn engine(&self) -> &LifeEngine {
    &self.engine
  }

  pub fn screen(&self) -> &S {
    &self.screen
  }

  pub fn into_parts(self) -> (LifeEngine, S) {
    (self.engine, self.screen)
  }

  /// The generation that stops the run is not shown.
  pub fn run(&mut self) -> Result<Outcome> {
    info!(
      width = self.engine.grid_width(),
      height = self.engine.grid_height(),
      population = self.engine.current().population(),
      generations = self.generations,
      "starting run"
    );

    self.history.clear();
    self.history.record(self.engine.current(), self.engine.generation());
    self.present(true)?;

    for _ in 0..self.generations {
      self.screen.pause(self.delay);
      self.engine.step();
      let generation = self.engine.generation();

      if self.engine.is_stalled() {
        info!(generation, "stalled");
        return Ok(Outcome::Stalled { generation });
      }
      if let Some(period) = self.history.record(self.engine.current(), generation) {
        info!(generation, period, "cycle detected");
        return Ok(Outcome::Cycled { generation, period });
      }

      debug!(
        generation,
        population = self.engine.current().population(),
        changed = self.engine.changed_cells().map_or(0, |cells| cells.len()),
        "generation"
      );
      self.present(false)?;
    }

    let generation = self.engine.generation();
    info!(generation, "completed");
    Ok(Outcome::Completed { generation })
  }

  fn present(&mut self, first: bool) -> Result<()> {
    let text = render_text(self.engine.current(), &self.glyphs);
    self.screen.present(&Frame {
      text: &text,
      width: self.engine.grid_width(),
      height: self.engine.grid_height(),
      generation: self.engine.generation(),
      first,
    })
  }
}
