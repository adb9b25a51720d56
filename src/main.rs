use std::io;
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use toruslife::config::RunConfig;
use toruslife::runner::{Outcome, Runner, TerminalScreen};
use toruslife::seeds::Preset;
use toruslife::{export, generate_seed, generate_seed_with, rle, Grid, LifeEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "toruslife", about = "Animate Conway's Game of Life on a torus in the terminal")]
struct Args {
  /// JSON run configuration; flags below override it.
  #[arg(long)]
  config: Option<PathBuf>,

  /// RLE file to start from instead of a random seed.
  #[arg(long, conflicts_with = "preset")]
  seed: Option<PathBuf>,

  /// Built-in seed, e.g. columns-25x25.
  #[arg(long)]
  preset: Option<Preset>,

  /// Width of a random seed.
  #[arg(long)]
  width: Option<usize>,

  /// Height of a random seed.
  #[arg(long)]
  height: Option<usize>,

  /// Maximum live cells in a random seed.
  #[arg(long)]
  max_living: Option<usize>,

  /// Generations to run.
  #[arg(long)]
  generations: Option<u64>,

  /// Milliseconds between generations.
  #[arg(long)]
  delay_ms: Option<u64>,

  /// Makes the random seed reproducible.
  #[arg(long)]
  rng_seed: Option<u64>,

  /// Directory to save the seed to as RLE.
  #[arg(long)]
  save_seed: Option<PathBuf>,

  /// Image file to save the last generation to.
  #[arg(long)]
  snapshot: Option<PathBuf>,
}

impl Args {
  fn run_config(&self) -> Result<RunConfig> {
    let mut config = match &self.config {
      Some(path) => RunConfig::load(path)
        .with_context(|| format!("Failed to load config {}", path.display()))?,
      None => RunConfig::default(),
    };

    if let Some(width) = self.width {
      config.width = width;
    }
    if let Some(height) = self.height {
      config.height = height;
    }
    if let Some(max_living) = self.max_living {
      config.max_living = max_living;
    }
    if let Some(generations) = self.generations {
      config.generations = generations;
    }
    if let Some(delay_ms) = self.delay_ms {
      config.frame_delay_ms = delay_ms;
    }
    if self.rng_seed.is_some() {
      config.rng_seed = self.rng_seed;
    }
    Ok(config)
  }

  fn seed(&self, config: &RunConfig) -> Result<Grid> {
    if let Some(path) = &self.seed {
      return rle::load(path)
        .with_context(|| format!("Failed to read seed {}", path.display()));
    }
    if let Some(preset) = self.preset {
      return Ok(preset.grid());
    }

    let seed = match config.rng_seed {
      Some(rng_seed) => generate_seed_with(
        &mut ChaCha8Rng::seed_from_u64(rng_seed),
        config.width, config.height, config.max_living),
      None => generate_seed(config.width, config.height, config.max_living),
    };
    seed.context("Failed to generate a random seed")
  }
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();
  let config = args.run_config()?;
  let seed = args.seed(&config)?;

  if let Some(dir) = &args.save_seed {
    rle::save_timestamped(dir, &seed)
      .with_context(|| format!("Failed to save seed into {}", dir.display()))?;
  }

  let screen = TerminalScreen::new(io::stdout());
  let mut runner = Runner::new(LifeEngine::with_grid(seed), &config, screen);
  let outcome = runner.run()?;

  match outcome {
    Outcome::Completed { generation } => {
      eprintln!("completed {} generations", generation);
    }
    Outcome::Stalled { generation } => {
      eprintln!("stalled at generation {}", generation);
    }
    Outcome::Cycled { generation, period } => {
      eprintln!("repeating every {} generations from generation {}", period, generation - period);
    }
  }

  if let Some(path) = &args.snapshot {
    let (engine, _) = runner.into_parts();
    export::save_image(engine.current(), path)
      .with_context(|| format!("Failed to save snapshot {}", path.display()))?;
  }

  info!(?outcome, "done");
  Ok(())
}
