//! Conway's Game of Life on a torus.

pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod grid;
pub mod history;
pub mod render;
pub mod rle;
pub mod rule;
pub mod runner;
pub mod seed;
pub mod seeds;

pub use engine::LifeEngine;
pub use error::{Error, Result};
pub use grid::Grid;
pub use render::{render_text, Glyphs};
pub use seed::{generate_seed, generate_seed_with};
