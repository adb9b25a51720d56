use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
  #[error("invalid grid: {0}")]
  InvalidGrid(String),

  #[error("uninitialized state: {0}")]
  UninitializedState(String),

  #[error("RLE error on line {line}: {message}")]
  Rle {
    line: usize,
    message: String,
  },

  #[error("unsupported rule {0:?}, only B3/S23 is supported")]
  UnsupportedRule(String),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("image error: {0}")]
  Image(#[from] image::ImageError),

  #[error("config error: {0}")]
  Config(#[from] serde_json::Error),
}

impl Error {
  pub(crate) fn rle(line: usize, message: impl Into<String>) -> Self {
    Error::Rle {
      line,
      message: message.into(),
    }
  }
}
