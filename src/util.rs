use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("upstream error: {0}")]
  Upstream(#[from] reqwest::Error),

  #[error("hyper error: {0}")]
  Hyper(#[from] hyper::Error),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
