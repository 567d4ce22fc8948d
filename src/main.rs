mod cli;
mod config;
mod github;
mod server;
mod util;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{cli::Cli, util::Result};

const DEFAULT_LOG_FILTER: &str = "github_search=info,tower_http=info";

fn main() -> Result<()> {
  #[cfg(feature = "dotenv")]
  dotenv::dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    )
    .init();

  let cli = Cli::parse();

  // --prod spreads requests over every core, otherwise a single thread
  // serves everything
  let runtime = if cli.prod() {
    tokio::runtime::Builder::new_multi_thread()
      .enable_all()
      .build()?
  } else {
    tokio::runtime::Builder::new_current_thread()
      .enable_all()
      .build()?
  };

  runtime.block_on(cli.run())
}
