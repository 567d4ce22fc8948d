use std::net::SocketAddr;

use clap::Parser;
use tracing::{info, warn};

use crate::{
  config::{parse_listen_addr, Config, DEFAULT_API_BASE},
  github::GithubClient,
  server::Server,
  util::Result,
};

#[derive(Parser, Debug)]
/// HTTP proxy in front of the GitHub search API
pub struct Cli {
  /// address to listen on, either `:PORT` or `HOST:PORT`
  #[arg(short, long, default_value = ":3000", value_parser = parse_listen_addr)]
  port: SocketAddr,

  /// production mode: serve on one worker thread per core
  #[arg(long)]
  prod: bool,

  /// GitHub access token sent as the bearer credential
  #[arg(long, env, default_value = "", hide_env_values = true)]
  access_token: String,

  /// base URL of the upstream API
  #[arg(long, env = "GITHUB_API_BASE", default_value = DEFAULT_API_BASE)]
  api_base: String,
}

impl Cli {
  pub fn prod(&self) -> bool {
    self.prod
  }

  pub fn config(&self) -> Config {
    Config::new(self.port, self.prod, &self.access_token, &self.api_base)
  }

  pub async fn run(self) -> Result<()> {
    let config = self.config();

    if !config.has_token() {
      warn!("ACCESS_TOKEN is not set, upstream requests will be unauthenticated");
    }

    info!(
      listen_addr = %config.listen_addr,
      prod = config.prod,
      api_base = %config.api_base,
      "starting server"
    );

    let client = GithubClient::new(&config)?;
    let server = Server::new(config.listen_addr, client);
    server.run().await
  }
}
