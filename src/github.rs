use bytes::Bytes;
use http::header::{ACCEPT, AUTHORIZATION};
use tracing::{debug, warn};

use crate::{
  config::Config,
  util::{Error, Result},
};

pub const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

const USER_AGENT: &str =
  concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the GitHub search endpoints.
///
/// Query values are spliced into the URL verbatim. Nothing is escaped, so a
/// `&` or `#` in the input changes the meaning of the upstream query.
pub struct GithubClient {
  http: reqwest::Client,
  api_base: String,
  bearer: String,
}

pub fn users_url(api_base: &str, location: &str) -> String {
  format!("{api_base}/search/users?q=location:{location}")
}

pub fn repos_url(api_base: &str, language: &str) -> String {
  format!("{api_base}/search/repositories?q=language:{language}")
}

impl GithubClient {
  pub fn new(config: &Config) -> Result<Self> {
    let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    Ok(Self {
      http,
      api_base: config.api_base.clone(),
      bearer: config.bearer.clone(),
    })
  }

  pub async fn search_users(&self, location: &str) -> Result<Bytes> {
    self.fetch(users_url(&self.api_base, location)).await
  }

  pub async fn search_repos(&self, language: &str) -> Result<Bytes> {
    self.fetch(repos_url(&self.api_base, language)).await
  }

  // the upstream status is not inspected, any body is relayed as is
  async fn fetch(&self, url: String) -> Result<Bytes> {
    let result = async {
      let resp = self
        .http
        .get(&url)
        .header(ACCEPT, ACCEPT_GITHUB_JSON)
        .header(AUTHORIZATION, &self.bearer)
        .send()
        .await?;

      debug!(%url, status = %resp.status(), "upstream responded");
      resp.bytes().await
    }
    .await;

    result.map_err(|e| {
      warn!(%url, "upstream request failed: {}", e);
      Error::from(e)
    })
  }
}
