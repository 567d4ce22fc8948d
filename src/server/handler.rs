use axum::{
  http::{header::CONTENT_TYPE, Uri},
  response::{IntoResponse, Response},
};
use bytes::Bytes;

use super::*;

pub use index::index;
pub use repos::repos;
pub use users::{users, users_by_location};

const JSON_UTF8: &str = "application/json; charset=utf-8";

fn json(body: Bytes) -> Response {
  ([(CONTENT_TYPE, JSON_UTF8)], body).into_response()
}

// the path parameter exactly as the client sent it, still percent-encoded
fn raw_param(uri: &Uri) -> &str {
  let path = uri.path().trim_end_matches('/');
  path.rsplit('/').next().unwrap_or_default()
}

mod index {
  pub async fn index() -> &'static str {
    "Welcome to Github Search"
  }
}

mod users {
  use super::*;

  const LOCATION_PREFIX: &str = "location:";

  pub async fn users(Extension(github): GithubE) -> Result<Response> {
    let body = github.search_users("").await?;
    Ok(json(body))
  }

  /// `/users/location:<value>`, where the value may be empty
  pub async fn users_by_location(
    uri: Uri,
    Extension(github): GithubE,
  ) -> Result<Response> {
    let Some(location) = raw_param(&uri).strip_prefix(LOCATION_PREFIX) else {
      return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let body = github.search_users(location).await?;
    Ok(json(body))
  }
}

mod repos {
  use super::*;

  pub async fn repos(uri: Uri, Extension(github): GithubE) -> Result<Response> {
    let body = github.search_repos(raw_param(&uri)).await?;
    Ok(json(body))
  }
}
