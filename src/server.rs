mod handler;

use std::{net::SocketAddr, sync::Arc};

use axum::{
  http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Method, StatusCode,
  },
  response::{IntoResponse, Response},
  routing::get,
  Extension, Router,
};
use tower_http::{
  catch_panic::CatchPanicLayer,
  cors::{Any, CorsLayer},
  trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::{
  github::GithubClient,
  util::{Error, Result},
};

pub struct Server {
  bind_addr: SocketAddr,
  github: Arc<GithubClient>,
}

type GithubE = Extension<Arc<GithubClient>>;

impl Server {
  pub fn new(bind_addr: SocketAddr, github: GithubClient) -> Self {
    Self {
      bind_addr,
      github: Arc::new(github),
    }
  }

  pub async fn run(self) -> Result<()> {
    let router = self.router();

    let server = axum::Server::try_bind(&self.bind_addr)?;
    info!("listening on {}", self.bind_addr);
    server.serve(router.into_make_service()).await?;

    Ok(())
  }

  fn router(&self) -> Router {
    with_middleware(api_router().layer(Extension(self.github.clone())))
  }
}

fn api_router() -> Router {
  Router::new()
    .route("/api/v1", get(handler::index))
    .route("/api/v1/", get(handler::index))
    .route("/api/v1/users", get(handler::users))
    .route("/api/v1/users/", get(handler::users))
    .route("/api/v1/users/:filter", get(handler::users_by_location))
    .route("/api/v1/users/:filter/", get(handler::users_by_location))
    .route("/api/v1/repos/:language", get(handler::repos))
    .route("/api/v1/repos/:language/", get(handler::repos))
}

// the last layer added is the outermost one, so panic recovery wraps
// logging and cors
fn with_middleware(router: Router) -> Router {
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET])
    .expose_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT]);

  router
    .layer(cors)
    .layer(
      TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
    .layer(CatchPanicLayer::new())
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    warn!("Error: {:?}", self);
    match self {
      Error::Upstream(_) => {
        (StatusCode::BAD_GATEWAY, "upstream request failed").into_response()
      }
      _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
  }
}
