use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Settings resolved once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
  pub listen_addr: SocketAddr,
  pub prod: bool,
  pub bearer: String,
  pub api_base: String,
}

impl Config {
  pub fn new(
    listen_addr: SocketAddr,
    prod: bool,
    access_token: &str,
    api_base: &str,
  ) -> Self {
    Self {
      listen_addr,
      prod,
      bearer: bearer(access_token),
      api_base: api_base.trim_end_matches('/').to_string(),
    }
  }

  pub fn has_token(&self) -> bool {
    self.bearer.len() > "Bearer ".len()
  }
}

// an empty token still yields "Bearer ", which the upstream will reject
pub fn bearer(access_token: &str) -> String {
  format!("Bearer {access_token}")
}

/// Accepts `:3000` (all interfaces) as well as a full `host:port`.
pub fn parse_listen_addr(s: &str) -> Result<SocketAddr, String> {
  if let Some(port) = s.strip_prefix(':') {
    let port: u16 = port
      .parse()
      .map_err(|e| format!("invalid port `{port}`: {e}"))?;
    return Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port));
  }

  s.parse()
    .map_err(|e| format!("invalid listen address `{s}`: {e}"))
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_bearer() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
    assert_eq!(bearer(""), "Bearer ");
  }

  #[test]
  fn test_parse_listen_addr() {
    assert_eq!(
      parse_listen_addr(":3000").unwrap(),
      SocketAddr::from(([0, 0, 0, 0], 3000))
    );
    assert_eq!(
      parse_listen_addr("127.0.0.1:8080").unwrap(),
      SocketAddr::from(([127, 0, 0, 1], 8080))
    );
    assert!(parse_listen_addr(":http").is_err());
    assert!(parse_listen_addr(":70000").is_err());
    assert!(parse_listen_addr("3000").is_err());
  }

  #[test]
  fn test_config() {
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    let config = Config::new(addr, false, "", "http://localhost:9000/");
    assert_eq!(config.bearer, "Bearer ");
    assert_eq!(config.api_base, "http://localhost:9000");
    assert!(!config.has_token());

    let config = Config::new(addr, true, "tok", DEFAULT_API_BASE);
    assert_eq!(config.bearer, "Bearer tok");
    assert!(config.has_token());
  }
}
