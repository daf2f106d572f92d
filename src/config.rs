use reqwest::Url;
use std::{env, net::SocketAddr};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: Url,
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            api_base: resolve_api_base()?,
            addr: resolve_addr(),
        })
    }
}

/// Backend location, from `ACTIVITIES_API_URL`.
pub fn resolve_api_base() -> Result<Url, String> {
    let raw = env::var("ACTIVITIES_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    parse_api_base(&raw)
}

pub fn parse_api_base(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|e| format!("invalid ACTIVITIES_API_URL {raw:?}: {e}"))?;
    if url.cannot_be_a_base() {
        return Err(format!("ACTIVITIES_API_URL {raw:?} cannot be used as a base URL"));
    }
    Ok(url)
}

pub fn resolve_addr() -> SocketAddr {
    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    SocketAddr::from(([0, 0, 0, 0], port))
}
