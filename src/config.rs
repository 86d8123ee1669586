use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 8080;
static DEFAULT_RESOURCE_DIR: &str = "resources";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    /// Directory holding `feed.json` and `playlists.json`.
    pub resource_dir: PathBuf,
    /// Root of the static asset tree, including `songs/`.
    pub static_dir: PathBuf,
}

impl Config {
    pub fn new(resource_dir: impl Into<PathBuf>) -> Self {
        let resource_dir = resource_dir.into();
        let static_dir = resource_dir.join("static");
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            resource_dir,
            static_dir,
        }
    }

    /// Builds the configuration from `ADDR`, `PLAYLIST_RESOURCES` and
    /// `PLAYLIST_STATIC`, falling back to `0.0.0.0:8080` and `./resources`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match var("PLAYLIST_RESOURCES") {
            Some(dir) => Self::new(dir),
            None => Self::new(DEFAULT_RESOURCE_DIR),
        };

        if let Some(dir) = var("PLAYLIST_STATIC") {
            config.static_dir = PathBuf::from(dir);
        }

        if let Some(addr) = var("ADDR") {
            config.addr = addr
                .parse()
                .map_err(|e| Error::Config(format!("ADDR {:?}: {}", addr, e)))?;
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCE_DIR)
    }
}
