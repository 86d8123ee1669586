//! Bundled JSON resources, read from disk on every call.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::model::Playlist;

pub const FEED: &str = "feed.json";
pub const PLAYLISTS: &str = "playlists.json";

#[derive(Debug, Clone)]
pub struct ResourceStore {
    dir: PathBuf,
}

impl ResourceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Reads a resource verbatim. A missing file is `Ok(None)`, not an error.
    pub async fn load(&self, name: &'static str) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(self.dir.join(name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(resource = name, "resource missing");
                Ok(None)
            }
            Err(source) => Err(Error::Io { name, source }),
        }
    }

    pub async fn load_playlists(&self) -> Result<Option<Vec<Playlist>>> {
        let bytes = match self.load(PLAYLISTS).await? {
            Some(bytes) => bytes,
            None => return Ok(None),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| Error::Decode {
                name: PLAYLISTS,
                source,
            })
    }
}
