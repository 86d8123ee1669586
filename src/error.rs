use std::io;
use std::net::SocketAddr;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read resource {name}: {source}")]
    Io {
        name: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("malformed resource {name}: {source}")]
    Decode {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot listen on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: warp::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl warp::reject::Reject for Error {}
