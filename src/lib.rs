pub mod config;
pub mod error;
pub mod model;
pub mod resources;
pub mod routes;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
