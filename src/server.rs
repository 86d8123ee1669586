use std::future::Future;
use std::net::SocketAddr;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::routes;

/// Serves until ctrl-c, then drains in-flight requests and returns.
pub async fn start(config: Config) -> Result<()> {
    let (_, server) = bind(&config, shutdown_signal())?;
    server.await;
    tracing::info!("server stopped");
    Ok(())
}

/// Binds the listener immediately and returns the bound address together with
/// the future that runs the server until `shutdown` resolves.
pub fn bind(
    config: &Config,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(SocketAddr, impl Future<Output = ()> + 'static)> {
    let (addr, server) = warp::serve(routes::base(config))
        .try_bind_with_graceful_shutdown(config.addr, shutdown)
        .map_err(|source| Error::Bind {
            addr: config.addr,
            source,
        })?;

    tracing::info!(
        %addr,
        resources = %config.resource_dir.display(),
        assets = %config.static_dir.display(),
        "listening"
    );
    Ok((addr, server))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown requested"),
        Err(e) => {
            tracing::error!(error = %e, "cannot listen for ctrl-c, running until killed");
            std::future::pending::<()>().await
        }
    }
}
