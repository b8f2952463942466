//! Backend entry-point: wires persistence, domain services, and REST
//! endpoints.

use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::server::{build_http_state, create_server, AppConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let pool_config =
        PoolConfig::new(&config.database_url).with_max_size(config.pool_max_size);
    let pool = DbPool::new(pool_config)
        .await
        .map_err(std::io::Error::other)?;

    let state = build_http_state(&pool);
    let server = create_server(state, config.bind_addr)?;
    info!(addr = %config.bind_addr, "server listening");

    server.await
}
