//! Connectivity probe: open the pool, round-trip `SELECT now()`, drain.
//!
//! ```text
//! dbping --host localhost --dbname lightbnb --user development --password development
//! ```

use clap::Parser;
use deadpool_postgres::Config;
use tracing_subscriber::EnvFilter;

use lodging_data::PoolHandle;

#[derive(Debug, Parser)]
#[command(name = "dbping", about = "Check database connectivity and exit")]
struct Args {
    #[arg(long, default_value = "localhost")]
    host: String,

    #[arg(long, default_value_t = 5432)]
    port: u16,

    #[arg(long)]
    dbname: String,

    #[arg(long)]
    user: String,

    #[arg(long)]
    password: String,

    /// Maximum pool size
    #[arg(long, default_value_t = 20)]
    max_connections: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut cfg = Config::new();
    cfg.host = Some(args.host);
    cfg.port = Some(args.port);
    cfg.dbname = Some(args.dbname);
    cfg.user = Some(args.user);
    cfg.password = Some(args.password);
    cfg.pool = Some(deadpool::managed::PoolConfig::new(args.max_connections));

    let handle = PoolHandle::open(cfg)?;
    match handle.ping().await {
        Ok(server_time) => {
            tracing::info!(%server_time, "database connection successful");
        }
        Err(err) => {
            tracing::error!(error = %err, "database connection failed");
            handle.close_gracefully();
            return Err(err.into());
        }
    }
    handle.close_gracefully();
    Ok(())
}
