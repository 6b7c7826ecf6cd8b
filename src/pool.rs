use chrono::NaiveDateTime;
use deadpool_postgres::{Config as PgConfig, Object, Pool, Runtime};
use tokio_postgres::NoTls;

use crate::error::DataAccessError;

/// Process-scoped handle to the Postgres connection pool.
///
/// One handle is opened at startup and injected into the data-access
/// functions; cloning is cheap and shares the same pool. Connections are
/// checked out per statement and returned when the call completes — nothing
/// here holds a connection across calls or spans a transaction over more
/// than one statement.
#[derive(Clone, Debug)]
pub struct PoolHandle {
    pool: Pool,
}

impl PoolHandle {
    /// Validate the supplied configuration and build the pool.
    ///
    /// Pool sizing and timeouts come from `config.pool`; connection fields
    /// (user, password, host, dbname, port) are all required.
    ///
    /// # Errors
    /// Returns `DataAccessError::Config` if a required field is missing and
    /// `DataAccessError::Connection` if pool creation fails.
    pub fn open(config: PgConfig) -> Result<Self, DataAccessError> {
        if config.dbname.is_none() {
            return Err(DataAccessError::Config("dbname is required".to_string()));
        }
        if config.host.is_none() {
            return Err(DataAccessError::Config("host is required".to_string()));
        }
        if config.port.is_none() {
            return Err(DataAccessError::Config("port is required".to_string()));
        }
        if config.user.is_none() {
            return Err(DataAccessError::Config("user is required".to_string()));
        }
        if config.password.is_none() {
            return Err(DataAccessError::Config("password is required".to_string()));
        }

        let pool = config
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| {
                DataAccessError::Connection(format!("failed to create Postgres pool: {e}"))
            })?;

        Ok(Self { pool })
    }

    /// Check out one connection from the pool.
    ///
    /// # Errors
    /// Returns `DataAccessError::Pool` when the pool is closed or exhausted
    /// past its wait timeout.
    pub(crate) async fn get(&self) -> Result<Object, DataAccessError> {
        self.pool.get().await.map_err(DataAccessError::Pool)
    }

    /// Connectivity probe: round-trips `SELECT now()` and returns the server
    /// timestamp.
    ///
    /// # Errors
    /// Returns the underlying pool or driver error.
    pub async fn ping(&self) -> Result<NaiveDateTime, DataAccessError> {
        let client = self.get().await?;
        let row = client.query_one("SELECT now()::timestamp", &[]).await?;
        let ts: NaiveDateTime = row.try_get(0)?;
        Ok(ts)
    }

    /// Drain the pool: outstanding connections finish their current call,
    /// new checkouts fail. Intended for the host's shutdown hook.
    pub fn close_gracefully(&self) {
        self.pool.close();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> PgConfig {
        let mut cfg = PgConfig::new();
        cfg.dbname = Some("lodging".to_string());
        cfg.host = Some("localhost".to_string());
        cfg.port = Some(5432);
        cfg.user = Some("development".to_string());
        cfg.password = Some("development".to_string());
        cfg
    }

    #[test]
    fn open_rejects_missing_dbname() {
        let mut cfg = full_config();
        cfg.dbname = None;
        let err = PoolHandle::open(cfg).unwrap_err();
        assert!(matches!(err, DataAccessError::Config(msg) if msg.contains("dbname")));
    }

    #[test]
    fn open_rejects_missing_password() {
        let mut cfg = full_config();
        cfg.password = None;
        let err = PoolHandle::open(cfg).unwrap_err();
        assert!(matches!(err, DataAccessError::Config(msg) if msg.contains("password")));
    }

    #[test]
    fn open_succeeds_without_reaching_the_server() {
        // Pool creation is lazy; no connection is attempted until checkout.
        let handle = PoolHandle::open(full_config()).unwrap();
        assert!(!handle.is_closed());
        handle.close_gracefully();
        assert!(handle.is_closed());
    }
}
