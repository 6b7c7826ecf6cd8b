use std::time::Instant;

use async_trait::async_trait;

use crate::error::DataAccessError;
use crate::params::Params;
use crate::pool::PoolHandle;
use crate::rows::RowSet;
use crate::value::SqlValue;

/// The seam between domain operations and the database.
///
/// Operations are written against this trait so they can be exercised with a
/// recording fake in tests; [`PoolHandle`] is the production implementation.
#[async_trait]
pub trait QueryRunner: Send + Sync {
    /// Submit one parameterized statement and return the normalized rows.
    ///
    /// # Errors
    /// Propagates pool checkout, driver, and row-decoding failures.
    async fn run_query(
        &self,
        statement: &str,
        params: &[SqlValue],
    ) -> Result<RowSet, DataAccessError>;
}

#[async_trait]
impl QueryRunner for PoolHandle {
    async fn run_query(
        &self,
        statement: &str,
        params: &[SqlValue],
    ) -> Result<RowSet, DataAccessError> {
        let started = Instant::now();
        let client = self.get().await?;
        let converted = Params::convert(params);

        match client.query(statement, converted.as_refs()).await {
            Ok(rows) => {
                let set = RowSet::from_postgres_rows(&rows)?;
                tracing::debug!(
                    statement,
                    rows = set.len(),
                    elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                    "executed query"
                );
                Ok(set)
            }
            Err(err) => {
                tracing::error!(statement, params = ?params, error = %err, "query failed");
                Err(err.into())
            }
        }
    }
}
