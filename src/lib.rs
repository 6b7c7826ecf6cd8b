//! Postgres-backed data access for a short-term lodging marketplace.
//!
//! A thin layer of parameterized queries over a deadpool-managed
//! `tokio-postgres` pool: user lookup and creation, past-reservation
//! listing, and property search and insertion. The one piece with moving
//! parts is [`build_search_query`], which assembles a WHERE/HAVING clause
//! from optional filters while keeping placeholder ordinals aligned with
//! the parameter list.
//!
//! ```no_run
//! use deadpool_postgres::Config;
//! use lodging_data::{PoolHandle, PropertySearch, properties};
//!
//! # async fn demo() -> Result<(), lodging_data::DataAccessError> {
//! let mut cfg = Config::new();
//! cfg.dbname = Some("lightbnb".to_string());
//! cfg.host = Some("localhost".to_string());
//! cfg.port = Some(5432);
//! cfg.user = Some("development".to_string());
//! cfg.password = Some("development".to_string());
//!
//! let db = PoolHandle::open(cfg)?;
//! let filters = PropertySearch {
//!     city: Some("Vancouver".to_string()),
//!     minimum_rating: Some(4.0),
//!     ..PropertySearch::default()
//! };
//! let listings = properties::search(&db, &filters, None).await?;
//! # let _ = listings;
//! db.close_gracefully();
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod executor;
pub mod models;
pub mod params;
pub mod pool;
pub mod properties;
pub mod query;
pub mod reservations;
pub mod rows;
pub mod search;
pub mod users;
pub mod value;

pub use error::DataAccessError;
pub use executor::QueryRunner;
pub use models::{NewProperty, NewUser, Property, PropertyWithRating, ReservationSummary, User};
pub use params::Params;
pub use pool::PoolHandle;
pub use query::QueryAndParams;
pub use rows::{DbRow, RowSet};
pub use search::{DEFAULT_RESULT_LIMIT, PropertySearch, build_search_query, to_minor_units};
pub use value::SqlValue;
