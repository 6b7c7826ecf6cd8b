//! User lookup and creation.

use crate::error::DataAccessError;
use crate::executor::QueryRunner;
use crate::models::{NewUser, User};
use crate::value::SqlValue;

/// Look up a user by email. A miss is `Ok(None)`, not a failure.
///
/// # Errors
/// Propagates the underlying driver error.
pub async fn find_by_email(
    db: &impl QueryRunner,
    email: &str,
) -> Result<Option<User>, DataAccessError> {
    let rows = db
        .run_query(
            "SELECT * FROM users WHERE email = $1",
            &[SqlValue::Text(email.to_string())],
        )
        .await?;
    rows.first().map(User::from_row).transpose()
}

/// Look up a user by id. A miss is `Ok(None)`, not a failure.
///
/// # Errors
/// Propagates the underlying driver error.
pub async fn find_by_id(db: &impl QueryRunner, id: i64) -> Result<Option<User>, DataAccessError> {
    let rows = db
        .run_query("SELECT * FROM users WHERE id = $1", &[SqlValue::Int(id)])
        .await?;
    rows.first().map(User::from_row).transpose()
}

/// Insert a user and return the stored record.
///
/// # Errors
/// Propagates the underlying driver error — notably a unique constraint
/// violation when the email is already registered.
pub async fn create(db: &impl QueryRunner, new_user: &NewUser) -> Result<User, DataAccessError> {
    let rows = db
        .run_query(
            "INSERT INTO users (name, email, password)\n\
             VALUES ($1, $2, $3)\n\
             RETURNING *",
            &[
                SqlValue::Text(new_user.name.clone()),
                SqlValue::Text(new_user.email.clone()),
                SqlValue::Text(new_user.password.clone()),
            ],
        )
        .await?;
    let row = rows
        .first()
        .ok_or_else(|| DataAccessError::Decode("insert returned no row".to_string()))?;
    User::from_row(row)
}
