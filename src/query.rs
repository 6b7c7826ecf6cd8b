use crate::value::SqlValue;

/// A SQL statement and its bound parameters, kept together so placeholder
/// ordinals and the parameter list can never drift apart.
///
/// ```rust
/// use lodging_data::{QueryAndParams, SqlValue};
///
/// let qp = QueryAndParams::new(
///     "SELECT * FROM users WHERE email = $1",
///     vec![SqlValue::Text("alice@example.com".into())],
/// );
/// # let _ = qp;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryAndParams {
    /// The SQL statement text
    pub query: String,
    /// The parameters bound to the statement, in placeholder order
    pub params: Vec<SqlValue>,
}

impl QueryAndParams {
    pub fn new(query: impl Into<String>, params: Vec<SqlValue>) -> Self {
        Self {
            query: query.into(),
            params,
        }
    }
}
