use crate::query::QueryAndParams;
use crate::value::SqlValue;

/// Row limit applied when the caller does not supply one.
pub const DEFAULT_RESULT_LIMIT: i64 = 10;

/// Optional search constraints for property listing.
///
/// Every field is independently optional; `None` means "no constraint".
/// Presence is decided by the `Option`, never by the value, so a supplied
/// price of `0.0` or an empty city string is still a constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySearch {
    /// Substring match against the property's city
    pub city: Option<String>,
    /// Exact match against the owning user's id
    pub owner_id: Option<i64>,
    /// Lower bound on nightly price, in decimal currency units
    pub minimum_price_per_night: Option<f64>,
    /// Upper bound on nightly price, in decimal currency units
    pub maximum_price_per_night: Option<f64>,
    /// Lower bound on the property's average review rating
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Convert a decimal currency amount to integer minor units.
///
/// Prices are stored as integer cents; callers supply decimal units and the
/// conversion happens exactly once, here.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Assemble the property-search statement from the supplied filters.
///
/// Filters are visited in fixed order (city, owner, minimum price, maximum
/// price); each present filter appends its value to the parameter list and a
/// predicate referencing that value's 1-based position, so placeholder
/// ordinals stay contiguous for every combination of present and absent
/// filters. WHERE is omitted when no predicate was collected; GROUP BY is
/// always present; HAVING follows GROUP BY and appears only when a minimum
/// rating was supplied; the limit is always the final parameter.
///
/// ```rust
/// use lodging_data::{PropertySearch, SqlValue, build_search_query};
///
/// let search = PropertySearch {
///     city: Some("van".into()),
///     minimum_price_per_night: Some(50.0),
///     minimum_rating: Some(4.0),
///     ..PropertySearch::default()
/// };
/// let qp = build_search_query(&search, 5);
/// assert_eq!(
///     qp.params,
///     vec![
///         SqlValue::Text("%van%".into()),
///         SqlValue::Int(5000),
///         SqlValue::Float(4.0),
///         SqlValue::Int(5),
///     ],
/// );
/// ```
#[must_use]
pub fn build_search_query(search: &PropertySearch, limit: i64) -> QueryAndParams {
    let mut params: Vec<SqlValue> = Vec::new();
    let mut predicates: Vec<String> = Vec::new();

    if let Some(city) = &search.city {
        params.push(SqlValue::Text(format!("%{city}%")));
        predicates.push(format!("properties.city LIKE ${}", params.len()));
    }
    if let Some(owner_id) = search.owner_id {
        params.push(SqlValue::Int(owner_id));
        predicates.push(format!("properties.owner_id = ${}", params.len()));
    }
    if let Some(minimum) = search.minimum_price_per_night {
        params.push(SqlValue::Int(to_minor_units(minimum)));
        predicates.push(format!("properties.cost_per_night >= ${}", params.len()));
    }
    if let Some(maximum) = search.maximum_price_per_night {
        params.push(SqlValue::Int(to_minor_units(maximum)));
        predicates.push(format!("properties.cost_per_night <= ${}", params.len()));
    }

    let mut statement = String::from(
        "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating\n\
         FROM properties\n\
         JOIN property_reviews ON properties.id = property_reviews.property_id\n",
    );

    if !predicates.is_empty() {
        statement.push_str("WHERE ");
        statement.push_str(&predicates.join(" AND "));
        statement.push('\n');
    }

    statement.push_str("GROUP BY properties.id\n");

    if let Some(rating) = search.minimum_rating {
        params.push(SqlValue::Float(rating));
        statement.push_str(&format!(
            "HAVING avg(property_reviews.rating)::float8 >= ${}\n",
            params.len()
        ));
    }

    params.push(SqlValue::Int(limit));
    statement.push_str(&format!(
        "ORDER BY properties.cost_per_night\nLIMIT ${}",
        params.len()
    ));

    QueryAndParams::new(statement, params)
}
