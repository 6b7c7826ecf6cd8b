//! Property search and creation.

use crate::error::DataAccessError;
use crate::executor::QueryRunner;
use crate::models::{NewProperty, Property, PropertyWithRating};
use crate::search::{DEFAULT_RESULT_LIMIT, PropertySearch, build_search_query, to_minor_units};
use crate::value::SqlValue;

const CREATE_STATEMENT: &str = "\
INSERT INTO properties (
    owner_id,
    title,
    description,
    thumbnail_photo_url,
    cover_photo_url,
    cost_per_night,
    street,
    city,
    province,
    post_code,
    country,
    parking_spaces,
    number_of_bathrooms,
    number_of_bedrooms
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
RETURNING *";

/// Search properties by the supplied filters, returning each match with its
/// average review rating. `limit` defaults to [`DEFAULT_RESULT_LIMIT`].
///
/// # Errors
/// Propagates the underlying driver error.
pub async fn search(
    db: &impl QueryRunner,
    filters: &PropertySearch,
    limit: Option<i64>,
) -> Result<Vec<PropertyWithRating>, DataAccessError> {
    let qp = build_search_query(filters, limit.unwrap_or(DEFAULT_RESULT_LIMIT));
    let rows = db.run_query(&qp.query, &qp.params).await?;
    rows.rows.iter().map(PropertyWithRating::from_row).collect()
}

/// Insert a property and return the stored record.
///
/// The nightly price arrives in decimal currency units and is bound in
/// integer minor units, matching the search builder's conversion.
///
/// # Errors
/// Propagates the underlying driver error.
pub async fn create(
    db: &impl QueryRunner,
    new_property: &NewProperty,
) -> Result<Property, DataAccessError> {
    let params = [
        SqlValue::Int(new_property.owner_id),
        SqlValue::Text(new_property.title.clone()),
        SqlValue::Text(new_property.description.clone()),
        SqlValue::Text(new_property.thumbnail_photo_url.clone()),
        SqlValue::Text(new_property.cover_photo_url.clone()),
        SqlValue::Int(to_minor_units(new_property.cost_per_night)),
        SqlValue::Text(new_property.street.clone()),
        SqlValue::Text(new_property.city.clone()),
        SqlValue::Text(new_property.province.clone()),
        SqlValue::Text(new_property.post_code.clone()),
        SqlValue::Text(new_property.country.clone()),
        SqlValue::Int(new_property.parking_spaces),
        SqlValue::Int(new_property.number_of_bathrooms),
        SqlValue::Int(new_property.number_of_bedrooms),
    ];
    let rows = db.run_query(CREATE_STATEMENT, &params).await?;
    let row = rows
        .first()
        .ok_or_else(|| DataAccessError::Decode("insert returned no row".to_string()))?;
    Property::from_row(row)
}
