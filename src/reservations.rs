//! Reservation listing for a guest.

use crate::error::DataAccessError;
use crate::executor::QueryRunner;
use crate::models::ReservationSummary;
use crate::search::DEFAULT_RESULT_LIMIT;
use crate::value::SqlValue;

const LIST_PAST_STATEMENT: &str = "\
SELECT reservations.id AS reservation_id,
       reservations.start_date,
       reservations.end_date,
       properties.title,
       properties.cost_per_night,
       properties.cover_photo_url,
       properties.thumbnail_photo_url,
       properties.parking_spaces,
       properties.number_of_bathrooms,
       properties.number_of_bedrooms,
       avg(property_reviews.rating)::float8 AS average_rating
FROM reservations
JOIN properties ON reservations.property_id = properties.id
LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
WHERE reservations.guest_id = $1 AND reservations.end_date < CURRENT_DATE
GROUP BY reservations.id, properties.id
ORDER BY reservations.start_date
LIMIT $2";

/// List a guest's completed stays.
///
/// Only reservations whose end date is strictly before the current date are
/// returned, ordered by start date ascending. `limit` defaults to
/// [`DEFAULT_RESULT_LIMIT`].
///
/// # Errors
/// Propagates the underlying driver error.
pub async fn list_past(
    db: &impl QueryRunner,
    guest_id: i64,
    limit: Option<i64>,
) -> Result<Vec<ReservationSummary>, DataAccessError> {
    let limit = limit.unwrap_or(DEFAULT_RESULT_LIMIT);
    let rows = db
        .run_query(
            LIST_PAST_STATEMENT,
            &[SqlValue::Int(guest_id), SqlValue::Int(limit)],
        )
        .await?;
    rows.rows.iter().map(ReservationSummary::from_row).collect()
}
