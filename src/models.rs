//! Typed records returned by the data-access operations.
//!
//! Driver rows never leak to callers; each operation maps its [`DbRow`]s
//! into one of these records and reports missing or mistyped columns as
//! `DataAccessError::Decode`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DataAccessError;
use crate::rows::DbRow;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Hashed password as stored; this layer never hashes or verifies.
    pub password: String,
}

impl User {
    pub(crate) fn from_row(row: &DbRow) -> Result<Self, DataAccessError> {
        Ok(Self {
            id: row.require_int("id")?,
            name: row.require_text("name")?,
            email: row.require_text("email")?,
            password: row.require_text("password")?,
        })
    }
}

/// Input for user creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A property listing as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: Option<String>,
    pub cover_photo_url: Option<String>,
    /// Nightly price in integer minor units (cents)
    pub cost_per_night: i64,
    pub parking_spaces: i64,
    pub number_of_bathrooms: i64,
    pub number_of_bedrooms: i64,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

impl Property {
    pub(crate) fn from_row(row: &DbRow) -> Result<Self, DataAccessError> {
        Ok(Self {
            id: row.require_int("id")?,
            owner_id: row.require_int("owner_id")?,
            title: row.require_text("title")?,
            description: row.require_text("description")?,
            thumbnail_photo_url: row.opt_text("thumbnail_photo_url")?,
            cover_photo_url: row.opt_text("cover_photo_url")?,
            cost_per_night: row.require_int("cost_per_night")?,
            parking_spaces: row.require_int("parking_spaces")?,
            number_of_bathrooms: row.require_int("number_of_bathrooms")?,
            number_of_bedrooms: row.require_int("number_of_bedrooms")?,
            country: row.require_text("country")?,
            street: row.require_text("street")?,
            city: row.require_text("city")?,
            province: row.require_text("province")?,
            post_code: row.require_text("post_code")?,
            active: row.require_bool("active")?,
        })
    }
}

/// Input for property creation. Prices arrive in decimal currency units and
/// are converted to minor units exactly once, at binding time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly price in decimal currency units (dollars)
    pub cost_per_night: f64,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i64,
    pub number_of_bathrooms: i64,
    pub number_of_bedrooms: i64,
}

/// A property joined with its average review rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyWithRating {
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

impl PropertyWithRating {
    pub(crate) fn from_row(row: &DbRow) -> Result<Self, DataAccessError> {
        Ok(Self {
            property: Property::from_row(row)?,
            average_rating: row.opt_float("average_rating")?,
        })
    }
}

/// One past reservation with the joined property fields the listing page
/// renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationSummary {
    pub reservation_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub title: String,
    /// Nightly price in integer minor units (cents)
    pub cost_per_night: i64,
    pub cover_photo_url: Option<String>,
    pub thumbnail_photo_url: Option<String>,
    pub parking_spaces: i64,
    pub number_of_bathrooms: i64,
    pub number_of_bedrooms: i64,
    pub average_rating: Option<f64>,
}

impl ReservationSummary {
    pub(crate) fn from_row(row: &DbRow) -> Result<Self, DataAccessError> {
        Ok(Self {
            reservation_id: row.require_int("reservation_id")?,
            start_date: row.require_date("start_date")?,
            end_date: row.require_date("end_date")?,
            title: row.require_text("title")?,
            cost_per_night: row.require_int("cost_per_night")?,
            cover_photo_url: row.opt_text("cover_photo_url")?,
            thumbnail_photo_url: row.opt_text("thumbnail_photo_url")?,
            parking_spaces: row.require_int("parking_spaces")?,
            number_of_bathrooms: row.require_int("number_of_bathrooms")?,
            number_of_bedrooms: row.require_int("number_of_bedrooms")?,
            average_rating: row.opt_float("average_rating")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::value::SqlValue;

    fn user_row() -> DbRow {
        DbRow::new(
            Arc::new(
                ["id", "name", "email", "password"]
                    .iter()
                    .map(|c| (*c).to_string())
                    .collect(),
            ),
            vec![
                SqlValue::Int(3),
                SqlValue::Text("Asha Singh".into()),
                SqlValue::Text("asha@example.com".into()),
                SqlValue::Text("$2a$10$hash".into()),
            ],
        )
    }

    #[test]
    fn user_maps_from_row() {
        let user = User::from_row(&user_row()).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.email, "asha@example.com");
    }

    #[test]
    fn missing_column_reports_decode_error() {
        let row = DbRow::new(
            Arc::new(vec!["id".to_string()]),
            vec![SqlValue::Int(3)],
        );
        let err = User::from_row(&row).unwrap_err();
        assert!(matches!(err, DataAccessError::Decode(msg) if msg.contains("name")));
    }

    #[test]
    fn reservation_summary_tolerates_null_rating_and_photos() {
        let columns = [
            "reservation_id",
            "start_date",
            "end_date",
            "title",
            "cost_per_night",
            "cover_photo_url",
            "thumbnail_photo_url",
            "parking_spaces",
            "number_of_bathrooms",
            "number_of_bedrooms",
            "average_rating",
        ];
        let row = DbRow::new(
            Arc::new(columns.iter().map(|c| (*c).to_string()).collect()),
            vec![
                SqlValue::Int(12),
                SqlValue::Date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()),
                SqlValue::Date(NaiveDate::from_ymd_opt(2025, 3, 8).unwrap()),
                SqlValue::Text("Quiet loft".into()),
                SqlValue::Int(9300),
                SqlValue::Null,
                SqlValue::Null,
                SqlValue::Int(1),
                SqlValue::Int(1),
                SqlValue::Int(2),
                SqlValue::Null,
            ],
        );
        let summary = ReservationSummary::from_row(&row).unwrap();
        assert_eq!(summary.reservation_id, 12);
        assert_eq!(summary.average_rating, None);
        assert_eq!(summary.cover_photo_url, None);
        assert_eq!(
            summary.end_date,
            NaiveDate::from_ymd_opt(2025, 3, 8).unwrap()
        );
    }
}
