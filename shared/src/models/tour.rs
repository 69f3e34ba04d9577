//! Tour Model

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{Destination, DestinationRef};

/// Tour kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TourType {
    #[default]
    Group,
    Private,
    Custom,
}

/// Tour status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TourStatus {
    #[default]
    Available,
    Full,
    Cancelled,
    Completed,
}

/// Tour entity
///
/// `current_capacity <= max_capacity` is maintained by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub destination: Destination,
    /// Price in currency unit
    pub price: f64,
    /// Duration in days
    pub duration: i32,
    pub max_capacity: i32,
    pub current_capacity: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub tour_type: TourType,
    pub status: TourStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Create tour payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourCreate {
    pub name: String,
    pub description: String,
    pub destination: DestinationRef,
    pub price: f64,
    pub duration: i32,
    pub max_capacity: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tour_type: Option<TourType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Update tour payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<DestinationRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tour_type: Option<TourType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TourStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Tour search filter set
///
/// Every field is optional; only the populated ones are sent as
/// query parameters of `/tours/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tour_type: Option<TourType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TourStatus>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn price_between(mut self, min: f64, max: f64) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self
    }

    pub fn min_price(mut self, min: f64) -> Self {
        self.min_price = Some(min);
        self
    }

    pub fn max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn tour_type(mut self, tour_type: TourType) -> Self {
        self.tour_type = Some(tour_type);
        self
    }

    pub fn status(mut self, status: TourStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_from_backend_json() {
        let json = r#"{
            "id": 42,
            "name": "Alpine Loop",
            "description": "Five passes in five days",
            "destination": {
                "id": 3, "name": "Zermatt", "description": "", "country": "Switzerland",
                "type": "RESORT", "active": true
            },
            "price": 2450.5,
            "duration": 5,
            "maxCapacity": 12,
            "currentCapacity": 4,
            "startDate": "2025-07-01",
            "endDate": "2025-07-05",
            "type": "GROUP",
            "status": "AVAILABLE"
        }"#;

        let tour: Tour = serde_json::from_str(json).unwrap();
        assert_eq!(tour.destination.name, "Zermatt");
        assert_eq!(tour.tour_type, TourType::Group);
        assert_eq!(tour.status, TourStatus::Available);
        assert_eq!(tour.start_date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(tour.max_capacity, 12);
    }

    #[test]
    fn test_search_filters_skip_absent_fields() {
        let filters = SearchFilters::new()
            .price_between(1000.0, 3000.0)
            .status(TourStatus::Available);

        let value = serde_json::to_value(&filters).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "minPrice": 1000.0,
                "maxPrice": 3000.0,
                "status": "AVAILABLE"
            })
        );
    }

    #[test]
    fn test_empty_filters() {
        assert!(SearchFilters::new().is_empty());
        assert!(!SearchFilters::new().destination("Kyoto").is_empty());
    }
}
