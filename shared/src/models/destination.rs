//! Destination Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Destination kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DestinationType {
    #[default]
    City,
    Country,
    Region,
    Resort,
    Landmark,
}

impl DestinationType {
    /// Wire name, as used in path segments (`/destinations/type/{type}`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::City => "CITY",
            Self::Country => "COUNTRY",
            Self::Region => "REGION",
            Self::Resort => "RESORT",
            Self::Landmark => "LANDMARK",
        }
    }
}

/// Destination entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "type")]
    pub destination_type: DestinationType,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Create destination payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationCreate {
    pub name: String,
    pub description: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "type")]
    pub destination_type: DestinationType,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Update destination payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<DestinationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Reference to an existing destination by id (`{"id": 3}`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DestinationRef {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_type_field_is_renamed() {
        let json = r#"{
            "id": 1,
            "name": "Kyoto",
            "description": "Old capital",
            "country": "Japan",
            "city": "Kyoto",
            "type": "CITY",
            "active": true
        }"#;

        let dest: Destination = serde_json::from_str(json).unwrap();
        assert_eq!(dest.destination_type, DestinationType::City);
        assert_eq!(dest.city.as_deref(), Some("Kyoto"));
        assert!(dest.region.is_none());

        let back = serde_json::to_value(&dest).unwrap();
        assert_eq!(back["type"], "CITY");
        assert!(back.get("region").is_none());
    }

    #[test]
    fn test_as_str_matches_serde() {
        for t in [
            DestinationType::City,
            DestinationType::Country,
            DestinationType::Region,
            DestinationType::Resort,
            DestinationType::Landmark,
        ] {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }
}
