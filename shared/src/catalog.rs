//! Client-side tour catalog filter
//!
//! Narrows an already fetched tour list (typically `/tours/available`)
//! without a backend round trip. Backend-side filtering goes through
//! [`SearchFilters`](crate::models::SearchFilters) instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Tour;

/// Upper bound of the budget band (inclusive)
pub const BUDGET_MAX: f64 = 1000.0;
/// Upper bound of the mid band (inclusive)
pub const MID_MAX: f64 = 3000.0;

/// Price band used by the listing screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    #[default]
    All,
    /// price <= 1000
    Budget,
    /// 1000 < price <= 3000
    Mid,
    /// price > 3000
    Luxury,
}

impl PriceBand {
    pub fn contains(&self, price: f64) -> bool {
        match self {
            Self::All => true,
            Self::Budget => price <= BUDGET_MAX,
            Self::Mid => price > BUDGET_MAX && price <= MID_MAX,
            Self::Luxury => price > MID_MAX,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Budget => "budget",
            Self::Mid => "mid",
            Self::Luxury => "luxury",
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown price band: {0} (expected all, budget, mid or luxury)")]
pub struct ParseBandError(pub String);

impl FromStr for PriceBand {
    type Err = ParseBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "budget" => Ok(Self::Budget),
            "mid" => Ok(Self::Mid),
            "luxury" => Ok(Self::Luxury),
            _ => Err(ParseBandError(s.to_string())),
        }
    }
}

/// Local search over a tour list
///
/// All constraints must hold for a tour to match. Default matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TourQuery {
    /// Case-insensitive substring of name or description
    pub text: String,
    /// Exact destination name; `None` or empty means any
    pub destination: Option<String>,
    pub price_band: PriceBand,
}

impl TourQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn destination(mut self, name: impl Into<String>) -> Self {
        self.destination = Some(name.into());
        self
    }

    pub fn price_band(mut self, band: PriceBand) -> Self {
        self.price_band = band;
        self
    }

    pub fn matches(&self, tour: &Tour) -> bool {
        self.matches_text(tour) && self.matches_destination(tour) && self.price_band.contains(tour.price)
    }

    /// Filter `tours`, preserving order
    pub fn apply<'a>(&self, tours: &'a [Tour]) -> Vec<&'a Tour> {
        tours.iter().filter(|t| self.matches(t)).collect()
    }

    fn matches_text(&self, tour: &Tour) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        tour.name.to_lowercase().contains(&needle)
            || tour.description.to_lowercase().contains(&needle)
    }

    fn matches_destination(&self, tour: &Tour) -> bool {
        match self.destination.as_deref() {
            None | Some("") => true,
            Some(name) => tour.destination.name == name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Destination, DestinationType, TourStatus, TourType};
    use chrono::NaiveDate;

    fn destination(name: &str) -> Destination {
        Destination {
            id: 1,
            name: name.to_string(),
            description: String::new(),
            country: "Japan".to_string(),
            city: None,
            region: None,
            destination_type: DestinationType::City,
            active: true,
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn tour(id: i64, name: &str, description: &str, dest: &str, price: f64) -> Tour {
        Tour {
            id,
            name: name.to_string(),
            description: description.to_string(),
            destination: destination(dest),
            price,
            duration: 3,
            max_capacity: 10,
            current_capacity: 10,
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 4, 3).unwrap(),
            tour_type: TourType::Group,
            status: TourStatus::Available,
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn catalog() -> Vec<Tour> {
        vec![
            tour(1, "Temple Walk", "Shrines of Kyoto", "Kyoto", 800.0),
            tour(2, "Sake Tasting", "Breweries of Fushimi", "Kyoto", 1000.0),
            tour(3, "Tokyo Nights", "Neon and ramen", "Tokyo", 1000.01),
            tour(4, "Fuji Ascent", "Guided climb, temple stay included", "Shizuoka", 3000.0),
            tour(5, "Ryokan Retreat", "Private onsen", "Hakone", 5200.0),
        ]
    }

    fn ids(tours: &[&Tour]) -> Vec<i64> {
        tours.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_default_query_matches_all() {
        let tours = catalog();
        assert_eq!(TourQuery::new().apply(&tours).len(), tours.len());
    }

    #[test]
    fn test_text_searches_name_and_description_case_insensitively() {
        let tours = catalog();
        let found = TourQuery::new().text("TEMPLE").apply(&tours);
        assert_eq!(ids(&found), vec![1, 4]);
    }

    #[test]
    fn test_destination_is_exact_name() {
        let tours = catalog();
        assert_eq!(ids(&TourQuery::new().destination("Kyoto").apply(&tours)), vec![1, 2]);
        assert!(TourQuery::new().destination("kyoto").apply(&tours).is_empty());
        assert_eq!(TourQuery::new().destination("").apply(&tours).len(), 5);
    }

    #[test]
    fn test_price_band_boundaries() {
        let tours = catalog();
        let band = |b| ids(&TourQuery::new().price_band(b).apply(&tours));

        assert_eq!(band(PriceBand::Budget), vec![1, 2]);
        assert_eq!(band(PriceBand::Mid), vec![3, 4]);
        assert_eq!(band(PriceBand::Luxury), vec![5]);
    }

    #[test]
    fn test_constraints_combine() {
        let tours = catalog();
        let found = TourQuery::new()
            .text("o")
            .destination("Kyoto")
            .price_band(PriceBand::Budget)
            .apply(&tours);
        assert_eq!(ids(&found), vec![1, 2]);
    }

    #[test]
    fn test_parse_price_band() {
        assert_eq!("Luxury".parse::<PriceBand>().unwrap(), PriceBand::Luxury);
        assert_eq!(" mid ".parse::<PriceBand>().unwrap(), PriceBand::Mid);
        assert_eq!(PriceBand::Budget.to_string(), "budget");

        let err = "cheap".parse::<PriceBand>().unwrap_err();
        assert_eq!(err, ParseBandError("cheap".to_string()));
    }
}
