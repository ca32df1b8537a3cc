use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Shown on listing cards when a property has no images at all.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-property.jpg";

/// Transaction type for a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Rent,
    Sale,
}

impl Operation {
    /// Parse the store's wire values. Older rows carry the Spanish forms
    /// (`renta`/`venta`), newer ones the English ones; anything else is
    /// treated as a sale, matching the site's fallback.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "rent" | "renta" => Operation::Rent,
            _ => Operation::Sale,
        }
    }

    /// Wire value the admin forms submit.
    pub fn wire_value(&self) -> &'static str {
        match self {
            Operation::Rent => "renta",
            Operation::Sale => "venta",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Rent => write!(f, "rent"),
            Operation::Sale => write!(f, "sale"),
        }
    }
}

/// Sparse feature bag for a property. Every field is optional in the store;
/// `None` means "unspecified", which listing cards render differently from 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyFeatures {
    pub bathrooms: Option<f64>,
    pub parking_spots: Option<i64>,
    pub ceiling_height: Option<f64>,
    pub dock_doors: Option<i64>,
    pub air_conditioning: bool,
    pub office_area: Option<f64>,
    pub builded_area: Option<f64>,
    pub maintenance_cost: Option<f64>,
    /// Open-ended attributes some listings carry (zoning, frontage, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Core property listing model, as yielded by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub operation: Operation,
    pub location: String,
    pub area: f64,
    pub price: f64,
    pub currency: String,
    pub cover_image: String,
    pub images: Vec<String>,
    pub has_videos: bool,
    pub features: PropertyFeatures,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_parses_both_languages() {
        assert_eq!(Operation::parse("renta"), Operation::Rent);
        assert_eq!(Operation::parse("rent"), Operation::Rent);
        assert_eq!(Operation::parse("venta"), Operation::Sale);
        assert_eq!(Operation::parse("sale"), Operation::Sale);
        assert_eq!(Operation::parse(" Renta "), Operation::Rent);
    }

    #[test]
    fn operation_defaults_to_sale() {
        assert_eq!(Operation::parse(""), Operation::Sale);
        assert_eq!(Operation::parse("lease"), Operation::Sale);
    }
}
