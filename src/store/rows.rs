use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the `properties` table as the store returns it. Column names
/// are the store's own, including the historical `propertie_id` spelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRow {
    pub propertie_id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub builded_area: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub bathrooms: Option<f64>,
    #[serde(default)]
    pub parking_spots: Option<i64>,
    #[serde(default)]
    pub ceiling_height: Option<f64>,
    #[serde(default)]
    pub dock_doors: Option<i64>,
    #[serde(default)]
    pub air_conditioning: Option<i64>,
    #[serde(default)]
    pub office_area: Option<f64>,
    #[serde(default)]
    pub maintenance_cost: Option<f64>,
    #[serde(default)]
    pub has_videos: Option<bool>,
    /// Legacy inline cover, superseded by the assets table
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A row of the `properties_assets` table. `images` arrives either as a
/// native JSON object/array or as a JSON-serialized string, depending on
/// which admin tool wrote it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyAssetsRow {
    #[serde(default)]
    pub properties_assets_id: Option<i64>,
    pub propertie_id: i64,
    #[serde(default)]
    pub images: Option<serde_json::Value>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for inserting or fully overwriting a property row. Optional
/// numbers serialize as explicit SQL NULLs, meaning "unspecified".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPropertyRow {
    pub title: String,
    pub description: String,
    pub category: String,
    pub operation: String,
    pub location: String,
    pub area: f64,
    pub builded_area: f64,
    pub price: f64,
    pub currency: String,
    pub bathrooms: Option<f64>,
    pub parking_spots: Option<i64>,
    pub ceiling_height: Option<f64>,
    pub dock_doors: Option<i64>,
    pub air_conditioning: i64,
    pub office_area: Option<f64>,
    pub maintenance_cost: Option<f64>,
}

/// Payload for inserting an assets row for a freshly created property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssetsRow {
    pub propertie_id: i64,
    pub images: serde_json::Value,
    pub cover_image: Option<String>,
}

/// Partial update for an assets row. `None` leaves the column untouched;
/// `Some(Value::Null)` clears it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssetsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<serde_json::Value>,
    pub updated_at: DateTime<Utc>,
}
