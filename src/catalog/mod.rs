use crate::models::{Operation, Property, PropertyFeatures, PLACEHOLDER_IMAGE};
use crate::store::{PropertyAssetsRow, PropertyRow, PropertyStore, StoreError};
use serde_json::Value;
use tracing::{info, warn};

/// In-memory view of the listings in the store. Holds whatever the last
/// refresh produced; the store stays the single source of truth.
pub struct PropertyCatalog<S: PropertyStore> {
    store: S,
    properties: Vec<Property>,
    error: Option<String>,
}

impl<S: PropertyStore> PropertyCatalog<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            properties: Vec::new(),
            error: None,
        }
    }

    /// Re-fetch both tables and rebuild the listing collection. Either
    /// query failing fails the whole refresh: the collection resets to
    /// empty and the error is recorded. A property list without its
    /// images is not served.
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        info!("Refreshing property catalog");
        match self.fetch_joined().await {
            Ok(listings) => {
                info!("Loaded {} listings", listings.len());
                self.properties = listings;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                warn!("Catalog refresh failed: {}", err);
                self.properties.clear();
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    async fn fetch_joined(&self) -> Result<Vec<Property>, StoreError> {
        let rows = self.store.fetch_properties().await?;
        let assets = self.store.fetch_assets().await?;
        // The two tables are fetched independently; the join happens here,
        // keyed by propertie_id. Row order (creation time descending) is
        // preserved as-is.
        Ok(rows
            .iter()
            .map(|row| {
                let asset = assets.iter().find(|a| a.propertie_id == row.propertie_id);
                map_property(row, asset)
            })
            .collect())
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Build the read model for one row pair.
///
/// Cover resolution: the asset row's cover, else the legacy inline column,
/// else the placeholder. The resolved cover is also guaranteed to lead the
/// image list.
pub fn map_property(row: &PropertyRow, asset: Option<&PropertyAssetsRow>) -> Property {
    let cover = asset
        .and_then(|a| a.cover_image.clone())
        .filter(|c| !c.trim().is_empty())
        .or_else(|| row.cover_image.clone().filter(|c| !c.trim().is_empty()))
        .unwrap_or_default();

    let mut images = match asset.and_then(|a| a.images.as_ref()) {
        Some(payload) => match parse_image_payload(payload) {
            Some(urls) => urls,
            None => {
                warn!(
                    "Malformed image payload for property {}, serving without images",
                    row.propertie_id
                );
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    if !cover.is_empty() && !images.contains(&cover) {
        images.insert(0, cover.clone());
    }

    Property {
        id: row.propertie_id.to_string(),
        title: row.title.clone().unwrap_or_else(|| "Sin título".to_string()),
        description: row.description.clone().unwrap_or_default(),
        category: row.category.clone().unwrap_or_else(|| "other".to_string()),
        operation: Operation::parse(row.operation.as_deref().unwrap_or("")),
        location: row
            .location
            .clone()
            .unwrap_or_else(|| "Ubicación no especificada".to_string()),
        area: row.area.unwrap_or(0.0),
        price: row.price.unwrap_or(0.0),
        currency: row.currency.clone().unwrap_or_else(|| "USD".to_string()),
        cover_image: if cover.is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            cover
        },
        images,
        has_videos: row.has_videos.unwrap_or(false),
        features: PropertyFeatures {
            bathrooms: row.bathrooms,
            parking_spots: row.parking_spots,
            ceiling_height: row.ceiling_height,
            dock_doors: row.dock_doors,
            air_conditioning: row.air_conditioning.unwrap_or(0) != 0,
            office_area: row.office_area,
            builded_area: row.builded_area,
            maintenance_cost: row.maintenance_cost,
            extra: Default::default(),
        },
        created_at: row.created_at,
    }
}

/// Extract image URLs from the assets `images` column, which holds either
/// a JSON object keyed by synthetic counters, a plain array, or either of
/// those serialized into a string. Returns `None` when the payload cannot
/// be interpreted at all; the record then degrades to an empty list.
pub fn parse_image_payload(payload: &Value) -> Option<Vec<String>> {
    let parsed_from_string;
    let value = match payload {
        Value::String(raw) => {
            parsed_from_string = serde_json::from_str::<Value>(raw).ok()?;
            &parsed_from_string
        }
        other => other,
    };

    match value {
        Value::Array(items) => Some(collect_urls(items.iter())),
        Value::Object(map) => {
            // Iterate numeric keys in numeric order ("2" before "10"),
            // remaining keys lexicographically after them.
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| match (a.parse::<u64>(), b.parse::<u64>()) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                (Ok(_), Err(_)) => std::cmp::Ordering::Less,
                (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
                (Err(_), Err(_)) => a.cmp(b),
            });
            Some(collect_urls(entries.into_iter().map(|(_, v)| v)))
        }
        Value::Null => Some(Vec::new()),
        _ => None,
    }
}

fn collect_urls<'a>(values: impl Iterator<Item = &'a Value>) -> Vec<String> {
    values
        .filter_map(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::{assets_row, property_row, FailureFlags, InMemoryStore};
    use serde_json::json;

    #[test]
    fn cover_prefers_asset_over_legacy_column() {
        let mut row = property_row(1);
        row.cover_image = Some("https://img/legacy.jpg".to_string());
        let mut asset = assets_row(1);
        asset.cover_image = Some("https://img/cover.jpg".to_string());

        let property = map_property(&row, Some(&asset));
        assert_eq!(property.cover_image, "https://img/cover.jpg");

        let property = map_property(&row, None);
        assert_eq!(property.cover_image, "https://img/legacy.jpg");
    }

    #[test]
    fn cover_falls_back_to_placeholder() {
        let property = map_property(&property_row(1), None);
        assert_eq!(property.cover_image, PLACEHOLDER_IMAGE);
        assert!(property.images.is_empty());
    }

    #[test]
    fn cover_leads_the_image_list() {
        let mut asset = assets_row(1);
        asset.cover_image = Some("https://img/b.jpg".to_string());
        asset.images = Some(json!({"1": "https://img/a.jpg", "2": "https://img/b.jpg"}));

        let property = map_property(&property_row(1), Some(&asset));
        // The cover already appears in the map, so it is not duplicated.
        assert_eq!(property.images, vec!["https://img/a.jpg", "https://img/b.jpg"]);

        let mut asset = assets_row(1);
        asset.cover_image = Some("https://img/c.jpg".to_string());
        asset.images = Some(json!({"1": "https://img/a.jpg"}));

        let property = map_property(&property_row(1), Some(&asset));
        assert_eq!(property.images, vec!["https://img/c.jpg", "https://img/a.jpg"]);
    }

    #[test]
    fn image_payload_accepts_object_array_and_string_forms() {
        let object = json!({"1": "https://img/1.jpg", "2": "https://img/2.jpg"});
        assert_eq!(
            parse_image_payload(&object).unwrap(),
            vec!["https://img/1.jpg", "https://img/2.jpg"]
        );

        let array = json!(["https://img/1.jpg", "", "https://img/2.jpg"]);
        assert_eq!(
            parse_image_payload(&array).unwrap(),
            vec!["https://img/1.jpg", "https://img/2.jpg"]
        );

        let serialized = json!("{\"1\": \"https://img/1.jpg\"}");
        assert_eq!(
            parse_image_payload(&serialized).unwrap(),
            vec!["https://img/1.jpg"]
        );
    }

    #[test]
    fn image_payload_orders_numeric_keys_numerically() {
        let object = json!({
            "10": "https://img/10.jpg",
            "2": "https://img/2.jpg",
            "1": "https://img/1.jpg"
        });
        assert_eq!(
            parse_image_payload(&object).unwrap(),
            vec!["https://img/1.jpg", "https://img/2.jpg", "https://img/10.jpg"]
        );
    }

    #[test]
    fn malformed_image_payload_degrades_to_cover_only() {
        let mut asset = assets_row(1);
        asset.cover_image = Some("https://img/cover.jpg".to_string());
        asset.images = Some(json!("{not valid json"));

        let property = map_property(&property_row(1), Some(&asset));
        assert_eq!(property.images, vec!["https://img/cover.jpg"]);
    }

    #[tokio::test]
    async fn refresh_joins_rows_with_their_assets() {
        let store = InMemoryStore::new();
        let mut row = property_row(7);
        row.title = Some("Nave industrial".to_string());
        store.seed_property(row);
        store.seed_property(property_row(8));
        let mut asset = assets_row(7);
        asset.cover_image = Some("https://img/7.jpg".to_string());
        store.seed_assets(asset);

        let mut catalog = PropertyCatalog::new(store);
        catalog.refresh().await.unwrap();

        assert_eq!(catalog.properties().len(), 2);
        assert_eq!(catalog.properties()[0].id, "7");
        assert_eq!(catalog.properties()[0].cover_image, "https://img/7.jpg");
        assert_eq!(catalog.properties()[1].cover_image, PLACEHOLDER_IMAGE);
        assert!(catalog.error().is_none());
    }

    #[tokio::test]
    async fn assets_failure_fails_the_whole_refresh() {
        let store = InMemoryStore::with_failures(FailureFlags {
            fetch_assets: true,
            ..FailureFlags::default()
        });
        store.seed_property(property_row(1));

        let mut catalog = PropertyCatalog::new(store);
        assert!(catalog.refresh().await.is_err());
        // Partial success is a hard failure: no listing survives, and the
        // error state is set for the caller to surface.
        assert!(catalog.properties().is_empty());
        assert!(catalog.error().is_some());
    }

    #[tokio::test]
    async fn successful_refresh_clears_a_previous_error() {
        let store = InMemoryStore::new();
        store.seed_property(property_row(1));
        let mut catalog = PropertyCatalog::new(store);

        catalog.refresh().await.unwrap();
        assert!(catalog.error().is_none());
        assert_eq!(catalog.properties().len(), 1);
    }
}
