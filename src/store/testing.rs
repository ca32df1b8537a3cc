//! In-memory `PropertyStore` used by unit tests, with per-operation
//! failure injection to exercise the partial-failure paths.

use crate::store::error::StoreError;
use crate::store::rows::{AssetsPatch, NewAssetsRow, NewPropertyRow, PropertyAssetsRow, PropertyRow};
use crate::store::traits::PropertyStore;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

#[derive(Debug, Default, Clone)]
pub struct FailureFlags {
    pub fetch_properties: bool,
    pub fetch_assets: bool,
    pub find_assets: bool,
    pub insert_property: bool,
    pub update_property: bool,
    pub insert_assets: bool,
    pub update_assets: bool,
    pub delete_assets: bool,
    pub delete_property: bool,
}

pub struct InMemoryStore {
    pub properties: Mutex<Vec<PropertyRow>>,
    pub assets: Mutex<Vec<PropertyAssetsRow>>,
    next_id: Mutex<i64>,
    fail: FailureFlags,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_failures(FailureFlags::default())
    }

    pub fn with_failures(fail: FailureFlags) -> Self {
        Self {
            properties: Mutex::new(Vec::new()),
            assets: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            fail,
        }
    }

    pub fn seed_property(&self, row: PropertyRow) {
        self.properties.lock().unwrap().push(row);
    }

    pub fn seed_assets(&self, row: PropertyAssetsRow) {
        self.assets.lock().unwrap().push(row);
    }

    fn injected(table: &'static str) -> StoreError {
        StoreError::UnexpectedStatus {
            table,
            status: 500,
            body: "injected failure".to_string(),
        }
    }
}

/// Blank property row fixture for tests.
pub fn property_row(propertie_id: i64) -> PropertyRow {
    PropertyRow {
        propertie_id,
        title: None,
        description: None,
        category: None,
        operation: None,
        location: None,
        area: None,
        builded_area: None,
        price: None,
        currency: None,
        bathrooms: None,
        parking_spots: None,
        ceiling_height: None,
        dock_doors: None,
        air_conditioning: None,
        office_area: None,
        maintenance_cost: None,
        has_videos: None,
        cover_image: None,
        created_at: Some(Utc::now()),
    }
}

/// Blank assets row fixture for tests.
pub fn assets_row(propertie_id: i64) -> PropertyAssetsRow {
    PropertyAssetsRow {
        properties_assets_id: Some(propertie_id),
        propertie_id,
        images: None,
        cover_image: None,
        updated_at: None,
    }
}

fn row_from_record(propertie_id: i64, record: &NewPropertyRow) -> PropertyRow {
    PropertyRow {
        propertie_id,
        title: Some(record.title.clone()),
        description: Some(record.description.clone()),
        category: Some(record.category.clone()),
        operation: Some(record.operation.clone()),
        location: Some(record.location.clone()),
        area: Some(record.area),
        builded_area: Some(record.builded_area),
        price: Some(record.price),
        currency: Some(record.currency.clone()),
        bathrooms: record.bathrooms,
        parking_spots: record.parking_spots,
        ceiling_height: record.ceiling_height,
        dock_doors: record.dock_doors,
        air_conditioning: Some(record.air_conditioning),
        office_area: record.office_area,
        maintenance_cost: record.maintenance_cost,
        has_videos: None,
        cover_image: None,
        created_at: Some(Utc::now()),
    }
}

#[async_trait]
impl PropertyStore for InMemoryStore {
    async fn fetch_properties(&self) -> Result<Vec<PropertyRow>, StoreError> {
        if self.fail.fetch_properties {
            return Err(Self::injected("properties"));
        }
        Ok(self.properties.lock().unwrap().clone())
    }

    async fn fetch_assets(&self) -> Result<Vec<PropertyAssetsRow>, StoreError> {
        if self.fail.fetch_assets {
            return Err(Self::injected("properties_assets"));
        }
        Ok(self.assets.lock().unwrap().clone())
    }

    async fn find_assets(&self, propertie_id: i64) -> Result<Option<PropertyAssetsRow>, StoreError> {
        if self.fail.find_assets {
            return Err(Self::injected("properties_assets"));
        }
        Ok(self
            .assets
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.propertie_id == propertie_id)
            .cloned())
    }

    async fn insert_property(&self, record: &NewPropertyRow) -> Result<PropertyRow, StoreError> {
        if self.fail.insert_property {
            return Err(Self::injected("properties"));
        }
        let mut next_id = self.next_id.lock().unwrap();
        let row = row_from_record(*next_id, record);
        *next_id += 1;
        self.properties.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update_property(
        &self,
        propertie_id: i64,
        record: &NewPropertyRow,
    ) -> Result<(), StoreError> {
        if self.fail.update_property {
            return Err(Self::injected("properties"));
        }
        let mut properties = self.properties.lock().unwrap();
        if let Some(row) = properties.iter_mut().find(|r| r.propertie_id == propertie_id) {
            *row = row_from_record(propertie_id, record);
        }
        Ok(())
    }

    async fn insert_assets(&self, record: &NewAssetsRow) -> Result<(), StoreError> {
        if self.fail.insert_assets {
            return Err(Self::injected("properties_assets"));
        }
        self.assets.lock().unwrap().push(PropertyAssetsRow {
            properties_assets_id: Some(record.propertie_id),
            propertie_id: record.propertie_id,
            images: Some(record.images.clone()),
            cover_image: record.cover_image.clone(),
            updated_at: Some(Utc::now()),
        });
        Ok(())
    }

    async fn update_assets(&self, propertie_id: i64, patch: &AssetsPatch) -> Result<(), StoreError> {
        if self.fail.update_assets {
            return Err(Self::injected("properties_assets"));
        }
        let mut assets = self.assets.lock().unwrap();
        if let Some(row) = assets.iter_mut().find(|r| r.propertie_id == propertie_id) {
            if let Some(images) = &patch.images {
                row.images = if images.is_null() { None } else { Some(images.clone()) };
            }
            if let Some(cover) = &patch.cover_image {
                row.cover_image = if cover.is_null() {
                    None
                } else {
                    cover.as_str().map(str::to_string)
                };
            }
            row.updated_at = Some(patch.updated_at);
        }
        Ok(())
    }

    async fn delete_assets(&self, propertie_id: i64) -> Result<(), StoreError> {
        if self.fail.delete_assets {
            return Err(Self::injected("properties_assets"));
        }
        self.assets
            .lock()
            .unwrap()
            .retain(|row| row.propertie_id != propertie_id);
        Ok(())
    }

    async fn delete_property(&self, propertie_id: i64) -> Result<(), StoreError> {
        if self.fail.delete_property {
            return Err(Self::injected("properties"));
        }
        self.properties
            .lock()
            .unwrap()
            .retain(|row| row.propertie_id != propertie_id);
        Ok(())
    }
}
