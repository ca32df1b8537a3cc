use crate::store::error::StoreError;
use crate::store::rows::{AssetsPatch, NewAssetsRow, NewPropertyRow, PropertyAssetsRow, PropertyRow};
use async_trait::async_trait;

/// Operations the catalog and the admin workflows need from the table
/// store. The production implementation speaks PostgREST; tests swap in
/// an in-memory store.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// All property rows, ordered by creation time descending.
    async fn fetch_properties(&self) -> Result<Vec<PropertyRow>, StoreError>;

    /// All asset rows, unordered.
    async fn fetch_assets(&self) -> Result<Vec<PropertyAssetsRow>, StoreError>;

    /// The assets row for one property, if any.
    async fn find_assets(&self, propertie_id: i64) -> Result<Option<PropertyAssetsRow>, StoreError>;

    /// Insert a property and return the stored row with its generated id.
    async fn insert_property(&self, record: &NewPropertyRow) -> Result<PropertyRow, StoreError>;

    /// Overwrite a property row by id.
    async fn update_property(&self, propertie_id: i64, record: &NewPropertyRow) -> Result<(), StoreError>;

    async fn insert_assets(&self, record: &NewAssetsRow) -> Result<(), StoreError>;

    async fn update_assets(&self, propertie_id: i64, patch: &AssetsPatch) -> Result<(), StoreError>;

    async fn delete_assets(&self, propertie_id: i64) -> Result<(), StoreError>;

    async fn delete_property(&self, propertie_id: i64) -> Result<(), StoreError>;
}
