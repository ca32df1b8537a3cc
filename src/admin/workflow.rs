//! Admin write workflows against the table store. A property and its
//! assets live in two tables written with two separate calls; there is no
//! transaction linking them, and the sequencing below is the contract.

use crate::admin::forms::{CreatePropertyInput, UpdatePropertyInput};
use crate::admin::gallery::{ImageGallery, RemovedImage};
use crate::store::{AssetsPatch, NewAssetsRow, PropertyRow, PropertyStore, StoreError};
use chrono::Utc;
use serde_json::Value;
use tracing::info;

/// Create a property, then its assets row.
///
/// The property insert goes first; nothing touches the assets table unless
/// it succeeds, so a failed create never leaves orphaned assets. If the
/// assets insert fails afterwards, the property row stays persisted
/// without images; the error surfaces and the admin re-attaches images
/// through the edit form.
pub async fn create_property<S: PropertyStore>(
    store: &S,
    input: &CreatePropertyInput,
    gallery: &ImageGallery,
) -> Result<PropertyRow, StoreError> {
    let record = input.fields.to_record();
    let property = store.insert_property(&record).await?;
    info!("Created property {}", property.propertie_id);

    if gallery.has_content() {
        let assets = NewAssetsRow {
            propertie_id: property.propertie_id,
            images: gallery.to_wire_map(),
            cover_image: gallery.effective_cover(),
        };
        store.insert_assets(&assets).await?;
    }
    Ok(property)
}

/// Overwrite a property row, then upsert its assets: update the existing
/// assets row in place, or insert one if the property never had images.
pub async fn update_property<S: PropertyStore>(
    store: &S,
    input: &UpdatePropertyInput,
    gallery: &ImageGallery,
) -> Result<(), StoreError> {
    let id = input.propertie_id;
    store.update_property(id, &input.fields.to_record()).await?;
    info!("Updated property {}", id);

    if !gallery.has_content() {
        return Ok(());
    }

    match store.find_assets(id).await? {
        Some(_) => {
            let patch = AssetsPatch {
                images: if gallery.is_empty() {
                    None
                } else {
                    Some(gallery.to_wire_map())
                },
                cover_image: gallery.effective_cover().map(Value::String),
                updated_at: Utc::now(),
            };
            store.update_assets(id, &patch).await?;
        }
        None => {
            store
                .insert_assets(&NewAssetsRow {
                    propertie_id: id,
                    images: gallery.to_wire_map(),
                    cover_image: gallery.effective_cover(),
                })
                .await?;
        }
    }
    Ok(())
}

/// Push the gallery state to the store right after an image removal in
/// the edit form. This fires on every removal, whether or not the form is
/// later submitted: a deleted image must not resurface as a stale cover.
pub async fn push_removal<S: PropertyStore>(
    store: &S,
    propertie_id: i64,
    gallery: &ImageGallery,
    removed: &RemovedImage,
) -> Result<(), StoreError> {
    let updated_at = Utc::now();
    let patch = if gallery.is_empty() {
        AssetsPatch {
            images: Some(Value::Null),
            cover_image: Some(Value::Null),
            updated_at,
        }
    } else if removed.cover_changed {
        AssetsPatch {
            images: Some(gallery.to_wire_map()),
            cover_image: Some(Value::String(gallery.cover().to_string())),
            updated_at,
        }
    } else {
        AssetsPatch {
            images: Some(gallery.to_wire_map()),
            cover_image: None,
            updated_at,
        }
    };
    store.update_assets(propertie_id, &patch).await
}

/// Delete a property: assets row first, then the property row. When the
/// assets delete fails the property delete is never attempted, so the
/// listing survives intact for a retry.
pub async fn delete_property<S: PropertyStore>(
    store: &S,
    propertie_id: i64,
) -> Result<(), StoreError> {
    store.delete_assets(propertie_id).await?;
    store.delete_property(propertie_id).await?;
    info!("Deleted property {}", propertie_id);
    Ok(())
}
