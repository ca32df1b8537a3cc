pub mod client;
pub mod config;
pub mod error;
pub mod rows;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use client::SupabaseStore;
pub use config::StoreConfig;
pub use error::StoreError;
pub use rows::{AssetsPatch, NewAssetsRow, NewPropertyRow, PropertyAssetsRow, PropertyRow};
pub use traits::PropertyStore;
