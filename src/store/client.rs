use crate::store::config::StoreConfig;
use crate::store::error::StoreError;
use crate::store::rows::{AssetsPatch, NewAssetsRow, NewPropertyRow, PropertyAssetsRow, PropertyRow};
use crate::store::traits::PropertyStore;
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

const PROPERTIES: &str = "properties";
const ASSETS: &str = "properties_assets";

/// PostgREST client for the hosted table store. Every call is a single
/// request with a 30 second timeout; there are no retries.
pub struct SupabaseStore {
    client: Client,
    config: StoreConfig,
    bearer: String,
}

impl SupabaseStore {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        let bearer = config.anon_key.clone();
        Ok(Self { client, config, bearer })
    }

    /// Replace the anonymous bearer with a signed-in session token, so
    /// admin writes run under the user's row-level permissions.
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = token.into();
        self
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url(), table)
    }

    fn request(&self, method: reqwest::Method, table: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.table_url(table))
            .header("apikey", &self.config.anon_key)
            .header("Authorization", format!("Bearer {}", self.bearer))
    }

    async fn expect_success(
        table: &'static str,
        response: Response,
    ) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::UnexpectedStatus {
            table,
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl PropertyStore for SupabaseStore {
    async fn fetch_properties(&self) -> Result<Vec<PropertyRow>, StoreError> {
        debug!("GET {} ordered by created_at desc", self.table_url(PROPERTIES));
        let response = self
            .request(reqwest::Method::GET, PROPERTIES)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        let response = Self::expect_success(PROPERTIES, response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_assets(&self) -> Result<Vec<PropertyAssetsRow>, StoreError> {
        debug!("GET {}", self.table_url(ASSETS));
        let response = self
            .request(reqwest::Method::GET, ASSETS)
            .query(&[("select", "*")])
            .send()
            .await?;
        let response = Self::expect_success(ASSETS, response).await?;
        Ok(response.json().await?)
    }

    async fn find_assets(&self, propertie_id: i64) -> Result<Option<PropertyAssetsRow>, StoreError> {
        let id_filter = format!("eq.{}", propertie_id);
        let response = self
            .request(reqwest::Method::GET, ASSETS)
            .query(&[
                ("select", "*"),
                ("propertie_id", id_filter.as_str()),
                ("limit", "1"),
            ])
            .send()
            .await?;
        let response = Self::expect_success(ASSETS, response).await?;
        let rows: Vec<PropertyAssetsRow> = response.json().await?;
        Ok(rows.into_iter().next())
    }

    async fn insert_property(&self, record: &NewPropertyRow) -> Result<PropertyRow, StoreError> {
        let response = self
            .request(reqwest::Method::POST, PROPERTIES)
            .header("Prefer", "return=representation")
            .json(&[record])
            .send()
            .await?;
        let response = Self::expect_success(PROPERTIES, response).await?;
        let rows: Vec<PropertyRow> = response.json().await?;
        rows.into_iter()
            .next()
            .ok_or(StoreError::MissingRow { table: PROPERTIES })
    }

    async fn update_property(
        &self,
        propertie_id: i64,
        record: &NewPropertyRow,
    ) -> Result<(), StoreError> {
        let id_filter = format!("eq.{}", propertie_id);
        let response = self
            .request(reqwest::Method::PATCH, PROPERTIES)
            .query(&[("propertie_id", id_filter.as_str())])
            .json(record)
            .send()
            .await?;
        Self::expect_success(PROPERTIES, response).await?;
        Ok(())
    }

    async fn insert_assets(&self, record: &NewAssetsRow) -> Result<(), StoreError> {
        let response = self
            .request(reqwest::Method::POST, ASSETS)
            .json(&[record])
            .send()
            .await?;
        Self::expect_success(ASSETS, response).await?;
        Ok(())
    }

    async fn update_assets(&self, propertie_id: i64, patch: &AssetsPatch) -> Result<(), StoreError> {
        let id_filter = format!("eq.{}", propertie_id);
        let response = self
            .request(reqwest::Method::PATCH, ASSETS)
            .query(&[("propertie_id", id_filter.as_str())])
            .json(patch)
            .send()
            .await?;
        Self::expect_success(ASSETS, response).await?;
        Ok(())
    }

    async fn delete_assets(&self, propertie_id: i64) -> Result<(), StoreError> {
        let id_filter = format!("eq.{}", propertie_id);
        let response = self
            .request(reqwest::Method::DELETE, ASSETS)
            .query(&[("propertie_id", id_filter.as_str())])
            .send()
            .await?;
        Self::expect_success(ASSETS, response).await?;
        Ok(())
    }

    async fn delete_property(&self, propertie_id: i64) -> Result<(), StoreError> {
        let id_filter = format!("eq.{}", propertie_id);
        let response = self
            .request(reqwest::Method::DELETE, PROPERTIES)
            .query(&[("propertie_id", id_filter.as_str())])
            .send()
            .await?;
        Self::expect_success(PROPERTIES, response).await?;
        Ok(())
    }
}
