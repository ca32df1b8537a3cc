//! Client side of the hosted store's auth endpoint, which gates the admin
//! area. The issuer itself is opaque: we exchange credentials for a bearer
//! session and hand that token to the store client for admin writes.

use crate::store::{StoreConfig, StoreError};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Bearer session returned by a successful sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    /// Unix timestamp of expiry; absent on older issuer versions.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(at) => now.timestamp() >= at,
            None => false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

/// Thin client for password sign-in and sign-out.
pub struct AuthClient {
    client: Client,
    config: StoreConfig,
}

impl AuthClient {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { client, config })
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, StoreError> {
        let url = format!("{}/auth/v1/token", self.config.base_url());
        let response = self
            .client
            .post(url)
            .query(&[("grant_type", "password")])
            .header("apikey", &self.config.anon_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::UnexpectedStatus {
                table: "auth",
                status: status.as_u16(),
                body,
            });
        }
        let session: Session = response.json().await?;
        info!("Signed in as {}", session.user.email.as_deref().unwrap_or("unknown"));
        Ok(session)
    }

    pub async fn sign_out(&self, session: &Session) -> Result<(), StoreError> {
        let url = format!("{}/auth/v1/logout", self.config.base_url());
        let response = self
            .client
            .post(url)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", format!("Bearer {}", session.access_token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::UnexpectedStatus {
                table: "auth",
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
