use crate::store::error::StoreError;
use std::env;

/// Connection settings for the hosted table store, supplied at deploy time.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`
    pub url: String,
    /// Anonymous access key sent with every request
    pub anon_key: String,
}

impl StoreConfig {
    /// Read the configuration from the environment. Missing or empty values
    /// are a fatal initialization error; nothing works without the store.
    pub fn from_env() -> Result<Self, StoreError> {
        let url = required_var("SUPABASE_URL")?;
        let anon_key = required_var("SUPABASE_ANON_KEY")?;
        Ok(Self { url, anon_key })
    }

    /// Base URL with any trailing slash removed, ready for path joining.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

fn required_var(name: &str) -> Result<String, StoreError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(StoreError::Config(format!("{} is not set", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_strips_trailing_slash() {
        let config = StoreConfig {
            url: "https://example.supabase.co/".to_string(),
            anon_key: "anon".to_string(),
        };
        assert_eq!(config.base_url(), "https://example.supabase.co");
    }
}
