//! Google Cloud service-account authentication.
//!
//! Credentials are built with `google-cloud-auth`, which signs, caches and
//! refreshes access tokens on its own. Concurrent callers share the cached
//! token instead of each minting a new one.

use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use google_cloud_auth::credentials::{service_account, CacheableResource, Credentials};
use http::{header::AUTHORIZATION, Extensions};
use serde_json::Value;

/// OAuth2 scope covering Cloud Text-to-Speech
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Source of OAuth2 bearer tokens for Google Cloud APIs
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// A valid access token, refreshed when the cached one is about to expire
    async fn get_token(&self) -> anyhow::Result<String>;
}

/// Token provider backed by a service account key
pub struct ServiceAccountTokenProvider {
    credentials: Credentials,
    client_email: String,
}

impl std::fmt::Debug for ServiceAccountTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountTokenProvider")
            .field("client_email", &self.client_email)
            .finish_non_exhaustive()
    }
}

impl ServiceAccountTokenProvider {
    /// Build credentials from the service account JSON blob (the contents of a
    /// key file). Fails on malformed JSON or a key without the required fields.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let key: Value =
            serde_json::from_str(json).context("GCP service account JSON is malformed")?;

        let client_email = key
            .get("client_email")
            .and_then(Value::as_str)
            .filter(|email| !email.is_empty())
            .context("GCP service account JSON has no client_email")?
            .to_string();

        if key
            .get("private_key")
            .and_then(Value::as_str)
            .map_or(true, str::is_empty)
        {
            bail!("GCP service account JSON has no private_key");
        }

        let credentials = service_account::Builder::new(key)
            .with_access_specifier(service_account::AccessSpecifier::from_scopes(vec![
                CLOUD_PLATFORM_SCOPE.to_string(),
            ]))
            .build()
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to initialize service account credentials");
                anyhow!("Failed to initialize GCP service account credentials: {e}")
            })?;

        Ok(Self {
            credentials,
            client_email,
        })
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }
}

#[async_trait]
impl TokenProvider for ServiceAccountTokenProvider {
    async fn get_token(&self) -> anyhow::Result<String> {
        let headers = self
            .credentials
            .headers(Extensions::new())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to fetch Google Cloud access token");
                anyhow!("Failed to fetch access token: {e}")
            })?;

        let header_map = match headers {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                bail!("Credentials answered NotModified without a cached token")
            }
        };

        let authorization = header_map
            .get(AUTHORIZATION)
            .context("No Authorization header in credentials response")?
            .to_str()
            .context("Authorization header is not valid ASCII")?;

        authorization
            .strip_prefix("Bearer ")
            .map(str::to_string)
            .context("Authorization header is not a Bearer token")
    }
}
