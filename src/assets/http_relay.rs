//! HTTP asset relay client.
//!
//! Forwards uploaded binaries to the configured object-storage relay as a
//! multipart form and returns the stable URL the relay minted for them.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::AssetRelayConfig;

use super::relay::{AssetRelay, AssetRelayResult, AssetRelayError, UploadedAsset};

/// User agent sent with relay requests.
const USER_AGENT: &str = concat!("letterpress/", env!("CARGO_PKG_VERSION"));

/// Successful relay response body.
#[derive(Debug, Deserialize)]
struct RelayResponse {
    url: String,
}

/// Relay client over a configured upload endpoint.
pub struct HttpAssetRelay {
    client: reqwest::Client,
    upload_url: String,
    api_key: Option<String>,
}

impl HttpAssetRelay {
    /// Build a relay client from configuration.
    pub fn new(settings: &AssetRelayConfig, upload_url: String) -> AssetRelayResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            upload_url,
            api_key: settings.api_key.clone(),
        })
    }
}

#[async_trait]
impl AssetRelay for HttpAssetRelay {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> AssetRelayResult<UploadedAsset> {
        let size = bytes.len();

        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("image", part);

        let mut request = self.client.post(&self.upload_url).multipart(form);
        if let Some(key) = &self.api_key {
            request = request.header("X-API-Key", key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AssetRelayError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: RelayResponse = response.json().await?;

        tracing::info!(
            filename = %filename,
            content_type = %content_type,
            bytes = size,
            "Asset uploaded via relay"
        );

        Ok(UploadedAsset { url: body.url })
    }
}
