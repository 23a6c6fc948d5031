//! Asset relay abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Asset relay error type.
#[derive(Debug, Error)]
pub enum AssetRelayError {
    #[error("Asset relay is not configured")]
    Disabled,

    #[error("Relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Relay rejected upload with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// Result type for relay operations.
pub type AssetRelayResult<T> = Result<T, AssetRelayError>;

/// The stable location the relay minted for an uploaded binary.
///
/// The URL is opaque text; the caller embeds it into a markup fragment and
/// nothing in this service ever interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedAsset {
    pub url: String,
}

/// External object-storage relay: binary in, stable URL out.
///
/// Consumed by the upload endpoint only; the render engine never sees
/// assets, only whatever URLs already sit inside markup fragments.
#[async_trait]
pub trait AssetRelay: Send + Sync {
    /// Whether uploads are configured.
    fn is_enabled(&self) -> bool;

    /// Hand a binary to the relay and return its public URL.
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> AssetRelayResult<UploadedAsset>;
}

/// Fallback relay used when no endpoint is configured.
pub struct DisabledAssetRelay;

#[async_trait]
impl AssetRelay for DisabledAssetRelay {
    fn is_enabled(&self) -> bool {
        false
    }

    async fn upload(
        &self,
        _filename: &str,
        _content_type: &str,
        _bytes: Vec<u8>,
    ) -> AssetRelayResult<UploadedAsset> {
        Err(AssetRelayError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_relay_rejects_uploads() {
        let relay = DisabledAssetRelay;
        assert!(!relay.is_enabled());

        let result = relay.upload("logo.png", "image/png", vec![1, 2, 3]).await;
        assert!(matches!(result, Err(AssetRelayError::Disabled)));
    }
}
