//! Asset relay factory.

use std::sync::Arc;

use crate::config::AssetRelayConfig;

use super::http_relay::HttpAssetRelay;
use super::relay::{AssetRelay, AssetRelayResult, DisabledAssetRelay};

/// Create an asset relay based on configuration.
///
/// Returns an `HttpAssetRelay` when an upload endpoint is configured,
/// otherwise a `DisabledAssetRelay` that rejects every upload.
pub fn create_asset_relay(settings: &AssetRelayConfig) -> AssetRelayResult<Arc<dyn AssetRelay>> {
    match settings.upload_url.as_deref() {
        Some(url) if !url.is_empty() => {
            tracing::info!(upload_url = %url, "Creating HTTP asset relay");
            Ok(Arc::new(HttpAssetRelay::new(settings, url.to_string())?))
        }
        _ => {
            tracing::warn!("No asset relay endpoint configured, uploads are disabled");
            Ok(Arc::new(DisabledAssetRelay))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_disables_without_endpoint() {
        let settings = AssetRelayConfig::default();
        let relay = create_asset_relay(&settings).unwrap();
        assert!(!relay.is_enabled());
    }

    #[test]
    fn test_factory_builds_http_relay() {
        let settings = AssetRelayConfig {
            upload_url: Some("https://relay.example.com/upload".to_string()),
            ..Default::default()
        };
        let relay = create_asset_relay(&settings).unwrap();
        assert!(relay.is_enabled());
    }
}
