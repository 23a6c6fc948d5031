//! Binary asset hosting via an external relay.
//!
//! The relay accepts an image binary and returns a stable URL. The editor
//! embeds that URL into a markup fragment before the fragment is ever
//! stored or rendered, so the rest of the service treats it as opaque text.

mod factory;
mod http_relay;
mod relay;

pub use factory::create_asset_relay;
pub use http_relay::HttpAssetRelay;
pub use relay::{AssetRelay, AssetRelayError, AssetRelayResult, DisabledAssetRelay, UploadedAsset};
