mod settings;

pub use settings::{AssetRelayConfig, OtelConfig, ServerConfig, Settings, StorageConfig};
