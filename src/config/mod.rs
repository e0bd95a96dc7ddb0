mod settings;

use config::{Config, ConfigError, Environment, File};

use crate::config::settings::PartialSettings;

pub use settings::{CacheSettings, MqttSettings, ServerSettings, Settings, StoreSettings};

/// Loads the configuration from the default file and environment variables.
/// Merges the configuration with default values, so a bare environment with
/// just `MQTT_HOST` set is enough to run.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        mqtt: MqttSettings {
            host: partial
                .mqtt
                .as_ref()
                .and_then(|m| m.host.clone())
                .unwrap_or(default.mqtt.host),
            port: partial
                .mqtt
                .as_ref()
                .and_then(|m| m.port)
                .unwrap_or(default.mqtt.port),
            client_id: partial
                .mqtt
                .as_ref()
                .and_then(|m| m.client_id.clone())
                .unwrap_or(default.mqtt.client_id),
        },
        server: ServerSettings {
            host: partial
                .server
                .as_ref()
                .and_then(|s| s.host.clone())
                .unwrap_or(default.server.host),
            port: partial
                .server
                .as_ref()
                .and_then(|s| s.port)
                .unwrap_or(default.server.port),
        },
        store: StoreSettings {
            path: partial
                .store
                .as_ref()
                .and_then(|s| s.path.clone())
                .unwrap_or(default.store.path),
            tree: partial
                .store
                .as_ref()
                .and_then(|s| s.tree.clone())
                .unwrap_or(default.store.tree),
        },
        cache: CacheSettings {
            ttl_minutes: partial.cache.as_ref().and_then(|c| c.ttl_minutes),
        },
    })
}
