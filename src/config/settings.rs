use serde::Deserialize;

/// Top-level configuration settings for the application.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub mqtt: MqttSettings,
    pub server: ServerSettings,
    pub store: StoreSettings,
    pub cache: CacheSettings,
}

/// MQTT broker connection settings.
#[derive(Debug, Deserialize, Clone)]
pub struct MqttSettings {
    pub host: String,
    pub port: u16,
    pub client_id: String,
}

/// HTTP server bind settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Last-value store backend settings: database path and tree name.
#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    pub path: String,
    pub tree: String,
}

/// Cache policy. `ttl_minutes` unset means entries never expire.
#[derive(Debug, Deserialize, Clone)]
pub struct CacheSettings {
    pub ttl_minutes: Option<u64>,
}

impl CacheSettings {
    /// TTL converted to what the store expects.
    pub fn ttl_seconds(&self) -> Option<u64> {
        self.ttl_minutes.map(|m| m * 60)
    }
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled
/// using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub mqtt: Option<PartialMqttSettings>,
    pub server: Option<PartialServerSettings>,
    pub store: Option<PartialStoreSettings>,
    pub cache: Option<PartialCacheSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialMqttSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub client_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PartialServerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct PartialStoreSettings {
    pub path: Option<String>,
    pub tree: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PartialCacheSettings {
    pub ttl_minutes: Option<u64>,
}

/// Provides default values for `Settings`.
///
/// Ensures the application has sensible defaults if no configuration is
/// provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            mqtt: MqttSettings {
                host: "localhost".to_string(),
                port: 1883,
                client_id: "mqttmirror".to_string(),
            },
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            store: StoreSettings {
                path: "mirror_db".to_string(),
                tree: "readings".to_string(),
            },
            cache: CacheSettings { ttl_minutes: None },
        }
    }
}
