use tracing::{error, info};

use mqttmirror::bridge::IngestBridge;
use mqttmirror::config::load_config;
use mqttmirror::http;
use mqttmirror::store::LastValueStore;
use mqttmirror::utils::error::MirrorError;
use mqttmirror::utils::logging;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init("info");

    if let Err(e) = run().await {
        error!("mqttmirror failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), MirrorError> {
    let config = load_config()?;

    let store = LastValueStore::open(&config.store.path, &config.store.tree)?;
    let bridge = IngestBridge::new(store.clone(), config.cache.ttl_seconds());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let mqtt = config.mqtt.clone();

    tokio::select! {
        _ = bridge.run(&mqtt) => {
            error!("ingest bridge exited unexpectedly");
        }
        result = http::serve(&addr, store.clone()) => {
            if let Err(e) = result {
                error!("http server failed: {e}");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received, exiting gracefully");
        }
    }

    store.flush()?;
    Ok(())
}
