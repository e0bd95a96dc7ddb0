/// Initialize the global tracing subscriber.
///
/// `default_level` names the maximum level to emit; unrecognized values fall
/// back to `info`. Uses `try_init` so tests can call this repeatedly without
/// panicking.
pub fn init(default_level: &str) {
    let lvl = match default_level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" | "warning" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(lvl)
        .with_target(false)
        .try_init();
}
