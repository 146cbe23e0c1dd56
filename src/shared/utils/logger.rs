use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("graphdb_importer", log::LevelFilter::Debug) // More verbose for our app
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn) // Reduce tokio noise
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();
    });
}
