use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Parse `config.toml` contents. Unparseable input falls back to the
/// built-in defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config.toml, using built-in defaults");
        AppConfig::default()
    })
}

/// Parse the config and store it in the global `OnceLock`. Only the first
/// call has effect.
pub fn load_config(contents: &str) -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(contents);
        tracing::info!(
            brand = %config.ui.brand,
            departments = config.ui.departments.len(),
            "Configuration loaded"
        );
        config
    })
}

/// The loaded config, or the defaults if `load_config()` hasn't run yet.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}
