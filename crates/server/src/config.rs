use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and `.env`, and store the result in the global
/// `OnceLock`. Safe to call multiple times; only the first call has effect.
///
/// A missing or unparseable file yields defaults. `API_BASE_URL` and
/// `ACTING_USER_ID` from the environment override the file.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();

        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                eprintln!("[config] {CONFIG_PATH} not found ({e}), using defaults");
                AppConfig::default()
            }
        };
        apply_env_overrides(
            &mut config,
            std::env::var("API_BASE_URL").ok(),
            std::env::var("ACTING_USER_ID").ok(),
        );
        eprintln!(
            "[config] backend: {}",
            if config.api.base_url.is_empty() {
                "<unset>"
            } else {
                config.api.base_url.as_str()
            }
        );
        config
    })
}

/// Get the loaded config, loading it on first use.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get().unwrap_or_else(load_config)
}

/// Parse `config.toml` contents, falling back to defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    })
}

/// Apply environment overrides. Blank or unparseable values are ignored.
pub fn apply_env_overrides(
    config: &mut AppConfig,
    base_url: Option<String>,
    user_id: Option<String>,
) {
    if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url.trim().trim_end_matches('/').to_string();
    }
    if let Some(id) = user_id.and_then(|v| v.trim().parse::<i64>().ok()) {
        config.reservation.user_id = id;
    }
}
