use super::{cors_config, database_config::StoreConfig, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub store: StoreConfig,
    /// Optional `key=value` file overlaid on the built-in validation messages.
    pub messages_path: Option<String>,
    pub seed_test_data: bool,
}

impl AppConfig {
    /// Environment variables (besides those read by the nested configs):
    /// - ERROR_MESSAGES_PATH: messages override file (default: none)
    /// - SEED_TEST_DATA: store two sample items at startup (default: "true")
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            store: StoreConfig::from_env(),
            messages_path: non_empty_var("ERROR_MESSAGES_PATH"),
            seed_test_data: parse_flag(std::env::var("SEED_TEST_DATA").ok().as_deref(), true),
        }
    }
}

pub(crate) fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_truthy_and_falsy_flags() {
        assert!(parse_flag(Some("TRUE"), false));
        assert!(parse_flag(Some(" on "), false));
        assert!(!parse_flag(Some("0"), true));
        assert!(!parse_flag(Some("off"), true));
    }

    #[test]
    fn should_use_default_when_flag_missing_or_unknown() {
        assert!(parse_flag(None, true));
        assert!(!parse_flag(Some("maybe"), false));
    }
}
