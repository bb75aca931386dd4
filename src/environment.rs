extern crate dotenv;

use dotenv::dotenv;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_API_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

/// Process-wide settings, read once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_api_base_url: String,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Config {
        dotenv().ok();
        Config {
            openai_api_key: get_openai_api_key(),
            openai_model: get_openai_model(),
            openai_api_base_url: get_openai_api_base_url(),
            bind_address: get_bind_address(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            openai_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_api_base_url: DEFAULT_OPENAI_API_BASE_URL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

pub fn get_openai_api_key() -> Option<String> {
    non_blank_var("OPENAI_API_KEY")
}

pub fn get_openai_model() -> String {
    non_blank_var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string())
}

pub fn get_openai_api_base_url() -> String {
    non_blank_var("OPENAI_API_BASE_URL")
        .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE_URL.to_string())
}

pub fn get_bind_address() -> String {
    non_blank_var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
}

fn non_blank_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_small_model_and_public_endpoint() {
        let config = Config::default();
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.openai_api_base_url, "https://api.openai.com");
        assert_eq!(config.bind_address, "0.0.0.0:5000");
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn blank_variables_are_treated_as_unset() {
        std::env::set_var("NOTE2FLASH_TEST_BLANK", "   ");
        assert_eq!(non_blank_var("NOTE2FLASH_TEST_BLANK"), None);
        std::env::set_var("NOTE2FLASH_TEST_SET", " value ");
        assert_eq!(non_blank_var("NOTE2FLASH_TEST_SET"), Some("value".to_string()));
    }
}
