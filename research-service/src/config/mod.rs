use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default generation endpoint. The API key is appended verbatim, so the URL
/// ends with the `key=` query parameter.
const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent?key=";

#[derive(Debug, Clone)]
pub struct ResearchConfig {
    pub common: core_config::Config,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL the API key is appended to.
    pub api_url: String,
    pub api_key: Secret<String>,
}

impl ResearchConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(ResearchConfig {
            common: common_config,
            gemini: GeminiConfig {
                api_url: get_env("GEMINI_API_URL", Some(DEFAULT_GEMINI_API_URL), is_prod)?,
                api_key: Secret::new(get_env("GEMINI_API_KEY", None, is_prod)?),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
