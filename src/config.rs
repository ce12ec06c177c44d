use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::services::itinerary::llm::{LlmConfig, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, OPENAI_API_URL};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8000;
const FRONTEND_URL: &str = "http://localhost:3000";

/// Origins always allowed in production alongside `FRONTEND_URL`.
pub const LOCAL_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://localhost:8080",
    "http://127.0.0.1:5500",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    RuleBased,
    Llm,
}

impl StrategyKind {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_lowercase().as_str() {
            "" | "rule_based" | "rule-based" | "rules" => Ok(StrategyKind::RuleBased),
            "llm" | "openai" => Ok(StrategyKind::Llm),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    UnknownStrategy(String),
    MissingApiKey,
    HttpClient(reqwest::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownStrategy(name) => write!(
                f,
                "Unknown ITINERARY_STRATEGY '{}', expected 'rule_based' or 'llm'",
                name
            ),
            ConfigError::MissingApiKey => {
                write!(f, "OPENAI_API_KEY must be set when ITINERARY_STRATEGY=llm")
            }
            ConfigError::HttpClient(err) => write!(f, "Failed to build HTTP client: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub frontend_url: String,
    pub strategy: StrategyKind,
    pub spots_file: Option<PathBuf>,
    /// Present whenever an API key is configured, whichever strategy is active.
    pub llm: Option<LlmConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            environment: "development".to_string(),
            frontend_url: FRONTEND_URL.to_string(),
            strategy: StrategyKind::RuleBased,
            spots_file: None,
            llm: None,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AppConfig {
    /// Read configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let strategy = match non_empty_var("ITINERARY_STRATEGY") {
            Some(value) => StrategyKind::parse(&value)?,
            None => defaults.strategy,
        };

        let llm = non_empty_var("OPENAI_API_KEY").map(|api_key| LlmConfig {
            api_key,
            model: non_empty_var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_empty_var("OPENAI_BASE_URL")
                .unwrap_or_else(|| OPENAI_API_URL.to_string()),
            timeout: Duration::from_secs(
                non_empty_var("LLM_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        });

        if strategy == StrategyKind::Llm && llm.is_none() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self {
            host: non_empty_var("HOST").unwrap_or(defaults.host),
            port: non_empty_var("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            environment: non_empty_var("ENVIRONMENT").unwrap_or(defaults.environment),
            frontend_url: non_empty_var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            strategy,
            spots_file: non_empty_var("SPOTS_FILE").map(PathBuf::from),
            llm,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// Origins accepted by CORS in production.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = vec![self.frontend_url.clone()];
        for origin in LOCAL_ORIGINS {
            if !origins.iter().any(|o| o == origin) {
                origins.push(origin.to_string());
            }
        }
        origins
    }
}
