use secrecy::SecretString;
use std::{env, time::Duration};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub generation_api_base_url: String,
    pub generation_api_key: SecretString,
    pub generation_model: String,
    pub generation_timeout_seconds: u64,
    pub generation_max_tokens: u32,
    pub generation_temperature: f32,
    pub generation_top_p: f32,
    pub session_idle_ttl_seconds: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            generation_api_base_url: env::var("GENERATION_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            generation_api_key: SecretString::from(
                env::var("GENERATION_API_KEY").unwrap_or_default(),
            ),
            generation_model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            generation_timeout_seconds: env::var("GENERATION_TIMEOUT_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(120),
            generation_max_tokens: env::var("GENERATION_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(1200),
            generation_temperature: env::var("GENERATION_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.7),
            generation_top_p: env::var("GENERATION_TOP_P")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.9),
            session_idle_ttl_seconds: env::var("SESSION_IDLE_TTL_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(3600),
        }
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_seconds)
    }

    pub fn session_idle_ttl(&self) -> Duration {
        Duration::from_secs(self.session_idle_ttl_seconds)
    }

    /// Validate that production-critical configuration is set
    /// Panics if the generation endpoint cannot be reached with these settings
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.generation_api_key.expose_secret().trim().is_empty() {
            panic!(
                "FATAL: GENERATION_API_KEY is not set! Every quiz would fall back to placeholder questions."
            );
        }

        if !self.generation_api_base_url.starts_with("http://")
            && !self.generation_api_base_url.starts_with("https://")
        {
            panic!(
                "FATAL: GENERATION_API_BASE_URL must be an http(s) URL, got '{}'.",
                self.generation_api_base_url
            );
        }

        if self.generation_timeout_seconds == 0 {
            panic!("FATAL: GENERATION_TIMEOUT_SECONDS must be greater than zero.");
        }

        if self.session_idle_ttl_seconds <= self.generation_timeout_seconds {
            panic!(
                "FATAL: SESSION_IDLE_TTL_SECONDS must exceed GENERATION_TIMEOUT_SECONDS, or sessions expire mid-generation."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            generation_api_base_url: "http://127.0.0.1:9".to_string(),
            generation_api_key: SecretString::from("test_generation_key".to_string()),
            generation_model: "test-model".to_string(),
            generation_timeout_seconds: 2,
            generation_max_tokens: 600,
            generation_temperature: 0.7,
            generation_top_p: 0.9,
            session_idle_ttl_seconds: 600,
        }
    }
}
