use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::domain::synthesis::PipelineConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub tts_endpoint: String,
    pub default_voice: String,
    pub max_chunk_chars: usize,
    pub max_attempts: u32,
    pub retry_backoff_ms: u64,
    pub inter_segment_delay_ms: u64,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            tts_endpoint: env::var("TTS_ENDPOINT").context("TTS_ENDPOINT must be set")?,
            default_voice: env::var("TTS_DEFAULT_VOICE").unwrap_or_else(|_| "female".to_string()),
            max_chunk_chars: env::var("TTS_MAX_CHUNK_CHARS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .context("TTS_MAX_CHUNK_CHARS must be an integer")?,
            max_attempts: env::var("TTS_MAX_ATTEMPTS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .context("TTS_MAX_ATTEMPTS must be an integer")?,
            retry_backoff_ms: env::var("TTS_RETRY_BACKOFF_MS")
                .unwrap_or_else(|_| "2000".to_string())
                .parse()
                .context("TTS_RETRY_BACKOFF_MS must be an integer")?,
            inter_segment_delay_ms: env::var("TTS_INTER_SEGMENT_DELAY_MS")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .context("TTS_INTER_SEGMENT_DELAY_MS must be an integer")?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Pipeline tuning derived from the environment
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            max_chunk_length: self.max_chunk_chars,
            max_attempts: self.max_attempts,
            backoff_delay: Duration::from_millis(self.retry_backoff_ms),
            inter_segment_delay: Duration::from_millis(self.inter_segment_delay_ms),
        }
    }
}
