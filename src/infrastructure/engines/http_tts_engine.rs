use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header, StatusCode};

use super::synthesis_engine::{AudioFragmentStream, SynthesisEngine, SynthesisEngineError};
use crate::domain::synthesis::{SpeechRate, VoicePreset};

/// Truncate to at most `max` bytes without splitting a multi-byte character
fn preview(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// HTTP implementation of the synthesis engine seam.
///
/// Talks to a TTS service exposing a GET endpoint with `q`, `voice` and
/// `rate` query parameters and an `audio/mpeg` response body. The body is
/// forwarded as-is, fragment by fragment.
pub struct HttpTtsEngine {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTtsEngine {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Use a caller-supplied client, e.g. one with custom timeouts
    pub fn with_client(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl SynthesisEngine for HttpTtsEngine {
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoicePreset,
        rate: SpeechRate,
    ) -> Result<AudioFragmentStream, SynthesisEngineError> {
        tracing::info!(
            endpoint = %self.endpoint,
            voice = %voice,
            rate = %rate,
            text_length = text.len(),
            text_preview = preview(text, 200),
            "Calling TTS engine"
        );

        let rate_param = rate.as_percent_str();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", text),
                ("voice", voice.as_str()),
                ("rate", rate_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, endpoint = %self.endpoint, "TTS engine request failed");
                SynthesisEngineError::Transient(format!("engine request failed: {}", e))
            })?;

        let status = response.status();
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(status = %status, "TTS engine returned retryable status");
            return Err(SynthesisEngineError::Transient(format!(
                "engine returned status {}",
                status
            )));
        }
        if !status.is_success() {
            tracing::error!(status = %status, "TTS engine rejected the request");
            return Err(SynthesisEngineError::Unexpected(format!(
                "engine returned status {}",
                status
            )));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.starts_with("audio/") {
            tracing::error!(
                content_type = %content_type,
                "TTS engine returned a non-audio body"
            );
            return Err(SynthesisEngineError::Unexpected(format!(
                "expected an audio response, got content type '{}'",
                content_type
            )));
        }

        let stream = response
            .bytes_stream()
            .map(|fragment| {
                fragment.map(|bytes| bytes.to_vec()).map_err(|e| {
                    SynthesisEngineError::Transient(format!("audio stream error: {}", e))
                })
            })
            .boxed();

        Ok(stream)
    }
}
