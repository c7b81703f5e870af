use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;

use super::error::SegmentError;
use super::model::TextChunk;
use super::voice::{SpeechRate, VoicePreset};
use crate::infrastructure::engines::{SynthesisEngine, SynthesisEngineError};

/// Per-attempt outcome, driving the retry loop
enum Attempt {
    Success(Vec<u8>),
    Retry(String),
    Fatal(String),
}

/// Converts one text chunk into audio, retrying transient engine failures
/// with a fixed backoff between attempts.
pub struct SegmentSynthesizer {
    engine: Arc<dyn SynthesisEngine>,
    max_attempts: u32,
    backoff_delay: Duration,
}

impl SegmentSynthesizer {
    pub fn new(engine: Arc<dyn SynthesisEngine>, max_attempts: u32, backoff_delay: Duration) -> Self {
        Self {
            engine,
            max_attempts,
            backoff_delay,
        }
    }

    /// Synthesize a single chunk, issuing at most `max_attempts` engine calls.
    ///
    /// Returns the chunk's complete audio; incremental engine fragments are
    /// fully drained and concatenated before an attempt counts as a success.
    /// The chunk index is left to the caller to attach on failure.
    pub async fn synthesize_chunk(
        &self,
        chunk: &TextChunk,
        voice: &VoicePreset,
        rate: SpeechRate,
    ) -> Result<Vec<u8>, SegmentError> {
        let mut last_error = String::new();

        for attempt in 1..=self.max_attempts {
            match self.attempt(chunk, voice, rate).await {
                Attempt::Success(audio) => {
                    tracing::debug!(
                        chunk_index = chunk.index,
                        attempt = attempt,
                        audio_size = audio.len(),
                        "Chunk synthesized"
                    );
                    return Ok(audio);
                }
                Attempt::Fatal(reason) => {
                    tracing::error!(
                        chunk_index = chunk.index,
                        attempt = attempt,
                        reason = %reason,
                        "Unexpected engine response, not retrying"
                    );
                    return Err(SegmentError::Fatal(reason));
                }
                Attempt::Retry(reason) => {
                    tracing::warn!(
                        chunk_index = chunk.index,
                        attempt = attempt,
                        max_attempts = self.max_attempts,
                        reason = %reason,
                        "Synthesis attempt failed"
                    );
                    last_error = reason;
                    if attempt < self.max_attempts {
                        tokio::time::sleep(self.backoff_delay).await;
                    }
                }
            }
        }

        Err(SegmentError::Exhausted {
            attempts: self.max_attempts,
            reason: last_error,
        })
    }

    async fn attempt(&self, chunk: &TextChunk, voice: &VoicePreset, rate: SpeechRate) -> Attempt {
        let mut stream = match self.engine.synthesize(&chunk.content, voice, rate).await {
            Ok(stream) => stream,
            Err(SynthesisEngineError::Transient(reason)) => return Attempt::Retry(reason),
            Err(SynthesisEngineError::Unexpected(reason)) => return Attempt::Fatal(reason),
        };

        // Drain every fragment before declaring success; a failure mid-stream
        // voids the whole attempt, never yielding partial audio
        let mut audio = Vec::new();
        while let Some(fragment) = stream.next().await {
            match fragment {
                Ok(bytes) => audio.extend_from_slice(&bytes),
                Err(SynthesisEngineError::Transient(reason)) => return Attempt::Retry(reason),
                Err(SynthesisEngineError::Unexpected(reason)) => return Attempt::Fatal(reason),
            }
        }

        Attempt::Success(audio)
    }
}
