use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::synthesis::{SpeechRate, VoicePreset};

/// Incremental audio produced for one synthesis request. Fragments arrive in
/// playback order and must be concatenated by the caller.
pub type AudioFragmentStream = BoxStream<'static, Result<Vec<u8>, SynthesisEngineError>>;

/// Failure from a single engine call
#[derive(Debug, thiserror::Error)]
pub enum SynthesisEngineError {
    /// Network faults, throttling, engine-side rejections; safe to retry
    #[error("synthesis request failed: {0}")]
    Transient(String),

    /// Malformed or otherwise uninterpretable engine response; not retried
    #[error("unexpected engine response: {0}")]
    Unexpected(String),
}

/// External text-to-speech engine.
/// Abstracts the underlying provider (edge neural voices, Google TTS, etc.)
///
/// Implementations are responsible for:
/// - Accepting one bounded text segment per call
/// - Mapping the voice identifier and rate onto provider parameters
/// - Yielding audio as an ordered stream of MP3 byte fragments
///
/// Implementations do not retry; the segment synthesizer owns the retry
/// policy.
#[async_trait]
pub trait SynthesisEngine: Send + Sync {
    /// Synthesize one text segment with the given voice and rate
    ///
    /// # Errors
    /// Returns `Transient` for failures worth retrying and `Unexpected` for
    /// responses the caller cannot recover from.
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoicePreset,
        rate: SpeechRate,
    ) -> Result<AudioFragmentStream, SynthesisEngineError>;
}
