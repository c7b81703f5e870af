//! Chunked text-to-speech synthesis pipeline.
//!
//! Splits arbitrarily long text into sentence-aligned chunks, synthesizes
//! each chunk sequentially against an external TTS engine with bounded
//! retries and fixed backoff, throttles between chunks to respect engine
//! rate limits, and merges the audio into a single `audio/mpeg` artifact.
//! Any chunk failure aborts the whole run; no partial audio is returned.

pub mod domain;
pub mod infrastructure;

pub use domain::synthesis::{
    AudioArtifact, PipelineConfig, PipelineError, ProgressSink, ProgressUpdate, SynthesisOutcome,
    SynthesisPipeline, SynthesisPipelineApi, SynthesisRequest,
};
pub use infrastructure::engines::{SynthesisEngine, SynthesisEngineError};
