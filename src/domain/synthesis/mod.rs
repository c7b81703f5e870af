pub mod accumulator;
pub mod error;
pub mod model;
pub mod progress;
pub mod segmenter;
pub mod service;
pub mod synthesizer;
pub mod voice;

use serde::{Deserialize, Serialize};

pub use accumulator::StreamAccumulator;
pub use error::{PipelineError, SegmentError};
pub use model::{
    AudioArtifact, ProgressUpdate, SynthesisOutcome, TextChunk, OUTPUT_CONTENT_TYPE,
    OUTPUT_FILE_NAME,
};
pub use progress::{ChannelProgressSink, LogProgressSink, NullProgressSink, ProgressSink};
pub use segmenter::segment;
pub use service::{PipelineConfig, SynthesisPipeline, SynthesisPipelineApi};
pub use synthesizer::SegmentSynthesizer;
pub use voice::{SpeechRate, VoicePreset, MAX_SPEECH_RATE, MIN_SPEECH_RATE};

/// Conversion request as supplied by a presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: None,
            speed: None,
        }
    }
}
