use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::accumulator::StreamAccumulator;
use super::error::PipelineError;
use super::model::{ProgressUpdate, SynthesisOutcome};
use super::progress::ProgressSink;
use super::segmenter::segment;
use super::synthesizer::SegmentSynthesizer;
use super::voice::{SpeechRate, VoicePreset};
use super::SynthesisRequest;
use crate::infrastructure::engines::SynthesisEngine;

/// Tuning knobs for one pipeline instance
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Soft upper bound on chunk length in characters
    pub max_chunk_length: usize,
    /// Engine calls allowed per chunk before the run aborts
    pub max_attempts: u32,
    /// Fixed wait between retry attempts for one chunk
    pub backoff_delay: Duration,
    /// Wait between successive chunks, keeps the engine from throttling us
    pub inter_segment_delay: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_chunk_length: 1000,
            max_attempts: 3,
            backoff_delay: Duration::from_secs(2),
            inter_segment_delay: Duration::from_millis(500),
        }
    }
}

/// Drives a full text-to-audio conversion: segment, synthesize sequentially
/// with retries, throttle between chunks, accumulate, finalize.
///
/// Each instance owns its accumulator and progress state for the duration of
/// one `run` call; concurrent conversions get independent instances.
pub struct SynthesisPipeline {
    engine: Arc<dyn SynthesisEngine>,
    config: PipelineConfig,
    progress: Arc<dyn ProgressSink>,
}

impl SynthesisPipeline {
    pub fn new(
        engine: Arc<dyn SynthesisEngine>,
        config: PipelineConfig,
        progress: Arc<dyn ProgressSink>,
    ) -> Self {
        Self {
            engine,
            config,
            progress,
        }
    }

    fn resolve_voice(request: &SynthesisRequest) -> Result<VoicePreset, PipelineError> {
        match &request.voice {
            Some(value) => VoicePreset::parse(value)
                .ok_or_else(|| PipelineError::Invalid(format!("unknown voice: {}", value))),
            None => Ok(VoicePreset::default()),
        }
    }

    fn resolve_rate(request: &SynthesisRequest) -> Result<SpeechRate, PipelineError> {
        match request.speed {
            Some(speed) => SpeechRate::new(speed),
            None => Ok(SpeechRate::default()),
        }
    }
}

#[async_trait]
pub trait SynthesisPipelineApi: Send + Sync {
    /// Convert the request's text into one combined audio artifact
    ///
    /// All-or-nothing: if any chunk exhausts its retry budget the run aborts
    /// and audio accumulated for earlier chunks is discarded.
    async fn run(&self, request: SynthesisRequest) -> Result<SynthesisOutcome, PipelineError>;
}

#[async_trait]
impl SynthesisPipelineApi for SynthesisPipeline {
    async fn run(&self, request: SynthesisRequest) -> Result<SynthesisOutcome, PipelineError> {
        if request.text.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let voice = Self::resolve_voice(&request)?;
        let rate = Self::resolve_rate(&request)?;

        let start_time = std::time::Instant::now();
        tracing::info!(
            text_length = request.text.len(),
            voice = %voice,
            rate = %rate,
            "Starting chunked synthesis"
        );

        let chunks = segment(&request.text, self.config.max_chunk_length);
        if chunks.is_empty() {
            tracing::info!("No synthesizable sentences in input");
            self.progress.report(ProgressUpdate::nothing_to_do());
            return Ok(SynthesisOutcome {
                artifact: StreamAccumulator::new().finalize(),
                chunk_count: 0,
            });
        }

        let total = chunks.len();
        tracing::info!(
            chunk_count = total,
            max_chunk_length = self.config.max_chunk_length,
            "Text split into chunks"
        );

        let synthesizer = SegmentSynthesizer::new(
            self.engine.clone(),
            self.config.max_attempts,
            self.config.backoff_delay,
        );
        let mut accumulator = StreamAccumulator::new();

        for chunk in &chunks {
            let audio = synthesizer
                .synthesize_chunk(chunk, &voice, rate)
                .await
                .map_err(|e| e.into_pipeline_error(chunk.index))?;

            self.progress
                .report(ProgressUpdate::new(chunk.index + 1, total, chunk.index));
            accumulator.append(&audio);

            tracing::info!(
                chunk_index = chunk.index,
                chunk_count = total,
                total_audio_size = accumulator.len(),
                "Chunk synthesized and merged"
            );

            // Deliberate backpressure towards the engine's request cadence
            tokio::time::sleep(self.config.inter_segment_delay).await;
        }

        let artifact = accumulator.finalize();
        let duration = start_time.elapsed();
        tracing::info!(
            latency_ms = duration.as_millis(),
            chunk_count = total,
            audio_size_bytes = artifact.bytes.len(),
            characters_count = request.text.len(),
            "Chunked synthesis completed"
        );

        Ok(SynthesisOutcome {
            artifact,
            chunk_count: total,
        })
    }
}
