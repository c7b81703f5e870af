use serde::Serialize;

/// One bounded-length segment of input text, processed as a single synthesis
/// unit. Chunks partition the input in original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub index: usize,
    pub content: String,
}

impl TextChunk {
    pub fn new(index: usize, content: String) -> Self {
        Self { index, content }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Progress snapshot emitted after each chunk completes.
///
/// Observational only; consumers display it, the pipeline never reads it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressUpdate {
    pub completed: usize,
    pub total: usize,
    pub current_chunk_index: usize,
    pub message: String,
}

impl ProgressUpdate {
    pub fn new(completed: usize, total: usize, current_chunk_index: usize) -> Self {
        Self {
            completed,
            total,
            current_chunk_index,
            message: format!("Synthesized chunk {}/{}", completed, total),
        }
    }

    pub fn nothing_to_do() -> Self {
        Self {
            completed: 0,
            total: 0,
            current_chunk_index: 0,
            message: "nothing to synthesize".to_string(),
        }
    }
}

/// Successful result of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisOutcome {
    pub artifact: AudioArtifact,
    pub chunk_count: usize,
}

impl SynthesisOutcome {
    /// True when the input contained no synthesizable sentences and the
    /// engine was never invoked
    pub fn is_empty(&self) -> bool {
        self.chunk_count == 0
    }
}

/// Sealed audio object, ready for playback or download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    pub bytes: Vec<u8>,
    pub file_name: &'static str,
    pub content_type: &'static str,
}

/// Deterministic download name for the combined audio
pub const OUTPUT_FILE_NAME: &str = "unlimited_tts.mp3";

/// MIME type of the combined audio
pub const OUTPUT_CONTENT_TYPE: &str = "audio/mpeg";
