/// Errors surfaced by a whole pipeline run.
///
/// Transient per-attempt engine failures never appear here; they are retried
/// inside the segment synthesizer and only become visible once a chunk has
/// exhausted its attempt budget.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("no text supplied")]
    EmptyInput,

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("chunk {chunk_index} failed after {attempts} attempts: {reason}")]
    ChunkExhausted {
        chunk_index: usize,
        attempts: u32,
        reason: String,
    },

    #[error("unexpected failure on chunk {chunk_index}: {reason}")]
    Unexpected { chunk_index: usize, reason: String },
}

impl PipelineError {
    /// Index of the chunk that aborted the run, when one did
    pub fn failed_chunk_index(&self) -> Option<usize> {
        match self {
            PipelineError::ChunkExhausted { chunk_index, .. }
            | PipelineError::Unexpected { chunk_index, .. } => Some(*chunk_index),
            _ => None,
        }
    }
}

/// Terminal outcome for a single chunk, before the orchestrator attaches the
/// chunk index.
#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    #[error("all {attempts} attempts failed: {reason}")]
    Exhausted { attempts: u32, reason: String },

    #[error("{0}")]
    Fatal(String),
}

impl SegmentError {
    /// Promote to a pipeline error for the chunk at `chunk_index`
    pub fn into_pipeline_error(self, chunk_index: usize) -> PipelineError {
        match self {
            SegmentError::Exhausted { attempts, reason } => PipelineError::ChunkExhausted {
                chunk_index,
                attempts,
                reason,
            },
            SegmentError::Fatal(reason) => PipelineError::Unexpected {
                chunk_index,
                reason,
            },
        }
    }
}
