use std::io::{Cursor, Seek, Write};

use super::model::{AudioArtifact, OUTPUT_CONTENT_TYPE, OUTPUT_FILE_NAME};

/// Collects synthesized audio for one pipeline run.
///
/// Bytes are appended strictly in call order; `finalize` rewinds the write
/// cursor to the start before sealing, so the artifact is immediately
/// consumable from offset zero.
#[derive(Debug, Default)]
pub struct StreamAccumulator {
    buffer: Cursor<Vec<u8>>,
}

impl StreamAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, bytes: &[u8]) {
        // Writing to an in-memory cursor cannot fail
        self.buffer
            .write_all(bytes)
            .expect("in-memory write failed");
    }

    pub fn len(&self) -> usize {
        self.buffer.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.get_ref().is_empty()
    }

    /// Seal the accumulated audio into a playable, downloadable artifact
    pub fn finalize(mut self) -> AudioArtifact {
        self.buffer.rewind().expect("in-memory rewind failed");
        AudioArtifact {
            bytes: self.buffer.into_inner(),
            file_name: OUTPUT_FILE_NAME,
            content_type: OUTPUT_CONTENT_TYPE,
        }
    }
}
