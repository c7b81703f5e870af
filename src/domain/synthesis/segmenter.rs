use super::model::TextChunk;

/// Split text into ordered chunks that respect sentence boundaries.
///
/// Sentences are detected on runs of terminal punctuation and keep their
/// terminators attached. Sentences are accumulated greedily; whenever
/// appending the next sentence would make the running buffer reach or exceed
/// `max_length` the buffer is closed as a chunk and the sentence starts a new
/// one. Whitespace-only sentences are dropped, so an all-whitespace input
/// yields no chunks.
///
/// A single sentence that is itself `max_length` or longer is emitted as one
/// oversized chunk rather than split mid-sentence; callers relying on a hard
/// size bound should watch for the warning this logs.
pub fn segment(text: &str, max_length: usize) -> Vec<TextChunk> {
    let mut chunks: Vec<TextChunk> = Vec::new();
    let mut buffer = String::new();

    let close_buffer = |buffer: &mut String, chunks: &mut Vec<TextChunk>| {
        if !buffer.is_empty() {
            let content = std::mem::take(buffer);
            if content.len() >= max_length {
                tracing::warn!(
                    chunk_index = chunks.len(),
                    chunk_length = content.len(),
                    max_length = max_length,
                    "Oversized sentence emitted as a single chunk"
                );
            }
            chunks.push(TextChunk::new(chunks.len(), content));
        }
    };

    for sentence in split_sentences(text) {
        // +1 for the joining space
        if !buffer.is_empty() && buffer.len() + 1 + sentence.len() >= max_length {
            close_buffer(&mut buffer, &mut chunks);
        }
        if !buffer.is_empty() {
            buffer.push(' ');
        }
        buffer.push_str(&sentence);
    }
    close_buffer(&mut buffer, &mut chunks);

    chunks
}

/// Split on runs of sentence-terminal punctuation, re-appending each run to
/// the sentence it closes. Bodies that are empty or whitespace-only are
/// dropped together with their terminators. Trailing text without a
/// terminator becomes a final sentence.
fn split_sentences(text: &str) -> Vec<String> {
    let terminal = regex::Regex::new(r"[.!?]+").unwrap();

    let mut sentences = Vec::new();
    let mut last_end = 0;
    for mat in terminal.find_iter(text) {
        let body = text[last_end..mat.start()].trim();
        if !body.is_empty() {
            sentences.push(format!("{}{}", body, mat.as_str()));
        }
        last_end = mat.end();
    }

    let tail = text[last_end..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}
