use super::model::ProgressUpdate;

/// Sink for progress updates emitted while a run is in flight.
///
/// Purely observational: the pipeline behaves identically whatever the sink
/// does with the updates, including dropping them.
pub trait ProgressSink: Send + Sync {
    fn report(&self, update: ProgressUpdate);
}

/// Discards all updates
#[derive(Debug, Default)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn report(&self, _update: ProgressUpdate) {}
}

/// Emits updates as structured log events
#[derive(Debug, Default)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn report(&self, update: ProgressUpdate) {
        tracing::info!(
            completed = update.completed,
            total = update.total,
            current_chunk_index = update.current_chunk_index,
            "{}",
            update.message
        );
    }
}

/// Forwards updates over an unbounded channel, for UIs that render them
/// asynchronously
pub struct ChannelProgressSink {
    sender: tokio::sync::mpsc::UnboundedSender<ProgressUpdate>,
}

impl ChannelProgressSink {
    pub fn new() -> (
        Self,
        tokio::sync::mpsc::UnboundedReceiver<ProgressUpdate>,
    ) {
        let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl ProgressSink for ChannelProgressSink {
    fn report(&self, update: ProgressUpdate) {
        // Receiver may have hung up; progress must never fail the run
        let _ = self.sender.send(update);
    }
}
