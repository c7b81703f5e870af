// Integration tests for the chunked synthesis pipeline
//
// These tests drive full pipeline runs against a scripted in-memory engine,
// so they cover segmentation, retry/backoff, throttling, progress reporting
// and audio merging together without any network dependency. Timing
// assertions run on tokio's paused clock and are exact.

mod test_pipeline;
