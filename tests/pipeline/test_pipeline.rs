use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;

use crate::helpers::{CollectingSink, MockEngine};
use unlimited_tts::domain::synthesis::{
    NullProgressSink, PipelineConfig, PipelineError, SynthesisPipeline, SynthesisPipelineApi,
    SynthesisRequest,
};

fn pipeline_with_sink(
    engine: Arc<MockEngine>,
    config: PipelineConfig,
    sink: Arc<CollectingSink>,
) -> SynthesisPipeline {
    SynthesisPipeline::new(engine, config, sink)
}

fn pipeline(engine: Arc<MockEngine>, config: PipelineConfig) -> SynthesisPipeline {
    SynthesisPipeline::new(engine, config, Arc::new(NullProgressSink))
}

/// 50-character sentences, `count` of them, roughly even distribution
fn even_sentences(count: usize) -> String {
    "This sentence is precisely fifty characters long! "
        .repeat(count)
        .trim_end()
        .to_string()
}

#[tokio::test(start_paused = true)]
async fn it_should_synthesize_a_short_text_as_one_chunk() {
    let engine = MockEngine::echo();
    let sink = CollectingSink::new();
    let outcome = pipeline_with_sink(engine.clone(), PipelineConfig::default(), sink.clone())
        .run(SynthesisRequest::new("Hello. World."))
        .await
        .unwrap();

    assert_eq!(outcome.chunk_count, 1);
    assert_eq!(outcome.artifact.bytes, MockEngine::audio_for("Hello. World."));
    assert_eq!(engine.calls(), vec!["Hello. World."]);

    let updates = sink.updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].completed, 1);
    assert_eq!(updates[0].total, 1);
}

#[tokio::test(start_paused = true)]
async fn it_should_report_progress_in_order_for_a_long_text() {
    // 50 sentences of 50 characters -> ~2500 chars -> 3 chunks at 1000
    let engine = MockEngine::echo();
    let sink = CollectingSink::new();
    let outcome = pipeline_with_sink(engine, PipelineConfig::default(), sink.clone())
        .run(SynthesisRequest::new(even_sentences(50)))
        .await
        .unwrap();

    assert_eq!(outcome.chunk_count, 3);

    let progress: Vec<(usize, usize)> = sink
        .updates()
        .iter()
        .map(|u| (u.completed, u.total))
        .collect();
    assert_eq!(progress, vec![(1, 3), (2, 3), (3, 3)]);
}

#[tokio::test(start_paused = true)]
async fn it_should_merge_chunk_audio_in_input_order() {
    let engine = MockEngine::echo();
    let outcome = pipeline(engine.clone(), PipelineConfig::default())
        .run(SynthesisRequest::new(even_sentences(50)))
        .await
        .unwrap();

    let merged = String::from_utf8(outcome.artifact.bytes).unwrap();
    let expected: String = engine
        .calls()
        .iter()
        .map(|text| format!("[{}]", text))
        .collect();
    assert_eq!(merged, expected);

    // And the chunks themselves carry the sentences in input order
    let rejoined = engine.calls().join(" ");
    assert_eq!(rejoined, even_sentences(50));
}

#[tokio::test(start_paused = true)]
async fn it_should_recover_from_two_transient_failures() {
    let engine = MockEngine::flaky(2);
    let started = tokio::time::Instant::now();
    let outcome = pipeline(engine.clone(), PipelineConfig::default())
        .run(SynthesisRequest::new("Hello. World."))
        .await
        .unwrap();

    assert_eq!(outcome.chunk_count, 1);
    assert_eq!(engine.calls().len(), 3);
    // Two 2s backoffs plus one 500ms inter-segment delay on the paused clock
    assert_eq!(started.elapsed(), Duration::from_millis(4500));
}

#[tokio::test(start_paused = true)]
async fn it_should_abort_with_the_failing_chunk_index() {
    let engine = MockEngine::poisoned("POISON");
    let sink = CollectingSink::new();
    let text = format!(
        "{} POISON sentence of death here! {}",
        even_sentences(25),
        even_sentences(25)
    );
    let result = pipeline_with_sink(engine.clone(), PipelineConfig::default(), sink.clone())
        .run(SynthesisRequest::new(text))
        .await;

    let err = result.unwrap_err();
    match &err {
        PipelineError::ChunkExhausted {
            chunk_index,
            attempts,
            ..
        } => {
            assert_eq!(*chunk_index, 1);
            assert_eq!(*attempts, 3);
        }
        other => panic!("expected ChunkExhausted, got {:?}", other),
    }
    assert_eq!(err.failed_chunk_index(), Some(1));

    // Chunks after the failing one are never attempted
    let poisoned_calls = engine
        .calls()
        .iter()
        .filter(|c| c.contains("POISON"))
        .count();
    assert_eq!(poisoned_calls, 3);
    let last_call = engine.calls().last().unwrap().clone();
    assert!(last_call.contains("POISON"));

    // A failed run reports no completed progress beyond the successful chunks
    assert!(sink.updates().iter().all(|u| u.completed <= 1));
}

#[tokio::test]
async fn it_should_signal_nothing_to_do_for_whitespace_input() {
    let engine = MockEngine::echo();
    let sink = CollectingSink::new();
    let outcome = pipeline_with_sink(engine.clone(), PipelineConfig::default(), sink.clone())
        .run(SynthesisRequest::new("   \n\t  "))
        .await
        .unwrap();

    assert!(outcome.is_empty());
    assert!(engine.calls().is_empty());

    let updates = sink.updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].message, "nothing to synthesize");
}

#[tokio::test]
async fn it_should_reject_empty_input() {
    let engine = MockEngine::echo();
    let result = pipeline(engine.clone(), PipelineConfig::default())
        .run(SynthesisRequest::new(""))
        .await;

    assert!(matches!(result, Err(PipelineError::EmptyInput)));
    assert!(engine.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn it_should_produce_a_downloadable_mpeg_artifact() {
    let engine = MockEngine::echo();
    let outcome = pipeline(engine, PipelineConfig::default())
        .run(SynthesisRequest::new("Hello. World."))
        .await
        .unwrap();

    assert_eq!(outcome.artifact.file_name, "unlimited_tts.mp3");
    assert_eq!(outcome.artifact.content_type, "audio/mpeg");
    assert!(!outcome.artifact.bytes.is_empty());
}

#[tokio::test(start_paused = true)]
async fn it_should_pass_voice_and_speed_through_to_the_run() {
    let engine = MockEngine::echo();
    let request = SynthesisRequest {
        text: "Hello. World.".to_string(),
        voice: Some("male".to_string()),
        speed: Some(1.3),
    };
    let outcome = pipeline(engine, PipelineConfig::default())
        .run(request)
        .await
        .unwrap();

    assert_eq!(outcome.chunk_count, 1);
}
