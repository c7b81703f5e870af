pub mod http_tts_engine;
pub mod synthesis_engine;

pub use http_tts_engine::HttpTtsEngine;
pub use synthesis_engine::{AudioFragmentStream, SynthesisEngine, SynthesisEngineError};
