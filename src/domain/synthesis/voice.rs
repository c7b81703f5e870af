use serde::{Deserialize, Serialize};

use super::error::PipelineError;

/// Neural voices supported by the synthesis engine catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoicePreset {
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "male")]
    Male,
}

impl VoicePreset {
    /// Get the engine voice identifier for this preset
    pub fn as_str(&self) -> &'static str {
        match self {
            VoicePreset::Female => "en-US-JennyNeural",
            VoicePreset::Male => "en-US-GuyNeural",
        }
    }

    /// Parse a preset from either the catalog key or the raw voice identifier
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "female" | "en-US-JennyNeural" => Some(VoicePreset::Female),
            "male" | "en-US-GuyNeural" => Some(VoicePreset::Male),
            _ => None,
        }
    }
}

impl Default for VoicePreset {
    fn default() -> Self {
        VoicePreset::Female
    }
}

impl std::fmt::Display for VoicePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Playback speed as a multiplier over the engine's 1.0 baseline.
///
/// The engine wire format expresses speed as a signed percentage deviation
/// from the baseline, so 1.3x becomes "+30%" and 0.8x becomes "-20%".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeechRate(f32);

/// Range accepted from callers, in 0.1 steps on the presentation side
pub const MIN_SPEECH_RATE: f32 = 0.5;
pub const MAX_SPEECH_RATE: f32 = 2.0;

impl SpeechRate {
    pub fn new(multiplier: f32) -> Result<Self, PipelineError> {
        if !multiplier.is_finite() || !(MIN_SPEECH_RATE..=MAX_SPEECH_RATE).contains(&multiplier) {
            return Err(PipelineError::Invalid(format!(
                "speed must be between {} and {}, got {}",
                MIN_SPEECH_RATE, MAX_SPEECH_RATE, multiplier
            )));
        }
        Ok(Self(multiplier))
    }

    pub fn multiplier(&self) -> f32 {
        self.0
    }

    /// Render as the engine's signed percent deviation, e.g. "+30%" or "-20%"
    pub fn as_percent_str(&self) -> String {
        let percent = ((self.0 - 1.0) * 100.0).round() as i32;
        format!("{:+}%", percent)
    }
}

impl Default for SpeechRate {
    fn default() -> Self {
        SpeechRate(1.0)
    }
}

impl std::fmt::Display for SpeechRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_percent_str())
    }
}
