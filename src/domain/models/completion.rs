use serde::{Deserialize, Serialize};

/// Enough for a single intent identifier, not a sentence.
pub const CLASSIFICATION_MAX_TOKENS: u32 = 15;
pub const CLASSIFICATION_TEMPERATURE: f32 = 0.3;
pub const CLASSIFICATION_TOP_P: f32 = 0.9;
/// Generation stops at the first newline or template marker.
pub const CLASSIFICATION_STOP: [&str; 3] = ["\n", "###", "<|endoftext|>"];

/// Body of a `POST /completion` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    prompt: String,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    stop: Vec<String>,
    echo: bool,
}

impl CompletionRequest {
    /// A request bounded for intent classification: short, near-deterministic,
    /// and cut at the end of the first line.
    pub fn for_classification(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: CLASSIFICATION_MAX_TOKENS,
            temperature: CLASSIFICATION_TEMPERATURE,
            top_p: CLASSIFICATION_TOP_P,
            stop: CLASSIFICATION_STOP.iter().map(|s| s.to_string()).collect(),
            echo: false,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn top_p(&self) -> f32 {
        self.top_p
    }

    pub fn stop(&self) -> &[String] {
        &self.stop
    }

    pub fn echo(&self) -> bool {
        self.echo
    }
}
