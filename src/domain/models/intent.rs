use serde::{Deserialize, Serialize};

/// A named category of user request with its example utterances and the
/// canned response shown when it is detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    name: String,
    #[serde(default)]
    examples: Vec<String>,
    response: String,
}

impl Intent {
    pub fn new(name: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            examples: Vec::new(),
            response: response.into(),
        }
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    /// The lookup key: the name, trimmed and case-folded.
    pub fn folded_name(&self) -> String {
        fold(&self.name)
    }
}

pub(crate) fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}
