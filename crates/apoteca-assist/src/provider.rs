//! The provider seam the assistant talks through.

use thiserror::Error;

/// Errors from an assistant provider.
#[derive(Error, Debug)]
pub enum AssistError {
    /// The backing model call failed (network, quota, refusal).
    #[error("provider error: {0}")]
    Provider(String),

    /// The context snapshot could not be serialized.
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A text-generation backend.
///
/// Implementations own all transport details; callers hand over the
/// assembled system prompt and the user's question and get free text back.
pub trait AssistProvider {
    fn answer(&self, system_prompt: &str, question: &str) -> Result<String, AssistError>;
}

/// Provider that replays canned answers in order. Test double; also handy
/// for demos without an API key.
pub struct ScriptedProvider {
    answers: std::cell::RefCell<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(answers: Vec<String>) -> Self {
        Self {
            answers: std::cell::RefCell::new(answers),
        }
    }
}

impl AssistProvider for ScriptedProvider {
    fn answer(&self, _system_prompt: &str, _question: &str) -> Result<String, AssistError> {
        let mut answers = self.answers.borrow_mut();
        if answers.is_empty() {
            return Err(AssistError::Provider("script exhausted".into()));
        }
        Ok(answers.remove(0))
    }
}
