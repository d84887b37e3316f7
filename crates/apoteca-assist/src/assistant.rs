//! The transcript-keeping assistant.

use apoteca_core::Workspace;
use tracing::warn;

use crate::provider::AssistProvider;
use crate::types::{ChatMessage, ChatRole, ContextSnapshot};

/// Shown in the transcript when the provider call fails. The failure stays
/// at this boundary; nothing is retried and no core state changes.
const PROVIDER_FAILURE_REPLY: &str =
    "Er is een fout opgetreden bij het verbinden met de assistent.";

/// A conversation with the AI collaborator over the workspace's data.
pub struct Assistant<P: AssistProvider> {
    provider: P,
    transcript: Vec<ChatMessage>,
}

impl<P: AssistProvider> Assistant<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            transcript: Vec::new(),
        }
    }

    /// The conversation so far, oldest first.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Ask a question over a fresh snapshot of the workspace.
    ///
    /// Blank questions are ignored. A provider failure becomes a model
    /// message in the transcript instead of an error: the collaborator is
    /// fire-and-forget and must never poison core state or the session.
    pub fn ask(&mut self, workspace: &Workspace, question: &str) -> Option<&ChatMessage> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }

        self.transcript.push(ChatMessage {
            role: ChatRole::User,
            text: question.to_string(),
        });

        let reply = ContextSnapshot::from_workspace(workspace)
            .system_prompt()
            .and_then(|prompt| self.provider.answer(&prompt, question));

        let text = match reply {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "assistant provider call failed");
                PROVIDER_FAILURE_REPLY.to_string()
            }
        };

        self.transcript.push(ChatMessage {
            role: ChatRole::Model,
            text,
        });
        self.transcript.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{AssistError, ScriptedProvider};
    use apoteca_core::seed_workspace;

    struct FailingProvider;

    impl AssistProvider for FailingProvider {
        fn answer(&self, _: &str, _: &str) -> Result<String, AssistError> {
            Err(AssistError::Provider("verbinding geweigerd".into()))
        }
    }

    #[test]
    fn ask_records_question_and_answer() {
        let ws = seed_workspace();
        let mut assistant = Assistant::new(ScriptedProvider::new(vec![
            "Dr. Jansen is de huisarts in Steyl.".into(),
        ]));

        let reply = assistant.ask(&ws, "Wie is de huisarts?").unwrap();
        assert_eq!(reply.role, ChatRole::Model);
        assert!(reply.text.contains("Dr. Jansen"));
        assert_eq!(assistant.transcript().len(), 2);
        assert_eq!(assistant.transcript()[0].role, ChatRole::User);
    }

    #[test]
    fn blank_questions_are_ignored() {
        let ws = seed_workspace();
        let mut assistant = Assistant::new(ScriptedProvider::new(vec![]));
        assert!(assistant.ask(&ws, "   ").is_none());
        assert!(assistant.transcript().is_empty());
    }

    #[test]
    fn provider_failure_is_isolated_to_the_transcript() {
        let ws = seed_workspace();
        let docs_before = ws.documents.store().len();
        let mut assistant = Assistant::new(FailingProvider);

        let reply = assistant.ask(&ws, "Wie is de cardioloog?").unwrap();
        assert_eq!(reply.text, PROVIDER_FAILURE_REPLY);

        // A second question still works; nothing in the core changed.
        assistant.ask(&ws, "En de huisarts?");
        assert_eq!(assistant.transcript().len(), 4);
        assert_eq!(ws.documents.store().len(), docs_before);
    }
}
