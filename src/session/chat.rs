use crate::content::lessons;
use crate::net::chat_api::{ChatMessage, ChatOutcome};

pub const LESSON_INTRO: &str =
    "Hallo! Ich bin dein Deutsch-Coach. Lass uns eine kurze Uebung machen. Antworte auf Deutsch.";
pub const FREE_INTRO: &str =
    "Hallo! Ich bin dein Deutsch-Partner. Wir koennen ueber alles sprechen.";
pub const FALLBACK_REPLY: &str =
    "Entschuldigung, ich konnte gerade nicht antworten. Bitte versuche es erneut.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatMode {
    Lesson,
    Free,
}

/// Conversation screen state: the visible transcript plus the busy flag
/// that suppresses overlapping requests. The transcript is session-only.
pub struct ChatSession {
    pub mode: ChatMode,
    pub lesson_id: String,
    messages: Vec<ChatMessage>,
    busy: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            mode: ChatMode::Lesson,
            lesson_id: "personal-pronouns".to_string(),
            messages: vec![ChatMessage::assistant(LESSON_INTRO)],
            busy: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn system_prompt(&self) -> String {
        match self.mode {
            ChatMode::Free => {
                "You are a friendly German conversation partner. Keep replies in German, \
                 correct mistakes briefly, and ask a follow-up question."
                    .to_string()
            }
            ChatMode::Lesson => {
                let title = lessons::title_or_default(&self.lesson_id);
                format!(
                    "You are a German tutor. Focus on the lesson: {title}. Keep replies in \
                     German, correct mistakes briefly, and ask one follow-up question."
                )
            }
        }
    }

    /// Switching mode restarts the conversation with the mode's intro.
    pub fn set_mode(&mut self, mode: ChatMode) {
        self.mode = mode;
        let intro = match mode {
            ChatMode::Lesson => LESSON_INTRO,
            ChatMode::Free => FREE_INTRO,
        };
        self.messages = vec![ChatMessage::assistant(intro)];
    }

    /// Changing the lesson restarts the conversation in lesson mode; in
    /// free mode only the stored id changes.
    pub fn set_lesson(&mut self, lesson_id: &str) {
        self.lesson_id = lesson_id.to_string();
        if self.mode == ChatMode::Lesson {
            self.messages = vec![ChatMessage::assistant(LESSON_INTRO)];
        }
    }

    /// Append the user turn and mark the session busy. Returns the
    /// transcript to send, or `None` when the input is blank or a request
    /// is already outstanding. The caller still has to check that a
    /// backend is configured.
    pub fn begin_send(&mut self, input: &str) -> Option<Vec<ChatMessage>> {
        let trimmed = input.trim();
        if trimmed.is_empty() || self.busy {
            return None;
        }
        self.messages.push(ChatMessage::user(trimmed));
        self.busy = true;
        Some(self.messages.clone())
    }

    /// Fold the request outcome back into the transcript and clear the
    /// busy flag. A failure appends exactly one fallback message; an empty
    /// payload appends nothing.
    pub fn apply_outcome(&mut self, outcome: ChatOutcome) {
        self.busy = false;
        match outcome {
            Ok(Some(text)) => self.messages.push(ChatMessage::assistant(text)),
            Ok(None) => {}
            Err(_) => self.messages.push(ChatMessage::assistant(FALLBACK_REPLY)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::chat_api::{ChatError, Role};

    #[test]
    fn starts_in_lesson_mode_with_intro() {
        let chat = ChatSession::new();
        assert_eq!(chat.mode, ChatMode::Lesson);
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].content, LESSON_INTRO);
        assert!(!chat.is_busy());
    }

    #[test]
    fn system_prompt_names_the_lesson() {
        let mut chat = ChatSession::new();
        chat.set_lesson("modal-verbs");
        assert!(chat.system_prompt().contains("Modal Verbs"));

        chat.set_lesson("unknown-id");
        assert!(chat.system_prompt().contains("German Basics"));

        chat.set_mode(ChatMode::Free);
        assert!(chat.system_prompt().contains("conversation partner"));
    }

    #[test]
    fn mode_switch_resets_transcript() {
        let mut chat = ChatSession::new();
        chat.begin_send("Hallo").unwrap();
        chat.apply_outcome(Ok(Some("Guten Tag!".to_string())));
        assert_eq!(chat.messages().len(), 3);

        chat.set_mode(ChatMode::Free);
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].content, FREE_INTRO);
    }

    #[test]
    fn lesson_change_resets_only_in_lesson_mode() {
        let mut chat = ChatSession::new();
        chat.begin_send("Hallo").unwrap();
        chat.apply_outcome(Ok(Some("Hi".to_string())));
        chat.set_lesson("question-words");
        assert_eq!(chat.messages().len(), 1);

        chat.set_mode(ChatMode::Free);
        chat.begin_send("Hallo").unwrap();
        chat.apply_outcome(Ok(Some("Hi".to_string())));
        chat.set_lesson("modal-verbs");
        assert_eq!(chat.messages().len(), 3);
        assert_eq!(chat.lesson_id, "modal-verbs");
    }

    #[test]
    fn begin_send_appends_trimmed_user_turn() {
        let mut chat = ChatSession::new();
        let outgoing = chat.begin_send("  Wie geht's?  ").unwrap();
        assert!(chat.is_busy());
        assert_eq!(outgoing.len(), 2);
        assert_eq!(outgoing[1].role, Role::User);
        assert_eq!(outgoing[1].content, "Wie geht's?");
    }

    #[test]
    fn blank_input_and_busy_session_refuse_to_send() {
        let mut chat = ChatSession::new();
        assert!(chat.begin_send("   ").is_none());
        assert!(!chat.is_busy());

        chat.begin_send("erste").unwrap();
        // Second request while the first is outstanding is suppressed.
        assert!(chat.begin_send("zweite").is_none());
        assert_eq!(chat.messages().len(), 2);
    }

    #[test]
    fn failure_appends_exactly_one_fallback_message() {
        let mut chat = ChatSession::new();
        chat.begin_send("Hallo").unwrap();
        let before = chat.messages().len();
        chat.apply_outcome(Err(ChatError::Request("connection refused".to_string())));
        assert_eq!(chat.messages().len(), before + 1);
        assert_eq!(chat.messages().last().unwrap().content, FALLBACK_REPLY);
        assert!(!chat.is_busy());

        // Session continues to work after a failure.
        assert!(chat.begin_send("nochmal").is_some());
    }

    #[test]
    fn empty_payload_is_silently_ignored() {
        let mut chat = ChatSession::new();
        chat.begin_send("Hallo").unwrap();
        let before = chat.messages().len();
        chat.apply_outcome(Ok(None));
        assert_eq!(chat.messages().len(), before);
        assert!(!chat.is_busy());
    }
}
