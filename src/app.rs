use std::collections::HashSet;
use std::sync::mpsc;

use crate::config::Config;
use crate::content::grammar::{self, Tree};
use crate::content::lessons::{self, ALL_LESSONS};
use crate::content::vocabulary::{VocabEntry, CATEGORIES, VOCABULARY};
use crate::content::filter;
use crate::event::AppEvent;
use crate::net::bridge::{self, SessionIdentity};
use crate::net::chat_api;
use crate::session::chat::ChatSession;
use crate::session::exercise::{ExerciseSession, Phase};
use crate::session::flashcards::FlashcardDeck;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Lessons,
    Train,
    Vocab,
    Cards,
    Grammar,
    Cheat,
    Conversation,
}

impl Screen {
    pub const ALL: [Screen; 7] = [
        Screen::Lessons,
        Screen::Train,
        Screen::Vocab,
        Screen::Cards,
        Screen::Grammar,
        Screen::Cheat,
        Screen::Conversation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Lessons => "Lessons",
            Screen::Train => "Train",
            Screen::Vocab => "Vocab",
            Screen::Cards => "Cards",
            Screen::Grammar => "Grammar",
            Screen::Cheat => "Cheat Sheet",
            Screen::Conversation => "Chat",
        }
    }

    pub fn from_name(name: &str) -> Option<Screen> {
        match name {
            "lessons" => Some(Screen::Lessons),
            "train" => Some(Screen::Train),
            "vocab" => Some(Screen::Vocab),
            "cards" => Some(Screen::Cards),
            "grammar" => Some(Screen::Grammar),
            "cheat" => Some(Screen::Cheat),
            "conversation" | "chat" => Some(Screen::Conversation),
            _ => None,
        }
    }
}

/// Lessons screen: the six foundation lessons followed by the two
/// reference trees, as one selectable list.
pub struct LessonsState {
    pub selected: usize,
    pub detail: bool,
    pub scroll: u16,
}

impl LessonsState {
    pub fn item_count() -> usize {
        grammar::FOUNDATION_LESSONS.len() + grammar::TREES.len()
    }

    /// Tree entry index if the selection points past the foundation
    /// lessons.
    pub fn selected_tree(&self) -> Option<usize> {
        self.selected.checked_sub(grammar::FOUNDATION_LESSONS.len())
    }
}

pub struct GrammarState {
    pub tree: usize,
    pub selected: usize,
    pub detail: bool,
    pub scroll: u16,
}

impl GrammarState {
    pub fn tree_data(&self) -> &'static Tree {
        grammar::TREES[self.tree.min(grammar::TREES.len() - 1)]
    }

    pub fn topic_count(&self) -> usize {
        self.tree_data().branches.iter().map(|b| b.topics.len()).sum()
    }

    /// Resolve the flattened topic cursor to (branch, topic).
    pub fn selected_topic(&self) -> Option<(&'static grammar::Branch, &'static grammar::Topic)> {
        let mut remaining = self.selected;
        for branch in self.tree_data().branches {
            if remaining < branch.topics.len() {
                return Some((branch, &branch.topics[remaining]));
            }
            remaining -= branch.topics.len();
        }
        None
    }
}

pub struct VocabState {
    pub search: LineInput,
    pub search_active: bool,
    pub category: usize,
    pub selected: usize,
}

pub struct ConversationState {
    pub input: LineInput,
    pub input_active: bool,
}

pub struct App {
    pub screen: Screen,
    /// Shared lesson filter: "all" or a catalog lesson id. Reset to "all"
    /// on every tab change; forwarded into whichever screen is active.
    pub lesson_filter: String,

    pub train: ExerciseSession,
    pub train_menu_selected: usize,
    pub answer_input: LineInput,

    pub lessons_ui: LessonsState,
    pub grammar_ui: GrammarState,
    pub vocab_ui: VocabState,
    pub cheat_scroll: u16,

    pub cards: FlashcardDeck,
    pub starred: HashSet<u32>,

    pub chat: ChatSession,
    pub conversation_ui: ConversationState,
    pub chat_api_base: String,
    pub identity: Option<SessionIdentity>,

    pub theme: &'static Theme,
    pub config: Config,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_default();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let starred: HashSet<u32> = VOCABULARY
            .iter()
            .filter(|entry| entry.starred)
            .map(|entry| entry.id)
            .collect();

        let screen = Screen::from_name(&config.start_tab).unwrap_or(Screen::Lessons);
        let chat_api_base = config.chat_api_base();
        let identity = bridge::resolve_session();

        Self {
            screen,
            lesson_filter: ALL_LESSONS.to_string(),
            train: ExerciseSession::new(),
            train_menu_selected: 0,
            answer_input: LineInput::default(),
            lessons_ui: LessonsState { selected: 0, detail: false, scroll: 0 },
            grammar_ui: GrammarState { tree: 0, selected: 0, detail: false, scroll: 0 },
            vocab_ui: VocabState {
                search: LineInput::default(),
                search_active: false,
                category: 0,
                selected: 0,
            },
            cheat_scroll: 0,
            cards: FlashcardDeck::new(ALL_LESSONS),
            starred,
            chat: ChatSession::new(),
            conversation_ui: ConversationState { input: LineInput::default(), input_active: true },
            chat_api_base,
            identity,
            theme,
            config,
            should_quit: false,
        }
    }

    /// Top-level tab change. Resets the shared lesson filter; everything
    /// else each screen owns survives the switch.
    pub fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.set_lesson_filter(ALL_LESSONS.to_string());
    }

    /// Jump from the lessons screen into another screen with a lesson
    /// preselected.
    pub fn navigate_with_lesson(&mut self, screen: Screen, lesson_id: &str) {
        self.screen = screen;
        self.set_lesson_filter(lesson_id.to_string());
    }

    pub fn set_lesson_filter(&mut self, value: String) {
        self.lesson_filter = value;
        self.cards.rebuild(&self.lesson_filter);
        self.vocab_ui.selected = 0;
        // A train session stuck on "no exercises" follows the filter.
        if self.train.phase() == Phase::Empty {
            self.train.refilter(&self.lesson_filter);
        }
    }

    /// Step the shared filter through "all" plus the catalog, in order.
    pub fn cycle_lesson_filter(&mut self, forward: bool) {
        let mut options: Vec<&str> = vec![ALL_LESSONS];
        options.extend(lessons::LESSONS.iter().map(|l| l.id));
        let current = options
            .iter()
            .position(|id| *id == self.lesson_filter)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.set_lesson_filter(options[next].to_string());
    }

    pub fn lesson_filter_label(&self) -> &'static str {
        if self.lesson_filter == ALL_LESSONS {
            "All Lessons"
        } else {
            lessons::title_or_default(&self.lesson_filter)
        }
    }

    pub fn toggle_star(&mut self, id: u32) {
        if !self.starred.insert(id) {
            self.starred.remove(&id);
        }
    }

    /// Vocabulary entries visible under the current search, category, and
    /// lesson filter. Order follows the source table.
    pub fn visible_vocab(&self) -> Vec<&'static VocabEntry> {
        let search = self.vocab_ui.search.value();
        let category = CATEGORIES[self.vocab_ui.category.min(CATEGORIES.len() - 1)].id;
        VOCABULARY
            .iter()
            .filter(|entry| filter::vocab_matches(entry, search, category, &self.lesson_filter))
            .collect()
    }

    pub fn cycle_vocab_category(&mut self, forward: bool) {
        let len = CATEGORIES.len();
        self.vocab_ui.category = if forward {
            (self.vocab_ui.category + 1) % len
        } else {
            (self.vocab_ui.category + len - 1) % len
        };
        self.vocab_ui.selected = 0;
    }

    pub fn cycle_chat_lesson(&mut self, forward: bool) {
        let ids: Vec<&str> = lessons::LESSONS.iter().map(|l| l.id).collect();
        let current = ids
            .iter()
            .position(|id| *id == self.chat.lesson_id)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % ids.len()
        } else {
            (current + ids.len() - 1) % ids.len()
        };
        self.chat.set_lesson(ids[next]);
    }

    /// Fire the outbound chat request on a worker thread. No-ops when the
    /// backend is unconfigured, the input is blank, or a request is
    /// already outstanding.
    pub fn send_chat_message(&mut self, tx: mpsc::Sender<AppEvent>) {
        if self.chat_api_base.is_empty() {
            return;
        }
        let Some(history) = self.chat.begin_send(self.conversation_ui.input.value()) else {
            return;
        };
        self.conversation_ui.input.clear();

        let api_base = self.chat_api_base.clone();
        let model = self.config.chat_model.clone();
        let system_prompt = self.chat.system_prompt();
        std::thread::spawn(move || {
            let outcome = chat_api::send_chat(&api_base, &model, &system_prompt, &history);
            let _ = tx.send(AppEvent::ChatReply(outcome));
        });
    }

    pub fn handle_chat_reply(&mut self, outcome: chat_api::ChatOutcome) {
        self.chat.apply_outcome(outcome);
    }

    /// Header label for the signed-in user, if any.
    pub fn identity_label(&self) -> Option<&str> {
        self.identity.as_ref().map(|s| s.user.name.as_str())
    }

    /// Candidate counts per exercise type under the current filter, for
    /// the type-selection screen.
    pub fn train_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for (i, kind) in crate::content::exercises::ExerciseKind::ALL.iter().enumerate() {
            counts[i] = filter::count_for(*kind, &self.lesson_filter);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::exercises::ExerciseKind;

    // App::new touches the real config dir and environment, so shell tests
    // construct state by hand where possible and go through App only for
    // logic that cannot be reached otherwise.
    fn test_app() -> App {
        let mut app = App::new();
        app.set_screen(Screen::Lessons);
        app
    }

    #[test]
    fn tab_change_resets_filter_but_keeps_screen_state() {
        let mut app = test_app();
        app.navigate_with_lesson(Screen::Train, "connectors-verb-position");
        assert_eq!(app.lesson_filter, "connectors-verb-position");

        app.train.select_kind(ExerciseKind::VerbPosition, &app.lesson_filter.clone());
        assert_eq!(app.train.phase(), Phase::InProgress);
        assert_eq!(app.train.len(), 5);

        app.set_screen(Screen::Vocab);
        assert_eq!(app.lesson_filter, ALL_LESSONS);
        // The in-progress run is untouched by the tab switch.
        assert_eq!(app.train.phase(), Phase::InProgress);
        assert_eq!(app.train.len(), 5);
    }

    #[test]
    fn filter_cycle_wraps_through_catalog() {
        let mut app = test_app();
        assert_eq!(app.lesson_filter, ALL_LESSONS);
        app.cycle_lesson_filter(true);
        assert_eq!(app.lesson_filter, lessons::LESSONS[0].id);
        app.cycle_lesson_filter(false);
        assert_eq!(app.lesson_filter, ALL_LESSONS);
        app.cycle_lesson_filter(false);
        assert_eq!(app.lesson_filter, lessons::LESSONS.last().unwrap().id);
    }

    #[test]
    fn filter_change_unblocks_empty_train_session() {
        let mut app = test_app();
        app.navigate_with_lesson(Screen::Train, "connectors-verb-position");
        app.train.select_kind(ExerciseKind::Translation, &app.lesson_filter.clone());
        assert_eq!(app.train.phase(), Phase::Empty);

        app.set_lesson_filter(ALL_LESSONS.to_string());
        assert_eq!(app.train.phase(), Phase::InProgress);
    }

    #[test]
    fn train_counts_follow_filter() {
        let mut app = test_app();
        app.navigate_with_lesson(Screen::Train, "connectors-verb-position");
        assert_eq!(app.train_counts(), [0, 1, 1, 5]);
        app.set_lesson_filter(ALL_LESSONS.to_string());
        assert_eq!(app.train_counts(), [10, 10, 10, 8]);
    }

    #[test]
    fn star_toggle_round_trips() {
        let mut app = test_app();
        let starred_before = app.starred.len();
        app.toggle_star(2);
        assert_eq!(app.starred.len(), starred_before + 1);
        app.toggle_star(2);
        assert_eq!(app.starred.len(), starred_before);
    }

    #[test]
    fn visible_vocab_combines_filters() {
        let mut app = test_app();
        app.set_screen(Screen::Vocab);
        let all = app.visible_vocab().len();
        assert_eq!(all, VOCABULARY.len());

        app.navigate_with_lesson(Screen::Vocab, "question-words");
        let filtered = app.visible_vocab();
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|e| e.category == "question-words"));
    }

    #[test]
    fn screen_names_round_trip() {
        for screen in Screen::ALL {
            let name = screen.label().to_lowercase();
            // Labels and config names differ for two screens.
            let config_name = match screen {
                Screen::Cheat => "cheat".to_string(),
                Screen::Conversation => "conversation".to_string(),
                _ => name,
            };
            assert_eq!(Screen::from_name(&config_name), Some(screen));
        }
        assert_eq!(Screen::from_name("bogus"), None);
    }
}
