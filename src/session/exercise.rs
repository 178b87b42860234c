use crate::content::exercises::{Exercise, ExerciseKind, Prompt};
use crate::content::filter;

/// Where a training run currently stands. `Empty` is the explicit
/// "no exercises for this type + lesson" condition; the only ways out are
/// a lesson-filter change or a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Selecting,
    Empty,
    InProgress,
    Graded,
    Completed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

/// One training run: a chosen exercise type, the lesson-filtered item list,
/// and linear progression with per-item grading. Score is scoped to a single
/// run; choosing a type always starts from zero.
pub struct ExerciseSession {
    phase: Phase,
    kind: Option<ExerciseKind>,
    items: Vec<&'static Exercise>,
    current: usize,
    answer: String,
    selected: Option<&'static str>,
    last_correct: bool,
    score: Score,
}

impl Default for ExerciseSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::Selecting,
            kind: None,
            items: Vec::new(),
            current: 0,
            answer: String::new(),
            selected: None,
            last_correct: false,
            score: Score::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn kind(&self) -> Option<ExerciseKind> {
        self.kind
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn last_correct(&self) -> bool {
        self.last_correct
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Zero-based index of the current item. Meaningful outside `Selecting`
    /// and `Empty` only.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn current_exercise(&self) -> Option<&'static Exercise> {
        match self.phase {
            Phase::Selecting | Phase::Empty => None,
            _ => self.items.get(self.current).copied(),
        }
    }

    pub fn is_last(&self) -> bool {
        !self.items.is_empty() && self.current == self.items.len() - 1
    }

    /// Start a run. Valid only while selecting; recomputes the filtered
    /// list, zeroes the score, and lands in `InProgress` — or `Empty` when
    /// nothing matches.
    pub fn select_kind(&mut self, kind: ExerciseKind, lesson_filter: &str) {
        if self.phase != Phase::Selecting {
            return;
        }
        self.kind = Some(kind);
        self.items = filter::exercises_for(kind, lesson_filter);
        self.current = 0;
        self.clear_pending();
        self.score = Score::default();
        self.last_correct = false;
        self.phase = if self.items.is_empty() {
            Phase::Empty
        } else {
            Phase::InProgress
        };
    }

    /// React to a lesson-filter change while stuck in `Empty`: re-run the
    /// filter for the already-chosen kind. In any other phase the filter
    /// value lives outside the session and this is a no-op.
    pub fn refilter(&mut self, lesson_filter: &str) {
        if self.phase != Phase::Empty {
            return;
        }
        let Some(kind) = self.kind else { return };
        self.items = filter::exercises_for(kind, lesson_filter);
        if !self.items.is_empty() {
            self.current = 0;
            self.clear_pending();
            self.score = Score::default();
            self.phase = Phase::InProgress;
        }
    }

    /// Store the free-text translation answer. Only meaningful ungraded.
    pub fn set_answer(&mut self, text: &str) {
        if self.phase == Phase::InProgress {
            self.answer.clear();
            self.answer.push_str(text);
        }
    }

    /// Select one of the four options by index. Only meaningful ungraded.
    pub fn select_option(&mut self, index: usize) {
        if self.phase != Phase::InProgress {
            return;
        }
        if let Some(options) = self.current_exercise().and_then(|e| e.options()) {
            if let Some(option) = options.get(index) {
                self.selected = Some(*option);
            }
        }
    }

    /// Whether the grade action is available: an ungraded item with a
    /// non-empty pending value.
    pub fn can_grade(&self) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        match self.current_exercise() {
            Some(e) => match e.prompt {
                Prompt::Translation { .. } => !self.answer.trim().is_empty(),
                _ => self.selected.is_some(),
            },
            None => false,
        }
    }

    /// Grade the pending answer. Returns `None` when the action is
    /// unavailable (wrong phase, empty pending value, or an already-graded
    /// item); this is a disabled precondition, not an error.
    pub fn grade(&mut self) -> Option<bool> {
        if !self.can_grade() {
            return None;
        }
        let exercise = self.current_exercise()?;
        let correct = match exercise.prompt {
            Prompt::Translation { english, .. } => {
                normalize_answer(&self.answer) == normalize_answer(english)
            }
            Prompt::FillBlank { answer, .. }
            | Prompt::MultipleChoice { answer, .. }
            | Prompt::VerbPosition { answer, .. } => self.selected == Some(answer),
        };
        self.score.total += 1;
        if correct {
            self.score.correct += 1;
        }
        self.last_correct = correct;
        self.phase = Phase::Graded;
        Some(correct)
    }

    /// Move to the next item, or finish the run when the graded item was
    /// the last one. Valid only after grading.
    pub fn advance(&mut self) {
        if self.phase != Phase::Graded {
            return;
        }
        if self.is_last() {
            self.phase = Phase::Completed;
        } else {
            self.current += 1;
            self.clear_pending();
            self.phase = Phase::InProgress;
        }
    }

    /// Back to the type-selection screen; discards the run entirely.
    pub fn reset(&mut self) {
        self.phase = Phase::Selecting;
        self.kind = None;
        self.items.clear();
        self.current = 0;
        self.clear_pending();
        self.score = Score::default();
        self.last_correct = false;
    }

    /// Final score as a rounded percentage. Defined for a completed run;
    /// zero before any grading.
    pub fn percentage(&self) -> u32 {
        if self.score.total == 0 {
            return 0;
        }
        (100.0 * self.score.correct as f64 / self.score.total as f64).round() as u32
    }

    fn clear_pending(&mut self) {
        self.answer.clear();
        self.selected = None;
    }
}

/// Normalized equality for translation grading: trim, strip `. , ! ?`,
/// lowercase. Applied to both the user input and the reference text.
pub fn normalize_answer(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|ch| !matches!(ch, '.' | ',' | '!' | '?'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::lessons::ALL_LESSONS;

    fn option_index(session: &ExerciseSession, wanted: &str) -> usize {
        session
            .current_exercise()
            .and_then(|e| e.options())
            .and_then(|opts| opts.iter().position(|o| *o == wanted))
            .unwrap()
    }

    #[test]
    fn starts_selecting_with_zero_score() {
        let session = ExerciseSession::new();
        assert_eq!(session.phase(), Phase::Selecting);
        assert_eq!(session.score(), Score::default());
        assert!(session.current_exercise().is_none());
    }

    #[test]
    fn select_kind_enters_in_progress_at_first_item() {
        let mut session = ExerciseSession::new();
        session.select_kind(ExerciseKind::Translation, ALL_LESSONS);
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.position(), 0);
        assert_eq!(session.len(), 10);
        assert_eq!(session.score(), Score::default());
    }

    #[test]
    fn select_kind_rejected_mid_run() {
        let mut session = ExerciseSession::new();
        session.select_kind(ExerciseKind::Translation, ALL_LESSONS);
        session.set_answer("I am a student");
        session.grade().unwrap();
        // Mid-run type switch is not a legal transition.
        session.select_kind(ExerciseKind::FillBlank, ALL_LESSONS);
        assert_eq!(session.kind(), Some(ExerciseKind::Translation));
        assert_eq!(session.phase(), Phase::Graded);
        assert_eq!(session.score().total, 1);
    }

    #[test]
    fn empty_filtered_list_is_explicit_not_out_of_bounds() {
        let mut session = ExerciseSession::new();
        // No translation exercises exist for the connectors lesson.
        session.select_kind(ExerciseKind::Translation, "connectors-verb-position");
        assert_eq!(session.phase(), Phase::Empty);
        assert!(session.current_exercise().is_none());
        assert_eq!(session.grade(), None);
        session.advance();
        assert_eq!(session.phase(), Phase::Empty);
    }

    #[test]
    fn refilter_leaves_empty_when_matches_appear() {
        let mut session = ExerciseSession::new();
        session.select_kind(ExerciseKind::Translation, "connectors-verb-position");
        assert_eq!(session.phase(), Phase::Empty);

        // Still nothing under a different unmatched lesson.
        session.refilter("articles-gender");
        assert_eq!(session.phase(), Phase::Empty);

        session.refilter(ALL_LESSONS);
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.position(), 0);
        assert_eq!(session.len(), 10);
    }

    #[test]
    fn translation_grading_normalizes_case_whitespace_punctuation() {
        let mut session = ExerciseSession::new();
        session.select_kind(ExerciseKind::Translation, "personal-pronouns");
        // First item: "Ich bin Student." -> "I am a student."
        session.set_answer("  I AM A STUDENT!  ");
        assert_eq!(session.grade(), Some(true));
        assert!(session.last_correct());
        assert_eq!(session.score(), Score { correct: 1, total: 1 });
        assert_eq!(session.phase(), Phase::Graded);
    }

    #[test]
    fn wrong_option_counts_total_not_correct() {
        let mut session = ExerciseSession::new();
        session.select_kind(ExerciseKind::FillBlank, "personal-pronouns");
        // "___ bin Student." with answer "Ich"; pick "Du".
        let wrong = option_index(&session, "Du");
        session.select_option(wrong);
        assert_eq!(session.grade(), Some(false));
        assert!(!session.last_correct());
        assert_eq!(session.score(), Score { correct: 0, total: 1 });
    }

    #[test]
    fn grade_requires_pending_value() {
        let mut session = ExerciseSession::new();
        session.select_kind(ExerciseKind::Translation, ALL_LESSONS);
        assert!(!session.can_grade());
        assert_eq!(session.grade(), None);
        session.set_answer("   ");
        assert_eq!(session.grade(), None);
        assert_eq!(session.score(), Score::default());

        let mut choice = ExerciseSession::new();
        choice.select_kind(ExerciseKind::MultipleChoice, ALL_LESSONS);
        assert_eq!(choice.grade(), None);
    }

    #[test]
    fn second_grade_attempt_is_rejected() {
        let mut session = ExerciseSession::new();
        session.select_kind(ExerciseKind::Translation, ALL_LESSONS);
        session.set_answer("I am a student.");
        assert_eq!(session.grade(), Some(true));
        let before = session.score();
        assert_eq!(session.grade(), None);
        assert_eq!(session.score(), before);
    }

    #[test]
    fn advance_only_after_grading() {
        let mut session = ExerciseSession::new();
        session.select_kind(ExerciseKind::Translation, ALL_LESSONS);
        session.advance();
        assert_eq!(session.position(), 0);
        assert_eq!(session.phase(), Phase::InProgress);

        session.set_answer("I am a student");
        session.grade().unwrap();
        session.advance();
        assert_eq!(session.position(), 1);
        assert_eq!(session.phase(), Phase::InProgress);
        // Pending state cleared for the new item.
        assert_eq!(session.answer(), "");
        assert!(session.selected().is_none());
    }

    #[test]
    fn full_run_completes_with_rounded_percentage() {
        let mut session = ExerciseSession::new();
        session.select_kind(ExerciseKind::Translation, ALL_LESSONS);
        assert_eq!(session.len(), 10);

        // Answer the first 7 correctly, the last 3 wrong.
        for i in 0..10 {
            let exercise = session.current_exercise().unwrap();
            if i < 7 {
                session.set_answer(exercise.expected());
            } else {
                session.set_answer("definitely wrong");
            }
            session.grade().unwrap();
            assert!(session.score().correct <= session.score().total);
            assert!(session.score().total <= session.len());
            session.advance();
        }

        assert_eq!(session.phase(), Phase::Completed);
        assert_eq!(session.score(), Score { correct: 7, total: 10 });
        assert_eq!(session.percentage(), 70);
    }

    #[test]
    fn total_equals_grade_calls_since_selection() {
        let mut session = ExerciseSession::new();
        session.select_kind(ExerciseKind::MultipleChoice, ALL_LESSONS);
        for _ in 0..3 {
            session.select_option(0);
            session.grade().unwrap();
            session.advance();
        }
        assert_eq!(session.score().total, 3);
    }

    #[test]
    fn reset_returns_to_selection_from_any_phase() {
        let mut session = ExerciseSession::new();
        session.select_kind(ExerciseKind::VerbPosition, ALL_LESSONS);
        session.select_option(0);
        session.grade().unwrap();
        session.reset();
        assert_eq!(session.phase(), Phase::Selecting);
        assert_eq!(session.kind(), None);
        assert_eq!(session.score(), Score::default());
        assert_eq!(session.position(), 0);
        assert!(session.current_exercise().is_none());

        // And from Empty.
        session.select_kind(ExerciseKind::Translation, "connectors-verb-position");
        assert_eq!(session.phase(), Phase::Empty);
        session.reset();
        assert_eq!(session.phase(), Phase::Selecting);
    }

    #[test]
    fn select_option_out_of_range_is_ignored() {
        let mut session = ExerciseSession::new();
        session.select_kind(ExerciseKind::FillBlank, ALL_LESSONS);
        session.select_option(7);
        assert!(session.selected().is_none());
    }

    #[test]
    fn normalize_answer_examples() {
        assert_eq!(normalize_answer(" I AM A STUDENT! "), "i am a student");
        assert_eq!(normalize_answer("I am a student."), "i am a student");
        assert_eq!(normalize_answer("Möchtest du einen Kaffee?"), "möchtest du einen kaffee");
        assert_eq!(normalize_answer(""), "");
    }
}
