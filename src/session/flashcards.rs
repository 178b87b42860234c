use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::content::filter;
use crate::content::vocabulary::VocabEntry;

/// A deck of flashcards drawn from the vocabulary table under the shared
/// lesson filter. Front shows the German side; flipping reveals English and
/// the usage note. The deck is session-only.
pub struct FlashcardDeck {
    cards: Vec<&'static VocabEntry>,
    position: usize,
    revealed: bool,
    rng: SmallRng,
}

impl FlashcardDeck {
    pub fn new(lesson_filter: &str) -> Self {
        Self {
            cards: filter::vocab_for_lesson(lesson_filter),
            position: 0,
            revealed: false,
            rng: SmallRng::from_entropy(),
        }
    }

    #[cfg(test)]
    fn with_seed(lesson_filter: &str, seed: u64) -> Self {
        Self {
            cards: filter::vocab_for_lesson(lesson_filter),
            position: 0,
            revealed: false,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Re-derive the deck for a new lesson filter, starting over at the
    /// first card face down.
    pub fn rebuild(&mut self, lesson_filter: &str) {
        self.cards = filter::vocab_for_lesson(lesson_filter);
        self.position = 0;
        self.revealed = false;
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn current(&self) -> Option<&'static VocabEntry> {
        self.cards.get(self.position).copied()
    }

    pub fn flip(&mut self) {
        if !self.cards.is_empty() {
            self.revealed = !self.revealed;
        }
    }

    /// Next card, wrapping at the end. Always lands face down.
    pub fn next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.position = (self.position + 1) % self.cards.len();
        self.revealed = false;
    }

    /// Previous card, wrapping at the start. Always lands face down.
    pub fn prev(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.position = (self.position + self.cards.len() - 1) % self.cards.len();
        self.revealed = false;
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
        self.revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::lessons::ALL_LESSONS;
    use crate::content::vocabulary::VOCABULARY;
    use std::collections::HashSet;

    #[test]
    fn deck_for_all_covers_whole_table() {
        let deck = FlashcardDeck::with_seed(ALL_LESSONS, 1);
        assert_eq!(deck.len(), VOCABULARY.len());
        assert!(!deck.revealed());
        assert_eq!(deck.position(), 0);
    }

    #[test]
    fn deck_for_unmatched_lesson_is_empty_and_safe() {
        let mut deck = FlashcardDeck::with_seed("no-such-lesson", 1);
        assert!(deck.is_empty());
        assert!(deck.current().is_none());
        deck.flip();
        deck.next();
        deck.prev();
        deck.shuffle();
        assert!(deck.current().is_none());
        assert!(!deck.revealed());
    }

    #[test]
    fn navigation_wraps_and_resets_flip() {
        let mut deck = FlashcardDeck::with_seed("personal-pronouns", 1);
        let n = deck.len();
        assert!(n > 1);

        deck.flip();
        assert!(deck.revealed());
        deck.next();
        assert_eq!(deck.position(), 1);
        assert!(!deck.revealed());

        deck.prev();
        assert_eq!(deck.position(), 0);
        deck.prev();
        assert_eq!(deck.position(), n - 1);
        deck.next();
        assert_eq!(deck.position(), 0);
    }

    #[test]
    fn shuffle_keeps_the_same_cards() {
        let mut deck = FlashcardDeck::with_seed("prepositions-by-case", 42);
        let before: HashSet<u32> = deck.cards.iter().map(|c| c.id).collect();
        deck.next();
        deck.flip();
        deck.shuffle();
        let after: HashSet<u32> = deck.cards.iter().map(|c| c.id).collect();
        assert_eq!(before, after);
        assert_eq!(deck.position(), 0);
        assert!(!deck.revealed());
    }

    #[test]
    fn rebuild_follows_filter_changes() {
        let mut deck = FlashcardDeck::with_seed(ALL_LESSONS, 7);
        deck.next();
        deck.rebuild("question-words");
        assert!(deck.len() > 0);
        assert!(deck.len() < VOCABULARY.len());
        assert_eq!(deck.position(), 0);
        assert!(deck.cards.iter().all(|c| c.category == "question-words"));
    }
}
