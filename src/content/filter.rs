//! Lesson filtering. All functions are pure and total: an unmatched filter
//! yields an empty list, never an error, and source order is preserved.

use crate::content::exercises::{self, Exercise, ExerciseKind};
use crate::content::lessons::ALL_LESSONS;
use crate::content::vocabulary::{self, VocabEntry, VOCABULARY};

/// Exercises of `kind` matching the lesson filter. `"all"` passes the whole
/// table through unchanged.
pub fn exercises_for(kind: ExerciseKind, lesson_filter: &str) -> Vec<&'static Exercise> {
    let items = exercises::table(kind);
    if lesson_filter == ALL_LESSONS {
        return items.iter().collect();
    }
    items.iter().filter(|e| e.lesson_id == lesson_filter).collect()
}

/// Candidate count per exercise kind, shown on the type-selection screen.
pub fn count_for(kind: ExerciseKind, lesson_filter: &str) -> usize {
    if lesson_filter == ALL_LESSONS {
        exercises::table(kind).len()
    } else {
        exercises::table(kind)
            .iter()
            .filter(|e| e.lesson_id == lesson_filter)
            .count()
    }
}

/// Vocabulary entries matching the lesson filter through the partial
/// category map. Entries whose category has no map entry match no lesson.
pub fn vocab_for_lesson(lesson_filter: &str) -> Vec<&'static VocabEntry> {
    if lesson_filter == ALL_LESSONS {
        return VOCABULARY.iter().collect();
    }
    VOCABULARY
        .iter()
        .filter(|e| vocabulary::category_lesson(e.category) == Some(lesson_filter))
        .collect()
}

/// Combined predicate for the vocabulary screen: free-text search over
/// german/english/note, a category restriction, and the shared lesson filter.
pub fn vocab_matches(entry: &VocabEntry, search: &str, category: &str, lesson_filter: &str) -> bool {
    let matches_search = if search.is_empty() {
        true
    } else {
        let needle = search.to_lowercase();
        entry.german.to_lowercase().contains(&needle)
            || entry.english.to_lowercase().contains(&needle)
            || entry.note.to_lowercase().contains(&needle)
    };
    let matches_category = category == "all" || entry.category == category;
    let matches_lesson = lesson_filter == ALL_LESSONS
        || vocabulary::category_lesson(entry.category) == Some(lesson_filter);
    matches_search && matches_category && matches_lesson
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_is_identity() {
        for kind in ExerciseKind::ALL {
            let filtered = exercises_for(kind, ALL_LESSONS);
            let table = exercises::table(kind);
            assert_eq!(filtered.len(), table.len());
            for (got, want) in filtered.iter().zip(table.iter()) {
                assert_eq!(got.id, want.id);
            }
        }
    }

    #[test]
    fn filtered_result_is_ordered_subsequence() {
        for kind in ExerciseKind::ALL {
            for lesson in crate::content::lessons::LESSONS {
                let filtered = exercises_for(kind, lesson.id);
                for e in &filtered {
                    assert_eq!(e.lesson_id, lesson.id);
                }
                // Subsequence check: positions in the source table increase.
                let table = exercises::table(kind);
                let positions: Vec<usize> = filtered
                    .iter()
                    .map(|e| table.iter().position(|t| t.id == e.id).unwrap())
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn unmatched_filter_yields_empty_not_error() {
        for kind in ExerciseKind::ALL {
            assert!(exercises_for(kind, "no-such-lesson").is_empty());
        }
        assert!(vocab_for_lesson("no-such-lesson").is_empty());
    }

    #[test]
    fn counts_match_filtered_lengths() {
        for kind in ExerciseKind::ALL {
            assert_eq!(count_for(kind, ALL_LESSONS), exercises_for(kind, ALL_LESSONS).len());
            for lesson in crate::content::lessons::LESSONS {
                assert_eq!(count_for(kind, lesson.id), exercises_for(kind, lesson.id).len());
            }
        }
    }

    #[test]
    fn connectors_lesson_counts() {
        // Selecting "connectors-verb-position" must show the exact
        // per-kind candidate counts from the tables.
        let lesson = "connectors-verb-position";
        assert_eq!(count_for(ExerciseKind::Translation, lesson), 0);
        assert_eq!(count_for(ExerciseKind::FillBlank, lesson), 1);
        assert_eq!(count_for(ExerciseKind::MultipleChoice, lesson), 1);
        assert_eq!(count_for(ExerciseKind::VerbPosition, lesson), 5);
    }

    #[test]
    fn vocab_lesson_filter_goes_through_category_map() {
        let pronouns = vocab_for_lesson("personal-pronouns");
        assert!(!pronouns.is_empty());
        assert!(pronouns.iter().all(|e| e.category == "pronouns"));

        // Three verb categories fold into the verb-tenses lesson.
        let tenses = vocab_for_lesson("verb-tenses");
        let categories: std::collections::HashSet<&str> =
            tenses.iter().map(|e| e.category).collect();
        assert!(categories.contains("verb-tenses"));
        assert!(categories.contains("regular-verbs"));
        assert!(categories.contains("irregular-verbs"));
        assert!(categories.contains("mixed-verbs"));
    }

    #[test]
    fn vocab_search_is_case_insensitive_and_covers_notes() {
        let entry = VOCABULARY.iter().find(|e| e.german == "weil").unwrap();
        assert!(vocab_matches(entry, "WEIL", "all", ALL_LESSONS));
        assert!(vocab_matches(entry, "because", "all", ALL_LESSONS));
        assert!(vocab_matches(entry, "verb goes to end", "all", ALL_LESSONS));
        assert!(!vocab_matches(entry, "zzz", "all", ALL_LESSONS));
        assert!(!vocab_matches(entry, "", "pronouns", ALL_LESSONS));
        assert!(vocab_matches(entry, "", "connectors", "connectors-verb-position"));
    }
}
