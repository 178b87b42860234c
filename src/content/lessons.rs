/// A topical unit of grammar content. Referenced by id from vocabulary
/// categories and exercise records; ids are stable and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub group: &'static str,
}

pub const ALL_LESSONS: &str = "all";

pub const LESSONS: &[Lesson] = &[
    Lesson { id: "personal-pronouns", title: "Personal Pronouns (Personalpronomen)", group: "Foundations" },
    Lesson { id: "possessive-articles", title: "Possessive Articles (Possessivartikel)", group: "Foundations" },
    Lesson { id: "articles-gender", title: "Articles & Gender", group: "Foundations" },
    Lesson { id: "prepositions-by-case", title: "Prepositions by Case", group: "Cases" },
    Lesson { id: "connectors-verb-position", title: "Connectors & Verb Position", group: "Word Order" },
    Lesson { id: "question-words", title: "Question Words (W-Fragen)", group: "Foundations" },
    Lesson { id: "modal-verbs", title: "Modal Verbs", group: "Verbs" },
    Lesson { id: "konjunktiv-2", title: "Konjunktiv II", group: "Verbs" },
    Lesson { id: "werden-forms", title: "Werden Forms", group: "Verbs" },
    Lesson { id: "verb-tenses", title: "Verb Tenses", group: "Verbs" },
    Lesson { id: "passive-voice", title: "Passive Voice", group: "Verbs" },
    Lesson { id: "reflexive-verbs", title: "Reflexive Verbs", group: "Verbs" },
    Lesson { id: "separable-verbs", title: "Separable Verbs", group: "Verbs" },
    Lesson { id: "cases-basics", title: "Cases: Nominativ, Akkusativ, Dativ, Genitiv", group: "Cases" },
    Lesson { id: "verbs-with-prep", title: "Verbs with Prepositions", group: "Verbs" },
];

pub fn find(id: &str) -> Option<&'static Lesson> {
    LESSONS.iter().find(|lesson| lesson.id == id)
}

/// Lesson title for display, falling back to a generic label for unknown ids.
pub fn title_or_default(id: &str) -> &'static str {
    find(id).map(|lesson| lesson.title).unwrap_or("German Basics")
}

/// Distinct group names in first-appearance order.
#[allow(dead_code)] // exercised through the library target
pub fn groups() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for lesson in LESSONS {
        if !out.contains(&lesson.group) {
            out.push(lesson.group);
        }
    }
    out
}

#[allow(dead_code)] // exercised through the library target
pub fn lessons_in_group(group: &str) -> Vec<&'static Lesson> {
    LESSONS.iter().filter(|lesson| lesson.group == group).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<&str> = LESSONS.iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), LESSONS.len());
    }

    #[test]
    fn find_known_and_unknown() {
        assert_eq!(find("modal-verbs").unwrap().group, "Verbs");
        assert!(find("nonexistent-lesson").is_none());
        assert!(find(ALL_LESSONS).is_none());
    }

    #[test]
    fn groups_preserve_first_appearance_order() {
        let groups = groups();
        assert_eq!(groups[0], "Foundations");
        assert!(groups.contains(&"Word Order"));
        let total: usize = groups.iter().map(|g| lessons_in_group(g).len()).sum();
        assert_eq!(total, LESSONS.len());
    }

    #[test]
    fn title_fallback() {
        assert_eq!(title_or_default("question-words"), "Question Words (W-Fragen)");
        assert_eq!(title_or_default("bogus"), "German Basics");
    }
}
