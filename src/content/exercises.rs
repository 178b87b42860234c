/// The four training formats. Order here is the order the type-selection
/// menu presents them in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExerciseKind {
    Translation,
    FillBlank,
    MultipleChoice,
    VerbPosition,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 4] = [
        ExerciseKind::Translation,
        ExerciseKind::FillBlank,
        ExerciseKind::MultipleChoice,
        ExerciseKind::VerbPosition,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ExerciseKind::Translation => "Translation Practice",
            ExerciseKind::FillBlank => "Fill in the Blank",
            ExerciseKind::MultipleChoice => "Grammar Quiz",
            ExerciseKind::VerbPosition => "Verb Position",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExerciseKind::Translation => "Translate German sentences to English",
            ExerciseKind::FillBlank => "Choose the correct word",
            ExerciseKind::MultipleChoice => "Test your knowledge of grammar rules",
            ExerciseKind::VerbPosition => "Practice word order with connectors",
        }
    }

    /// Heading shown above the question card while a run is active.
    pub fn heading(self) -> &'static str {
        match self {
            ExerciseKind::Translation => "Translate to English",
            ExerciseKind::FillBlank => "Fill in the Blank",
            ExerciseKind::MultipleChoice => "Choose the Correct Answer",
            ExerciseKind::VerbPosition => "Word Order Challenge",
        }
    }
}

/// Variant-specific payload of an exercise. Translation is graded by
/// normalized free-text equality; the other three by exact option match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    Translation {
        german: &'static str,
        english: &'static str,
    },
    FillBlank {
        sentence: &'static str,
        answer: &'static str,
        options: [&'static str; 4],
        hint: &'static str,
    },
    MultipleChoice {
        question: &'static str,
        answer: &'static str,
        options: [&'static str; 4],
        hint: &'static str,
    },
    VerbPosition {
        question: &'static str,
        answer: &'static str,
        options: [&'static str; 4],
        hint: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exercise {
    pub id: u32,
    pub lesson_id: &'static str,
    pub prompt: Prompt,
}

impl Exercise {
    pub fn kind(&self) -> ExerciseKind {
        match self.prompt {
            Prompt::Translation { .. } => ExerciseKind::Translation,
            Prompt::FillBlank { .. } => ExerciseKind::FillBlank,
            Prompt::MultipleChoice { .. } => ExerciseKind::MultipleChoice,
            Prompt::VerbPosition { .. } => ExerciseKind::VerbPosition,
        }
    }

    /// The text shown as the question: the German sentence, the gapped
    /// sentence, or the question itself.
    pub fn question(&self) -> &'static str {
        match self.prompt {
            Prompt::Translation { german, .. } => german,
            Prompt::FillBlank { sentence, .. } => sentence,
            Prompt::MultipleChoice { question, .. } => question,
            Prompt::VerbPosition { question, .. } => question,
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self.prompt {
            Prompt::Translation { .. } => None,
            Prompt::FillBlank { hint, .. } => Some(hint),
            Prompt::MultipleChoice { hint, .. } => Some(hint),
            Prompt::VerbPosition { hint, .. } => Some(hint),
        }
    }

    pub fn options(&self) -> Option<&[&'static str; 4]> {
        match &self.prompt {
            Prompt::Translation { .. } => None,
            Prompt::FillBlank { options, .. } => Some(options),
            Prompt::MultipleChoice { options, .. } => Some(options),
            Prompt::VerbPosition { options, .. } => Some(options),
        }
    }

    /// The reference answer revealed after grading.
    pub fn expected(&self) -> &'static str {
        match self.prompt {
            Prompt::Translation { english, .. } => english,
            Prompt::FillBlank { answer, .. } => answer,
            Prompt::MultipleChoice { answer, .. } => answer,
            Prompt::VerbPosition { answer, .. } => answer,
        }
    }
}

const fn tr(id: u32, lesson_id: &'static str, german: &'static str, english: &'static str) -> Exercise {
    Exercise { id, lesson_id, prompt: Prompt::Translation { german, english } }
}

const fn fb(
    id: u32,
    lesson_id: &'static str,
    sentence: &'static str,
    answer: &'static str,
    options: [&'static str; 4],
    hint: &'static str,
) -> Exercise {
    Exercise { id, lesson_id, prompt: Prompt::FillBlank { sentence, answer, options, hint } }
}

const fn mc(
    id: u32,
    lesson_id: &'static str,
    question: &'static str,
    answer: &'static str,
    options: [&'static str; 4],
    hint: &'static str,
) -> Exercise {
    Exercise { id, lesson_id, prompt: Prompt::MultipleChoice { question, answer, options, hint } }
}

const fn vp(
    id: u32,
    lesson_id: &'static str,
    question: &'static str,
    answer: &'static str,
    options: [&'static str; 4],
    hint: &'static str,
) -> Exercise {
    Exercise { id, lesson_id, prompt: Prompt::VerbPosition { question, answer, options, hint } }
}

pub const TRANSLATION: &[Exercise] = &[
    tr(1, "personal-pronouns", "Ich bin Student.", "I am a student."),
    tr(2, "personal-pronouns", "Du bist mein Freund.", "You are my friend."),
    tr(3, "personal-pronouns", "Sie sind sehr nett.", "You are very nice."),
    tr(4, "personal-pronouns", "Wir lernen Deutsch.", "We are learning German."),
    tr(5, "possessive-articles", "Das ist mein Bruder.", "This is my brother."),
    tr(6, "reflexive-verbs", "Ich freue mich auf die Party.", "I am looking forward to the party."),
    tr(7, "reflexive-verbs", "Er interessiert sich für Musik.", "He is interested in music."),
    tr(8, "verbs-with-prep", "Ich warte auf den Bus.", "I am waiting for the bus."),
    tr(9, "prepositions-by-case", "Sie kommt aus Deutschland.", "She comes from Germany."),
    tr(10, "konjunktiv-2", "Möchtest du einen Kaffee?", "Would you like a coffee?"),
];

pub const FILL_BLANK: &[Exercise] = &[
    fb(1, "personal-pronouns", "___ bin Student.", "Ich", ["Ich", "Du", "Er", "Wir"], "I am a student"),
    fb(2, "possessive-articles", "Das ist ___ Buch.", "mein", ["mein", "dein", "sein", "ihr"], "my book"),
    fb(3, "prepositions-by-case", "Ich fahre ___ dem Bus.", "mit", ["mit", "für", "ohne", "durch"], "by bus (Dative prep)"),
    fb(4, "prepositions-by-case", "Das Geschenk ist ___ dich.", "für", ["für", "mit", "von", "zu"], "for you (Accusative prep)"),
    fb(5, "modal-verbs", "Ich ___ schwimmen.", "kann", ["kann", "kannst", "können", "könnt"], "I can swim"),
    fb(6, "modal-verbs", "Er ___ seine Hausaufgaben machen.", "muss", ["muss", "musst", "müssen", "müsst"], "He must do"),
    fb(7, "connectors-verb-position", "Ich bleibe zu Hause, ___ ich krank bin.", "weil", ["weil", "und", "aber", "oder"], "because (verb to end)"),
    fb(8, "question-words", "___ wartest du?", "Worauf", ["Worauf", "Auf wen", "Warum", "Wohin"], "What are you waiting for? (thing)"),
    fb(9, "cases-basics", "Ich sehe ___ Mann.", "den", ["der", "den", "dem", "des"], "Accusative masculine"),
    fb(10, "cases-basics", "Ich helfe ___ Freund.", "meinem", ["meinen", "meinem", "mein", "meine"], "Dative - helfen takes Dative!"),
];

pub const MULTIPLE_CHOICE: &[Exercise] = &[
    mc(1, "prepositions-by-case", "Which preposition always takes DATIVE?", "mit",
        ["für", "mit", "durch", "ohne"], "Think: with whom"),
    mc(2, "connectors-verb-position", "Which connector sends the verb to the END?", "weil",
        ["und", "weil", "aber", "deshalb"], "Type 1 connector"),
    mc(3, "question-words", "'Worüber' is used to ask about...", "things",
        ["people", "things", "places", "times"], "wo + preposition = for things"),
    mc(4, "cases-basics", "Which verb ALWAYS takes Dative?", "helfen",
        ["sehen", "helfen", "haben", "machen"], "Ich helfe DIR"),
    mc(5, "konjunktiv-2", "What is 'ich möchte'?", "I would like",
        ["I must", "I can", "I would like", "I want"], "Polite form of wollen"),
    mc(6, "articles-gender", "'-ung' ending nouns are always...", "feminine (die)",
        ["masculine (der)", "feminine (die)", "neuter (das)", "varies"], "die Zeitung, die Übung"),
    mc(7, "cases-basics", "In 'Ich sehe den Mann', why 'den'?", "Direct object = Accusative",
        ["Subject = Nominative", "Direct object = Accusative", "Indirect object = Dative", "Possession = Genitive"],
        "sehen takes what case?"),
    mc(8, "reflexive-verbs", "'sich freuen auf' means...", "to look forward to",
        ["to be happy about", "to look forward to", "to laugh at", "to think about"], "Future anticipation"),
    mc(9, "personal-pronouns", "Formal 'you' (Sie) is always...", "capitalized",
        ["lowercase", "capitalized", "both depending on position", "optional"], "Respect in writing"),
    mc(10, "konjunktiv-2", "'Könnten Sie mir helfen?' is more ___ than 'Können Sie...'", "polite",
        ["casual", "polite", "formal", "informal"], "Konjunktiv II effect"),
];

pub const VERB_POSITION: &[Exercise] = &[
    vp(1, "connectors-verb-position", "Put in correct order: ich / müde / bin / weil", "weil ich müde bin",
        ["weil ich müde bin", "weil müde ich bin", "weil bin ich müde", "ich weil müde bin"],
        "'weil' sends verb to END"),
    vp(2, "connectors-verb-position", "Put in correct order: deshalb / ich / bleibe / zu Hause",
        "Deshalb bleibe ich zu Hause",
        ["Deshalb bleibe ich zu Hause", "Deshalb ich bleibe zu Hause", "Ich deshalb bleibe zu Hause", "Bleibe deshalb ich zu Hause"],
        "'deshalb' = verb comes right after"),
    vp(3, "modal-verbs", "Put in correct order: ich / gut / schwimmen / kann", "Ich kann gut schwimmen",
        ["Ich kann gut schwimmen", "Ich gut kann schwimmen", "Ich schwimmen kann gut", "Kann ich gut schwimmen"],
        "Modal verb position"),
    vp(4, "separable-verbs", "Put in correct order: der Film / um 8 / an / fängt", "Der Film fängt um 8 an",
        ["Der Film fängt um 8 an", "Der Film anfängt um 8", "Der Film an um 8 fängt", "Fängt der Film um 8 an"],
        "Separable verb 'anfangen'"),
    vp(5, "verbs-with-prep", "Put in correct order: ich / auf / meine Freundin / warte",
        "Ich warte auf meine Freundin",
        ["Ich warte auf meine Freundin", "Ich auf warte meine Freundin", "Warte ich auf meine Freundin", "Ich warte meine Freundin auf"],
        "warten auf + Accusative"),
    vp(6, "connectors-verb-position", "What happens after 'obwohl'?", "Verb goes to end",
        ["Verb stays in position 2", "Verb goes to end", "Verb comes first", "No change"],
        "Type 1 connector"),
    vp(7, "connectors-verb-position", "Put in correct order: dass / er / krank / ist / ich / glaube",
        "Ich glaube, dass er krank ist",
        ["Ich glaube, dass er krank ist", "Ich glaube, dass ist er krank", "Dass er krank ist, ich glaube", "Ich dass glaube er krank ist"],
        "'dass' sends verb to end of subordinate clause"),
    vp(8, "connectors-verb-position", "When 'weil' clause comes FIRST, what happens?",
        "Main clause verb comes right after",
        ["Nothing special", "Main clause verb comes right after", "Main clause verb goes to end too", "Both verbs in middle"],
        "Verb-verb at the comma"),
];

pub fn table(kind: ExerciseKind) -> &'static [Exercise] {
    match kind {
        ExerciseKind::Translation => TRANSLATION,
        ExerciseKind::FillBlank => FILL_BLANK,
        ExerciseKind::MultipleChoice => MULTIPLE_CHOICE,
        ExerciseKind::VerbPosition => VERB_POSITION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_homogeneous() {
        for kind in ExerciseKind::ALL {
            for exercise in table(kind) {
                assert_eq!(exercise.kind(), kind);
            }
        }
    }

    #[test]
    fn choice_answers_appear_in_their_options() {
        for kind in [ExerciseKind::FillBlank, ExerciseKind::MultipleChoice, ExerciseKind::VerbPosition] {
            for exercise in table(kind) {
                let options = exercise.options().unwrap();
                assert!(
                    options.contains(&exercise.expected()),
                    "exercise {}/{:?} answer not among options",
                    exercise.id,
                    kind
                );
            }
        }
    }

    #[test]
    fn lesson_ids_resolve() {
        for kind in ExerciseKind::ALL {
            for exercise in table(kind) {
                assert!(
                    crate::content::lessons::find(exercise.lesson_id).is_some(),
                    "exercise {}/{:?} references unknown lesson {}",
                    exercise.id,
                    kind,
                    exercise.lesson_id
                );
            }
        }
    }

    #[test]
    fn translation_has_no_options_or_hint() {
        for exercise in TRANSLATION {
            assert!(exercise.options().is_none());
            assert!(exercise.hint().is_none());
        }
    }
}
