//! Grammar reference content: six foundation lessons, two deep-dive topic
//! trees (verbs, cases), and the cheat-sheet tables. Pure data.

#[derive(Clone, Copy, Debug)]
pub struct Example {
    pub german: &'static str,
    pub english: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct TopicTable {
    pub title: Option<&'static str>,
    pub headers: &'static [&'static str],
    pub rows: &'static [&'static [&'static str]],
}

#[derive(Clone, Copy, Debug)]
pub struct TopicContent {
    pub concept: &'static str,
    pub key_points: &'static [&'static str],
    pub table: TopicTable,
    pub examples: &'static [Example],
    pub tip: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Topic {
    pub id: &'static str,
    pub title: &'static str,
    pub content: TopicContent,
}

#[derive(Clone, Copy, Debug)]
pub struct Branch {
    pub id: &'static str,
    pub title: &'static str,
    pub topics: &'static [Topic],
}

#[derive(Clone, Copy, Debug)]
pub struct Tree {
    pub id: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub branches: &'static [Branch],
}

/// A standalone lesson card tied to a catalog lesson id.
#[derive(Clone, Copy, Debug)]
pub struct FoundationLesson {
    pub lesson_id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub level: &'static str,
    pub duration: &'static str,
    pub content: TopicContent,
}

const fn ex(german: &'static str, english: &'static str) -> Example {
    Example { german, english }
}

const fn table(
    headers: &'static [&'static str],
    rows: &'static [&'static [&'static str]],
) -> TopicTable {
    TopicTable { title: None, headers, rows }
}

pub const FOUNDATION_LESSONS: &[FoundationLesson] = &[
    FoundationLesson {
        lesson_id: "personal-pronouns",
        title: "Personal Pronouns (Personalpronomen)",
        description: "Learn the subject pronouns - your first step to building sentences",
        level: "Beginner",
        duration: "10 min",
        content: TopicContent {
            concept: "Personal pronouns in German work just like \"I, you, he, she\" in English - they replace nouns to avoid repetition. The key difference is that German has formal and informal ways to say \"you\".",
            key_points: &[
                "ich = I (always lowercase unless starting a sentence)",
                "du = you (informal, for friends/family/children)",
                "er/sie/es = he/she/it (same as English)",
                "wir = we, ihr = you all (informal plural)",
                "sie = they, Sie = you (formal, always capitalized)",
            ],
            table: table(
                &["German", "English", "Usage"],
                &[
                    &["ich", "I", "Talking about yourself"],
                    &["du", "you (singular)", "Informal - friends, family, kids"],
                    &["er", "he", "Masculine person/noun"],
                    &["sie", "she", "Feminine person/noun"],
                    &["es", "it", "Neuter noun or impersonal"],
                    &["wir", "we", "You + others"],
                    &["ihr", "you (plural)", "Informal - group of friends"],
                    &["sie", "they", "Multiple people/things"],
                    &["Sie", "you (formal)", "Strangers, professional settings"],
                ],
            ),
            examples: &[
                ex("Ich bin Student.", "I am a student."),
                ex("Du bist mein Freund.", "You are my friend."),
                ex("Sie sind sehr nett.", "You are very nice. (formal)"),
            ],
            tip: "Remember: 'Sie' (formal you) is always capitalized, while 'sie' (they/she) is lowercase!",
        },
    },
    FoundationLesson {
        lesson_id: "possessive-articles",
        title: "Possessive Articles (Possessivartikel)",
        description: "Express ownership - my, your, his, her, etc.",
        level: "Beginner",
        duration: "12 min",
        content: TopicContent {
            concept: "Possessive articles show ownership, like \"my book\" or \"your car\". The base forms map to each pronoun.",
            key_points: &[
                "mein = my (from ich)",
                "dein = your (informal, from du)",
                "sein = his/its (from er/es)",
                "ihr = her/their (from sie)",
                "unser = our (from wir)",
                "euer = your plural (from ihr)",
                "Ihr = your formal (from Sie)",
            ],
            table: table(
                &["Pronoun", "Possessive", "Example", "Translation"],
                &[
                    &["ich", "mein", "mein Buch", "my book"],
                    &["du", "dein", "dein Auto", "your car"],
                    &["er/es", "sein", "sein Haus", "his/its house"],
                    &["sie", "ihr", "ihr Hund", "her dog"],
                    &["wir", "unser", "unser Lehrer", "our teacher"],
                    &["ihr", "euer", "euer Zimmer", "your (pl.) room"],
                    &["sie", "ihr", "ihr Kind", "their child"],
                    &["Sie", "Ihr", "Ihr Name", "your (formal) name"],
                ],
            ),
            examples: &[
                ex("Das ist mein Bruder.", "This is my brother."),
                ex("Wo ist dein Handy?", "Where is your phone?"),
            ],
            tip: "Possessives take the same endings as 'ein/eine'!",
        },
    },
    FoundationLesson {
        lesson_id: "articles-gender",
        title: "Articles & Gender",
        description: "Master der/die/das - the key to German nouns",
        level: "Beginner",
        duration: "15 min",
        content: TopicContent {
            concept: "German has three genders: masculine (der), feminine (die), neuter (das). Always learn nouns WITH their article!",
            key_points: &[
                "der = masculine (der Mann)",
                "die = feminine (die Frau) - also ALL plurals!",
                "das = neuter (das Kind)",
                "Noun endings often hint at gender",
                "Always learn: article + noun as one unit",
            ],
            table: table(
                &["Gender", "Article", "Ending Hints", "Example"],
                &[
                    &["Masculine", "der", "-er (people), -ling, -ismus", "der Lehrer"],
                    &["Feminine", "die", "-ung, -keit, -heit, -ion, -schaft", "die Zeitung"],
                    &["Neuter", "das", "-chen, -lein, -um, -ment", "das Mädchen"],
                    &["Plural", "die", "(all plurals)", "die Bücher"],
                ],
            ),
            examples: &[
                ex("Der Mann liest.", "The man reads."),
                ex("Die Zeitung ist interessant.", "The newspaper is interesting."),
            ],
            tip: "-ung, -keit, -heit, -schaft = ALWAYS feminine (die)!",
        },
    },
    FoundationLesson {
        lesson_id: "prepositions-by-case",
        title: "Prepositions & Introduction to Cases",
        description: "Master prepositions - they determine which case to use!",
        level: "Intermediate",
        duration: "20 min",
        content: TopicContent {
            concept: "Each preposition demands a specific CASE! Some always take Accusative, some always Dative, and some can take either.",
            key_points: &[
                "Accusative: durch, für, gegen, ohne, um (DOGFU)",
                "Dative: aus, bei, mit, nach, seit, von, zu",
                "Two-way: in, an, auf, über, unter, vor, hinter, neben, zwischen",
                "Two-way: motion → Akk, location → Dat",
            ],
            table: table(
                &["Case", "Prepositions", "Example"],
                &[
                    &["Accusative", "für, ohne, durch, gegen, um", "Das ist für dich."],
                    &["Dative", "mit, von, zu, bei, nach, aus, seit", "Ich fahre mit dem Bus."],
                    &["Two-way (motion)", "in + Akk", "Ich gehe in die Schule."],
                    &["Two-way (location)", "in + Dat", "Ich bin in der Schule."],
                ],
            ),
            examples: &[
                ex("Ich warte auf dich. (Akk)", "I'm waiting for you."),
                ex("Ich helfe dir bei der Arbeit. (Dat)", "I help you with work."),
            ],
            tip: "DOGFU = durch, ohne, gegen, für, um → Always Accusative!",
        },
    },
    FoundationLesson {
        lesson_id: "question-words",
        title: "Question Words (W-Fragen)",
        description: "Ask questions - including wo+prep vs prep+wen/wem",
        level: "Beginner",
        duration: "15 min",
        content: TopicContent {
            concept: "Question words mostly start with 'W'. For prepositional questions: THINGS use wo+prep, PEOPLE use prep+wen/wem.",
            key_points: &[
                "Was = What, Wer = Who, Wo = Where, Wann = When",
                "Warum = Why, Wie = How",
                "For THINGS: wo + prep (wofür, womit, worüber)",
                "For PEOPLE: prep + wen/wem (für wen, mit wem)",
            ],
            table: table(
                &["Question", "For Things", "For People"],
                &[
                    &["about what/whom", "worüber", "über wen"],
                    &["for what/whom", "wofür", "für wen"],
                    &["with what/whom", "womit", "mit wem"],
                    &["on what/whom", "worauf", "auf wen"],
                ],
            ),
            examples: &[
                ex("Worüber sprichst du? (thing)", "What are you talking about?"),
                ex("Über wen sprichst du? (person)", "Who are you talking about?"),
            ],
            tip: "If preposition starts with vowel, add 'r': wo + auf = worauf",
        },
    },
    FoundationLesson {
        lesson_id: "connectors-verb-position",
        title: "Connectors & Word Order",
        description: "Join sentences - but watch the verb position!",
        level: "Intermediate",
        duration: "18 min",
        content: TopicContent {
            concept: "Different connectors change where the verb goes! Type 0: verb stays, Type 1: verb to end, Type 2: verb after connector.",
            key_points: &[
                "Type 0: und, oder, aber, denn → verb position unchanged",
                "Type 1: weil, dass, wenn, obwohl → verb goes to END",
                "Type 2: deshalb, trotzdem, dann → verb comes FIRST after",
                "Subordinate clause first? Get verb-verb!",
            ],
            table: table(
                &["Type", "Connectors", "Verb Position"],
                &[
                    &["0 (Coordinating)", "und, oder, aber, denn", "Normal (position 2)"],
                    &["1 (Subordinating)", "weil, dass, wenn, obwohl", "End of clause"],
                    &["2 (Adverbs)", "deshalb, trotzdem, dann", "After connector"],
                ],
            ),
            examples: &[
                ex("Ich bleibe, weil ich müde bin.", "I'm staying because I'm tired."),
                ex("Weil ich müde bin, bleibe ich.", "Because I'm tired, I'm staying."),
            ],
            tip: "Type 1 clause first → verb-verb pattern: 'Weil ich müde BIN, GEHE ich.'",
        },
    },
];

#[allow(dead_code)] // exercised through the library target
pub fn foundation_for(lesson_id: &str) -> Option<&'static FoundationLesson> {
    FOUNDATION_LESSONS.iter().find(|l| l.lesson_id == lesson_id)
}

pub const VERB_TREE: Tree = Tree {
    id: "verbs",
    title: "VERBS (Das Verb)",
    intro: "The verb is the engine. It tells us: What happens (action), When it happens (tense), How it happens (active/passive/mood). Everything else is just additional information.",
    branches: &[
        Branch {
            id: "verb-basics",
            title: "Level 1: Verb Basics",
            topics: &[
                Topic {
                    id: "infinitive",
                    title: "1.1 What is a Verb + Infinitive",
                    content: TopicContent {
                        concept: "The infinitive is the base form of a verb - like 'to go', 'to make' in English. In German, infinitives end in -en or -n. This is the form you find in the dictionary.",
                        key_points: &[
                            "Infinitive ends with -en or -n: machen, spielen, lernen, arbeiten",
                            "This is the dictionary form",
                            "Conjugation = changing the verb to match the subject",
                            "Regular verbs follow predictable patterns",
                        ],
                        table: table(
                            &["Infinitive", "English", "Stem"],
                            &[
                                &["machen", "to make/do", "mach-"],
                                &["spielen", "to play", "spiel-"],
                                &["lernen", "to learn", "lern-"],
                                &["arbeiten", "to work", "arbeit-"],
                                &["studieren", "to study", "studier-"],
                            ],
                        ),
                        examples: &[
                            ex("Ich lerne Deutsch.", "I learn German. (verb = lerne)"),
                            ex("Was machst du?", "What are you doing? (verb = machst)"),
                        ],
                        tip: "Verbs ending in '-ieren' are ALWAYS regular: studieren → ich studiere / habe studiert",
                    },
                },
                Topic {
                    id: "conjugation",
                    title: "1.2 Conjugation in Present (Präsens)",
                    content: TopicContent {
                        concept: "Conjugation means changing the verb ending to match who is doing the action. There are 3 patterns: Regular, Irregular (vowel change), and Mixed.",
                        key_points: &[
                            "Regular: remove -en, add endings (e, st, t, en, t, en)",
                            "Irregular: vowel changes in du/er forms (a→ä, e→i/ie)",
                            "Mixed: both vowel change AND irregular past",
                            "Verbs ending in -ieren are ALWAYS regular",
                        ],
                        table: table(
                            &["Person", "Regular (machen)", "Irregular (fahren)", "Irregular (lesen)"],
                            &[
                                &["ich", "mache", "fahre", "lese"],
                                &["du", "machst", "fährst (a→ä)", "liest (e→ie)"],
                                &["er/sie/es", "macht", "fährt (a→ä)", "liest (e→ie)"],
                                &["wir", "machen", "fahren", "lesen"],
                                &["ihr", "macht", "fahrt", "lest"],
                                &["sie/Sie", "machen", "fahren", "lesen"],
                            ],
                        ),
                        examples: &[
                            ex("Ich mache meine Hausaufgaben.", "I do my homework."),
                            ex("Er fährt nach Berlin.", "He drives to Berlin."),
                            ex("Sie liest ein Buch.", "She reads a book."),
                        ],
                        tip: "Vowel changes only happen with du and er/sie/es - never with ich, wir, ihr, sie!",
                    },
                },
            ],
        },
        Branch {
            id: "verb-position",
            title: "Level 2: Verb Position",
            topics: &[
                Topic {
                    id: "position-main",
                    title: "2.1 Verb = Position 2 in Main Sentences",
                    content: TopicContent {
                        concept: "The core rule of German: In a main sentence, the conjugated verb is ALWAYS in position 2. It doesn't matter what comes first - the verb stays in position 2.",
                        key_points: &[
                            "Verb is ALWAYS in position 2 in main clauses",
                            "Subject can come before or after the verb",
                            "Time/place can start the sentence - verb still position 2",
                            "This is called 'verb-second' (V2) word order",
                        ],
                        table: table(
                            &["Position 1", "Position 2 (VERB)", "Rest"],
                            &[
                                &["Ich", "gehe", "heute ins Büro."],
                                &["Heute", "gehe", "ich ins Büro."],
                                &["Ins Büro", "gehe", "ich heute."],
                                &["Morgen", "arbeite", "ich nicht."],
                            ],
                        ),
                        examples: &[
                            ex("Ich gehe heute ins Kino.", "I'm going to the cinema today."),
                            ex("Heute gehe ich ins Kino.", "Today I'm going to the cinema."),
                        ],
                        tip: "Whatever comes first (time, place, object) - the verb is ALWAYS second!",
                    },
                },
                Topic {
                    id: "position-sub",
                    title: "2.2 Verb at END in Subordinate Clauses",
                    content: TopicContent {
                        concept: "With subordinating conjunctions (weil, dass, wenn, obwohl...), the verb moves to the END of the clause. This creates 'verb clusters' with modal verbs and perfect tense.",
                        key_points: &[
                            "Subordinating conjunctions push the verb to the END",
                            "Common: weil (because), dass (that), wenn (if/when), obwohl (although)",
                            "Creates verb clusters: ...weil ich schwimmen kann",
                            "Comma separates main and subordinate clause",
                        ],
                        table: table(
                            &["Connector Type", "Connectors", "Verb Position"],
                            &[
                                &["Type 0 (Coordinating)", "und, oder, aber, denn", "Normal (position 2)"],
                                &["Type 1 (Subordinating)", "weil, dass, wenn, obwohl", "END of clause"],
                                &["Type 2 (Adverbs)", "deshalb, trotzdem, dann", "After connector"],
                            ],
                        ),
                        examples: &[
                            ex("Ich bleibe zu Hause, weil ich krank bin.", "I'm staying home because I'm sick."),
                            ex("Er sagt, dass er morgen kommt.", "He says that he's coming tomorrow."),
                            ex("Weil ich müde bin, gehe ich schlafen.", "Because I'm tired, I'm going to sleep."),
                        ],
                        tip: "When subordinate clause comes FIRST, you get verb-verb: 'Weil ich müde BIN, GEHE ich...'",
                    },
                },
            ],
        },
        Branch {
            id: "special-verbs",
            title: "Level 3: Special Verb Types",
            topics: &[
                Topic {
                    id: "separable",
                    title: "3.1 Separable Verbs (Trennbare Verben)",
                    content: TopicContent {
                        concept: "Some verbs split! The prefix goes to the end in main clauses. In Perfekt, the 'ge-' goes between prefix and verb: aufgestanden.",
                        key_points: &[
                            "Prefix goes to END in present/simple past",
                            "Common prefixes: an, auf, aus, ein, mit, vor, zu",
                            "Perfekt: prefix + ge + stem: aufgestanden",
                            "In subordinate clauses: verb stays together at end",
                        ],
                        table: table(
                            &["Infinitive", "Present", "Perfekt", "Meaning"],
                            &[
                                &["aufstehen", "Ich stehe auf.", "Ich bin aufgestanden.", "to get up"],
                                &["anfangen", "Es fängt an.", "Es hat angefangen.", "to begin"],
                                &["mitkommen", "Kommst du mit?", "Bist du mitgekommen?", "to come along"],
                                &["einkaufen", "Ich kaufe ein.", "Ich habe eingekauft.", "to shop"],
                            ],
                        ),
                        examples: &[
                            ex("Ich stehe um 7 Uhr auf.", "I get up at 7 o'clock."),
                            ex("Der Film fängt um 8 an.", "The movie starts at 8."),
                            ex("...weil ich früh aufstehe.", "...because I get up early. (stays together)"),
                        ],
                        tip: "In subordinate clauses, the verb STAYS TOGETHER: '...weil ich um 7 Uhr aufstehe.'",
                    },
                },
                Topic {
                    id: "reflexive",
                    title: "3.2 Reflexive Verbs (Reflexive Verben)",
                    content: TopicContent {
                        concept: "Reflexive verbs need a reflexive pronoun (mich, dich, sich...). Many German verbs are reflexive that aren't in English!",
                        key_points: &[
                            "sich freuen = to be happy (not 'to happy oneself')",
                            "Accusative: mich, dich, sich, uns, euch, sich",
                            "Dative: mir, dir, sich, uns, euch, sich",
                            "Always learn: sich + verb + preposition (if any)",
                        ],
                        table: table(
                            &["Person", "Accusative", "Dative", "Example"],
                            &[
                                &["ich", "mich", "mir", "Ich wasche mich."],
                                &["du", "dich", "dir", "Du freust dich."],
                                &["er/sie/es", "sich", "sich", "Er rasiert sich."],
                                &["wir", "uns", "uns", "Wir treffen uns."],
                                &["ihr", "euch", "euch", "Ihr beeilt euch."],
                                &["sie/Sie", "sich", "sich", "Sie setzen sich."],
                            ],
                        ),
                        examples: &[
                            ex("Ich freue mich auf das Wochenende.", "I'm looking forward to the weekend."),
                            ex("Er interessiert sich für Musik.", "He's interested in music."),
                            ex("Wir treffen uns um 8 Uhr.", "We're meeting at 8."),
                        ],
                        tip: "Learn as chunks: sich freuen auf + Akk, sich interessieren für + Akk, sich treffen mit + Dat",
                    },
                },
                Topic {
                    id: "verbs-prepositions",
                    title: "3.3 Verbs with Fixed Prepositions",
                    content: TopicContent {
                        concept: "Many verbs always go with a specific preposition. You MUST learn them as a unit: warten auf (to wait for), denken an (to think of).",
                        key_points: &[
                            "Learn as phrases: verb + preposition + case",
                            "The preposition determines the case",
                            "These are high-frequency - memorize as chunks!",
                            "Question: wo+prep for things, prep+wem/wen for people",
                        ],
                        table: table(
                            &["Verb + Prep", "Case", "Meaning", "Example"],
                            &[
                                &["warten auf", "Akk", "to wait for", "Ich warte auf den Bus."],
                                &["denken an", "Akk", "to think of", "Ich denke an dich."],
                                &["sich freuen auf", "Akk", "to look forward to", "Ich freue mich auf..."],
                                &["Angst haben vor", "Dat", "to be afraid of", "Ich habe Angst vor..."],
                                &["helfen bei", "Dat", "to help with", "Ich helfe dir bei..."],
                                &["sprechen mit", "Dat", "to speak with", "Ich spreche mit ihm."],
                            ],
                        ),
                        examples: &[
                            ex("Worauf wartest du? - Auf den Bus.", "What are you waiting for? - For the bus."),
                            ex("An wen denkst du? - An meine Mutter.", "Who are you thinking of? - My mother."),
                        ],
                        tip: "For THINGS: wo+prep (worauf?). For PEOPLE: prep+wen/wem (auf wen? mit wem?)",
                    },
                },
            ],
        },
        Branch {
            id: "tenses",
            title: "Level 4: Tenses (Active Voice)",
            topics: &[
                Topic {
                    id: "praesens",
                    title: "4.1 Present (Präsens)",
                    content: TopicContent {
                        concept: "Present tense is used for current actions, habits, general truths, AND often for near future. Germans frequently use present tense where English would use future!",
                        key_points: &[
                            "Used for: now, habits, general truths, near future",
                            "Formula: verb stem + ending",
                            "Most common tense in conversation",
                            "Often replaces future: 'Ich gehe morgen' = I'll go tomorrow",
                        ],
                        table: table(
                            &["Usage", "German Example", "English"],
                            &[
                                &["Now", "Ich arbeite jetzt.", "I'm working now."],
                                &["Habit", "Ich trinke Kaffee.", "I drink coffee."],
                                &["Future", "Morgen fliege ich.", "I'm flying tomorrow."],
                                &["Truth", "Die Erde ist rund.", "The Earth is round."],
                            ],
                        ),
                        examples: &[
                            ex("Ich lese ein Buch.", "I read / am reading a book."),
                            ex("Nächste Woche fahre ich nach Berlin.", "Next week I'm going to Berlin."),
                        ],
                        tip: "Germans often skip Futur I and just use Präsens + time word: 'Morgen arbeite ich.'",
                    },
                },
                Topic {
                    id: "perfekt",
                    title: "4.2 Perfect (Perfekt) - Spoken Past",
                    content: TopicContent {
                        concept: "Perfekt is THE spoken past tense in German! Use haben or sein + Partizip II. Movement/change verbs use sein, most others use haben.",
                        key_points: &[
                            "Formula: haben/sein + Partizip II",
                            "sein for: movement (gehen, fahren) & change of state (werden, sterben)",
                            "haben for: most other verbs",
                            "Partizip II: ge- + stem + -t (regular) or ge- + stem + -en (irregular)",
                            "-ieren verbs: no ge-! studiert, telefoniert",
                        ],
                        table: table(
                            &["Type", "Infinitive", "Partizip II", "Perfect"],
                            &[
                                &["haben + regular", "machen", "gemacht", "Ich habe gemacht."],
                                &["haben + irregular", "schreiben", "geschrieben", "Ich habe geschrieben."],
                                &["sein + movement", "gehen", "gegangen", "Ich bin gegangen."],
                                &["sein + change", "werden", "geworden", "Ich bin geworden."],
                                &["-ieren (no ge-)", "studieren", "studiert", "Ich habe studiert."],
                            ],
                        ),
                        examples: &[
                            ex("Ich habe gestern gearbeitet.", "I worked yesterday."),
                            ex("Sie ist nach Hause gegangen.", "She went home."),
                        ],
                        tip: "sein verbs: 'be-go-stay-happen-die' - verbs of motion, change of state, or staying!",
                    },
                },
                Topic {
                    id: "praeteritum",
                    title: "4.3 Simple Past (Präteritum) - Written Past",
                    content: TopicContent {
                        concept: "Präteritum is mainly for written German and for sein/haben/modal verbs in speech. In conversation, Germans prefer Perfekt except for these common verbs.",
                        key_points: &[
                            "Mainly for: sein, haben, werden, modal verbs",
                            "Used in written narrative, news, stories",
                            "Conversational for: war, hatte, konnte, musste, wollte",
                            "Regular verbs: stem + -te endings",
                        ],
                        table: table(
                            &["Verb", "ich", "du", "er/sie", "wir/sie"],
                            &[
                                &["sein", "war", "warst", "war", "waren"],
                                &["haben", "hatte", "hattest", "hatte", "hatten"],
                                &["werden", "wurde", "wurdest", "wurde", "wurden"],
                                &["können", "konnte", "konntest", "konnte", "konnten"],
                                &["müssen", "musste", "musstest", "musste", "mussten"],
                            ],
                        ),
                        examples: &[
                            ex("Ich war gestern müde.", "I was tired yesterday."),
                            ex("Sie konnte nicht kommen.", "She couldn't come."),
                        ],
                        tip: "In conversation, use Präteritum for: war, hatte, wurde, wollte, konnte, musste, sollte, durfte",
                    },
                },
                Topic {
                    id: "futur1",
                    title: "4.5 Future I (Futur I)",
                    content: TopicContent {
                        concept: "Future I uses werden + Infinitive. But remember: Germans often use Präsens for future instead! Futur I emphasizes certainty or makes predictions.",
                        key_points: &[
                            "Formula: werden + Infinitiv (at end)",
                            "Often replaced by Präsens + time word",
                            "Used for: emphasis, predictions, assumptions",
                            "werden conjugates: werde, wirst, wird, werden, werdet, werden",
                        ],
                        table: table(
                            &["Person", "werden", "Example", "English"],
                            &[
                                &["ich", "werde", "Ich werde arbeiten.", "I will work."],
                                &["du", "wirst", "Du wirst es schaffen.", "You will make it."],
                                &["er/sie", "wird", "Er wird kommen.", "He will come."],
                                &["wir", "werden", "Wir werden sehen.", "We will see."],
                            ],
                        ),
                        examples: &[
                            ex("Es wird regnen.", "It will rain."),
                            ex("Er wird wohl krank sein.", "He's probably sick. (assumption)"),
                        ],
                        tip: "Reality check: 'Morgen arbeite ich' and 'Morgen werde ich arbeiten' mean the same thing!",
                    },
                },
            ],
        },
        Branch {
            id: "passive",
            title: "Level 5: Passive Voice",
            topics: &[
                Topic {
                    id: "passive-intro",
                    title: "5.1 What is Passive Voice?",
                    content: TopicContent {
                        concept: "Active = subject DOES the action. Passive = subject RECEIVES the action. German passive uses werden + Partizip II.",
                        key_points: &[
                            "Active: Der Mechaniker repariert das Auto.",
                            "Passive: Das Auto wird repariert.",
                            "Core formula: werden + Partizip II",
                            "The object becomes the subject",
                        ],
                        table: table(
                            &["Voice", "Focus", "Example", "English"],
                            &[
                                &["Active", "Who does it", "Der Koch kocht das Essen.", "The cook cooks the food."],
                                &["Passive", "What is done", "Das Essen wird gekocht.", "The food is being cooked."],
                            ],
                        ),
                        examples: &[
                            ex("Ein Haus wird gebaut.", "A house is being built."),
                            ex("Deutsch wird gesprochen.", "German is spoken."),
                        ],
                        tip: "Passive is useful when: you don't know who did it, or it doesn't matter who did it!",
                    },
                },
                Topic {
                    id: "passive-tenses",
                    title: "5.2 Passive in All Tenses",
                    content: TopicContent {
                        concept: "Passive can be formed in all tenses. The key is knowing how werden changes and what happens to the Partizip II.",
                        key_points: &[
                            "Present: wird + Partizip II",
                            "Präteritum: wurde + Partizip II",
                            "Perfekt: ist + Partizip II + worden (NOT geworden!)",
                            "Plusquamperfekt: war + Partizip II + worden",
                            "Futur I: wird + Partizip II + werden",
                        ],
                        table: table(
                            &["Tense", "Formula", "Example", "English"],
                            &[
                                &["Präsens", "wird + P.II", "Das Auto wird repariert.", "The car is being repaired."],
                                &["Präteritum", "wurde + P.II", "Das Auto wurde repariert.", "The car was repaired."],
                                &["Perfekt", "ist + P.II + worden", "Das Auto ist repariert worden.", "The car has been repaired."],
                                &["Plusquamperf.", "war + P.II + worden", "Das Auto war repariert worden.", "The car had been repaired."],
                                &["Futur I", "wird + P.II + werden", "Das Auto wird repariert werden.", "The car will be repaired."],
                            ],
                        ),
                        examples: &[
                            ex("Die Tür wird geöffnet.", "The door is being opened."),
                            ex("Die Bücher wurden gelesen.", "The books were read."),
                        ],
                        tip: "In Perfekt passive, use 'worden' NOT 'geworden'! 'geworden' = became, 'worden' = been (passive)",
                    },
                },
                Topic {
                    id: "werden-overview",
                    title: "5.3 WERDEN - The Multi-Purpose Verb",
                    content: TopicContent {
                        concept: "Werden is incredibly versatile: it can mean 'to become' (full verb), form future (auxiliary), or create passive voice (auxiliary). Master werden, master German!",
                        key_points: &[
                            "Vollverb (full verb): werden = to become",
                            "Hilfsverb for Future: werden + Infinitiv",
                            "Hilfsverb for Passive: werden + Partizip II",
                            "Konjunktiv II: würde + Infinitiv (would)",
                        ],
                        table: table(
                            &["Function", "Formula", "Example", "English"],
                            &[
                                &["Full verb", "werden alone", "Er wird müde.", "He becomes tired."],
                                &["Future (Active)", "werden + Infinitiv", "Ich werde lernen.", "I will learn."],
                                &["Passive (Present)", "werden + P.II", "Es wird gemacht.", "It is being done."],
                                &["Konjunktiv II", "würde + Infinitiv", "Ich würde gehen.", "I would go."],
                            ],
                        ),
                        examples: &[
                            ex("Er wird Arzt. (full verb)", "He's becoming a doctor."),
                            ex("Die Arbeit wird gemacht. (passive)", "The work is being done."),
                        ],
                        tip: "werden + Infinitiv = Future. werden + Partizip II = Passive. Learn to spot the difference!",
                    },
                },
            ],
        },
        Branch {
            id: "moods",
            title: "Level 6: Verb Moods",
            topics: &[
                Topic {
                    id: "modal-verbs",
                    title: "6.1 Modal Verbs - Present & Konjunktiv II",
                    content: TopicContent {
                        concept: "Modal verbs express ability, permission, obligation, desire. They're used with another verb in infinitive at the END. Konjunktiv II forms (könnte, sollte) are like 'would/could/should'.",
                        key_points: &[
                            "können = can, to be able to → könnte = could",
                            "müssen = must, have to → müsste = would have to",
                            "dürfen = may, allowed to → dürfte = might be allowed",
                            "wollen = want to → wollte = would want",
                            "sollen = should → sollte = should (softer)",
                            "mögen = to like → möchte = would like",
                        ],
                        table: table(
                            &["English", "German Present", "Konjunktiv II"],
                            &[
                                &["I can do it", "Ich kann es machen", "Ich könnte es machen"],
                                &["I may do it", "Ich darf es machen", "Ich dürfte es machen"],
                                &["I must do it", "Ich muss es machen", "Ich müsste es machen"],
                                &["I shall do it", "Ich soll es machen", "Ich sollte es machen"],
                                &["I want to do it", "Ich will es machen", "Ich wollte es machen"],
                                &["I like to do it", "Ich mag es", "Ich möchte es machen"],
                            ],
                        ),
                        examples: &[
                            ex("Ich kann Deutsch sprechen.", "I can speak German."),
                            ex("Könnten Sie mir helfen?", "Could you help me? (polite)"),
                            ex("Du solltest mehr schlafen.", "You should sleep more."),
                        ],
                        tip: "Konjunktiv II is SUPER useful for politeness: 'Könnten Sie...' is more polite than 'Können Sie...'",
                    },
                },
                Topic {
                    id: "past-conditional",
                    title: "6.2 Past Conditional (hätte/wäre + Partizip II)",
                    content: TopicContent {
                        concept: "Past conditional = 'would have done' - expressing what would have happened (but didn't). Use hätte/wäre + Partizip II, or with a modal in infinitive.",
                        key_points: &[
                            "hätte + Partizip II = would have (haben verbs)",
                            "wäre + Partizip II = would have (sein verbs)",
                            "This is for counterfactual past situations",
                            "Often used with 'wenn' (if) clauses",
                        ],
                        table: table(
                            &["English", "German", "Example"],
                            &[
                                &["I could have done it", "Ich hätte es machen können", "Ich hätte das machen können."],
                                &["I would have had to", "Ich hätte es machen müssen", "Ich hätte gestern arbeiten müssen."],
                                &["I should have done it", "Ich hätte es machen sollen", "Ich hätte mehr lernen sollen."],
                                &["I would have liked it", "Ich hätte es gemocht", "Ich hätte das gemocht."],
                            ],
                        ),
                        examples: &[
                            ex("Ich hätte früher kommen sollen.", "I should have come earlier."),
                            ex("Wenn ich Zeit gehabt hätte, wäre ich gekommen.", "If I had had time, I would have come."),
                        ],
                        tip: "This chapter = missed/counterfactual past. 'Ich hätte... sollen' = I should have (but didn't)!",
                    },
                },
                Topic {
                    id: "konjunktiv2",
                    title: "6.5 Konjunktiv II (Wishes & Hypotheticals)",
                    content: TopicContent {
                        concept: "Konjunktiv II is for wishes, hypotheticals, and politeness. Use würde + Infinitiv (easy) or real Konj. II forms (wäre, hätte, könnte).",
                        key_points: &[
                            "Politeness: Könnten Sie mir helfen?",
                            "Wishes: Ich wünschte, ich wäre reich.",
                            "Hypothetical: Wenn ich Zeit hätte, würde ich reisen.",
                            "würde + Infinitiv = universal polite/hypothetical form",
                        ],
                        table: table(
                            &["Usage", "Example", "English"],
                            &[
                                &["Politeness", "Könnten Sie mir helfen?", "Could you help me?"],
                                &["Wish", "Ich hätte gern einen Kaffee.", "I would like a coffee."],
                                &["Hypothetical", "Wenn ich reich wäre...", "If I were rich..."],
                                &["würde form", "Ich würde das machen.", "I would do that."],
                            ],
                        ),
                        examples: &[
                            ex("Wenn ich Zeit hätte, würde ich mehr lesen.", "If I had time, I would read more."),
                            ex("Hätte ich das nur gewusst!", "If only I had known that!"),
                        ],
                        tip: "Learn these real Konj. II forms: wäre, hätte, könnte, müsste, dürfte, würde - they're everywhere!",
                    },
                },
                Topic {
                    id: "imperativ",
                    title: "6.6 Imperativ (Commands)",
                    content: TopicContent {
                        concept: "Imperativ is for commands and requests. There's no tense - it's always 'NOW!' Three forms: du, ihr, Sie.",
                        key_points: &[
                            "du-form: verb stem (+ e for some): Komm! Arbeite!",
                            "ihr-form: like present: Kommt! Arbeitet!",
                            "Sie-form: Infinitiv + Sie: Kommen Sie! Arbeiten Sie!",
                            "Irregular verbs may have vowel change in du-form",
                        ],
                        table: table(
                            &["Infinitive", "du", "ihr", "Sie"],
                            &[
                                &["kommen", "Komm!", "Kommt!", "Kommen Sie!"],
                                &["machen", "Mach!", "Macht!", "Machen Sie!"],
                                &["lesen", "Lies!", "Lest!", "Lesen Sie!"],
                                &["sein", "Sei!", "Seid!", "Seien Sie!"],
                            ],
                        ),
                        examples: &[
                            ex("Komm her!", "Come here! (informal)"),
                            ex("Bitte setzen Sie sich.", "Please sit down. (formal)"),
                        ],
                        tip: "Add 'bitte' to make commands polite: 'Kommen Sie bitte!' 'Hilf mir bitte!'",
                    },
                },
            ],
        },
    ],
};

pub const CASE_TREE: Tree = Tree {
    id: "cases",
    title: "CASES (Der Fall)",
    intro: "Cases are simply labels for sentence roles: who does what, who receives it, where it happens, and whose it is. Think of them as a roadmap for meaning.",
    branches: &[
        Branch {
            id: "case-foundations",
            title: "Level 1: Case Foundations",
            topics: &[
                Topic {
                    id: "nominativ",
                    title: "1.1 Nominativ - The Subject",
                    content: TopicContent {
                        concept: "Nominativ is the subject of a sentence: the person or thing doing the action. It simply means the doer, just like the English subject.",
                        key_points: &[
                            "Nominativ = who or what is doing the action",
                            "It matches the subject in English",
                            "Question test: Wer? (who) or Was? (what)",
                            "Articles and pronouns use nominative forms",
                        ],
                        table: table(
                            &["Role", "Question", "Example"],
                            &[
                                &["Subject", "Wer? / Was?", "Der Mann liest."],
                                &["Subject", "Wer?", "Ich lerne Deutsch."],
                                &["Subject", "Was?", "Das Buch ist neu."],
                            ],
                        ),
                        examples: &[
                            ex("Die Frau kocht.", "The woman cooks."),
                            ex("Mein Bruder arbeitet.", "My brother works."),
                        ],
                        tip: "If you can replace the noun with 'he/she/it' or 'I', you are usually in Nominativ.",
                    },
                },
                Topic {
                    id: "akkusativ",
                    title: "1.2 Akkusativ - The Direct Object",
                    content: TopicContent {
                        concept: "Akkusativ is the direct object, similar to English. It answers who/what receives the action. The key test is the question: Wen? or Was?",
                        key_points: &[
                            "Akkusativ = who/what the action happens to",
                            "Question test: Wen? (who) or Was? (what)",
                            "Many verbs need an Akkusativ object",
                            "Prepositions like durch, für, gegen, ohne, um take Akkusativ",
                        ],
                        table: table(
                            &["Question", "Answer", "Example"],
                            &[
                                &["Wen siehst du?", "Meinen Freund.", "Ich sehe meinen Freund."],
                                &["Was kaufst du?", "Das Brot.", "Ich kaufe das Brot."],
                                &["Wen ruft sie an?", "Ihre Mutter.", "Sie ruft ihre Mutter an."],
                            ],
                        ),
                        examples: &[
                            ex("Ich lese ein Buch.", "I read a book."),
                            ex("Er liebt seine Familie.", "He loves his family."),
                        ],
                        tip: "If the object answers Wen or Was, it is Akkusativ.",
                    },
                },
                Topic {
                    id: "dativ",
                    title: "1.3 Dativ - The Indirect Object",
                    content: TopicContent {
                        concept: "Dativ is similar to the English indirect object: to whom/for whom something happens. It also shows location without movement and time expressions.",
                        key_points: &[
                            "Dativ = to whom/for whom",
                            "Question test: Wem? (to whom)",
                            "Location without movement and time are often Dativ",
                            "Common verbs: helfen, danken, geben",
                        ],
                        table: table(
                            &["Use", "Question", "Example"],
                            &[
                                &["Indirect object", "Wem?", "Ich gebe dem Kind ein Buch."],
                                &["Location", "Wo?", "Ich bin in der Schule."],
                                &["Time", "Wann?", "Am Montag arbeite ich."],
                            ],
                        ),
                        examples: &[
                            ex("Ich helfe meinem Bruder.", "I help my brother."),
                            ex("Wir wohnen in der Stadt.", "We live in the city."),
                        ],
                        tip: "If you can ask Wo? or Wem?, you are likely in Dativ.",
                    },
                },
                Topic {
                    id: "genitiv",
                    title: "1.4 Genitiv - Possession",
                    content: TopicContent {
                        concept: "Genitiv shows possession or relationship, like English 's or 'of'. In the beginning, just see it as ownership.",
                        key_points: &[
                            "Genitiv = possession/relationship",
                            "English parallel: my father's book = das Buch meines Vaters",
                            "Question test: Wessen? (whose)",
                            "Some prepositions also require Genitiv",
                        ],
                        table: table(
                            &["Question", "Answer", "Example"],
                            &[
                                &["Wessen Buch?", "Meines Vaters.", "Das ist das Buch meines Vaters."],
                                &["Wessen Auto?", "Der Lehrerin.", "Das ist das Auto der Lehrerin."],
                            ],
                        ),
                        examples: &[
                            ex("Die Farbe des Hauses ist blau.", "The color of the house is blue."),
                            ex("Das Ende der Woche kommt bald.", "The end of the week is soon."),
                        ],
                        tip: "Start by recognizing Genitiv as possession. You can learn the endings after the idea feels clear.",
                    },
                },
            ],
        },
        Branch {
            id: "finding-case",
            title: "Level 2: Finding the Case",
            topics: &[
                Topic {
                    id: "question-test",
                    title: "2.1 The Question Test",
                    content: TopicContent {
                        concept: "The easiest way to find the case is to ask a question about the noun: Wer/Was for Nominativ, Wen/Was for Akkusativ, Wem for Dativ, Wessen for Genitiv.",
                        key_points: &[
                            "Wer/Was -> Nominativ",
                            "Wen/Was -> Akkusativ",
                            "Wem -> Dativ",
                            "Wessen -> Genitiv",
                        ],
                        table: table(
                            &["Case", "Question", "Example"],
                            &[
                                &["Nominativ", "Wer? / Was?", "Wer lernt? Ich lerne."],
                                &["Akkusativ", "Wen? / Was?", "Was liest du? Ein Buch."],
                                &["Dativ", "Wem?", "Wem gibst du das? Meiner Schwester."],
                                &["Genitiv", "Wessen?", "Wessen Fahrrad? Meines Bruders."],
                            ],
                        ),
                        examples: &[
                            ex("Wen siehst du? Ich sehe den Lehrer.", "Who do you see? I see the teacher."),
                            ex("Wem hilfst du? Ich helfe meinem Freund.", "Who are you helping? I help my friend."),
                        ],
                        tip: "If you are unsure, ask the question out loud and see which answer fits.",
                    },
                },
                Topic {
                    id: "movement-location",
                    title: "2.2 Movement vs Location",
                    content: TopicContent {
                        concept: "With two-way prepositions, movement uses Akkusativ and location uses Dativ. Think: Where are you? (Dativ) Where to? (Akkusativ).",
                        key_points: &[
                            "Wo? (where) -> Dativ",
                            "Wohin? (where to) -> Akkusativ",
                            "Two-way prepositions: in, an, auf, über, unter, vor, hinter, neben, zwischen",
                            "Same preposition, different case based on movement",
                        ],
                        table: table(
                            &["Question", "Case", "Example"],
                            &[
                                &["Wo?", "Dativ", "Ich bin im Park."],
                                &["Wohin?", "Akkusativ", "Ich gehe in den Park."],
                                &["Wo?", "Dativ", "Das Buch liegt auf dem Tisch."],
                                &["Wohin?", "Akkusativ", "Ich lege das Buch auf den Tisch."],
                            ],
                        ),
                        examples: &[
                            ex("Wir sitzen an dem Fenster.", "We sit by the window."),
                            ex("Wir setzen uns an das Fenster.", "We sit down by the window."),
                        ],
                        tip: "Movement = change of location. No movement = Dativ.",
                    },
                },
            ],
        },
        Branch {
            id: "word-changes",
            title: "Level 3: How Words Change",
            topics: &[
                Topic {
                    id: "pronouns-by-case",
                    title: "3.1 Personal and Reflexive Pronouns",
                    content: TopicContent {
                        concept: "Cases change personal and reflexive pronouns. Some forms look irregular, but the idea is the same as English: subject vs object. Compare 'I' to 'me' or 'he' to 'him'.",
                        key_points: &[
                            "ich -> mich (Akk) -> mir (Dat)",
                            "du -> dich (Akk) -> dir (Dat)",
                            "er -> ihn (Akk) -> ihm (Dat)",
                            "Reflexive: mich/dich/sich/uns/euch/sich",
                            "Genitiv pronouns exist but are less common in modern speech",
                        ],
                        table: table(
                            &["Nominativ", "Akkusativ", "Dativ", "Genitiv"],
                            &[
                                &["ich", "mich", "mir", "meiner"],
                                &["du", "dich", "dir", "deiner"],
                                &["er", "ihn", "ihm", "seiner"],
                                &["sie", "sie", "ihr", "ihrer"],
                                &["es", "es", "ihm", "seiner"],
                                &["wir", "uns", "uns", "unserer"],
                                &["ihr", "euch", "euch", "eurer"],
                                &["sie/Sie", "sie/Sie", "ihnen/Ihnen", "ihrer/Ihrer"],
                            ],
                        ),
                        examples: &[
                            ex("Ich sehe ihn.", "I see him."),
                            ex("Er hilft mir.", "He helps me."),
                        ],
                        tip: "If it sounds like 'me/him/her' in English, it is probably Akkusativ or Dativ in German.",
                    },
                },
                Topic {
                    id: "articles-by-case",
                    title: "3.2 Definite and Indefinite Articles",
                    content: TopicContent {
                        concept: "Articles change with case. The biggest change is the masculine Akkusativ (der -> den) and the Dativ/Genitiv endings.",
                        key_points: &[
                            "Definite: der/die/das change per case",
                            "Indefinite: ein/eine change per case",
                            "Masculine Akkusativ: der -> den",
                            "Dativ plural adds -n",
                        ],
                        table: table(
                            &["Case", "Masculine", "Feminine", "Neuter", "Plural"],
                            &[
                                &["Nominativ", "der", "die", "das", "die"],
                                &["Akkusativ", "den", "die", "das", "die"],
                                &["Dativ", "dem", "der", "dem", "den"],
                                &["Genitiv", "des", "der", "des", "der"],
                            ],
                        ),
                        examples: &[
                            ex("Ich sehe den Mann.", "I see the man."),
                            ex("Ich helfe der Frau.", "I help the woman."),
                        ],
                        tip: "Focus on the masculine changes first: der -> den -> dem -> des.",
                    },
                },
            ],
        },
    ],
};

pub const TREES: &[&Tree] = &[&VERB_TREE, &CASE_TREE];

/// Compact reference tables for the cheat-sheet screen.
pub const CHEAT_SHEET: &[TopicTable] = &[
    TopicTable {
        title: Some("Definite Articles by Case"),
        headers: &["Case", "Masculine", "Feminine", "Neuter", "Plural"],
        rows: &[
            &["Nominativ", "der", "die", "das", "die"],
            &["Akkusativ", "den", "die", "das", "die"],
            &["Dativ", "dem", "der", "dem", "den"],
            &["Genitiv", "des", "der", "des", "der"],
        ],
    },
    TopicTable {
        title: Some("Personal Pronouns by Case"),
        headers: &["Nominativ", "Akkusativ", "Dativ"],
        rows: &[
            &["ich", "mich", "mir"],
            &["du", "dich", "dir"],
            &["er", "ihn", "ihm"],
            &["sie", "sie", "ihr"],
            &["es", "es", "ihm"],
            &["wir", "uns", "uns"],
            &["ihr", "euch", "euch"],
            &["sie/Sie", "sie/Sie", "ihnen/Ihnen"],
        ],
    },
    TopicTable {
        title: Some("Prepositions by Case"),
        headers: &["Case", "Prepositions"],
        rows: &[
            &["Accusative (DOGFU)", "durch, ohne, gegen, für, um"],
            &["Dative", "aus, bei, mit, nach, seit, von, zu"],
            &["Genitive", "während, wegen, trotz"],
            &["Two-way", "in, an, auf, über, unter, vor, hinter, neben, zwischen"],
        ],
    },
    TopicTable {
        title: Some("Connector Types"),
        headers: &["Type", "Connectors", "Verb Position"],
        rows: &[
            &["0 (Coordinating)", "und, oder, aber, denn, sondern", "Normal (position 2)"],
            &["1 (Subordinating)", "weil, dass, wenn, obwohl, als, bevor", "End of clause"],
            &["2 (Adverbs)", "deshalb, trotzdem, dann, danach", "Right after connector"],
        ],
    },
    TopicTable {
        title: Some("Modal Verbs"),
        headers: &["Infinitive", "ich-form", "Konjunktiv II", "Meaning"],
        rows: &[
            &["können", "kann", "könnte", "can / be able to"],
            &["müssen", "muss", "müsste", "must / have to"],
            &["wollen", "will", "wollte", "want to"],
            &["sollen", "soll", "sollte", "should"],
            &["dürfen", "darf", "dürfte", "may / be allowed"],
            &["mögen", "mag", "möchte", "like / would like"],
        ],
    },
    TopicTable {
        title: Some("Spoken-Past Survival Kit (Präteritum)"),
        headers: &["Verb", "ich/er-form"],
        rows: &[
            &["sein", "war"],
            &["haben", "hatte"],
            &["werden", "wurde"],
            &["können", "konnte"],
            &["müssen", "musste"],
            &["wollen", "wollte"],
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foundation_lessons_map_to_catalog() {
        for lesson in FOUNDATION_LESSONS {
            assert!(
                crate::content::lessons::find(lesson.lesson_id).is_some(),
                "foundation lesson references unknown catalog id {}",
                lesson.lesson_id
            );
        }
        assert!(foundation_for("personal-pronouns").is_some());
        assert!(foundation_for("verb-tenses").is_none());
    }

    #[test]
    fn table_rows_match_header_width() {
        let mut all_tables: Vec<&TopicTable> = CHEAT_SHEET.iter().collect();
        for tree in TREES {
            for branch in tree.branches {
                for topic in branch.topics {
                    all_tables.push(&topic.content.table);
                }
            }
        }
        for lesson in FOUNDATION_LESSONS {
            all_tables.push(&lesson.content.table);
        }
        for t in all_tables {
            for row in t.rows {
                assert_eq!(row.len(), t.headers.len(), "ragged table {:?}", t.title);
            }
        }
    }

    #[test]
    fn tree_topic_ids_are_unique_within_tree() {
        for tree in TREES {
            let mut seen = std::collections::HashSet::new();
            for branch in tree.branches {
                for topic in branch.topics {
                    assert!(seen.insert(topic.id), "duplicate topic id {} in {}", topic.id, tree.id);
                }
            }
        }
    }
}
