/// Grammatical article of a German noun.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Article {
    Der,
    Die,
    Das,
}

impl Article {
    pub fn as_str(self) -> &'static str {
        match self {
            Article::Der => "der",
            Article::Die => "die",
            Article::Das => "das",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VocabEntry {
    pub id: u32,
    pub german: &'static str,
    pub english: &'static str,
    pub category: &'static str,
    pub article: Option<Article>,
    pub starred: bool,
    pub note: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { id: "all", label: "All Words" },
    Category { id: "pronouns", label: "Pronouns" },
    Category { id: "possessives", label: "Possessives" },
    Category { id: "prepositions", label: "Prepositions" },
    Category { id: "connectors", label: "Connectors" },
    Category { id: "question-words", label: "Question Words" },
    Category { id: "modal-verbs", label: "Modal Verbs" },
    Category { id: "verb-tenses", label: "Verb Tenses" },
    Category { id: "werden", label: "Werden Uses" },
    Category { id: "passive", label: "Passive Voice" },
    Category { id: "konjunktiv", label: "Konjunktiv" },
    Category { id: "reflexive-verbs", label: "Reflexive Verbs" },
    Category { id: "separable-verbs", label: "Separable Verbs" },
    Category { id: "regular-verbs", label: "Regular Verbs" },
    Category { id: "irregular-verbs", label: "Irregular Verbs" },
    Category { id: "mixed-verbs", label: "Mixed Verbs" },
    Category { id: "nouns", label: "Nouns" },
    Category { id: "verbs", label: "Verbs + Prep" },
];

pub fn category_label(id: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.label)
        .unwrap_or("Other")
}

/// Maps a vocabulary category to the lesson it belongs to. The map is
/// deliberately partial: a category without an entry matches no lesson
/// filter (see DESIGN.md).
const CATEGORY_LESSONS: &[(&str, &str)] = &[
    ("pronouns", "personal-pronouns"),
    ("possessives", "possessive-articles"),
    ("prepositions", "prepositions-by-case"),
    ("connectors", "connectors-verb-position"),
    ("question-words", "question-words"),
    ("modal-verbs", "modal-verbs"),
    ("verb-tenses", "verb-tenses"),
    ("werden", "werden-forms"),
    ("passive", "passive-voice"),
    ("konjunktiv", "konjunktiv-2"),
    ("reflexive-verbs", "reflexive-verbs"),
    ("separable-verbs", "separable-verbs"),
    ("nouns", "cases-basics"),
    ("verbs", "verbs-with-prep"),
    ("regular-verbs", "verb-tenses"),
    ("irregular-verbs", "verb-tenses"),
    ("mixed-verbs", "verb-tenses"),
];

pub fn category_lesson(category: &str) -> Option<&'static str> {
    CATEGORY_LESSONS
        .iter()
        .find(|(cat, _)| *cat == category)
        .map(|(_, lesson)| *lesson)
}

const fn v(
    id: u32,
    german: &'static str,
    english: &'static str,
    category: &'static str,
    starred: bool,
    note: &'static str,
) -> VocabEntry {
    VocabEntry { id, german, english, category, article: None, starred, note }
}

const fn noun(
    id: u32,
    german: &'static str,
    english: &'static str,
    article: Article,
    starred: bool,
    note: &'static str,
) -> VocabEntry {
    VocabEntry { id, german, english, category: "nouns", article: Some(article), starred, note }
}

pub const VOCABULARY: &[VocabEntry] = &[
    // Personal pronouns
    v(1, "ich", "I", "pronouns", true, "Always lowercase unless starting sentence"),
    v(2, "du", "you (informal singular)", "pronouns", false, "For friends, family, children"),
    v(3, "er", "he", "pronouns", false, "Masculine"),
    v(4, "sie", "she / they", "pronouns", true, "Context determines meaning"),
    v(5, "es", "it", "pronouns", false, "Neuter or impersonal"),
    v(6, "wir", "we", "pronouns", false, ""),
    v(7, "ihr", "you (informal plural)", "pronouns", false, "Group of friends"),
    v(8, "Sie", "you (formal)", "pronouns", true, "Always capitalized!"),
    // Possessives
    v(9, "mein", "my", "possessives", true, "From ich"),
    v(10, "dein", "your (informal)", "possessives", false, "From du"),
    v(11, "sein", "his / its", "possessives", false, "From er/es"),
    v(12, "ihr", "her / their", "possessives", true, "From sie"),
    v(13, "unser", "our", "possessives", false, "From wir"),
    v(14, "euer", "your (plural informal)", "possessives", false, "From ihr - loses 'e' with endings"),
    v(15, "Ihr", "your (formal)", "possessives", true, "From Sie - always capitalized"),
    // Prepositions - Accusative
    v(16, "durch", "through", "prepositions", false, "Always Accusative - DOGFU"),
    v(17, "für", "for", "prepositions", true, "Always Accusative - DOGFU"),
    v(18, "gegen", "against", "prepositions", false, "Always Accusative - DOGFU"),
    v(19, "ohne", "without", "prepositions", true, "Always Accusative - DOGFU"),
    v(20, "um", "around / at (time)", "prepositions", false, "Always Accusative - DOGFU"),
    // Prepositions - Dative
    v(21, "aus", "out of / from", "prepositions", true, "Always Dative"),
    v(22, "bei", "at / near / with", "prepositions", false, "Always Dative"),
    v(23, "mit", "with", "prepositions", true, "Always Dative"),
    v(24, "nach", "after / to (places)", "prepositions", false, "Always Dative"),
    v(25, "seit", "since / for (time)", "prepositions", false, "Always Dative"),
    v(26, "von", "from / of", "prepositions", true, "Always Dative"),
    v(27, "zu", "to", "prepositions", true, "Always Dative - zum/zur"),
    // Prepositions - Genitive
    v(200, "während", "during", "prepositions", false, "Always Genitive"),
    v(201, "wegen", "because of", "prepositions", true, "Always Genitive"),
    v(202, "trotz", "despite", "prepositions", false, "Always Genitive"),
    // Prepositions - Two-way
    v(203, "in", "in / into", "prepositions", true, "Two-way (Akk/Dativ)"),
    v(204, "an", "at / on", "prepositions", false, "Two-way (Akk/Dativ)"),
    v(205, "auf", "on / onto", "prepositions", false, "Two-way (Akk/Dativ)"),
    v(206, "über", "over / about", "prepositions", false, "Two-way (Akk/Dativ)"),
    v(207, "unter", "under", "prepositions", false, "Two-way (Akk/Dativ)"),
    v(208, "vor", "in front of / before", "prepositions", false, "Two-way (Akk/Dativ)"),
    v(209, "hinter", "behind", "prepositions", false, "Two-way (Akk/Dativ)"),
    v(210, "neben", "next to", "prepositions", false, "Two-way (Akk/Dativ)"),
    v(211, "zwischen", "between", "prepositions", false, "Two-way (Akk/Dativ)"),
    // Connectors - Type 0 (no verb change)
    v(28, "und", "and", "connectors", true, "Type 0 - verb position unchanged"),
    v(29, "oder", "or", "connectors", false, "Type 0 - verb position unchanged"),
    v(30, "aber", "but", "connectors", true, "Type 0 - verb position unchanged"),
    v(31, "denn", "because (coord.)", "connectors", false, "Type 0 - verb position unchanged"),
    v(32, "sondern", "but rather", "connectors", false, "Type 0 - after negative"),
    v(213, "doch", "but / however", "connectors", false, "Type 0 - often after negation"),
    // Connectors - Type 1 (verb to end)
    v(33, "weil", "because", "connectors", true, "Type 1 - verb goes to END"),
    v(34, "dass", "that", "connectors", true, "Type 1 - verb goes to END"),
    v(35, "wenn", "if / when", "connectors", true, "Type 1 - verb goes to END"),
    v(36, "obwohl", "although", "connectors", false, "Type 1 - verb goes to END"),
    v(37, "als", "when (past)", "connectors", false, "Type 1 - verb goes to END"),
    v(38, "bevor", "before", "connectors", false, "Type 1 - verb goes to END"),
    v(39, "nachdem", "after", "connectors", false, "Type 1 - verb goes to END"),
    v(214, "da", "since / because", "connectors", false, "Type 1 - verb goes to END"),
    v(215, "falls", "in case", "connectors", false, "Type 1 - verb goes to END"),
    v(216, "sofern", "provided that", "connectors", false, "Type 1 - verb goes to END"),
    v(217, "obgleich", "although (formal)", "connectors", false, "Type 1 - verb goes to END"),
    v(218, "obschon", "although (formal/rare)", "connectors", false, "Type 1 - verb goes to END"),
    v(219, "ehe", "before (formal)", "connectors", false, "Type 1 - verb goes to END"),
    v(220, "seit", "since", "connectors", false, "Type 1 - verb goes to END"),
    v(221, "seitdem", "since (then)", "connectors", false, "Type 1 - verb goes to END"),
    v(222, "sobald", "as soon as", "connectors", false, "Type 1 - verb goes to END"),
    v(223, "solange", "as long as", "connectors", false, "Type 1 - verb goes to END"),
    v(224, "während", "while", "connectors", false, "Type 1 - verb goes to END"),
    v(225, "bis", "until", "connectors", false, "Type 1 - verb goes to END"),
    v(226, "sowie", "as soon as / once", "connectors", false, "Type 1 - verb goes to END"),
    v(227, "damit", "so that", "connectors", false, "Type 1 - verb goes to END"),
    v(228, "indem", "by doing", "connectors", false, "Type 1 - verb goes to END"),
    v(229, "als ob", "as if", "connectors", false, "Type 1 - verb goes to END"),
    v(230, "als wenn", "as if (colloquial)", "connectors", false, "Type 1 - verb goes to END"),
    v(231, "ob", "whether / if", "connectors", false, "Type 1 - verb goes to END"),
    v(232, "auch wenn", "even if", "connectors", false, "Type 1 - verb goes to END"),
    v(233, "nur wenn", "only if", "connectors", false, "Type 1 - verb goes to END"),
    v(234, "außer wenn", "except if", "connectors", false, "Type 1 - verb goes to END"),
    v(235, "ohne dass", "without (doing)", "connectors", false, "Type 1 - verb goes to END"),
    v(236, "statt dass", "instead of (doing)", "connectors", false, "Type 1 - verb goes to END"),
    v(237, "anstatt dass", "instead of (doing)", "connectors", false, "Type 1 - verb goes to END"),
    v(238, "so dass", "so that / so ... that", "connectors", false, "Type 1 - verb goes to END"),
    v(239, "sodass", "so that / so ... that", "connectors", false, "Type 1 - verb goes to END"),
    v(240, "je nachdem, ob", "depending on whether", "connectors", false, "Type 1 - verb goes to END"),
    // Connectors - Type 2 (verb first after)
    v(40, "deshalb", "therefore", "connectors", true, "Type 2 - verb comes FIRST after"),
    v(41, "trotzdem", "nevertheless", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(42, "dann", "then", "connectors", true, "Type 2 - verb comes FIRST after"),
    v(43, "danach", "after that", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(212, "außerdem", "besides / furthermore", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(241, "deswegen", "for that reason", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(242, "daher", "therefore", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(243, "darum", "therefore", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(244, "also", "so / therefore", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(245, "folglich", "consequently", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(246, "somit", "thus", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(247, "dennoch", "nevertheless", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(248, "allerdings", "however / admittedly", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(249, "hingegen", "in contrast", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(250, "dagegen", "on the other hand", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(251, "ebenfalls", "likewise", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(252, "auch", "also / too", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(253, "dazu", "in addition", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(254, "später", "later", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(255, "zuerst", "first", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(256, "anschließend", "afterwards", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(257, "inzwischen", "meanwhile", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(258, "schließlich", "finally / after all", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(259, "zum Beispiel", "for example", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(260, "nämlich", "namely / because (explains)", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(261, "kurz gesagt", "in short", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(262, "tatsächlich", "actually / in fact", "connectors", false, "Type 2 - verb comes FIRST after"),
    v(263, "sonst", "otherwise / else", "connectors", false, "Type 2 - verb comes FIRST after"),
    // Question words
    v(44, "was", "what", "question-words", true, ""),
    v(45, "wer", "who", "question-words", true, "Nominative"),
    v(46, "wen", "whom (acc)", "question-words", false, "Accusative"),
    v(47, "wem", "whom (dat)", "question-words", false, "Dative"),
    v(48, "wo", "where", "question-words", true, ""),
    v(49, "wann", "when", "question-words", true, ""),
    v(50, "warum", "why", "question-words", true, ""),
    v(51, "wie", "how", "question-words", true, ""),
    v(52, "worüber", "about what", "question-words", true, "For THINGS only"),
    v(53, "womit", "with what", "question-words", false, "For THINGS only"),
    v(54, "worauf", "on what / for what", "question-words", true, "For THINGS only"),
    v(55, "mit wem", "with whom", "question-words", true, "For PEOPLE only"),
    // Modal verbs - present
    v(56, "können (ich kann)", "can / to be able to", "modal-verbs", true, "Present: Ich kann es machen"),
    v(57, "müssen (ich muss)", "must / have to", "modal-verbs", true, "Present: Ich muss es machen"),
    v(58, "wollen (ich will)", "want to", "modal-verbs", true, "Present: Ich will es machen"),
    v(59, "sollen (ich soll)", "should / supposed to", "modal-verbs", false, "Present: Ich soll es machen"),
    v(60, "dürfen (ich darf)", "may / allowed to", "modal-verbs", false, "Present: Ich darf es machen"),
    v(61, "mögen (ich mag)", "to like", "modal-verbs", false, "Ich mache es gern (preferred)"),
    // Modal verbs - Konjunktiv II
    v(62, "könnte", "could (Konj. II)", "modal-verbs", true, "Ich könnte morgen kommen"),
    v(63, "müsste", "would have to", "modal-verbs", false, "Ich müsste mehr lernen"),
    v(64, "dürfte", "might be allowed", "modal-verbs", false, "Ich dürfte länger bleiben"),
    v(65, "sollte", "should (softer)", "modal-verbs", true, "Ich sollte früher gehen"),
    v(66, "wollte", "would want", "modal-verbs", false, "Ich wollte dir helfen"),
    v(67, "möchte", "would like to", "modal-verbs", true, "Ich möchte einen Kaffee"),
    // Verb tenses - active voice
    v(68, "Präsens: verb stem + ending", "Present: I do / am doing", "verb-tenses", true, "Ich lese ein Buch. (I read)"),
    v(69, "Präteritum: stem + prät. ending", "Simple Past: I did (written)", "verb-tenses", false, "Ich las ein Buch. (I read-past)"),
    v(70, "Perfekt: haben/sein + Partizip II", "Perfect: I have done (spoken)", "verb-tenses", true, "Ich habe gelesen. / Ich bin gegangen."),
    v(71, "Plusquamperfekt: hatte/war + P.II", "Past Perfect: I had done", "verb-tenses", false, "Ich hatte gelesen. / Ich war gegangen."),
    v(72, "Futur I: werden + Infinitiv", "Future: I will do", "verb-tenses", true, "Ich werde lesen."),
    v(73, "Futur II: werden + P.II + haben/sein", "Future Perfect: I will have done", "verb-tenses", false, "Ich werde gelesen haben."),
    // Werden - multiple uses
    v(74, "werden (Vollverb)", "to become", "werden", true, "Er wird müde. (He becomes tired)"),
    v(75, "werden + Infinitiv", "will (Future)", "werden", true, "Ich werde lernen. (I will learn)"),
    v(76, "werden + Partizip II", "is being done (Passive)", "werden", true, "Es wird gemacht. (It is being done)"),
    v(77, "würde + Infinitiv", "would (Konjunktiv II)", "werden", true, "Ich würde gehen. (I would go)"),
    v(78, "Er wird müde.", "He becomes tired. (Präsens)", "werden", false, "Full verb - present"),
    v(79, "Er wurde müde.", "He became tired. (Präteritum)", "werden", false, "Full verb - simple past"),
    v(80, "Er ist müde geworden.", "He has become tired. (Perfekt)", "werden", false, "Full verb - perfect (sein + geworden)"),
    v(81, "Er wird müde werden.", "He will become tired. (Futur I)", "werden", false, "Full verb - future"),
    // Passive voice formulas
    v(82, "wird + Partizip II", "is being done (Present Passive)", "passive", true, "Das Auto wird repariert."),
    v(83, "wurde + Partizip II", "was done (Präteritum Passive)", "passive", true, "Das Auto wurde repariert."),
    v(84, "ist + P.II + worden", "has been done (Perfekt Passive)", "passive", true, "Das Auto ist repariert worden."),
    v(85, "war + P.II + worden", "had been done (Plusquam. Passive)", "passive", false, "Das Auto war repariert worden."),
    v(86, "wird + P.II + werden", "will be done (Futur Passive)", "passive", false, "Das Auto wird repariert werden."),
    v(87, "muss + P.II + werden", "must be done", "passive", true, "Das Buch muss gelesen werden."),
    v(88, "kann + P.II + werden", "can be done", "passive", false, "Das kann gemacht werden."),
    // Konjunktiv II
    v(89, "würde + Infinitiv", "would (general)", "konjunktiv", true, "Ich würde das machen."),
    v(90, "wäre", "would be (sein)", "konjunktiv", true, "Das wäre toll!"),
    v(91, "hätte", "would have (haben)", "konjunktiv", true, "Ich hätte gern einen Kaffee."),
    v(92, "hätte + P.II + können", "could have done", "konjunktiv", true, "Ich hätte das machen können."),
    v(93, "hätte + P.II + müssen", "would have had to", "konjunktiv", false, "Ich hätte gestern arbeiten müssen."),
    v(94, "hätte + P.II + sollen", "should have done", "konjunktiv", true, "Ich hätte mehr lernen sollen."),
    v(95, "wäre + P.II (sein verbs)", "would have gone/been", "konjunktiv", false, "Ich wäre gegangen."),
    v(96, "könnte + P.II + haben", "may/might have done", "konjunktiv", true, "Er könnte das gesagt haben."),
    v(97, "muss + P.II + haben", "must have done", "konjunktiv", true, "Er muss den Fehler gemacht haben."),
    v(98, "soll + P.II + haben", "is said to have done", "konjunktiv", false, "Er soll viel verdient haben."),
    // Reflexive verbs
    v(99, "sich freuen auf + Akk", "to look forward to", "reflexive-verbs", true, "Ich freue mich auf..."),
    v(100, "sich freuen über + Akk", "to be happy about", "reflexive-verbs", true, "Sie freut sich über..."),
    v(101, "sich interessieren für", "to be interested in", "reflexive-verbs", true, "Er interessiert sich für..."),
    v(102, "sich treffen", "to meet (each other)", "reflexive-verbs", false, "Wir treffen uns"),
    v(103, "sich vorstellen", "to imagine / introduce", "reflexive-verbs", true, "Ich stelle mir vor..."),
    v(104, "sich erinnern an + Akk", "to remember", "reflexive-verbs", true, "Ich erinnere mich an..."),
    // Separable verbs
    v(105, "aufstehen", "to get up", "separable-verbs", true, "Ich stehe auf. / Ich bin aufgestanden."),
    v(106, "anfangen", "to begin", "separable-verbs", true, "Es fängt an. / Es hat angefangen."),
    v(107, "mitkommen", "to come along", "separable-verbs", false, "Kommst du mit? / Bist du mitgekommen?"),
    v(108, "einkaufen", "to shop", "separable-verbs", false, "Ich kaufe ein. / Ich habe eingekauft."),
    v(109, "anrufen", "to call", "separable-verbs", true, "Ich rufe an. / Ich habe angerufen."),
    v(110, "zurückkommen", "to come back", "separable-verbs", false, "Er kommt zurück. / Er ist zurückgekommen."),
    // Nouns with articles
    noun(111, "der Mann", "the man", Article::Der, false, "Masculine"),
    noun(112, "die Frau", "the woman", Article::Die, false, "Feminine"),
    noun(113, "das Kind", "the child", Article::Das, false, "Neuter"),
    noun(114, "die Zeitung", "the newspaper", Article::Die, true, "-ung = feminine"),
    noun(115, "das Mädchen", "the girl", Article::Das, true, "-chen = neuter (always!)"),
    noun(116, "der Lehrer", "the teacher (m)", Article::Der, false, "-er person = masculine"),
    // Verbs with prepositions
    v(117, "warten auf + Akk", "to wait for", "verbs", true, "Ich warte auf den Bus"),
    v(118, "denken an + Akk", "to think about", "verbs", true, "Ich denke an dich"),
    v(119, "träumen von + Dat", "to dream of", "verbs", false, "Er träumt von..."),
    v(120, "helfen + Dat", "to help", "verbs", true, "DATIVE verb! Ich helfe dir"),
    v(121, "gefallen + Dat", "to please", "verbs", true, "DATIVE verb! Es gefällt mir"),
    v(122, "Angst haben vor + Dat", "to be afraid of", "verbs", false, "Sie hat Angst vor Spinnen"),
    // Regular verbs
    v(264, "machen", "to do / make", "regular-verbs", true, "ich mache, ich machte, ich habe gemacht"),
    v(265, "lernen", "to learn", "regular-verbs", true, "ich lerne, ich lernte, ich habe gelernt"),
    v(266, "arbeiten", "to work", "regular-verbs", false, "ich arbeite, ich arbeitete, ich habe gearbeitet"),
    v(267, "fragen", "to ask", "regular-verbs", false, "ich frage, ich fragte, ich habe gefragt"),
    v(268, "antworten", "to answer", "regular-verbs", false, "ich antworte, ich antwortete, ich habe geantwortet"),
    v(269, "spielen", "to play", "regular-verbs", false, "ich spiele, ich spielte, ich habe gespielt"),
    v(270, "brauchen", "to need", "regular-verbs", false, "ich brauche, ich brauchte, ich habe gebraucht"),
    v(271, "sagen", "to say", "regular-verbs", true, "ich sage, ich sagte, ich habe gesagt"),
    v(272, "kaufen", "to buy", "regular-verbs", false, "ich kaufe, ich kaufte, ich habe gekauft"),
    v(273, "wohnen", "to live / reside", "regular-verbs", false, "ich wohne, ich wohnte, ich habe gewohnt"),
    // Irregular (strong) verbs
    v(274, "sein", "to be", "irregular-verbs", true, "ich bin, ich war, ich bin gewesen"),
    v(275, "haben", "to have", "irregular-verbs", true, "ich habe, ich hatte, ich habe gehabt"),
    v(276, "werden", "to become", "irregular-verbs", true, "ich werde, ich wurde, ich bin geworden"),
    v(277, "gehen", "to go", "irregular-verbs", true, "ich gehe, ich ging, ich bin gegangen"),
    v(278, "kommen", "to come", "irregular-verbs", true, "ich komme, ich kam, ich bin gekommen"),
    v(279, "sehen", "to see", "irregular-verbs", true, "ich sehe, ich sah, ich habe gesehen"),
    v(280, "geben", "to give", "irregular-verbs", false, "ich gebe, ich gab, ich habe gegeben"),
    v(281, "nehmen", "to take", "irregular-verbs", false, "ich nehme, ich nahm, ich habe genommen"),
    v(282, "sprechen", "to speak", "irregular-verbs", false, "ich spreche, ich sprach, ich habe gesprochen"),
    v(283, "fahren", "to drive / ride", "irregular-verbs", false, "ich fahre, ich fuhr, ich bin gefahren"),
    v(284, "essen", "to eat", "irregular-verbs", false, "ich esse, ich aß, ich habe gegessen"),
    v(285, "trinken", "to drink", "irregular-verbs", false, "ich trinke, ich trank, ich habe getrunken"),
    v(286, "lesen", "to read", "irregular-verbs", false, "ich lese, ich las, ich habe gelesen"),
    v(287, "schreiben", "to write", "irregular-verbs", false, "ich schreibe, ich schrieb, ich habe geschrieben"),
    v(288, "finden", "to find", "irregular-verbs", false, "ich finde, ich fand, ich habe gefunden"),
    v(289, "stehen", "to stand", "irregular-verbs", false, "ich stehe, ich stand, ich habe gestanden"),
    v(290, "liegen", "to lie", "irregular-verbs", false, "ich liege, ich lag, ich habe gelegen"),
    // Mixed verbs
    v(291, "bringen", "to bring", "mixed-verbs", false, "ich bringe, ich brachte, ich habe gebracht"),
    v(292, "denken", "to think", "mixed-verbs", false, "ich denke, ich dachte, ich habe gedacht"),
    v(293, "wissen", "to know", "mixed-verbs", false, "ich weiß, ich wusste, ich habe gewusst"),
    v(294, "kennen", "to know (someone/place)", "mixed-verbs", false, "ich kenne, ich kannte, ich habe gekannt"),
    v(295, "rennen", "to run", "mixed-verbs", false, "ich renne, ich rannte, ich bin gerannt"),
    v(296, "brennen", "to burn", "mixed-verbs", false, "ich brenne, ich brannte, ich habe gebrannt"),
    v(297, "nennen", "to name", "mixed-verbs", false, "ich nenne, ich nannte, ich habe genannt"),
    v(298, "denken an + Akk", "to think about", "verbs", false, "Ich denke an dich"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn entry_ids_are_unique() {
        let ids: HashSet<u32> = VOCABULARY.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), VOCABULARY.len());
    }

    #[test]
    fn every_category_is_listed() {
        for entry in VOCABULARY {
            assert!(
                CATEGORIES.iter().any(|c| c.id == entry.category),
                "unlisted category {} (entry {})",
                entry.category,
                entry.id
            );
        }
    }

    #[test]
    fn mapped_lessons_exist_in_catalog() {
        for (_, lesson_id) in CATEGORY_LESSONS {
            assert!(
                crate::content::lessons::find(lesson_id).is_some(),
                "category map points at unknown lesson {lesson_id}"
            );
        }
    }

    #[test]
    fn category_lesson_is_partial_by_design() {
        assert_eq!(category_lesson("pronouns"), Some("personal-pronouns"));
        assert_eq!(category_lesson("regular-verbs"), Some("verb-tenses"));
        // "all" is a filter sentinel, not a real category; no mapping.
        assert_eq!(category_lesson("all"), None);
    }

    #[test]
    fn articles_only_on_nouns() {
        for entry in VOCABULARY {
            if entry.article.is_some() {
                assert_eq!(entry.category, "nouns", "entry {} has stray article", entry.id);
            }
        }
    }

    #[test]
    fn category_label_falls_back() {
        assert_eq!(category_label("konjunktiv"), "Konjunktiv");
        assert_eq!(category_label("bogus"), "Other");
    }
}
