//! End-to-end runs through the training state machine and conversation
//! session, driven the way the key handlers drive them.

use deutschmeister::content::exercises::{Exercise, ExerciseKind, Prompt};
use deutschmeister::content::filter;
use deutschmeister::content::lessons::{ALL_LESSONS, LESSONS};
use deutschmeister::net::chat_api::{ChatError, ChatMessage, Role};
use deutschmeister::session::chat::{ChatMode, ChatSession, FALLBACK_REPLY};
use deutschmeister::session::exercise::{ExerciseSession, Phase};

fn answer_correctly(session: &mut ExerciseSession, exercise: &'static Exercise) {
    match exercise.prompt {
        Prompt::Translation { english, .. } => session.set_answer(english),
        _ => {
            let options = exercise.options().unwrap();
            let index = options
                .iter()
                .position(|o| *o == exercise.expected())
                .unwrap();
            session.select_option(index);
        }
    }
}

#[test]
fn perfect_run_through_every_kind() {
    for kind in ExerciseKind::ALL {
        let mut session = ExerciseSession::new();
        session.select_kind(kind, ALL_LESSONS);
        let expected_len = filter::exercises_for(kind, ALL_LESSONS).len();
        assert_eq!(session.len(), expected_len);

        while session.phase() != Phase::Completed {
            let exercise = session.current_exercise().unwrap();
            answer_correctly(&mut session, exercise);
            assert_eq!(session.grade(), Some(true), "kind {kind:?}");
            session.advance();
        }

        assert_eq!(session.score().total, expected_len);
        assert_eq!(session.score().correct, expected_len);
        assert_eq!(session.percentage(), 100);
    }
}

#[test]
fn lesson_scoped_run_only_sees_matching_items() {
    let mut session = ExerciseSession::new();
    session.select_kind(ExerciseKind::VerbPosition, "connectors-verb-position");
    assert_eq!(session.phase(), Phase::InProgress);
    assert_eq!(session.len(), 5);

    while session.phase() != Phase::Completed {
        let exercise = session.current_exercise().unwrap();
        assert_eq!(exercise.lesson_id, "connectors-verb-position");
        answer_correctly(&mut session, exercise);
        session.grade().unwrap();
        session.advance();
    }
    assert_eq!(session.percentage(), 100);
}

#[test]
fn mixed_run_matches_rounded_percentage() {
    // 10 fill-blank items; get 7 right, 3 wrong -> 70%.
    let mut session = ExerciseSession::new();
    session.select_kind(ExerciseKind::FillBlank, ALL_LESSONS);
    assert_eq!(session.len(), 10);

    for i in 0..10 {
        let exercise = session.current_exercise().unwrap();
        let options = exercise.options().unwrap();
        let right = options.iter().position(|o| *o == exercise.expected()).unwrap();
        let pick = if i < 7 { right } else { (right + 1) % options.len() };
        session.select_option(pick);
        let graded = session.grade().unwrap();
        assert_eq!(graded, i < 7);
        session.advance();
    }

    assert_eq!(session.phase(), Phase::Completed);
    assert_eq!(session.score().correct, 7);
    assert_eq!(session.score().total, 10);
    assert_eq!(session.percentage(), 70);
}

#[test]
fn every_lesson_filter_yields_a_consistent_session() {
    for lesson in LESSONS {
        for kind in ExerciseKind::ALL {
            let mut session = ExerciseSession::new();
            session.select_kind(kind, lesson.id);
            let count = filter::count_for(kind, lesson.id);
            if count == 0 {
                assert_eq!(session.phase(), Phase::Empty, "{kind:?}/{}", lesson.id);
            } else {
                assert_eq!(session.phase(), Phase::InProgress);
                assert_eq!(session.len(), count);
            }
        }
    }
}

#[test]
fn reset_then_new_type_starts_from_zero() {
    let mut session = ExerciseSession::new();
    session.select_kind(ExerciseKind::Translation, ALL_LESSONS);
    session.set_answer("I am a student.");
    session.grade().unwrap();
    assert_eq!(session.score().total, 1);

    session.reset();
    session.select_kind(ExerciseKind::MultipleChoice, ALL_LESSONS);
    assert_eq!(session.score().total, 0);
    assert_eq!(session.position(), 0);
    assert_eq!(session.kind(), Some(ExerciseKind::MultipleChoice));
}

#[test]
fn unreachable_backend_degrades_to_one_fallback_message() {
    let mut chat = ChatSession::new();
    let outgoing = chat.begin_send("Hallo, wie geht es dir?").unwrap();
    assert_eq!(outgoing.last().unwrap().role, Role::User);

    // The worker would produce a request error for an unreachable base;
    // fold it back in the same way the event loop does.
    chat.apply_outcome(Err(ChatError::Request("connection refused".to_string())));

    let assistant_count = chat
        .messages()
        .iter()
        .filter(|m| m.role == Role::Assistant)
        .count();
    // Intro plus exactly one fallback.
    assert_eq!(assistant_count, 2);
    assert_eq!(chat.messages().last().unwrap().content, FALLBACK_REPLY);
    assert!(!chat.is_busy());
}

#[test]
fn conversation_transcript_feeds_the_next_request() {
    let mut chat = ChatSession::new();
    chat.set_mode(ChatMode::Free);

    chat.begin_send("Erste Frage").unwrap();
    chat.apply_outcome(Ok(Some("Erste Antwort".to_string())));
    let outgoing = chat.begin_send("Zweite Frage").unwrap();

    // intro + user + assistant + user
    assert_eq!(outgoing.len(), 4);
    assert_eq!(outgoing[1].content, "Erste Frage");
    assert_eq!(outgoing[2].content, "Erste Antwort");
    assert_eq!(outgoing[3].content, "Zweite Frage");

    // What actually goes on the wire gets the system prompt prepended.
    let wire = deutschmeister::net::chat_api::request_messages(&chat.system_prompt(), &outgoing);
    assert_eq!(wire.len(), 5);
    assert_eq!(wire[0].role, Role::System);
}

#[test]
fn chat_messages_serialize_with_lowercase_roles() {
    let message = ChatMessage::user("Hallo");
    let json = serde_json::to_string(&message).unwrap();
    assert_eq!(json, r#"{"role":"user","content":"Hallo"}"#);
}
