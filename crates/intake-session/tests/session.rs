use intake_core::fields::{demographics, medications, symptoms};
use intake_core::models::answer::AnswerValue;
use intake_core::models::medication::{DoseFrequency, MedicationEntry};
use intake_core::models::response::Response;
use intake_core::models::section::Section;
use intake_session::navigation::{Navigator, REVIEW_INDEX, STEP_COUNT, Step};
use intake_session::{IntakeEvent, IntakeSession, reduce};
use proptest::prelude::*;

fn at_review() -> IntakeSession {
    let mut session = IntakeSession::new();
    for _ in 0..REVIEW_INDEX {
        assert!(session.advance());
    }
    session
}

#[test]
fn new_session_starts_on_demographics() {
    let session = IntakeSession::new();
    assert_eq!(session.step(), Step::Section(Section::Demographics));
    assert!(!session.is_submitted());
    assert!(!session.is_confirmed());
    assert!(session.record().is_empty());
}

#[test]
fn advance_stops_at_review() {
    let mut session = at_review();
    assert_eq!(session.step(), Step::Review);
    assert!(!session.advance());
    assert_eq!(session.navigator().index(), REVIEW_INDEX);
}

#[test]
fn retreat_stops_at_first_section() {
    let mut session = IntakeSession::new();
    assert!(!session.retreat());
    assert_eq!(session.navigator().index(), 0);
}

#[test]
fn progress_reports_position_and_title() {
    let mut session = IntakeSession::new();
    session.advance();
    session.advance();
    let progress = session.progress();
    assert_eq!(progress.position, 3);
    assert_eq!(progress.total, STEP_COUNT);
    assert_eq!(progress.title, "Memory and Thinking");

    let review = at_review().progress();
    assert_eq!(review.title, "Review and Submit");
    assert_eq!(review.fraction, 1.0);
}

#[test]
fn submit_without_confirmation_is_noop() {
    let mut session = at_review();
    assert!(!session.submit());
    assert!(!session.is_submitted());
    assert_eq!(session.navigator().index(), REVIEW_INDEX);
}

#[test]
fn confirm_outside_review_is_ignored() {
    let mut session = IntakeSession::new();
    session.confirm(true);
    assert!(!session.is_confirmed());
}

#[test]
fn leaving_review_withdraws_confirmation() {
    let mut session = at_review();
    session.confirm(true);
    assert!(session.is_confirmed());
    session.retreat();
    assert!(!session.is_confirmed());
    session.advance();
    assert!(!session.submit());
}

#[test]
fn confirmed_submit_is_terminal() {
    let mut session = at_review();
    session.confirm(true);
    assert!(session.submit());
    assert!(session.is_submitted());

    assert!(!session.retreat());
    session
        .answer(Section::Symptoms, symptoms::PAIN, Response::Yes.into())
        .unwrap();
    assert!(session.record().is_empty());
    assert!(!session.submit());
}

#[test]
fn reset_clears_everything() {
    let mut session = at_review();
    let first_id = session.id();
    session
        .answer(
            Section::Demographics,
            demographics::FIRST_NAME,
            AnswerValue::Text("Rose".into()),
        )
        .unwrap();
    session.confirm(true);
    session.submit();

    session.reset();

    assert_ne!(session.id(), first_id);
    assert!(session.record().is_empty());
    assert_eq!(session.navigator().index(), 0);
    assert!(!session.is_submitted());
    assert!(!session.is_confirmed());
}

#[test]
fn events_drive_session_to_submission() {
    let json = r#"[
        {"type": "answer", "section": "symptoms", "key": "pain", "value": {"type": "response", "value": "yes"}},
        {"type": "answer", "section": "symptoms", "key": "pain_level", "value": {"type": "integer", "value": 6}},
        {"type": "answer", "section": "medications", "key": "num_medications", "value": {"type": "integer", "value": 2}},
        {"type": "medication", "index": 1, "entry": {"name": "Aspirin", "dose": "81 mg", "frequency": "once_daily"}},
        {"type": "advance"}, {"type": "advance"}, {"type": "advance"}, {"type": "advance"},
        {"type": "advance"}, {"type": "advance"}, {"type": "advance"},
        {"type": "confirm", "confirmed": true},
        {"type": "submit"}
    ]"#;
    let events = IntakeEvent::parse_script(json).unwrap();
    assert_eq!(events.len(), 13);

    let mut session = IntakeSession::new();
    for event in events {
        session = reduce(session, event).unwrap();
    }

    assert!(session.is_submitted());
    assert_eq!(session.record().integer(Section::Symptoms, symptoms::PAIN_LEVEL), Some(6));
    let list = session
        .record()
        .medications(Section::Medications, medications::MEDICATIONS_LIST)
        .unwrap();
    assert_eq!(
        list,
        &[
            MedicationEntry::default(),
            MedicationEntry::new("Aspirin", "81 mg", DoseFrequency::OnceDaily),
        ]
    );
}

#[test]
fn invalid_answer_event_surfaces_error() {
    let session = IntakeSession::new();
    let event = IntakeEvent::answer(Section::Symptoms, symptoms::PAIN, AnswerValue::Integer(3));
    assert!(reduce(session, event).is_err());
}

#[test]
fn malformed_script_is_rejected() {
    assert!(IntakeEvent::parse_script(r#"[{"type": "jump"}]"#).is_err());
}

proptest! {
    /// The index always stays within [0, REVIEW_INDEX] and equals the number
    /// of moves that were not ignored at an edge.
    #[test]
    fn prop_index_tracks_effective_moves(moves in proptest::collection::vec(any::<bool>(), 0..64)) {
        let mut nav = Navigator::new();
        let mut expected: usize = 0;
        for forward in moves {
            let moved = if forward { nav.advance() } else { nav.retreat() };
            if forward && expected < REVIEW_INDEX {
                expected += 1;
                prop_assert!(moved);
            } else if !forward && expected > 0 {
                expected -= 1;
                prop_assert!(moved);
            } else {
                prop_assert!(!moved);
            }
            prop_assert!(nav.index() <= REVIEW_INDEX);
            prop_assert_eq!(nav.index(), expected);
        }
    }

    /// Submission only succeeds on Review with confirmation.
    #[test]
    fn prop_submit_requires_review_and_confirmation(steps in 0usize..=10, confirmed in any::<bool>()) {
        let mut nav = Navigator::new();
        for _ in 0..steps {
            nav.advance();
        }
        let submitted = nav.submit(confirmed);
        prop_assert_eq!(submitted, nav.is_review() && confirmed);
        prop_assert_eq!(nav.is_submitted(), submitted);
    }
}
