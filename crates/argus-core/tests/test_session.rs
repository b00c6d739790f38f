use argus_core::error::ArgusError;
use argus_core::intake::ImageFile;
use argus_core::session::{Phase, Workflow, WorkflowSession};

fn some_file() -> ImageFile {
    ImageFile::validate("a.png", vec![0u8; 16]).unwrap()
}

// ---------------------------------------------------------------------------
// Required-field predicates
// ---------------------------------------------------------------------------

#[test]
fn test_classify_predicate_needs_only_a_file() {
    let mut s = WorkflowSession::new(Workflow::Classify);
    assert!(!s.can_submit());
    s.accept_file(some_file());
    assert!(s.can_submit());
}

#[test]
fn test_decode_predicate_needs_only_a_file() {
    let mut s = WorkflowSession::new(Workflow::Decode);
    assert!(!s.can_submit());
    s.accept_file(some_file());
    assert!(s.can_submit());
}

#[test]
fn test_encode_predicate_needs_file_and_payload() {
    let mut s = WorkflowSession::new(Workflow::Encode);
    assert!(!s.can_submit());

    s.set_payload("secret");
    assert!(!s.can_submit(), "payload without file must not enable");

    let mut s = WorkflowSession::new(Workflow::Encode);
    s.accept_file(some_file());
    assert!(!s.can_submit(), "file without payload must not enable");

    s.set_payload("secret");
    assert!(s.can_submit());
}

#[test]
fn test_whitespace_only_payload_does_not_enable_encode() {
    let mut s = WorkflowSession::new(Workflow::Encode);
    s.accept_file(some_file());
    s.set_payload("   \n\t ");
    assert!(!s.can_submit());
    assert_eq!(s.payload(), "");
}

#[test]
fn test_password_toggle_does_not_change_predicates() {
    let mut s = WorkflowSession::new(Workflow::Decode);
    s.accept_file(some_file());
    s.set_use_password(true);
    assert!(s.can_submit(), "toggle alone is a view concern");
}

// ---------------------------------------------------------------------------
// Phase transitions
// ---------------------------------------------------------------------------

#[test]
fn test_happy_path_phases() {
    let mut s = WorkflowSession::new(Workflow::Classify);
    assert_eq!(s.phase(), Phase::Empty);

    s.accept_file(some_file());
    assert_eq!(s.phase(), Phase::FileSelected);

    let generation = s.begin_submit().unwrap();
    assert_eq!(s.phase(), Phase::Submitting);

    assert!(s.finish_submit(generation, true));
    assert_eq!(s.phase(), Phase::ResultShown);
}

#[test]
fn test_failure_reverts_to_file_selected() {
    let mut s = WorkflowSession::new(Workflow::Decode);
    s.accept_file(some_file());
    let generation = s.begin_submit().unwrap();

    assert!(s.finish_submit(generation, false));
    assert_eq!(s.phase(), Phase::FileSelected);
    assert!(s.file().is_some(), "failure must not drop the file");
}

#[test]
fn test_begin_submit_blocks_while_in_flight() {
    let mut s = WorkflowSession::new(Workflow::Classify);
    s.accept_file(some_file());
    s.begin_submit().unwrap();
    assert!(matches!(s.begin_submit(), Err(ArgusError::NotReady)));
}

#[test]
fn test_begin_submit_requires_predicate() {
    let mut s = WorkflowSession::new(Workflow::Classify);
    assert!(matches!(s.begin_submit(), Err(ArgusError::NotReady)));
    assert_eq!(s.phase(), Phase::Empty, "no partial transition on failure");
}

#[test]
fn test_blank_password_blocks_submission_locally() {
    let mut s = WorkflowSession::new(Workflow::Decode);
    s.accept_file(some_file());
    s.set_use_password(true);

    let err = s.begin_submit().unwrap_err();
    assert!(matches!(err, ArgusError::MissingPassword));
    assert_eq!(s.phase(), Phase::FileSelected, "still not submitting");

    s.set_password("hunter2");
    assert!(s.begin_submit().is_ok());
}

#[test]
fn test_disabling_password_toggle_wipes_the_value() {
    let mut s = WorkflowSession::new(Workflow::Encode);
    s.set_use_password(true);
    s.set_password("hunter2");
    assert!(s.password().is_some());

    s.set_use_password(false);
    s.set_use_password(true);
    assert!(s.password().is_none());
}

#[test]
fn test_sample_submission_needs_no_file() {
    let mut s = WorkflowSession::new(Workflow::Classify);
    let generation = s.begin_sample().unwrap();
    assert_eq!(s.phase(), Phase::Submitting);
    assert!(s.finish_submit(generation, true));
    assert_eq!(s.phase(), Phase::ResultShown);
}

#[test]
fn test_sample_failure_without_file_reverts_to_empty() {
    let mut s = WorkflowSession::new(Workflow::Classify);
    let generation = s.begin_sample().unwrap();
    assert!(s.finish_submit(generation, false));
    assert_eq!(s.phase(), Phase::Empty);
}

// ---------------------------------------------------------------------------
// Clear and stale-response handling
// ---------------------------------------------------------------------------

#[test]
fn test_clear_resets_everything_from_any_state() {
    let mut s = WorkflowSession::new(Workflow::Encode);
    s.accept_file(some_file());
    s.set_payload("secret");
    s.set_use_password(true);
    s.set_password("pw");
    let generation = s.begin_submit().unwrap();
    s.finish_submit(generation, true);
    assert_eq!(s.phase(), Phase::ResultShown);

    s.clear();
    assert_eq!(s.phase(), Phase::Empty);
    assert!(s.file().is_none());
    assert_eq!(s.payload(), "");
    assert!(!s.use_password());
    assert!(s.password().is_none());
    assert!(!s.can_submit());
}

#[test]
fn test_late_response_after_clear_is_dropped() {
    let mut s = WorkflowSession::new(Workflow::Classify);
    s.accept_file(some_file());
    let generation = s.begin_submit().unwrap();

    // User clears while the request is outstanding.
    s.clear();

    assert!(
        !s.finish_submit(generation, true),
        "stale response must not be applied"
    );
    assert_eq!(s.phase(), Phase::Empty);
}

#[test]
fn test_generation_advances_on_clear() {
    let mut s = WorkflowSession::new(Workflow::Classify);
    let before = s.generation();
    s.clear();
    assert_eq!(s.generation(), before + 1);
}

#[test]
fn test_response_for_current_generation_but_idle_session_is_dropped() {
    let mut s = WorkflowSession::new(Workflow::Classify);
    s.accept_file(some_file());
    let generation = s.generation();
    // Never began a submission; a stray result must not flip the phase.
    assert!(!s.finish_submit(generation, true));
    assert_eq!(s.phase(), Phase::FileSelected);
}
