use argus_core::client::{ApiClient, RequestKind};
use argus_core::error::ArgusError;
use argus_core::session::{Phase, Workflow, WorkflowSession};

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let client = ApiClient::new("http://localhost:5000/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:5000");
}

#[test]
fn test_download_url_appends_token_untouched() {
    let client = ApiClient::new("http://localhost:5000").unwrap();
    assert_eq!(
        client.download_url("encoded_photo.png"),
        "http://localhost:5000/download/encoded_photo.png"
    );
}

#[test]
fn test_submit_without_file_fails_before_any_request() {
    // Port 9 (discard) is never listened on; if submit tried the network
    // this would fail with a transport error instead of NotReady.
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    let session = WorkflowSession::new(Workflow::Classify);

    let err = client.submit(&RequestKind::Classify, &session).unwrap_err();
    assert!(matches!(err, ArgusError::NotReady));

    let err = client
        .submit(&RequestKind::StegoDecode, &session)
        .unwrap_err();
    assert!(matches!(err, ArgusError::NotReady));
}

#[test]
fn test_transport_failure_reverts_session_to_preselection() {
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    let mut session = WorkflowSession::new(Workflow::Classify);
    session.accept_file(
        argus_core::intake::ImageFile::validate("a.png", vec![0u8; 8]).unwrap(),
    );

    let generation = session.begin_submit().unwrap();
    let err = client.submit(&RequestKind::Classify, &session).unwrap_err();
    assert!(matches!(err, ArgusError::Transport(_)), "got: {err}");
    assert!(!err.is_application());

    assert!(session.finish_submit(generation, false));
    assert_eq!(session.phase(), Phase::FileSelected);
}
