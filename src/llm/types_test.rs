use super::*;

#[test]
fn into_text_covers_both_arms() {
    assert_eq!(Completion::Reply("hi".into()).into_text(), "hi");
    assert_eq!(Completion::Failure("bad".into()).into_text(), "bad");
}

#[test]
fn status_error_displays_the_code_not_the_body() {
    let err = LlmError::Status { status: 503, body: "upstream busy".into() };
    let text = err.to_string();
    assert!(text.contains("503"));
    assert!(!text.contains("upstream busy"));
}

#[test]
fn request_error_carries_the_cause() {
    let err = LlmError::Request("connection refused".into());
    assert!(err.to_string().contains("connection refused"));
}
