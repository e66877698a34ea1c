use outcome_rail::OutcomeError;
use std::error::Error;

#[test]
fn messages_describe_the_violation() {
    assert_eq!(
        OutcomeError::NotFailed.to_string(),
        "outcome is not failed; no failure payload is available"
    );
    assert_eq!(
        OutcomeError::NotSuccessful.to_string(),
        "outcome is not successful; no success payload is available"
    );
    assert_eq!(OutcomeError::Uninitialized.to_string(), "outcome is uninitialized");
    assert_eq!(
        OutcomeError::MissingPayload { parameter: "failure" }.to_string(),
        "value cannot be absent (parameter 'failure')"
    );
}

#[test]
fn outcome_error_is_a_std_error_without_source() {
    let error: Box<dyn Error> = Box::new(OutcomeError::Uninitialized);
    assert!(error.source().is_none());
}
