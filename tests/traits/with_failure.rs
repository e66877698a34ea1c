use outcome_rail::traits::WithFailure;
use outcome_rail::Outcome;

fn describe<C: WithFailure<u16>>(container: C) -> C::FailureOutput<String> {
    container.fmap_failure(|code| format!("HTTP {}", code))
}

#[test]
fn fmap_failure_remaps_outcome_failure() {
    assert_eq!(describe(Outcome::<u16, i32>::fail(404)), Outcome::fail("HTTP 404".to_string()));
    assert_eq!(describe(Outcome::<u16, i32>::succeed(1)), Outcome::succeed(1));
}

#[test]
fn fmap_failure_remaps_result_error() {
    assert_eq!(describe(Err::<i32, u16>(500)), Err("HTTP 500".to_string()));
    assert_eq!(describe(Ok::<i32, u16>(1)), Ok(1));
}

#[test]
fn to_outcome_is_identity_for_outcome() {
    let outcome: Outcome<&str, i32> = Outcome::fail("x");
    assert_eq!(outcome.to_outcome(), Outcome::fail("x"));
}

#[test]
fn to_outcome_converts_result() {
    assert_eq!(Ok::<i32, &str>(3).to_outcome(), Outcome::succeed(3));
    assert_eq!(Err::<i32, &str>("x").to_outcome(), Outcome::fail("x"));
}
