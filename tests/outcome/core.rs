use outcome_rail::{Outcome, OutcomeError};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn succeed_exposes_success_only() {
    let outcome: Outcome<&str, i32> = Outcome::succeed(42);

    assert!(outcome.is_successful());
    assert!(!outcome.is_failed());
    assert_eq!(outcome.success(), Some(&42));
    assert_eq!(outcome.failure(), None);
    assert_eq!(outcome.get_success(), Ok(&42));
    assert_eq!(outcome.get_failure(), Err(OutcomeError::NotFailed));
}

#[test]
fn fail_exposes_failure_only() {
    let outcome: Outcome<&str, i32> = Outcome::fail("boom");

    assert!(outcome.is_failed());
    assert!(!outcome.is_successful());
    assert_eq!(outcome.failure(), Some(&"boom"));
    assert_eq!(outcome.success(), None);
    assert_eq!(outcome.get_failure(), Ok(&"boom"));
    assert_eq!(outcome.get_success(), Err(OutcomeError::NotSuccessful));
}

#[test]
fn into_accessors_move_the_active_payload() {
    let failed: Outcome<String, Vec<u8>> = Outcome::fail("boom".to_string());
    assert_eq!(failed.clone().into_failure(), Some("boom".to_string()));
    assert_eq!(failed.into_success(), None);

    let succeeded: Outcome<String, Vec<u8>> = Outcome::succeed(vec![1, 2]);
    assert_eq!(succeeded.clone().into_success(), Some(vec![1, 2]));
    assert_eq!(succeeded.into_failure(), None);
}

#[test]
fn unwrap_returns_matching_payload() {
    assert_eq!(Outcome::<&str, i32>::succeed(7).unwrap_success(), 7);
    assert_eq!(Outcome::<&str, i32>::fail("boom").unwrap_failure(), "boom");
}

#[test]
#[should_panic(expected = "outcome is not failed")]
fn unwrap_failure_on_success_panics() {
    let _ = Outcome::<&str, i32>::succeed(7).unwrap_failure();
}

#[test]
#[should_panic(expected = "outcome is not successful")]
fn unwrap_success_on_failure_panics() {
    let _ = Outcome::<&str, i32>::fail("boom").unwrap_success();
}

#[test]
fn deconstruct_reports_state_and_active_payload() {
    assert_eq!(Outcome::<&str, i32>::succeed(3).deconstruct(), (false, None, Some(3)));
    assert_eq!(Outcome::<&str, i32>::fail("x").deconstruct(), (true, Some("x"), None));
}

#[test]
fn as_ref_and_as_mut_borrow_payloads() {
    let mut outcome: Outcome<&str, i32> = Outcome::succeed(1);
    assert_eq!(outcome.as_ref(), Outcome::succeed(&1));

    if let Outcome::Successful(value) = outcome.as_mut() {
        *value += 1;
    }
    assert_eq!(outcome, Outcome::succeed(2));
}

#[test]
fn equality_compares_state_and_active_payload() {
    assert_eq!(Outcome::<&str, i32>::succeed(1), Outcome::succeed(1));
    assert_ne!(Outcome::<&str, i32>::succeed(1), Outcome::succeed(2));
    assert_eq!(Outcome::<&str, i32>::fail("a"), Outcome::fail("a"));
    assert_ne!(Outcome::<&str, i32>::fail("a"), Outcome::fail("b"));
}

#[test]
fn failed_never_equals_successful_with_same_payload() {
    let failed: Outcome<i32, i32> = Outcome::fail(1);
    let succeeded: Outcome<i32, i32> = Outcome::succeed(1);

    assert_ne!(failed, succeeded);
}

#[test]
fn equal_outcomes_hash_equally() {
    let a: Outcome<String, u64> = Outcome::succeed(99);
    let b: Outcome<String, u64> = Outcome::succeed(99);
    assert_eq!(hash_of(&a), hash_of(&b));

    let c: Outcome<String, u64> = Outcome::fail("x".to_string());
    let d: Outcome<String, u64> = Outcome::fail("x".to_string());
    assert_eq!(hash_of(&c), hash_of(&d));
}

#[test]
fn state_participates_in_hash() {
    let failed: Outcome<u8, u8> = Outcome::fail(0);
    let succeeded: Outcome<u8, u8> = Outcome::succeed(0);

    assert_ne!(hash_of(&failed), hash_of(&succeeded));
}

#[test]
fn display_renders_active_payload() {
    assert_eq!(Outcome::<&str, i32>::succeed(42).to_string(), "42");
    assert_eq!(Outcome::<&str, i32>::fail("boom").to_string(), "boom");
    assert_eq!(Outcome::<&str, i32>::fail("").to_string(), "");
}

#[test]
fn alternate_display_prefixes_state() {
    assert_eq!(format!("{:#}", Outcome::<&str, i32>::succeed(42)), "success: 42");
    assert_eq!(format!("{:#}", Outcome::<&str, i32>::fail("boom")), "failure: boom");
}

#[test]
fn failed_orders_before_successful() {
    let mut outcomes = vec![
        Outcome::<i32, i32>::succeed(1),
        Outcome::fail(5),
        Outcome::succeed(0),
    ];
    outcomes.sort();

    assert_eq!(outcomes, vec![Outcome::fail(5), Outcome::succeed(0), Outcome::succeed(1)]);
}
