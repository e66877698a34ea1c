use outcome_rail::{Outcome, OutcomeError, Unit, ValueOutcome};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Fault {
    Timeout,
    Overflow,
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn default_is_uninitialized() {
    let value = ValueOutcome::<Fault, u8>::default();

    assert!(!value.is_initialized());
    assert!(value.is_default());
    assert!(!value.is_failed());
    assert!(!value.is_successful());
    assert!(value.is_failed_or_default());
    assert!(value.is_successful_or_default());
}

#[test]
fn deconstruct_of_uninitialized_is_an_error() {
    let value = ValueOutcome::<Fault, u8>::default();
    assert_eq!(value.deconstruct(), Err(OutcomeError::Uninitialized));
}

#[test]
fn accessors_of_uninitialized_report_uninitialized() {
    let value = ValueOutcome::<Fault, u8>::default();

    assert_eq!(value.failure(), None);
    assert_eq!(value.success(), None);
    assert_eq!(value.get_failure(), Err(OutcomeError::Uninitialized));
    assert_eq!(value.get_success(), Err(OutcomeError::Uninitialized));
}

#[test]
fn failed_value_exposes_failure() {
    let value = ValueOutcome::<Fault, u8>::fail(Fault::Timeout);

    assert!(value.is_initialized());
    assert!(value.is_failed());
    assert!(value.is_failed_or_default());
    assert!(!value.is_successful_or_default());
    assert_eq!(value.failure(), Some(Fault::Timeout));
    assert_eq!(value.unwrap_failure(), Fault::Timeout);
    assert_eq!(value.get_success(), Err(OutcomeError::NotSuccessful));
    assert_eq!(value.deconstruct(), Ok((true, Some(Fault::Timeout), None)));
}

#[test]
fn successful_value_exposes_success() {
    let value = ValueOutcome::<Fault, u8>::succeed(200);

    assert!(value.is_successful());
    assert!(value.is_successful_or_default());
    assert!(!value.is_failed_or_default());
    assert_eq!(value.success(), Some(200));
    assert_eq!(value.unwrap_success(), 200);
    assert_eq!(value.get_failure(), Err(OutcomeError::NotFailed));
    assert_eq!(value.deconstruct(), Ok((false, None, Some(200))));
}

#[test]
#[should_panic(expected = "outcome is not failed")]
fn unwrap_failure_on_success_panics() {
    let _ = ValueOutcome::<Fault, u8>::succeed(1).unwrap_failure();
}

#[test]
#[should_panic(expected = "outcome is uninitialized")]
fn unwrap_success_on_uninitialized_panics() {
    let _ = ValueOutcome::<Fault, u8>::default().unwrap_success();
}

#[test]
fn uninitialized_values_are_equal_to_each_other_only() {
    let a = ValueOutcome::<Fault, u8>::default();
    let b = ValueOutcome::<Fault, u8>::default();

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, ValueOutcome::succeed(0));
    assert_ne!(a, ValueOutcome::fail(Fault::Timeout));
}

#[test]
fn initialized_equality_follows_state_and_payload() {
    assert_eq!(ValueOutcome::<Fault, u8>::fail(Fault::Overflow), ValueOutcome::fail(Fault::Overflow));
    assert_ne!(ValueOutcome::<Fault, u8>::fail(Fault::Overflow), ValueOutcome::fail(Fault::Timeout));
    assert_eq!(
        hash_of(&ValueOutcome::<Fault, u8>::succeed(9)),
        hash_of(&ValueOutcome::<Fault, u8>::succeed(9))
    );
}

#[test]
fn discard_preserves_state() {
    assert_eq!(ValueOutcome::<Fault, u32>::succeed(5).discard(), ValueOutcome::succeed(Unit));
    assert_eq!(ValueOutcome::<Fault, u32>::fail(Fault::Timeout).discard(), ValueOutcome::fail(Fault::Timeout));
    assert!(ValueOutcome::<Fault, u32>::default().discard().is_default());
}

#[test]
fn display_is_empty_when_uninitialized() {
    assert_eq!(ValueOutcome::<u8, u32>::default().to_string(), "");
    assert_eq!(ValueOutcome::<u8, u32>::succeed(12).to_string(), "12");
    assert_eq!(ValueOutcome::<u8, u32>::fail(3).to_string(), "3");
}

#[test]
fn converts_to_and_from_outcome() {
    let value: ValueOutcome<Fault, u8> = Outcome::fail(Fault::Timeout).into();
    assert_eq!(value, ValueOutcome::fail(Fault::Timeout));

    assert_eq!(Outcome::<Fault, u8>::try_from(ValueOutcome::<Fault, u8>::succeed(1)), Ok(Outcome::succeed(1)));
    assert_eq!(
        Outcome::<Fault, u8>::try_from(ValueOutcome::<Fault, u8>::default()),
        Err(OutcomeError::Uninitialized)
    );
}

#[test]
fn value_outcome_is_copy() {
    let original = ValueOutcome::<Fault, u8>::succeed(1);
    let copy = original;

    assert_eq!(original, copy);
}
