use outcome_rail::Unit;
use std::collections::HashSet;

#[test]
fn unit_is_always_equal_to_itself() {
    assert_eq!(Unit, Unit);
    assert_eq!(Unit::default(), Unit);
}

#[test]
fn unit_hashes_to_a_single_bucket() {
    let set: HashSet<Unit> = [Unit, Unit::default(), Unit::from(())].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn unit_displays_as_empty_string() {
    assert_eq!(Unit.to_string(), "");
    assert_eq!(format!("[{}]", Unit), "[]");
}

#[test]
fn unit_is_zero_sized() {
    assert_eq!(std::mem::size_of::<Unit>(), 0);
}
