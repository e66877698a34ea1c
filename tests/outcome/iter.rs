use outcome_rail::Outcome;

#[test]
fn iter_yields_success_once() {
    let outcome: Outcome<&str, i32> = Outcome::succeed(5);
    assert_eq!(outcome.iter().collect::<Vec<_>>(), vec![&5]);
    assert_eq!(outcome.iter_failure().count(), 0);
}

#[test]
fn iter_is_empty_for_failure() {
    let outcome: Outcome<&str, i32> = Outcome::fail("x");
    assert_eq!(outcome.iter().count(), 0);
    assert_eq!(outcome.iter_failure().collect::<Vec<_>>(), vec![&"x"]);
}

#[test]
fn iter_mut_updates_success_in_place() {
    let mut outcome: Outcome<&str, i32> = Outcome::succeed(5);
    for value in &mut outcome {
        *value *= 2;
    }
    assert_eq!(outcome, Outcome::succeed(10));
}

#[test]
fn into_iter_flattens_successes() {
    let outcomes: Vec<Outcome<&str, i32>> = vec![Outcome::succeed(1), Outcome::fail("x"), Outcome::succeed(3)];
    let total: i32 = outcomes.into_iter().flatten().sum();
    assert_eq!(total, 4);
}

#[test]
fn collect_gathers_all_successes() {
    let collected: Outcome<&str, Vec<i32>> = (1..=3).map(Outcome::succeed).collect();
    assert_eq!(collected, Outcome::succeed(vec![1, 2, 3]));
}

#[test]
fn collect_stops_at_first_failure() {
    let mut visited = 0;
    let collected: Outcome<&str, Vec<i32>> = [Outcome::succeed(1), Outcome::fail("first"), Outcome::fail("second")]
        .into_iter()
        .inspect(|_| visited += 1)
        .collect();

    assert_eq!(collected, Outcome::fail("first"));
    assert_eq!(visited, 2);
}
