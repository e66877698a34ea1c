use outcome_rail::{outcome_to_result, result_to_outcome, Outcome};

#[test]
fn result_converts_into_outcome() {
    let ok: Result<i32, &str> = Ok(1);
    let err: Result<i32, &str> = Err("x");

    assert_eq!(Outcome::from(ok), Outcome::succeed(1));
    assert_eq!(result_to_outcome(err), Outcome::fail("x"));
}

#[test]
fn outcome_converts_into_result() {
    let ok: Result<i32, &str> = Outcome::succeed(1).into();
    assert_eq!(ok, Ok(1));

    assert_eq!(outcome_to_result(Outcome::<&str, i32>::fail("x")), Err("x"));
    assert_eq!(Outcome::<&str, i32>::succeed(2).into_result(), Ok(2));
}

#[test]
fn into_result_supports_question_mark() {
    fn double(input: Outcome<String, i32>) -> Result<i32, String> {
        let value = input.into_result()?;
        Ok(value * 2)
    }

    assert_eq!(double(Outcome::succeed(4)), Ok(8));
    assert_eq!(double(Outcome::fail("x".to_string())), Err("x".to_string()));
}
