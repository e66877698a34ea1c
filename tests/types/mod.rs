pub mod outcome_error;
pub mod unit;
