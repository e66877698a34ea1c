pub mod with_failure;
