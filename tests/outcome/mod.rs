pub mod convert;
pub mod core;
pub mod iter;
