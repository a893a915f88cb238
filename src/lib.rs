pub mod arith;
pub mod config;
pub mod harness;
pub mod protocol;
pub mod report;

pub use arith::{add, checked_add, checked_subtract, subtract};
pub use harness::{default_suite, load_suite, run_suite, run_suite_with, Report, TextRunner};
pub use protocol::{Case, Operation, Outcome};
