pub mod case;

pub use case::{Case, Operation, Outcome};
