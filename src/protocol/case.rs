use anyhow::{anyhow, Result};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::arith::{checked_add, checked_subtract};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[serde(alias = "addition")]
    Add,
    #[serde(alias = "subtraction")]
    Subtract,
}

impl Operation {
    /// Looks up an operation by the same names suite files accept.
    pub fn from_name(name: &str) -> Result<Self> {
        serde_json::from_value(Value::String(name.to_string()))
            .map_err(|_| anyhow!("Unknown operation: {}", name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
        }
    }

    /// Applies the operation, reporting overflow as an error.
    pub fn apply(self, a: i64, b: i64) -> Result<i64> {
        match self {
            Self::Add => checked_add(a, b),
            Self::Subtract => checked_subtract(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single assertion: `op(a, b)` must equal `expected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub name: String,
    pub op: Operation,
    pub a: i64,
    pub b: i64,
    pub expected: i64,
    /// Printed when the assertion does not hold.
    pub message: String,
}

impl Case {
    pub fn new(
        name: impl Into<String>,
        op: Operation,
        a: i64,
        b: i64,
        expected: i64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            op,
            a,
            b,
            expected,
            message: message.into(),
        }
    }

    pub fn evaluate(&self) -> Outcome {
        debug!("Evaluating {}: {}({}, {})", self.name, self.op, self.a, self.b);
        match self.op.apply(self.a, self.b) {
            Ok(actual) if actual == self.expected => Outcome::Pass,
            Ok(actual) => {
                trace!(
                    "{}: expected {}, got {}",
                    self.name,
                    self.expected,
                    actual
                );
                Outcome::Fail { actual }
            }
            Err(e) => Outcome::Error {
                reason: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail { actual: i64 },
    Error { reason: String },
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Short status used on the per-case result line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass => "ok",
            Self::Fail { .. } => "FAIL",
            Self::Error { .. } => "ERROR",
        }
    }
}
