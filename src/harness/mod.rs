mod runner;

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde_json::Value;
use std::collections::HashSet;
use std::convert::Infallible;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::{EXIT_FAILURE, EXIT_SUCCESS, SUITE_CASES_KEY};
use crate::protocol::{Case, Operation, Outcome};

pub use runner::TextRunner;

/// The two assertions the harness ships with.
pub fn default_suite() -> Vec<Case> {
    vec![
        Case::new(
            "test_addition",
            Operation::Add,
            5,
            3,
            8,
            "Addition of 5 and 3 should be 8",
        ),
        Case::new(
            "test_subtraction",
            Operation::Subtract,
            10,
            4,
            6,
            "Subtraction of 10 and 4 should be 6",
        ),
    ]
}

/// Loads cases from a JSON file holding either an array of cases or an
/// object with a `cases` array.
pub fn load_suite(path: &Path) -> Result<Vec<Case>> {
    debug!("Loading suite from {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read suite file {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse suite file {}", path.display()))?;
    parse_suite(value).with_context(|| format!("Invalid suite file {}", path.display()))
}

fn parse_suite(value: Value) -> Result<Vec<Case>> {
    let cases = match value {
        Value::Array(cases) => Value::Array(cases),
        Value::Object(mut map) => {
            let Some(cases) = map.remove(SUITE_CASES_KEY) else {
                return Err(anyhow!("Missing \"{}\" array", SUITE_CASES_KEY));
            };
            cases
        }
        _ => return Err(anyhow!("Expected an array of cases or an object")),
    };
    let cases: Vec<Case> = serde_json::from_value(cases).context("Malformed case")?;

    let mut seen = HashSet::new();
    for case in &cases {
        if !seen.insert(case.name.as_str()) {
            return Err(anyhow!("Duplicate case name: {}", case.name));
        }
    }

    debug!("Loaded {} cases", cases.len());
    Ok(cases)
}

#[derive(Debug, Clone)]
pub struct CaseResult {
    pub case: Case,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub results: Vec<CaseResult>,
    pub elapsed: Duration,
}

impl Report {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Pass))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Fail { .. }))
    }

    pub fn errors(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Error { .. }))
    }

    pub fn was_successful(&self) -> bool {
        self.results.iter().all(|r| r.outcome.is_pass())
    }

    pub fn exit_code(&self) -> u8 {
        if self.was_successful() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Runs every case in order and collects the outcomes.
pub fn run_suite(cases: &[Case]) -> Report {
    match run_suite_with(cases, |_| Ok::<(), Infallible>(())) {
        Ok(report) => report,
        Err(never) => match never {},
    }
}

/// Runs every case in order, handing each result to `on_result` as soon as it
/// is known. Stops at the first error from `on_result`.
pub fn run_suite_with<E>(
    cases: &[Case],
    mut on_result: impl FnMut(&CaseResult) -> Result<(), E>,
) -> Result<Report, E> {
    let mut report = Report::default();
    let start = Instant::now();
    for case in cases {
        let result = run_case(case);
        on_result(&result)?;
        report.results.push(result);
    }
    report.elapsed = start.elapsed();
    Ok(report)
}

fn run_case(case: &Case) -> CaseResult {
    let outcome = case.evaluate();
    match &outcome {
        Outcome::Pass => info!("{} passed", case.name),
        Outcome::Fail { actual } => warn!(
            "{} failed: expected {}, got {}",
            case.name, case.expected, actual
        ),
        Outcome::Error { reason } => warn!("{} errored: {}", case.name, reason),
    }
    CaseResult {
        case: case.clone(),
        outcome,
    }
}
