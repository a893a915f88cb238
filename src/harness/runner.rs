use anyhow::{Context, Result};
use std::io::Write;

use crate::config::ELAPSED_PRECISION;
use crate::protocol::{Case, Outcome};

use super::{run_suite_with, CaseResult, Report};

const SEPARATOR_HEAVY: &str =
    "======================================================================";
const SEPARATOR_LIGHT: &str =
    "----------------------------------------------------------------------";

/// Runs a suite and prints a line per case followed by a summary.
pub struct TextRunner<W: Write> {
    out: W,
}

impl<W: Write> TextRunner<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn run(&mut self, cases: &[Case]) -> Result<Report> {
        let out = &mut self.out;
        let report = run_suite_with(cases, |result| {
            writeln!(out, "{} ... {}", result.case.name, result.outcome.label())
                .context("Failed to write case result")
        })?;

        self.write_problems(&report)?;
        self.write_summary(&report)?;
        self.out.flush().context("Failed to flush output")?;
        Ok(report)
    }

    fn write_problems(&mut self, report: &Report) -> Result<()> {
        for result in report.results.iter().filter(|r| !r.outcome.is_pass()) {
            writeln!(self.out)?;
            writeln!(self.out, "{}", SEPARATOR_HEAVY)?;
            writeln!(self.out, "{}: {}", result.outcome.label(), result.case.name)?;
            writeln!(self.out, "{}", SEPARATOR_LIGHT)?;
            writeln!(self.out, "{}", describe(result))?;
        }
        Ok(())
    }

    fn write_summary(&mut self, report: &Report) -> Result<()> {
        let total = report.total();
        writeln!(self.out)?;
        writeln!(self.out, "{}", SEPARATOR_LIGHT)?;
        writeln!(
            self.out,
            "Ran {} test{} in {:.prec$}s",
            total,
            if total == 1 { "" } else { "s" },
            report.elapsed.as_secs_f64(),
            prec = ELAPSED_PRECISION
        )?;
        writeln!(self.out)?;

        if report.was_successful() {
            writeln!(self.out, "OK")?;
            return Ok(());
        }

        let mut parts = Vec::new();
        if report.failed() > 0 {
            parts.push(format!("failures={}", report.failed()));
        }
        if report.errors() > 0 {
            parts.push(format!("errors={}", report.errors()));
        }
        writeln!(self.out, "FAILED ({})", parts.join(", "))?;
        Ok(())
    }
}

fn describe(result: &CaseResult) -> String {
    let case = &result.case;
    match &result.outcome {
        Outcome::Pass => String::new(),
        Outcome::Fail { actual } => format!(
            "AssertionError: {} ({}({}, {}) returned {})",
            case.message, case.op, case.a, case.b, actual
        ),
        Outcome::Error { reason } => format!("ArithmeticError: {}", reason),
    }
}
