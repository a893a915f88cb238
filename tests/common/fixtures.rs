#![allow(dead_code)]

use anyhow::Result;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A suite file written into a temporary directory.
#[derive(Debug)]
pub struct SuiteFile {
    dir: TempDir,
    path: PathBuf,
}

impl SuiteFile {
    /// Writes `contents` verbatim as `suite.json`.
    pub fn raw(contents: &str) -> Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join("suite.json");
        fs::write(&path, contents)?;
        Ok(Self { dir, path })
    }

    pub fn json(value: &Value) -> Result<Self> {
        Self::raw(&serde_json::to_string_pretty(value)?)
    }

    /// The two observed assertions, written as an object suite.
    pub fn passing() -> Result<Self> {
        Self::json(&json!({
            "cases": [
                {
                    "name": "test_addition",
                    "op": "add",
                    "a": 5,
                    "b": 3,
                    "expected": 8,
                    "message": "Addition of 5 and 3 should be 8"
                },
                {
                    "name": "test_subtraction",
                    "op": "subtract",
                    "a": 10,
                    "b": 4,
                    "expected": 6,
                    "message": "Subtraction of 10 and 4 should be 6"
                }
            ]
        }))
    }

    /// One passing and one failing case, written as a bare array.
    pub fn failing() -> Result<Self> {
        Self::json(&json!([
            {
                "name": "test_addition",
                "op": "addition",
                "a": 5,
                "b": 3,
                "expected": 8,
                "message": "Addition of 5 and 3 should be 8"
            },
            {
                "name": "test_wrong_subtraction",
                "op": "subtraction",
                "a": 10,
                "b": 4,
                "expected": 7,
                "message": "Subtraction of 10 and 4 should be 7"
            }
        ]))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
