use serde_json::{json, Value};

use crate::harness::Report;

pub fn format_report(report: &Report) -> Value {
    let mut output = json!({
        "tests": [],
        "summary": {
            "total": 0,
            "passed": 0,
            "failures": 0,
            "errors": 0,
            "elapsed_secs": 0.0
        }
    });

    if let Some(tests) = output["tests"].as_array_mut() {
        for result in &report.results {
            let case = &result.case;
            let mut entry = json!({
                "name": case.name,
                "op": case.op,
                "a": case.a,
                "b": case.b,
                "expected": case.expected,
            });

            // `status` plus `actual` or `reason`.
            if let (Ok(Value::Object(fields)), Some(entry)) =
                (serde_json::to_value(&result.outcome), entry.as_object_mut())
            {
                entry.extend(fields);
            }

            if !result.outcome.is_pass() {
                entry["message"] = json!(case.message);
            }

            tests.push(entry);
        }
    }

    output["summary"]["total"] = json!(report.total());
    output["summary"]["passed"] = json!(report.passed());
    output["summary"]["failures"] = json!(report.failed());
    output["summary"]["errors"] = json!(report.errors());
    output["summary"]["elapsed_secs"] = json!(report.elapsed.as_secs_f64());

    output
}
