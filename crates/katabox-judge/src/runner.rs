//! Judging: run every case through a driver and grade the output.

use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use katabox_core::Exercise;
use katabox_io::run_exercise;

use crate::cases::{CaseFile, TestCase};

/// Outcome of a single case, or of a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    Accepted,
    WrongAnswer,
    RuntimeError,
    TimeLimitExceeded,
}

/// Result of one graded case.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseResult {
    pub index: usize,
    pub verdict: Verdict,
    pub runtime_ms: u64,
    pub is_hidden: bool,
    /// Populated for visible non-accepted cases only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Full report for one judged run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub run_id: String,
    pub exercise: Exercise,
    pub judged_at: String,
    pub verdict: Verdict,
    pub cases_passed: usize,
    pub total_cases: usize,
    pub total_runtime_ms: u64,
    pub results: Vec<CaseResult>,
}

/// Judge one exercise against every case in `file`.
///
/// All cases are graded, hidden ones included; the overall verdict is
/// `accepted` only when every case passes, otherwise the verdict of the
/// first failing case.
pub fn judge(exercise: Exercise, file: &CaseFile) -> RunReport {
    let run_id = short_run_id();
    info!(
        %exercise,
        %run_id,
        cases = file.cases.len(),
        "judging"
    );

    let mut results = Vec::with_capacity(file.cases.len());
    let mut total_runtime_ms = 0;
    for (index, case) in file.cases.iter().enumerate() {
        let result = grade_case(exercise, index, case, file.time_limit_ms);
        debug!(index, verdict = ?result.verdict, runtime_ms = result.runtime_ms, "case graded");
        total_runtime_ms += result.runtime_ms;
        results.push(result);
    }

    let cases_passed = results
        .iter()
        .filter(|r| r.verdict == Verdict::Accepted)
        .count();
    let verdict = results
        .iter()
        .map(|r| r.verdict)
        .find(|v| *v != Verdict::Accepted)
        .unwrap_or(Verdict::Accepted);

    info!(
        %exercise,
        %run_id,
        ?verdict,
        cases_passed,
        total = results.len(),
        "run complete"
    );

    RunReport {
        run_id,
        exercise,
        judged_at: Utc::now().to_rfc3339(),
        verdict,
        cases_passed,
        total_cases: results.len(),
        total_runtime_ms,
        results,
    }
}

fn grade_case(exercise: Exercise, index: usize, case: &TestCase, time_limit_ms: u64) -> CaseResult {
    let start = Instant::now();
    let outcome = run_exercise(exercise, &case.input);
    let runtime_ms = start.elapsed().as_millis() as u64;

    let mut result = CaseResult {
        index,
        verdict: Verdict::Accepted,
        runtime_ms,
        is_hidden: case.is_hidden,
        expected: None,
        actual: None,
        error: None,
    };

    match outcome {
        Err(e) => {
            result.verdict = Verdict::RuntimeError;
            result.error = Some(e.to_string());
        }
        // The driver cannot be interrupted mid-run, so the budget is
        // checked after the fact and overrides the comparison.
        Ok(_) if runtime_ms > time_limit_ms => {
            result.verdict = Verdict::TimeLimitExceeded;
        }
        Ok(output) => {
            if output.trim() != case.expected_output.trim() {
                result.verdict = Verdict::WrongAnswer;
                if !case.is_hidden {
                    result.expected = Some(case.expected_output.trim().to_string());
                    result.actual = Some(output.trim().to_string());
                }
            }
        }
    }
    result
}

/// Short hex run id, wide enough to tell runs apart in logs.
fn short_run_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::DEFAULT_TIME_LIMIT_MS;

    fn case(input: &str, expected: &str) -> TestCase {
        TestCase {
            input: input.to_string(),
            expected_output: expected.to_string(),
            is_hidden: false,
        }
    }

    fn file(cases: Vec<TestCase>) -> CaseFile {
        CaseFile {
            cases,
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
        }
    }

    #[test]
    fn test_all_cases_pass() {
        let cases = file(vec![
            case("7\n4 5 6 7 0 1 2\n0", "4"),
            case("7\n4 5 6 7 0 1 2\n3", "-1"),
            case("3\n5 1 3\n3", "2"),
        ]);
        let report = judge(Exercise::RotatedSearch, &cases);
        assert_eq!(report.verdict, Verdict::Accepted);
        assert_eq!(report.cases_passed, 3);
        assert_eq!(report.total_cases, 3);
        assert_eq!(report.run_id.len(), 8);
    }

    #[test]
    fn test_wrong_answer_carries_diff() {
        let cases = file(vec![case("3\n5 1 3\n3", "0")]);
        let report = judge(Exercise::RotatedSearch, &cases);
        assert_eq!(report.verdict, Verdict::WrongAnswer);
        let result = &report.results[0];
        assert_eq!(result.expected.as_deref(), Some("0"));
        assert_eq!(result.actual.as_deref(), Some("2"));
    }

    #[test]
    fn test_hidden_case_hides_diff() {
        let cases = file(vec![TestCase {
            input: "3\n5 1 3\n3".to_string(),
            expected_output: "0".to_string(),
            is_hidden: true,
        }]);
        let report = judge(Exercise::RotatedSearch, &cases);
        assert_eq!(report.verdict, Verdict::WrongAnswer);
        assert!(report.results[0].expected.is_none());
        assert!(report.results[0].actual.is_none());
    }

    #[test]
    fn test_trimmed_comparison() {
        let cases = file(vec![case("2\n0 1\n", "  2\n")]);
        let report = judge(Exercise::MissingNumber, &cases);
        assert_eq!(report.verdict, Verdict::Accepted);
    }

    #[test]
    fn test_runtime_error_on_malformed_input() {
        let cases = file(vec![case("7\n4 5", "-1")]);
        let report = judge(Exercise::RotatedSearch, &cases);
        assert_eq!(report.verdict, Verdict::RuntimeError);
        assert!(report.results[0].error.is_some());
    }

    #[test]
    fn test_first_failure_sets_overall_verdict() {
        let cases = file(vec![
            case("1\n1\n1", "0"),
            case("bad", "-1"),
            case("1\n1\n2", "0"),
        ]);
        let report = judge(Exercise::RotatedSearch, &cases);
        assert_eq!(report.verdict, Verdict::RuntimeError);
        assert_eq!(report.cases_passed, 1);
    }

    #[test]
    fn test_verdict_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Verdict::WrongAnswer).unwrap(),
            "\"wrong-answer\""
        );
        assert_eq!(
            serde_json::to_string(&Verdict::TimeLimitExceeded).unwrap(),
            "\"time-limit-exceeded\""
        );
    }

    #[test]
    fn test_report_field_names() {
        let cases = file(vec![case("1\n0\n0", "0")]);
        let report = judge(Exercise::RotatedSearch, &cases);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["runId"].is_string());
        assert!(json["judgedAt"].is_string());
        assert!(json["casesPassed"].is_number());
        assert!(json["totalRuntimeMs"].is_number());
        assert_eq!(json["exercise"], "rotated-search");
        assert!(json["results"][0]["runtimeMs"].is_number());
    }
}
