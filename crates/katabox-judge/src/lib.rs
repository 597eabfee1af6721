//! Katabox Judge: run an exercise against recorded cases and grade the
//! output.
//!
//! One exercise per run, in-process, nothing persisted. The case-file
//! shape and the verdict vocabulary follow competitive-judge conventions:
//! trimmed-output equality, kebab-case verdict strings, hidden cases.

pub mod cases;
pub mod runner;

pub use cases::{CaseFile, TestCase, DEFAULT_TIME_LIMIT_MS};
pub use runner::{judge, CaseResult, RunReport, Verdict};
