//! One-shot exercise drivers.
//!
//! Each driver is one complete exercise program: parse the stdin token
//! format, call the solver, render the answer in the exercise's fixed
//! textual form. `run_exercise` is pure with respect to process state;
//! callers own the transport on both sides.

use std::io::BufRead;

use katabox_core::{Error, Exercise, Result};
use katabox_solvers::{
    can_construct, intersection, locate_rotated, max_subarray_sum, merge_intervals,
    missing_number, Interval,
};

use crate::scan::Scanner;

/// Run one exercise over its textual input, producing the exact bytes of
/// its stdout answer.
pub fn run_exercise(exercise: Exercise, input: &str) -> Result<String> {
    tracing::debug!(%exercise, bytes = input.len(), "running driver");
    let mut scanner = Scanner::new(input.as_bytes());
    match exercise {
        Exercise::RotatedSearch => rotated_search(&mut scanner),
        Exercise::MergeIntervals => merge_intervals_driver(&mut scanner),
        Exercise::RansomNote => ransom_note(&mut scanner),
        Exercise::MissingNumber => missing_number_driver(&mut scanner),
        Exercise::MaxSubarray => max_subarray(&mut scanner),
        Exercise::Intersection => intersection_driver(&mut scanner),
    }
}

/// Input: `n`, `n` integers, `target`. Output: match index or `-1`.
fn rotated_search<R: BufRead>(scanner: &mut Scanner<R>) -> Result<String> {
    let n = scanner.next_usize()?;
    let seq = scanner.next_i64s(n)?;
    let target = scanner.next_i64()?;
    let answer = match locate_rotated(&seq, &target) {
        Some(index) => index as i64,
        None => -1,
    };
    Ok(answer.to_string())
}

/// Input: `n`, then `n` `start end` pairs. Output: one `start end` line
/// per merged interval.
fn merge_intervals_driver<R: BufRead>(scanner: &mut Scanner<R>) -> Result<String> {
    let n = scanner.next_usize()?;
    let mut intervals = Vec::with_capacity(n);
    for _ in 0..n {
        let start = scanner.next_i64()?;
        let end = scanner.next_i64()?;
        intervals.push(Interval::new(start, end));
    }
    let mut out = String::new();
    for interval in merge_intervals(intervals) {
        out.push_str(&format!("{} {}\n", interval.start, interval.end));
    }
    Ok(out)
}

/// Input: two tokens, note then magazine. Output: `true` or `false`.
fn ransom_note<R: BufRead>(scanner: &mut Scanner<R>) -> Result<String> {
    let note = scanner.next_token()?;
    let magazine = scanner.next_token()?;
    Ok(can_construct(&note, &magazine).to_string())
}

/// Input: `n`, `n` integers. Output: the value absent from `0..=n`.
fn missing_number_driver<R: BufRead>(scanner: &mut Scanner<R>) -> Result<String> {
    let n = scanner.next_usize()?;
    let nums = scanner.next_i64s(n)?;
    Ok(missing_number(&nums).to_string())
}

/// Input: `n`, `n` integers. Output: the maximum subarray sum.
fn max_subarray<R: BufRead>(scanner: &mut Scanner<R>) -> Result<String> {
    let n = scanner.next_usize()?;
    let nums = scanner.next_i64s(n)?;
    let best = max_subarray_sum(&nums)
        .ok_or_else(|| Error::Parse("max-subarray requires a non-empty array".into()))?;
    Ok(best.to_string())
}

/// Input: `n m`, `n` integers, `m` integers. Output: the distinct common
/// values, ascending, space-separated.
fn intersection_driver<R: BufRead>(scanner: &mut Scanner<R>) -> Result<String> {
    let n = scanner.next_usize()?;
    let m = scanner.next_usize()?;
    let a = scanner.next_i64s(n)?;
    let b = scanner.next_i64s(m)?;
    let common: Vec<String> = intersection(&a, &b).iter().map(i64::to_string).collect();
    Ok(common.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotated_search_found() {
        let out = run_exercise(Exercise::RotatedSearch, "7\n4 5 6 7 0 1 2\n0").unwrap();
        assert_eq!(out, "4");
    }

    #[test]
    fn test_rotated_search_sentinel() {
        let out = run_exercise(Exercise::RotatedSearch, "7\n4 5 6 7 0 1 2\n3").unwrap();
        assert_eq!(out, "-1");
        let out = run_exercise(Exercise::RotatedSearch, "1\n1\n0").unwrap();
        assert_eq!(out, "-1");
        let out = run_exercise(Exercise::RotatedSearch, "0\n5").unwrap();
        assert_eq!(out, "-1");
    }

    #[test]
    fn test_merge_intervals_lines() {
        let out =
            run_exercise(Exercise::MergeIntervals, "4\n1 3\n2 6\n8 10\n15 18").unwrap();
        assert_eq!(out, "1 6\n8 10\n15 18\n");
    }

    #[test]
    fn test_merge_intervals_empty() {
        assert_eq!(run_exercise(Exercise::MergeIntervals, "0").unwrap(), "");
    }

    #[test]
    fn test_ransom_note_bool_words() {
        assert_eq!(run_exercise(Exercise::RansomNote, "aa aab").unwrap(), "true");
        assert_eq!(run_exercise(Exercise::RansomNote, "a b").unwrap(), "false");
    }

    #[test]
    fn test_missing_number() {
        assert_eq!(run_exercise(Exercise::MissingNumber, "3\n3 0 1").unwrap(), "2");
    }

    #[test]
    fn test_max_subarray() {
        let out = run_exercise(Exercise::MaxSubarray, "9\n-2 1 -3 4 -1 2 1 -5 4").unwrap();
        assert_eq!(out, "6");
    }

    #[test]
    fn test_max_subarray_rejects_empty() {
        assert!(matches!(
            run_exercise(Exercise::MaxSubarray, "0"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_intersection_ascending() {
        let out = run_exercise(Exercise::Intersection, "3 5\n4 9 5\n9 4 9 8 4").unwrap();
        assert_eq!(out, "4 9");
    }

    #[test]
    fn test_truncated_input_is_parse_error() {
        assert!(matches!(
            run_exercise(Exercise::RotatedSearch, "7\n4 5 6"),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            run_exercise(Exercise::RansomNote, "loneword"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_malformed_token_is_parse_error() {
        assert!(matches!(
            run_exercise(Exercise::MissingNumber, "2\n0 x"),
            Err(Error::Parse(_))
        ));
    }
}
