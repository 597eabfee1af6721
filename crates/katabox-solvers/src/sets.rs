//! Distinct-value array intersection.

use std::collections::HashSet;

/// Distinct values present in both `a` and `b`, in ascending order.
///
/// Duplicates in either input contribute a single result value. The
/// ascending order makes the result deterministic regardless of input
/// order.
pub fn intersection(a: &[i64], b: &[i64]) -> Vec<i64> {
    let left: HashSet<i64> = a.iter().copied().collect();
    let common: HashSet<i64> = b.iter().copied().filter(|x| left.contains(x)).collect();
    let mut result: Vec<i64> = common.into_iter().collect();
    result.sort_unstable();
    result
}
