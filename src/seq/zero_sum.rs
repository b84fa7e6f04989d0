//! Longest contiguous zero-sum run.

use std::collections::HashMap;
use std::ops::Range;

/// Index range of the longest contiguous run of `values` that sums to
/// zero. Empty range when no such run exists.
///
/// Single pass over prefix sums: two equal prefix sums bracket a
/// zero-sum run, so each sum is recorded at its first occurrence and
/// every repeat is a candidate run.
pub fn longest_zero_sum_run(values: &[i64]) -> Range<usize> {
    let mut first_seen: HashMap<i64, usize> = HashMap::new();
    first_seen.insert(0, 0);

    let mut sum = 0i64;
    let mut best = 0..0;
    for (i, &v) in values.iter().enumerate() {
        sum += v;
        match first_seen.get(&sum) {
            Some(&start) => {
                if i + 1 - start > best.len() {
                    best = start..i + 1;
                }
            }
            None => {
                first_seen.insert(sum, i + 1);
            }
        }
    }

    best
}
