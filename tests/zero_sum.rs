//! Longest zero-sum run tests.

use edgewalk::longest_zero_sum_run;

#[test]
fn test_longest_zero_sum_run_basic() {
    let input = [15, -2, 2, -8, 1, 7, 10, 23];
    let range = longest_zero_sum_run(&input);
    assert_eq!(range, 1..6);
    assert_eq!(input[range].iter().sum::<i64>(), 0);
}

#[test]
fn test_no_zero_sum_run() {
    assert!(longest_zero_sum_run(&[1, 2, 3]).is_empty());
    assert!(longest_zero_sum_run(&[]).is_empty());
}

#[test]
fn test_whole_input_sums_to_zero() {
    let input = [3, -1, -2, 5, -5];
    assert_eq!(longest_zero_sum_run(&input), 0..5);
}

#[test]
fn test_prefers_longest_of_several_runs() {
    // two disjoint runs: [1, -1] and [2, -1, -1]
    let input = [1, -1, 7, 2, -1, -1];
    assert_eq!(longest_zero_sum_run(&input), 3..6);
}

#[test]
fn test_leading_zero_run() {
    let input = [0, 0, 5];
    assert_eq!(longest_zero_sum_run(&input), 0..2);
}
