//! Standalone sequence utilities.

pub mod zero_sum;

pub use zero_sum::longest_zero_sum_run;
