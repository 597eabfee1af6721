//! Katabox Solvers: each exercise as a pure, single-pass function.
//!
//! No module here performs I/O or touches shared state; every function is
//! safe to call concurrently from independent threads.

pub mod intervals;
pub mod numeric;
pub mod search;
pub mod sets;
pub mod subarray;
pub mod text;

pub use intervals::{merge_intervals, Interval};
pub use numeric::missing_number;
pub use search::locate_rotated;
pub use sets::intersection;
pub use subarray::max_subarray_sum;
pub use text::can_construct;
