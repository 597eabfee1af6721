//! Katabox I/O: token scanning and the one-shot exercise drivers.
//!
//! This crate is the boundary layer: it parses the whitespace-token input
//! each exercise consumes and renders the answer in that exercise's fixed
//! textual form. The solvers themselves stay I/O-free.

pub mod drivers;
pub mod scan;

pub use drivers::run_exercise;
pub use scan::Scanner;
