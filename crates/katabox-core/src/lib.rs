//! Katabox Core: the exercise catalog and shared error types.

pub mod error;
pub mod exercise;

pub use error::{Error, Result};
pub use exercise::{Difficulty, Exercise};
