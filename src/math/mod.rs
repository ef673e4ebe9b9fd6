//! Dense matrix storage and arithmetic.
//!
//! `Matrix` keeps its `f32` elements in one row-major buffer and checks
//! every shape precondition before touching data, so a failed operation
//! never leaves a partially written result behind.
pub mod matrix;

pub use matrix::Matrix;
