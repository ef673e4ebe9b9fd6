//! densemat: dense 2D `f32` matrices with shape-checked arithmetic.
//!
//! The crate provides a row-major `Matrix` with bounds-checked element
//! access, elementwise and scalar arithmetic, matrix multiplication and the
//! in-place layout operations `transpose` and `reshape`. Every fallible
//! operation returns a `MatrixError` instead of panicking.
//!
//! Rendering and its `RenderConfig` live in separate modules, as does the
//! reference walkthrough used by the `densemat` binary.
pub mod config;
pub mod demo;
pub mod error;
pub mod math;
pub mod render;

pub use config::RenderConfig;
pub use error::MatrixError;
pub use math::Matrix;
pub use render::{render, render_with};
