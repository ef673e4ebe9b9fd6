//! Text rendering for matrices.
//!
//! The layout is a `Matrix (<rows>x<cols>):` header followed by one
//! bracketed line per row, e.g.
//!
//! ```text
//! Matrix (2x2):
//! [   1.00   2.00 ]
//! [   3.00   4.00 ]
//! ```
use std::fmt::{self, Write};

use crate::config::RenderConfig;
use crate::math::Matrix;

/// Renders `matrix` with the default layout (width 6, two decimals).
pub fn render(matrix: &Matrix) -> String {
    render_with(matrix, &RenderConfig::default())
}

/// Renders `matrix` with a custom layout. Width and precision are capped at
/// `RenderConfig::MAX_WIDTH` and `RenderConfig::MAX_PRECISION`.
pub fn render_with(matrix: &Matrix, config: &RenderConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_matrix(&mut out, matrix, config);
    out
}

fn write_matrix<W: Write>(out: &mut W, matrix: &Matrix, config: &RenderConfig) -> fmt::Result {
    let config = config.clamped();
    let (rows, cols) = matrix.shape();
    writeln!(out, "Matrix ({}x{}):", rows, cols)?;
    for row in matrix.as_slice().chunks(cols) {
        write!(out, "[ ")?;
        for value in row {
            write!(
                out,
                "{:>width$.prec$} ",
                value,
                width = config.width,
                prec = config.precision
            )?;
        }
        writeln!(out, "]")?;
    }
    Ok(())
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(f, self, &RenderConfig::default())
    }
}
