//! Reference walkthrough of the matrix API.
//!
//! Builds a few small matrices, runs every arithmetic and layout operation
//! on them and collects the rendered results into one report.
use std::fmt::Write;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::math::Matrix;
use crate::render::render_with;

/// Builds a matrix by assigning each element through `set`.
fn filled(rows: usize, cols: usize, values: &[f32]) -> Result<Matrix> {
    let mut m = Matrix::new(rows, cols)?;
    for i in 0..rows {
        for j in 0..cols {
            m.set(i, j, values[i * cols + j])?;
        }
    }
    Ok(m)
}

struct Report<'a> {
    out: String,
    config: &'a RenderConfig,
}

impl<'a> Report<'a> {
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }

    fn matrix(&mut self, label: &str, m: &Matrix) {
        self.line(label);
        let rendered = render_with(m, self.config);
        self.line(&rendered);
    }
}

/// Runs the scenario and returns everything it would print.
pub fn run(config: &RenderConfig) -> Result<String> {
    let mut report = Report {
        out: String::new(),
        config,
    };
    report.line("-- Matrix Assignment Test --\n");

    let mut a = filled(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
    let b = filled(2, 3, &[6.0, 5.0, 4.0, 3.0, 2.0, 1.0])?;
    report.matrix("Matrix A:", &a);
    report.matrix("Matrix B:", &b);

    report.matrix("A + B:", &(&a + &b)?);
    report.matrix("A - B:", &(&a - &b)?);
    report.matrix("A * 2:", &(&a * 2.0));
    report.matrix("A / 2:", &(&a / 2.0)?);

    log::info!("running matrix multiplication test");
    report.line("Matrix Multiplication Test");
    let x = filled(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
    let y = filled(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0])?;
    report.matrix("X:", &x);
    report.matrix("Y:", &y);
    report.matrix("X * Y:", &(&x * &y)?);

    a.transpose();
    report.matrix("Transpose of A:", &a);

    report.line("Reshape test:");
    let values: Vec<f32> = (1..=8).map(|v| v as f32).collect();
    let mut r = filled(4, 2, &values)?;
    report.matrix("Original R:", &r);
    r.reshape(2, 4)?;
    report.matrix("Reshaped R (2x4):", &r);

    report.line("\n-- End of Tests --");
    Ok(report.out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_contains_every_step() {
        let out = run(&RenderConfig::default()).unwrap();
        assert!(out.starts_with("-- Matrix Assignment Test --\n\n"));
        assert!(out.contains("X * Y:\nMatrix (2x2):\n[  58.00  64.00 ]\n[ 139.00 154.00 ]\n"));
        assert!(out.contains("Transpose of A:\nMatrix (3x2):\n[   1.00   4.00 ]\n"));
        assert!(out.contains("Reshaped R (2x4):\nMatrix (2x4):\n[   1.00   2.00   3.00   4.00 ]\n"));
        assert!(out.ends_with("\n-- End of Tests --\n"));
    }
}
