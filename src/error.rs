use std::error::Error;
use std::fmt;

/// Failure kinds raised by matrix construction, access and arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Zero rows or columns, or a `rows * cols` that overflows `usize`.
    InvalidDimensions { rows: usize, cols: usize },
    /// Element access outside `[0, rows) x [0, cols)`.
    IndexOutOfRange {
        row: usize,
        col: usize,
        shape: (usize, usize),
    },
    /// Elementwise operation on matrices of different shapes.
    ShapeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Matrix product where `lhs.cols != rhs.rows`.
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    DivideByZero,
    /// Reshape that would change the element count.
    ReshapeSizeMismatch {
        from: (usize, usize),
        to: (usize, usize),
    },
    /// Buffer handed to `from_shape_vec` has the wrong length.
    BufferLength {
        shape: (usize, usize),
        len: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::InvalidDimensions { rows, cols } => write!(
                f,
                "Matrix dimensions must be positive integers with a representable element count, got ({}, {})",
                rows, cols
            ),
            MatrixError::IndexOutOfRange { row, col, shape } => write!(
                f,
                "Matrix index ({}, {}) is out of range for shape ({}, {})",
                row, col, shape.0, shape.1
            ),
            MatrixError::ShapeMismatch { lhs, rhs } => write!(
                f,
                "Elementwise operation requires equal shapes, got ({}, {}) and ({}, {})",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::DimensionMismatch { lhs, rhs } => write!(
                f,
                "Matrix multiplication requires lhs columns to equal rhs rows, got ({}, {}) and ({}, {})",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::DivideByZero => write!(f, "Cannot divide by zero"),
            MatrixError::ReshapeSizeMismatch { from, to } => write!(
                f,
                "Invalid reshape from ({}, {}) to ({}, {}): element count must be preserved",
                from.0, from.1, to.0, to.1
            ),
            MatrixError::BufferLength { shape, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                shape.0, shape.1, len
            ),
        }
    }
}

impl Error for MatrixError {}

pub type Result<T> = std::result::Result<T, MatrixError>;
