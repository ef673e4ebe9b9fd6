use std::ops::{Add, Div, Mul, Sub};

use crate::error::{MatrixError, Result};

/// Dense 2D `f32` matrix stored row-major in a single owned buffer.
///
/// The element at `(i, j)` lives at offset `i * cols + j`. Rows and columns
/// are always positive and the buffer length always equals `rows * cols`.
///
/// `Matrix` does no internal locking. Callers sharing one across threads must
/// serialize `set`, `transpose` and `reshape` against concurrent reads.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Allocates a zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = element_count(rows, cols)?;
        Ok(Self {
            data: vec![0.0; len],
            rows,
            cols,
        })
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols)
    }

    /// Wraps a row-major buffer whose length must equal `rows * cols`.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f32>) -> Result<Self> {
        let (rows, cols) = shape;
        if data.len() != element_count(rows, cols)? {
            return Err(MatrixError::BufferLength {
                shape,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a matrix holds at least one element.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.data.clone()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                shape: self.shape(),
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        let offset = self.offset(row, col)?;
        Ok(self.data[offset])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        let offset = self.offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> Result<&[f32]> {
        let start = self.offset(row, 0)?;
        Ok(&self.data[start..start + self.cols])
    }

    /// Elementwise sum. Both operands must have the same shape.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Elementwise difference. Both operands must have the same shape.
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, |a, b| a - b)
    }

    pub fn scale(&self, scalar: f32) -> Matrix {
        self.mapv(|v| v * scalar)
    }

    /// Divides every element by `scalar`.
    ///
    /// Only an exact zero is rejected; tiny divisors are allowed to produce
    /// huge or infinite values.
    pub fn divide(&self, scalar: f32) -> Result<Matrix> {
        if scalar == 0.0 {
            log::debug!("rejected division of {:?} matrix by zero", self.shape());
            return Err(MatrixError::DivideByZero);
        }
        Ok(self.mapv(|v| v / scalar))
    }

    /// Matrix product `self * rhs` with shape `(self.rows, rhs.cols)`.
    ///
    /// Each output cell starts from `0.0` and accumulates
    /// `self[i, k] * rhs[k, j]` for `k` ascending, so rounding is
    /// reproducible.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            log::debug!(
                "rejected matmul of {:?} by {:?}",
                self.shape(),
                rhs.shape()
            );
            return Err(MatrixError::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        log::trace!("matmul {:?} x {:?}", self.shape(), rhs.shape());

        let (rows, inner, cols) = (self.rows, self.cols, rhs.cols);
        let mut result = Matrix::new(rows, cols)?;
        for i in 0..rows {
            for j in 0..cols {
                let mut sum = 0.0f32;
                for k in 0..inner {
                    sum += self.get(i, k)? * rhs.get(k, j)?;
                }
                result.set(i, j, sum)?;
            }
        }
        Ok(result)
    }

    /// Transposes in place: the buffer is rebuilt and the shape becomes
    /// `(cols, rows)`.
    pub fn transpose(&mut self) {
        let (rows, cols) = self.shape();
        log::trace!("transpose {:?} -> {:?}", (rows, cols), (cols, rows));

        match self.transposed() {
            Ok(t) => *self = t,
            // unreachable for a well-formed matrix; the receiver stays as it was
            Err(err) => log::error!("transpose of {:?} failed: {}", (rows, cols), err),
        }
    }

    fn transposed(&self) -> Result<Matrix> {
        let mut result = Matrix::new(self.cols, self.rows)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.set(j, i, self.get(i, j)?)?;
            }
        }
        Ok(result)
    }

    /// Reinterprets the buffer under a new shape without moving any element.
    ///
    /// `new_rows * new_cols` must equal the current element count.
    pub fn reshape(&mut self, new_rows: usize, new_cols: usize) -> Result<()> {
        let fits = new_rows
            .checked_mul(new_cols)
            .map_or(false, |n| n == self.data.len());
        if !fits {
            log::debug!(
                "rejected reshape of {:?} to {:?}",
                self.shape(),
                (new_rows, new_cols)
            );
            return Err(MatrixError::ReshapeSizeMismatch {
                from: self.shape(),
                to: (new_rows, new_cols),
            });
        }
        log::trace!("reshape {:?} -> {:?}", self.shape(), (new_rows, new_cols));
        self.rows = new_rows;
        self.cols = new_cols;
        Ok(())
    }

    fn mapv<F>(&self, f: F) -> Matrix
    where
        F: Fn(f32) -> f32,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn zip_with<F>(&self, rhs: &Matrix, f: F) -> Result<Matrix>
    where
        F: Fn(f32, f32) -> f32,
    {
        if self.shape() != rhs.shape() {
            log::debug!(
                "rejected elementwise op on {:?} and {:?}",
                self.shape(),
                rhs.shape()
            );
            return Err(MatrixError::ShapeMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }
}

/// Element count of a `rows x cols` matrix. Zero or overflowing sizes are rejected.
fn element_count(rows: usize, cols: usize) -> Result<usize> {
    match rows.checked_mul(cols) {
        Some(len) if len > 0 => Ok(len),
        _ => Err(MatrixError::InvalidDimensions { rows, cols }),
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: &'b Matrix) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix>;

    fn sub(self, rhs: &'b Matrix) -> Self::Output {
        Matrix::sub(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        self.matmul(rhs)
    }
}

impl<'a> Mul<f32> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl<'a> Div<f32> for &'a Matrix {
    type Output = Result<Matrix>;

    fn div(self, rhs: f32) -> Self::Output {
        self.divide(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_row_major() {
        let m = Matrix::from_shape_vec((2, 3), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(m.offset(1, 2).unwrap(), 5);
        assert_eq!(m.get(1, 0).unwrap(), 3.0);
    }

    #[test]
    fn failed_set_leaves_buffer_untouched() {
        let mut m = Matrix::new(2, 2).unwrap();
        assert!(m.set(2, 0, 9.0).is_err());
        assert_eq!(m.as_slice(), &[0.0; 4]);
    }

    #[test]
    fn failed_reshape_keeps_shape() {
        let mut m = Matrix::new(2, 3).unwrap();
        let err = m.reshape(4, 2).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ReshapeSizeMismatch {
                from: (2, 3),
                to: (4, 2)
            }
        );
        assert_eq!(m.shape(), (2, 3));
    }

    #[test]
    fn reshape_overflowing_product_is_rejected() {
        let mut m = Matrix::new(2, 3).unwrap();
        assert!(m.reshape(usize::MAX, 2).is_err());
    }

    #[test]
    fn overflowing_element_count_is_invalid() {
        assert_eq!(
            element_count(usize::MAX / 2 + 1, 2).unwrap_err(),
            MatrixError::InvalidDimensions {
                rows: usize::MAX / 2 + 1,
                cols: 2
            }
        );
        assert_eq!(element_count(3, 4).unwrap(), 12);
    }

    #[test]
    fn transposed_reads_through_checked_access() {
        let m = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let t = m.transposed().unwrap();
        assert_eq!(t.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
        assert_eq!(m.shape(), (2, 2));
    }

    #[test]
    fn transpose_of_single_row_is_column() {
        let mut m = Matrix::from_shape_vec((1, 3), vec![1.0, 2.0, 3.0]).unwrap();
        m.transpose();
        assert_eq!(m.shape(), (3, 1));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0]);
    }
}
