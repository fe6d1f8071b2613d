//! Rectangular matrices of exact rationals and a Gaussian solver.

use num_traits::Zero;

use crate::{
    error::{matrix::Error, Result},
    rational::Rational,
};

/// A simple, rectangular matrix of exact rationals.
///
/// Shape is validated on construction: fallible (`try_new`) and panicking
/// (`new`) variants are provided, and every row must have the same length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<Rational>>,
}

impl Matrix {
    /// Construct a new matrix from rows. Panics if rows have differing
    /// lengths or the matrix is empty.
    pub fn new(rows: Vec<Vec<Rational>>) -> Self {
        Self::try_new(rows).expect("all matrix rows must have the same length")
    }

    /// Fallible constructor that validates the matrix shape.
    pub fn try_new(rows: Vec<Vec<Rational>>) -> Result<Self, Error> {
        let first = rows.first().ok_or(Error::Empty)?;
        let expected = first.len();
        for (row, entries) in rows.iter().enumerate().skip(1) {
            if entries.len() != expected {
                return Err(Error::Ragged {
                    row,
                    expected,
                    found: entries.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Borrow the underlying rows.
    pub fn as_slice(&self) -> &[Vec<Rational>] {
        &self.rows
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Solve the linear system held in this augmented matrix.
    ///
    /// The matrix must be `n x (n + 1)`: coefficient columns followed by the
    /// right-hand side. Runs forward elimination with partial pivoting (the
    /// remaining row with the largest-magnitude entry in the pivot column is
    /// selected, which guards against exact-zero pivots), then back
    /// substitution. Returns the solution vector of length `n`.
    pub fn solve_augmented(mut self) -> Result<Vec<Rational>, Error> {
        let n = self.rows();
        if self.cols() != n + 1 {
            return Err(Error::NotAugmented {
                rows: n,
                cols: self.cols(),
            });
        }

        for col in 0..n {
            let mut pivot = col;
            for row in col + 1..n {
                if self.rows[row][col].abs() > self.rows[pivot][col].abs() {
                    pivot = row;
                }
            }
            if self.rows[pivot][col].is_zero() {
                return Err(Error::Singular { column: col });
            }
            self.rows.swap(col, pivot);

            for row in col + 1..n {
                if self.rows[row][col].is_zero() {
                    continue;
                }
                let factor = &self.rows[row][col] / &self.rows[col][col];
                for entry in col..=n {
                    let delta = &factor * &self.rows[col][entry];
                    self.rows[row][entry] -= delta;
                }
            }
        }

        let mut solution = vec![Rational::zero(); n];
        for row in (0..n).rev() {
            let mut acc = self.rows[row][n].clone();
            for col in row + 1..n {
                let product = &self.rows[row][col] * &solution[col];
                acc -= product;
            }
            solution[row] = &acc / &self.rows[row][row];
        }

        Ok(solution)
    }
}
