use rand::Rng;
use serde::{Serialize, Deserialize};
use std::ops::{Sub, Mul};

/// Dense row-major matrix of `f64`.
///
/// A batch of samples is stored one sample per row, so a batch of `n`
/// five-dimensional inputs is an `n × 5` matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Samples every entry uniformly from `[-bound, bound)`.
    ///
    /// With `bound = 1 / sqrt(fan_in)` this is the usual initialisation for a
    /// linear layer feeding a softmax.
    pub fn uniform<R: Rng + ?Sized>(rows: usize, cols: usize, bound: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen_range(-bound..bound);
            }
        }

        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Ragged rows: every row must have {} columns",
            cols
        );
        Matrix { rows, cols, data }
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Column-wise sum, collapsing the batch dimension into a `1 × cols` row.
    pub fn sum_rows(&self) -> Matrix {
        let mut res = Matrix::zeros(1, self.cols);
        for row in &self.data {
            for (acc, x) in res.data[0].iter_mut().zip(row) {
                *acc += x;
            }
        }
        res
    }

    /// Adds the `1 × cols` matrix `row` to every row of `self`.
    pub fn add_row_broadcast(&self, row: &Matrix) -> Matrix {
        if row.rows != 1 || row.cols != self.cols {
            panic!(
                "Cannot broadcast {}x{} over {}x{}",
                row.rows, row.cols, self.rows, self.cols
            )
        }

        let data = self.data.iter()
            .map(|r| r.iter().zip(&row.data[0]).map(|(a, b)| a + b).collect())
            .collect();
        Matrix { rows: self.rows, cols: self.cols, data }
    }

    fn zip_with<F>(&self, rhs: &Matrix, op: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!(
                "Matrices are of incorrect sizes: {}x{} vs {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            )
        }

        let data = self.data.iter().zip(&rhs.data)
            .map(|(a, b)| a.iter().zip(b).map(|(&x, &y)| op(x, y)).collect())
            .collect();
        Matrix { rows: self.rows, cols: self.cols, data }
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!(
                "Matrices are of incorrect sizes: {}x{} * {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            )
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}
