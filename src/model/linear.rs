//! Linear regression over the transformed feature space

use crate::error::{Error, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

/// Diagonal jitter added to the normal equations. The full one-hot expansion
/// is collinear with the intercept, so the unregularized system is singular.
const DIAG_JITTER: f64 = 1e-8;

/// Fitted linear regressor
///
/// # Example
///
/// ```
/// use calificar::model::LinearRegression;
/// use ndarray::{array, Array2};
///
/// let x = array![[1.0], [2.0], [3.0], [4.0]];
/// let y = array![3.0, 5.0, 7.0, 9.0];
///
/// let model = LinearRegression::fit(x.view(), y.view()).unwrap();
/// let pred = model.predict(x.view()).unwrap();
/// assert!((pred[0] - 3.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinearRegression {
    /// Per-feature weights
    pub coefficients: Array1<f64>,
    /// Bias term
    pub intercept: f64,
}

impl LinearRegression {
    /// Fit by solving the normal equations with an intercept column
    pub fn fit(x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> Result<Self> {
        let (n, p) = (x.nrows(), x.ncols());
        if n == 0 || p == 0 {
            return Err(Error::Fit(format!(
                "cannot fit on an empty matrix ({n} rows x {p} cols)"
            )));
        }
        if y.len() != n {
            return Err(Error::Fit(format!(
                "feature matrix has {n} rows but label vector has {}",
                y.len()
            )));
        }

        // Gram matrix of [1 | X] and its projection of y
        let dim = p + 1;
        let mut gram = Array2::<f64>::zeros((dim, dim));
        let mut rhs = Array1::<f64>::zeros(dim);

        gram[[0, 0]] = n as f64;
        rhs[0] = y.sum();
        for j in 0..p {
            let col_j = x.column(j);
            let sum_j = col_j.sum();
            gram[[0, j + 1]] = sum_j;
            gram[[j + 1, 0]] = sum_j;
            rhs[j + 1] = col_j.dot(&y);
            for k in j..p {
                let dot = col_j.dot(&x.column(k));
                gram[[j + 1, k + 1]] = dot;
                gram[[k + 1, j + 1]] = dot;
            }
        }
        for d in 0..dim {
            gram[[d, d]] += DIAG_JITTER;
        }

        let solution = solve(gram, rhs)?;
        let intercept = solution[0];
        let coefficients = solution.slice(ndarray::s![1..]).to_owned();

        Ok(Self {
            coefficients,
            intercept,
        })
    }

    /// Predict labels for a feature matrix
    pub fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.coefficients.len() {
            return Err(Error::Predict(format!(
                "model expects {} features, got {}",
                self.coefficients.len(),
                x.ncols()
            )));
        }
        Ok(x.dot(&self.coefficients) + self.intercept)
    }

    /// Number of input features the model was fit on
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }
}

/// Solve `a * x = b` by Gaussian elimination with partial pivoting
fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>> {
    let n = a.nrows();

    for col in 0..n {
        // Pivot: largest absolute value in the remaining column
        let mut pivot = col;
        for row in (col + 1)..n {
            if a[[row, col]].abs() > a[[pivot, col]].abs() {
                pivot = row;
            }
        }
        if a[[pivot, col]].abs() < f64::EPSILON {
            return Err(Error::Fit(
                "normal equations are singular; features may be degenerate".to_string(),
            ));
        }
        if pivot != col {
            for k in 0..n {
                a.swap([col, k], [pivot, k]);
            }
            b.swap(col, pivot);
        }

        for row in (col + 1)..n {
            let factor = a[[row, col]] / a[[col, col]];
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution
    let mut x = Array1::<f64>::zeros(n);
    for row in (0..n).rev() {
        let mut sum = b[row];
        for k in (row + 1)..n {
            sum -= a[[row, k]] * x[k];
        }
        x[row] = sum / a[[row, row]];
    }

    Ok(x)
}
