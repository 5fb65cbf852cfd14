use crate::math::matrix::Matrix;

/// Numerically stable softmax of a single logit vector.
///
/// The row maximum is subtracted before exponentiating so large logits do
/// not overflow; the result is unchanged because softmax is shift-invariant.
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&z| (z - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Applies `softmax` to every row of a `batch × classes` logit matrix.
pub fn softmax_rows(logits: &Matrix) -> Matrix {
    Matrix {
        rows: logits.rows,
        cols: logits.cols,
        data: logits.data.iter().map(|row| softmax(row)).collect(),
    }
}
