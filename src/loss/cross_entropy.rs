use crate::activation::softmax::softmax_rows;
use crate::math::matrix::Matrix;

/// Categorical cross-entropy on raw logits.
///
/// Softmax is applied inside the loss, so the model's training output is the
/// bare linear layer and probabilities only appear at inference time.
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// Mean over the batch of `-sum(expected[i] * log_softmax(logits)[i])`.
    ///
    /// `logits`   — shape `[batch, n_classes]`
    /// `expected` — one-hot (or soft) targets, same shape
    pub fn loss(logits: &Matrix, expected: &Matrix) -> f64 {
        assert_eq!(
            (logits.rows, logits.cols),
            (expected.rows, expected.cols),
            "logits and targets must have the same shape"
        );
        if logits.rows == 0 {
            return 0.0;
        }

        let total: f64 = logits.data.iter().zip(&expected.data)
            .map(|(z, y)| {
                // log_softmax(z)_i = z_i - max - ln(sum(exp(z - max)))
                let max = z.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                let log_sum = z.iter().map(|&v| (v - max).exp()).sum::<f64>().ln();
                z.iter().zip(y)
                    .map(|(&zi, &yi)| -yi * (zi - max - log_sum))
                    .sum::<f64>()
            })
            .sum();
        total / logits.rows as f64
    }

    /// Gradient of the mean loss w.r.t. the logits:
    ///   ∂L/∂z = (softmax(z) - expected) / batch
    pub fn derivative(logits: &Matrix, expected: &Matrix) -> Matrix {
        let batch = logits.rows.max(1) as f64;
        (&softmax_rows(logits) - expected).map(|g| g / batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_logits_give_log_n() {
        let logits = Matrix::zeros(3, 5);
        let targets = Matrix::from_data(vec![
            vec![1.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 1.0],
        ]);
        let loss = CrossEntropyLoss::loss(&logits, &targets);
        assert!((loss - 5f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn confident_correct_prediction_has_small_loss() {
        let logits = Matrix::from_data(vec![vec![20.0, 0.0, 0.0]]);
        let targets = Matrix::from_data(vec![vec![1.0, 0.0, 0.0]]);
        assert!(CrossEntropyLoss::loss(&logits, &targets) < 1e-6);
    }

    #[test]
    fn derivative_matches_finite_differences() {
        let logits = Matrix::from_data(vec![
            vec![0.3, -1.2, 0.8, 0.0, 2.1],
            vec![-0.4, 0.9, 0.1, -2.0, 0.5],
        ]);
        let targets = Matrix::from_data(vec![
            vec![0.0, 0.0, 0.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0, 0.0, 0.0],
        ]);
        let grad = CrossEntropyLoss::derivative(&logits, &targets);

        let h = 1e-6;
        for i in 0..logits.rows {
            for j in 0..logits.cols {
                let mut plus = logits.clone();
                let mut minus = logits.clone();
                plus.data[i][j] += h;
                minus.data[i][j] -= h;
                let numeric = (CrossEntropyLoss::loss(&plus, &targets)
                    - CrossEntropyLoss::loss(&minus, &targets)) / (2.0 * h);
                assert!(
                    (numeric - grad.data[i][j]).abs() < 1e-6,
                    "d/dz[{i}][{j}]: numeric {numeric} vs analytic {}",
                    grad.data[i][j]
                );
            }
        }
    }
}
