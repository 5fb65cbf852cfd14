use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

/// Fully connected layer without activation: `z = xW + b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Linear {
    pub input_size: usize,
    pub output_size: usize,
    /// Shape `(input_size, output_size)`.
    pub weights: Matrix,
    /// Shape `(1, output_size)`.
    pub biases: Matrix,
}

impl Linear {
    /// Initialises weights and biases uniformly in `[-1/sqrt(in), 1/sqrt(in))`.
    pub fn new<R: Rng + ?Sized>(input_size: usize, output_size: usize, rng: &mut R) -> Linear {
        let bound = 1.0 / (input_size as f64).sqrt();
        Linear {
            input_size,
            output_size,
            weights: Matrix::uniform(input_size, output_size, bound, rng),
            biases: Matrix::uniform(1, output_size, bound, rng),
        }
    }

    /// Maps a `batch × input_size` matrix to `batch × output_size` logits.
    pub fn forward(&self, inputs: &Matrix) -> Matrix {
        (inputs * &self.weights).add_row_broadcast(&self.biases)
    }

    /// Gradients of the loss w.r.t. the weights and biases, given the layer
    /// inputs and `∂L/∂z` for the whole batch.
    ///
    /// Returns `(weights_grad, biases_grad)`; the batch dimension is summed
    /// out, so any averaging must already be folded into `grad_logits`.
    pub fn compute_gradients(&self, inputs: &Matrix, grad_logits: &Matrix) -> (Matrix, Matrix) {
        let weights_grad = &inputs.transpose() * grad_logits;
        let biases_grad = grad_logits.sum_rows();
        (weights_grad, biases_grad)
    }
}
