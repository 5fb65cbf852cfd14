use crate::{layers::linear::Linear, math::matrix::Matrix};

/// Adam optimizer for a single `Linear` layer.
///
/// First and second moment buffers are created on the first `step` so they
/// always match the shapes of the layer being trained.
#[derive(Debug, Clone)]
pub struct Adam {
    pub learning_rate: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub epsilon: f64,
    step: u32,
    moments: Option<Moments>,
}

#[derive(Debug, Clone)]
struct Moments {
    m_weights: Matrix,
    v_weights: Matrix,
    m_biases: Matrix,
    v_biases: Matrix,
}

impl Adam {
    pub fn new(learning_rate: f64) -> Adam {
        Adam {
            learning_rate,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
            step: 0,
            moments: None,
        }
    }

    /// Number of updates applied so far.
    pub fn steps_taken(&self) -> u32 {
        self.step
    }

    /// Applies one bias-corrected Adam update to `layer`.
    pub fn step(&mut self, layer: &mut Linear, weights_grad: &Matrix, biases_grad: &Matrix) {
        let moments = self.moments.get_or_insert_with(|| Moments {
            m_weights: Matrix::zeros(layer.weights.rows, layer.weights.cols),
            v_weights: Matrix::zeros(layer.weights.rows, layer.weights.cols),
            m_biases: Matrix::zeros(layer.biases.rows, layer.biases.cols),
            v_biases: Matrix::zeros(layer.biases.rows, layer.biases.cols),
        });

        self.step += 1;
        let hyper = Hyper {
            lr: self.learning_rate,
            beta1: self.beta1,
            beta2: self.beta2,
            epsilon: self.epsilon,
            correction1: 1.0 - self.beta1.powi(self.step as i32),
            correction2: 1.0 - self.beta2.powi(self.step as i32),
        };

        hyper.update(&mut layer.weights, weights_grad, &mut moments.m_weights, &mut moments.v_weights);
        hyper.update(&mut layer.biases, biases_grad, &mut moments.m_biases, &mut moments.v_biases);
    }
}

struct Hyper {
    lr: f64,
    beta1: f64,
    beta2: f64,
    epsilon: f64,
    correction1: f64,
    correction2: f64,
}

impl Hyper {
    fn update(&self, param: &mut Matrix, grad: &Matrix, m: &mut Matrix, v: &mut Matrix) {
        assert_eq!(
            (param.rows, param.cols),
            (grad.rows, grad.cols),
            "gradient shape does not match parameter shape"
        );
        for i in 0..param.rows {
            for j in 0..param.cols {
                let g = grad.data[i][j];
                m.data[i][j] = self.beta1 * m.data[i][j] + (1.0 - self.beta1) * g;
                v.data[i][j] = self.beta2 * v.data[i][j] + (1.0 - self.beta2) * g * g;
                let m_hat = m.data[i][j] / self.correction1;
                let v_hat = v.data[i][j] / self.correction2;
                param.data[i][j] -= self.lr * m_hat / (v_hat.sqrt() + self.epsilon);
            }
        }
    }
}
