use rand::Rng;
use tracing::debug;

use crate::data::dataset::{argmax, build_dataset};
use crate::math::matrix::Matrix;
use crate::network::classifier::Classifier;

/// Outcome of one evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalReport {
    pub correct: usize,
    pub wrong: usize,
}

impl EvalReport {
    /// Fraction of correct predictions in `[0, 1]`; 0 for an empty set.
    pub fn accuracy(&self) -> f64 {
        let total = self.correct + self.wrong;
        if total == 0 {
            0.0
        } else {
            self.correct as f64 / total as f64
        }
    }
}

/// Scores `model` on `test_sample_num` freshly generated samples.
///
/// A prediction counts as correct when the most probable class equals the
/// hot index of the label.
pub fn evaluate<R: Rng + ?Sized>(model: &Classifier, test_sample_num: usize, rng: &mut R) -> EvalReport {
    let dataset = build_dataset(test_sample_num, rng);
    if dataset.is_empty() {
        return EvalReport { correct: 0, wrong: 0 };
    }

    let predicted = model.predict_classes(&Matrix::from_data(dataset.inputs));
    let correct = predicted.iter().zip(&dataset.labels)
        .filter(|(p, label)| **p == argmax(label))
        .count();
    let report = EvalReport { correct, wrong: test_sample_num - correct };

    debug!(correct = report.correct, accuracy = report.accuracy(), "evaluated on fresh samples");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::linear::Linear;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn perfect_model_scores_one() {
        let mut weights = Matrix::zeros(5, 5);
        for i in 0..5 {
            weights.data[i][i] = 1.0;
        }
        let model = Classifier {
            linear: Linear { input_size: 5, output_size: 5, weights, biases: Matrix::zeros(1, 5) },
        };
        let report = evaluate(&model, 100, &mut StdRng::seed_from_u64(5));
        assert_eq!(report, EvalReport { correct: 100, wrong: 0 });
        assert_eq!(report.accuracy(), 1.0);
    }

    #[test]
    fn constant_model_scores_about_one_fifth() {
        let mut biases = Matrix::zeros(1, 5);
        biases.data[0][2] = 1.0;
        let model = Classifier {
            linear: Linear { input_size: 5, output_size: 5, weights: Matrix::zeros(5, 5), biases },
        };
        let report = evaluate(&model, 2000, &mut StdRng::seed_from_u64(9));
        assert!((report.accuracy() - 0.2).abs() < 0.05, "{}", report.accuracy());
    }

    #[test]
    fn empty_evaluation_has_zero_accuracy() {
        let model = Classifier::new(5, 5, &mut StdRng::seed_from_u64(0));
        let report = evaluate(&model, 0, &mut StdRng::seed_from_u64(0));
        assert_eq!(report.accuracy(), 0.0);
    }
}
