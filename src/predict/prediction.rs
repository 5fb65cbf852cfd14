use std::fmt;
use std::io;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::data::dataset::argmax;
use crate::math::matrix::Matrix;
use crate::network::classifier::Classifier;

/// Model output for one input vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub input: Vec<f64>,
    /// Index of the most probable class.
    pub class: usize,
    pub probabilities: Vec<f64>,
}

impl Prediction {
    /// Probability assigned to the predicted class.
    pub fn confidence(&self) -> f64 {
        self.probabilities[self.class]
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input: {:?}, predicted class: {}, probability: {:.4}, probabilities: {:.4?}",
            self.input,
            self.class,
            self.confidence(),
            self.probabilities
        )
    }
}

/// Reloads weights from `model_path` and classifies every input vector.
pub fn predict<P: AsRef<Path>>(model_path: P, inputs: &[Vec<f64>]) -> io::Result<Vec<Prediction>> {
    let model = Classifier::load_json(model_path)?;
    predict_with(&model, inputs)
}

/// Classifies `inputs` with an already loaded model.
///
/// Every input must have exactly `model.input_size()` elements.
pub fn predict_with(model: &Classifier, inputs: &[Vec<f64>]) -> io::Result<Vec<Prediction>> {
    if let Some(bad) = inputs.iter().find(|x| x.len() != model.input_size()) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "expected input vectors of length {}, got {}",
                model.input_size(),
                bad.len()
            ),
        ));
    }
    if inputs.is_empty() {
        return Ok(Vec::new());
    }

    let probabilities = model.forward(&Matrix::from_data(inputs.to_vec()));
    Ok(inputs.iter().zip(probabilities.data)
        .map(|(input, probs)| Prediction {
            input: input.clone(),
            class: argmax(&probs),
            probabilities: probs,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn wrong_length_is_invalid_input() {
        let model = Classifier::new(5, 5, &mut StdRng::seed_from_u64(4));
        let err = predict_with(&model, &[vec![0.1, 0.2, 0.3]]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn one_prediction_per_input() {
        let model = Classifier::new(5, 5, &mut StdRng::seed_from_u64(4));
        let inputs = vec![vec![0.1, 0.2, 0.3, 0.4, 0.5], vec![0.9, 0.1, 0.1, 0.1, 0.1]];
        let out = predict_with(&model, &inputs).unwrap();
        assert_eq!(out.len(), 2);
        for (p, x) in out.iter().zip(&inputs) {
            assert_eq!(&p.input, x);
            assert_eq!(p.class, argmax(&p.probabilities));
            assert!(p.confidence() >= 0.2 - 1e-12);
        }
    }

    #[test]
    fn predictions_serialize_as_json_objects() {
        let prediction = Prediction {
            input: vec![0.1, 0.9, 0.2, 0.3, 0.4],
            class: 1,
            probabilities: vec![0.1, 0.6, 0.1, 0.1, 0.1],
        };
        let json = serde_json::to_value(&[prediction.clone()]).unwrap();
        assert_eq!(json[0]["class"], 1);
        assert_eq!(json[0]["probabilities"][1], 0.6);

        let back: Vec<Prediction> = serde_json::from_value(json).unwrap();
        assert_eq!(back, vec![prediction]);
    }

    #[test]
    fn no_inputs_no_predictions() {
        let model = Classifier::new(5, 5, &mut StdRng::seed_from_u64(4));
        assert!(predict_with(&model, &[]).unwrap().is_empty());
    }
}
