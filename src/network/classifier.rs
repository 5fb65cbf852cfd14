use std::io::{self, Write};
use std::path::Path;

use rand::Rng;
use serde::{Serialize, Deserialize};
use tracing::info;

use crate::activation::softmax::softmax_rows;
use crate::data::dataset::argmax;
use crate::layers::linear::Linear;
use crate::loss::cross_entropy::CrossEntropyLoss;
use crate::math::matrix::Matrix;

/// Single linear layer mapping an input vector to one logit per class.
///
/// Training works on the raw logits (`loss`); `forward` adds the softmax so
/// callers get a probability distribution over the classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classifier {
    pub linear: Linear,
}

impl Classifier {
    pub fn new<R: Rng + ?Sized>(input_size: usize, num_classes: usize, rng: &mut R) -> Classifier {
        Classifier { linear: Linear::new(input_size, num_classes, rng) }
    }

    pub fn input_size(&self) -> usize {
        self.linear.input_size
    }

    pub fn logits(&self, inputs: &Matrix) -> Matrix {
        self.linear.forward(inputs)
    }

    /// Class probabilities, one row per input row.
    pub fn forward(&self, inputs: &Matrix) -> Matrix {
        softmax_rows(&self.logits(inputs))
    }

    /// Mean cross-entropy of the batch against one-hot `labels`.
    pub fn loss(&self, inputs: &Matrix, labels: &Matrix) -> f64 {
        CrossEntropyLoss::loss(&self.logits(inputs), labels)
    }

    /// Most probable class for every input row.
    pub fn predict_classes(&self, inputs: &Matrix) -> Vec<usize> {
        self.forward(inputs).data.iter().map(|row| argmax(row)).collect()
    }

    /// Serializes the weights to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writer.flush()?;
        info!(path = %path.display(), "saved model weights");
        Ok(())
    }

    /// Deserializes a classifier from a JSON file previously written by `save_json`.
    pub fn load_json<P: AsRef<Path>>(path: P) -> io::Result<Classifier> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let model: Classifier = serde_json::from_reader(reader)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        model.check_shapes()?;
        info!(path = %path.display(), "loaded model weights");
        Ok(model)
    }

    fn check_shapes(&self) -> io::Result<()> {
        let l = &self.linear;
        let ok = l.weights.rows == l.input_size
            && l.weights.cols == l.output_size
            && l.biases.rows == 1
            && l.biases.cols == l.output_size
            && l.weights.data.len() == l.weights.rows
            && l.weights.data.iter().all(|row| row.len() == l.weights.cols)
            && l.biases.data.iter().all(|row| row.len() == l.biases.cols);
        if ok {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "weight shapes do not match a {}→{} linear layer",
                    l.input_size, l.output_size
                ),
            ))
        }
    }
}
