use std::io;
use std::path::PathBuf;

use crate::data::dataset::INPUT_SIZE;

pub const EPOCHS: usize = 20;
pub const BATCH_SIZE: usize = 25;
pub const TRAIN_SAMPLES: usize = 10_000;
pub const EVAL_SAMPLES: usize = 100;
pub const LEARNING_RATE: f64 = 0.005;
pub const MODEL_PATH: &str = "model_max.json";
pub const PLOT_PATH: &str = "training_curve.png";

/// Configuration for a training run.
///
/// # Fields
/// - `epochs`        — full passes over the training set
/// - `batch_size`    — samples per Adam step
/// - `train_samples` — size of the training set, generated once per run
/// - `eval_samples`  — size of the fresh test set drawn after every epoch
/// - `input_size`    — sample dimension, also the number of classes
/// - `learning_rate` — Adam step size
/// - `seed`          — fixes every random draw when set; entropy otherwise
/// - `model_path`    — where the trained weights are written
/// - `plot_path`     — where the accuracy/loss curve is drawn; `None` skips it
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub batch_size: usize,
    pub train_samples: usize,
    pub eval_samples: usize,
    pub input_size: usize,
    pub learning_rate: f64,
    pub seed: Option<u64>,
    pub model_path: PathBuf,
    pub plot_path: Option<PathBuf>,
}

impl TrainConfig {
    /// Default paths and dataset sizes with the given schedule.
    pub fn new(epochs: usize, batch_size: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            batch_size,
            learning_rate,
            ..TrainConfig::default()
        }
    }

    /// Rejects schedules the training loop cannot run.
    pub fn validate(&self) -> io::Result<()> {
        let zero = [
            ("epochs", self.epochs),
            ("batch_size", self.batch_size),
            ("train_samples", self.train_samples),
            ("input_size", self.input_size),
        ]
        .into_iter()
        .find(|(_, v)| *v == 0);

        match zero {
            Some((name, _)) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{name} must be at least 1"),
            )),
            None => Ok(()),
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: EPOCHS,
            batch_size: BATCH_SIZE,
            train_samples: TRAIN_SAMPLES,
            eval_samples: EVAL_SAMPLES,
            input_size: INPUT_SIZE,
            learning_rate: LEARNING_RATE,
            seed: None,
            model_path: PathBuf::from(MODEL_PATH),
            plot_path: Some(PathBuf::from(PLOT_PATH)),
        }
    }
}
