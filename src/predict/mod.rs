pub mod prediction;

pub use prediction::{predict, predict_with, Prediction};
