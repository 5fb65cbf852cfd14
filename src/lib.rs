pub mod math;
pub mod data;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod eval;
pub mod train;
pub mod predict;
pub mod plot;
pub mod logging;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use data::dataset::{build_dataset, build_sample, Dataset};
pub use layers::linear::Linear;
pub use network::classifier::Classifier;
pub use loss::cross_entropy::CrossEntropyLoss;
pub use optim::adam::Adam;
pub use eval::evaluate::{evaluate, EvalReport};
pub use train::{train_network, TrainConfig, EpochStats};
pub use predict::prediction::{predict, Prediction};
