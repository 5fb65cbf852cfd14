pub mod dataset;

pub use dataset::{argmax, build_dataset, build_sample, one_hot, Dataset, INPUT_SIZE};
