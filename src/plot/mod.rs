pub mod curve;

pub use curve::plot_training_log;
