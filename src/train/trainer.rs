use std::io;

use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::data::dataset::build_dataset;
use crate::network::classifier::Classifier;
use crate::optim::adam::Adam;
use crate::plot::curve::plot_training_log;
use crate::train::epoch_stats::EpochStats;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// Trained model together with its per-epoch log.
#[derive(Debug)]
pub struct TrainOutcome {
    pub model: Classifier,
    pub log: Vec<EpochStats>,
}

/// Runs the whole pipeline: generate the training set, build the model,
/// train, save the weights to `config.model_path`, and draw the curve to
/// `config.plot_path` when one is set.
pub fn train_network(config: &TrainConfig) -> io::Result<TrainOutcome> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let dataset = build_dataset(config.train_samples, &mut rng);
    let mut model = Classifier::new(config.input_size, config.input_size, &mut rng);
    let mut optimizer = Adam::new(config.learning_rate);
    info!(
        samples = dataset.len(),
        epochs = config.epochs,
        batch_size = config.batch_size,
        learning_rate = config.learning_rate,
        "starting training"
    );

    let log = train_loop(&mut model, &dataset, &mut optimizer, config, &mut rng);

    model.save_json(&config.model_path)?;
    if let Some(plot_path) = &config.plot_path {
        plot_training_log(&log, plot_path)?;
    }

    Ok(TrainOutcome { model, log })
}
