use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use crate::data::dataset::Dataset;
use crate::eval::evaluate::evaluate;
use crate::loss::cross_entropy::CrossEntropyLoss;
use crate::network::classifier::Classifier;
use crate::optim::adam::Adam;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `model` for `config.epochs` epochs and returns the training log.
///
/// Batches are taken in order, `config.batch_size` rows at a time; a trailing
/// short batch is trained on as is. After every epoch the model is scored on
/// `config.eval_samples` freshly drawn samples.
///
/// # Panics
/// Panics if `dataset` is empty or `batch_size == 0`.
pub fn train_loop<R: Rng + ?Sized>(
    model: &mut Classifier,
    dataset: &Dataset,
    optimizer: &mut Adam,
    config: &TrainConfig,
    rng: &mut R,
) -> Vec<EpochStats> {
    assert!(!dataset.is_empty(), "training dataset must not be empty");
    assert!(config.batch_size > 0, "batch_size must be at least 1");

    let mut log = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        let mean_loss = run_one_epoch(model, dataset, optimizer, config.batch_size);
        let report = evaluate(model, config.eval_samples, rng);

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            mean_loss,
            accuracy: report.accuracy(),
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        info!("{}", stats);
        log.push(stats);
    }

    log
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One pass over `dataset`; returns the mean of the per-batch losses.
fn run_one_epoch(
    model: &mut Classifier,
    dataset: &Dataset,
    optimizer: &mut Adam,
    batch_size: usize,
) -> f64 {
    let n = dataset.len();
    let mut batch_losses = Vec::with_capacity(n.div_ceil(batch_size));

    for batch_start in (0..n).step_by(batch_size) {
        let batch_end = (batch_start + batch_size).min(n);
        let (x, y) = dataset.batch(batch_start, batch_end);

        let logits = model.logits(&x);
        let loss = CrossEntropyLoss::loss(&logits, &y);
        let grad_logits = CrossEntropyLoss::derivative(&logits, &y);
        let (w_grad, b_grad) = model.linear.compute_gradients(&x, &grad_logits);
        optimizer.step(&mut model.linear, &w_grad, &b_grad);

        debug!(batch_start, batch_end, loss, "batch step");
        batch_losses.push(loss);
    }

    batch_losses.iter().sum::<f64>() / batch_losses.len() as f64
}
