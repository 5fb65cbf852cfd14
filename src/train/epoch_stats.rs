use std::fmt;

use serde::{Serialize, Deserialize};

/// One entry of the training log, produced at the end of every epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Mean of the per-batch training losses.
    pub mean_loss: f64,
    /// Accuracy on the fresh evaluation set, in `[0, 1]`.
    pub accuracy: f64,
    pub elapsed_ms: u64,
}

impl EpochStats {
    /// `[accuracy, mean_loss]`, the shape the final log is printed in.
    pub fn as_pair(&self) -> [f64; 2] {
        [self.accuracy, self.mean_loss]
    }
}

impl fmt::Display for EpochStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "epoch {:>3}/{} | loss {:.6} | accuracy {:.2} | {} ms",
            self.epoch, self.total_epochs, self.mean_loss, self.accuracy, self.elapsed_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_one_loss_and_accuracy_line() {
        let stats = EpochStats {
            epoch: 3,
            total_epochs: 20,
            mean_loss: 0.4123456,
            accuracy: 0.87,
            elapsed_ms: 12,
        };
        assert_eq!(
            stats.to_string(),
            "epoch   3/20 | loss 0.412346 | accuracy 0.87 | 12 ms"
        );
        assert_eq!(stats.as_pair(), [0.87, 0.4123456]);
    }
}
