use rand::Rng;

use crate::math::matrix::Matrix;

/// Dimension of every generated sample, and the number of classes.
pub const INPUT_SIZE: usize = 5;

/// Parallel inputs and one-hot labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub inputs: Vec<Vec<f64>>,
    pub labels: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Copies rows `start..end` into an (inputs, labels) matrix pair.
    pub fn batch(&self, start: usize, end: usize) -> (Matrix, Matrix) {
        (
            Matrix::from_data(self.inputs[start..end].to_vec()),
            Matrix::from_data(self.labels[start..end].to_vec()),
        )
    }
}

/// Index of the maximum element in a slice; the first one wins on ties.
///
/// Returns 0 for an empty slice.
pub fn argmax(v: &[f64]) -> usize {
    let mut best = 0;
    for (i, x) in v.iter().enumerate() {
        if *x > v[best] {
            best = i;
        }
    }
    best
}

/// Vector of `len` zeros with a single 1.0 at `index`.
pub fn one_hot(index: usize, len: usize) -> Vec<f64> {
    assert!(index < len, "one-hot index {} out of range for length {}", index, len);
    let mut v = vec![0.0; len];
    v[index] = 1.0;
    v
}

/// Draws one sample from `[0, 1)^5` and labels it with the position of its
/// largest element.
pub fn build_sample<R: Rng + ?Sized>(rng: &mut R) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..INPUT_SIZE).map(|_| rng.gen::<f64>()).collect();
    let label = one_hot(argmax(&x), INPUT_SIZE);
    (x, label)
}

pub fn build_dataset<R: Rng + ?Sized>(total_sample_num: usize, rng: &mut R) -> Dataset {
    let (inputs, labels) = (0..total_sample_num).map(|_| build_sample(rng)).unzip();
    Dataset { inputs, labels }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn argmax_prefers_first_on_ties() {
        assert_eq!(argmax(&[0.2, 0.9, 0.9, 0.1]), 1);
        assert_eq!(argmax(&[]), 0);
    }

    #[test]
    fn same_seed_same_dataset() {
        let a = build_dataset(50, &mut StdRng::seed_from_u64(42));
        let b = build_dataset(50, &mut StdRng::seed_from_u64(42));
        let c = build_dataset(50, &mut StdRng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn batch_slices_contiguous_rows() {
        let ds = build_dataset(10, &mut StdRng::seed_from_u64(1));
        let (x, y) = ds.batch(4, 7);
        assert_eq!((x.rows, x.cols), (3, INPUT_SIZE));
        assert_eq!(x.data[0], ds.inputs[4]);
        assert_eq!(y.data[2], ds.labels[6]);
    }

    proptest! {
        #[test]
        fn label_marks_the_maximum(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let (x, label) = build_sample(&mut rng);

            prop_assert_eq!(x.len(), INPUT_SIZE);
            prop_assert!(x.iter().all(|v| (0.0..1.0).contains(v)));
            prop_assert_eq!(label.iter().filter(|&&v| v == 1.0).count(), 1);
            prop_assert_eq!(label.iter().filter(|&&v| v == 0.0).count(), INPUT_SIZE - 1);

            let hot = label.iter().position(|&v| v == 1.0).unwrap();
            let max = x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(x[hot], max);
        }
    }
}
