use ndarray::{Array2, ArrayView1};
use num_traits::Float;

use crate::error::{ClassifierError, Result};

/// Running per-class feature sums, finalized into class mean vectors.
#[derive(Debug, Clone)]
pub struct CentroidAccumulator<F> {
    sums: Array2<F>,
    counts: Vec<usize>,
}

impl<F: Float> CentroidAccumulator<F> {
    pub fn new(num_classes: usize, dim: usize) -> Self {
        Self {
            sums: Array2::zeros((num_classes, dim)),
            counts: vec![0; num_classes],
        }
    }

    /// Add one feature row into the running sum for `class_idx`.
    pub fn accumulate(&mut self, class_idx: usize, row: ArrayView1<'_, F>) {
        for (sum, value) in self.sums.row_mut(class_idx).iter_mut().zip(row.iter()) {
            *sum = *sum + *value;
        }
        self.counts[class_idx] += 1;
    }

    /// Divide each class sum by its row count, yielding the K x D centroid
    /// matrix. A class that received no rows has no defined mean and is
    /// rejected instead of producing NaN columns.
    pub fn finalize(mut self) -> Result<Array2<F>> {
        for (class_idx, &count) in self.counts.iter().enumerate() {
            if count == 0 {
                return Err(ClassifierError::InvalidInput(format!(
                    "class {} has no training rows, its centroid is undefined",
                    class_idx
                )));
            }
            let count = F::from(count).ok_or_else(|| {
                ClassifierError::InvalidInput(format!(
                    "class size {} is not representable in the feature type",
                    count
                ))
            })?;
            for sum in self.sums.row_mut(class_idx).iter_mut() {
                *sum = *sum / count;
            }
        }
        Ok(self.sums)
    }
}
