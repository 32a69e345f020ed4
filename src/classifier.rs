use std::collections::HashMap;
use std::hash::Hash;

use itertools::Itertools;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use num_traits::Float;

use crate::centroid::CentroidAccumulator;
use crate::distance::distance_matrix;
use crate::error::{ClassifierError, Result};

/// Structural interface for tooling that introspects estimator
/// configuration (cross-validation harnesses and the like).
pub trait Configurable {
    fn get_params(&self) -> HashMap<String, f64>;
}

/// Nearest-centroid classifier.
///
/// `fit` computes one centroid (column-wise mean vector) per distinct
/// label; `predict` assigns each query row the label of its nearest
/// centroid under Euclidean distance.
///
/// Labels may be any hashable scalar (`L`), features any float type (`F`).
/// A classifier value is single-writer: `fit` replaces the fitted state
/// wholesale, so concurrent re-fits on a shared instance are not
/// supported, while concurrent `predict` calls on a fitted instance are.
#[derive(Debug, Clone)]
pub struct CentroidClassifier<L, F = f64> {
    /// Compatibility placeholder, surfaced through [`Configurable`].
    /// Has no effect on fit or predict.
    l: f64,
    fitted: Option<Fitted<L, F>>,
}

#[derive(Debug, Clone)]
struct Fitted<L, F> {
    /// Centroid index -> label, in order of first appearance during fit.
    classes: Vec<L>,
    /// K x D, row i is the mean of training rows labeled `classes[i]`.
    centroids: Array2<F>,
}

impl<L, F> CentroidClassifier<L, F> {
    pub fn new(l: f64) -> Self {
        Self { l, fitted: None }
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Labels in centroid-index order, once fitted.
    pub fn classes(&self) -> Option<&[L]> {
        self.fitted.as_ref().map(|fitted| fitted.classes.as_slice())
    }

    /// K x D centroid matrix, once fitted.
    pub fn centroids(&self) -> Option<ArrayView2<'_, F>> {
        self.fitted.as_ref().map(|fitted| fitted.centroids.view())
    }

    fn fitted_state(&self) -> Result<&Fitted<L, F>> {
        self.fitted.as_ref().ok_or(ClassifierError::NotFitted)
    }
}

impl<L, F> Default for CentroidClassifier<L, F> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<L, F> CentroidClassifier<L, F>
where
    L: Eq + Hash + Clone,
    F: Float + Send + Sync,
{
    /// Compute one centroid per distinct label.
    ///
    /// Labels are assigned centroid indices 0..K-1 in order of first
    /// appearance. Re-fitting replaces the previous fitted state; a failed
    /// fit leaves it untouched.
    pub fn fit(&mut self, features: ArrayView2<'_, F>, labels: &[L]) -> Result<()> {
        if features.nrows() != labels.len() {
            return Err(ClassifierError::InvalidInput(format!(
                "feature rows ({}) and labels ({}) must align",
                features.nrows(),
                labels.len()
            )));
        }
        if labels.is_empty() {
            return Err(ClassifierError::InvalidInput(
                "training set is empty".to_string(),
            ));
        }

        let mut class_index: HashMap<L, usize> = HashMap::new();
        let mut classes: Vec<L> = Vec::new();
        for label in labels {
            if !class_index.contains_key(label) {
                class_index.insert(label.clone(), classes.len());
                classes.push(label.clone());
            }
        }

        let mut accumulator = CentroidAccumulator::new(classes.len(), features.ncols());
        for (row, label) in features.axis_iter(Axis(0)).zip(labels) {
            accumulator.accumulate(class_index[label], row);
        }
        let centroids = accumulator.finalize()?;

        log::info!(
            "fitted {} centroids from {} training rows",
            classes.len(),
            labels.len()
        );
        self.fitted = Some(Fitted { classes, centroids });
        Ok(())
    }

    /// Assign each query row the label of its nearest centroid.
    ///
    /// Output order is positional, one label per input row. An exact
    /// distance tie resolves to the centroid with the lowest index, i.e.
    /// the first-discovered label.
    pub fn predict(&self, features: ArrayView2<'_, F>) -> Result<Vec<L>> {
        let fitted = self.fitted_state()?;
        let distances = self.distances(features)?;
        let assignments = distances
            .axis_iter(Axis(0))
            .map(|row| fitted.classes[nearest(row)].clone())
            .collect_vec();
        log::debug!(
            "assigned {} query rows across {} centroids",
            assignments.len(),
            fitted.classes.len()
        );
        Ok(assignments)
    }

    /// Distances from every query row to every centroid, as an M x K
    /// matrix. Diagnostic accessor for the quantity `predict` minimizes;
    /// recomputed per call, never cached.
    pub fn distances(&self, features: ArrayView2<'_, F>) -> Result<Array2<F>> {
        let fitted = self.fitted_state()?;
        if features.ncols() != fitted.centroids.ncols() {
            return Err(ClassifierError::DimensionMismatch {
                expected: fitted.centroids.ncols(),
                got: features.ncols(),
            });
        }
        Ok(distance_matrix(features, fitted.centroids.view()))
    }
}

impl<L, F> Configurable for CentroidClassifier<L, F> {
    fn get_params(&self) -> HashMap<String, f64> {
        HashMap::from([("l".to_string(), self.l)])
    }
}

/// Index of the smallest distance, scanning ascending and keeping the
/// first strict minimum so ties go to the lowest index.
fn nearest<F: Float>(distances: ArrayView1<'_, F>) -> usize {
    let mut best_idx = 0;
    let mut best = distances[0];
    for (idx, &distance) in distances.iter().enumerate().skip(1) {
        if distance < best {
            best = distance;
            best_idx = idx;
        }
    }
    best_idx
}
