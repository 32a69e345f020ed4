use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use num_traits::Float;
use rayon::prelude::*;

/// Euclidean (L2) distance between two equal-length vectors.
pub fn euclidean_distance<F: Float>(us: ArrayView1<'_, F>, them: ArrayView1<'_, F>) -> F {
    us.iter()
        .zip(them.iter())
        .map(|(&a, &b)| {
            let diff = a - b;
            diff * diff
        })
        .fold(F::zero(), |acc, sq| acc + sq)
        .sqrt()
}

/// Distances from every query row to every centroid, as an M x K matrix.
///
/// Rows are independent, so the query axis is evaluated in parallel.
pub fn distance_matrix<F>(queries: ArrayView2<'_, F>, centroids: ArrayView2<'_, F>) -> Array2<F>
where
    F: Float + Send + Sync,
{
    let mut distances = Array2::zeros((queries.nrows(), centroids.nrows()));
    distances
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .zip(queries.axis_iter(Axis(0)).into_par_iter())
        .for_each(|(mut row, query)| {
            for (centroid_idx, centroid) in centroids.axis_iter(Axis(0)).enumerate() {
                row[centroid_idx] = euclidean_distance(query, centroid);
            }
        });
    distances
}
