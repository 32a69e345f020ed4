use ndarray::array;

use nearest_centroid::logger::init_logger;
use nearest_centroid::{CentroidClassifier, Configurable};

fn main() {
    init_logger().expect("Failed to initialize logger");

    let train_features = array![
        [0.0, 0.0],
        [0.0, 2.0],
        [10.0, 0.0],
        [10.0, 2.0],
    ];
    let train_labels = vec!["A", "A", "B", "B"];

    let mut classifier = CentroidClassifier::new(0.0);
    log::info!("params: {:?}", classifier.get_params());
    classifier
        .fit(train_features.view(), &train_labels)
        .expect("error during fit");
    log::info!("centroids: {:?}", classifier.centroids());

    let queries = array![[0.0, 0.0], [10.0, 0.0], [5.0, 1.0]];
    let predictions = classifier
        .predict(queries.view())
        .expect("error during predict");
    log::info!("predictions: {:?}", predictions);
}
