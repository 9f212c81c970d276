// Module declaration file for model/

pub mod distance;
pub mod knn;

pub use knn::KnnModel;
