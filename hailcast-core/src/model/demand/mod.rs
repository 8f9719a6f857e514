mod error;
mod forest;
mod model;
mod prediction;
mod tree;

pub use error::ModelError;
pub use forest::Forest;
pub use model::DemandModel;
pub use prediction::Prediction;
pub use tree::Tree;
