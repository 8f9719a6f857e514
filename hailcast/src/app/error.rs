use config::ConfigError;
use hailcast_core::model::demand::ModelError;
use hailcast_core::model::zone::ZoneError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failure loading configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failure loading zone dataset: {0}")]
    Zone(#[from] ZoneError),
    #[error("demand model failure: {0}")]
    Model(#[from] ModelError),
    #[error("invalid query: {0}")]
    Query(String),
}
