use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("failure reading model file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse model file '{path}' due to: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("feature schema mismatch: {0}")]
    Schema(String),
    #[error("failure evaluating model: {0}")]
    Predict(String),
}
