use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ZoneError {
    #[error("failure reading zone dataset from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse zone dataset '{path}' due to: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("failed to deserialize column {col} in zone dataset '{path}' due to: {message}")]
    Deserialize {
        col: String,
        path: PathBuf,
        message: String,
    },
    #[error("failure building zone dataset: {0}")]
    Build(String),
}
