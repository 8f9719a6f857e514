mod config;
mod context;
mod cycle;
mod error;
pub mod server;

pub use config::AppConfig;
pub use context::AppContext;
pub use cycle::run_cycle;
pub use error::AppError;
