pub mod config;
pub mod error;
pub mod features;
pub mod handlers;
pub mod model;
pub mod scaler;
pub mod server;

// Re-exports for convenience
pub use config::Config;
pub use error::{ServerError, ServerResult};
pub use model::KnnModel;
pub use scaler::StandardScaler;
