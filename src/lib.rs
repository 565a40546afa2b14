pub mod alerts;
pub mod app;
pub mod config;
pub mod error;
pub mod metrics;
pub mod report;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
