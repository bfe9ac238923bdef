//! Command-line seller dashboard built on `yadwy-api`

pub mod commands;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;
pub mod router;
pub mod settings;

pub use context::AppContext;
pub use error::{CliError, CliResult};
pub use settings::Settings;
