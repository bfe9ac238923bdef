// Command handlers for the yadwy CLI

pub mod auth;
pub mod categories;
pub mod config;
pub mod orders;
pub mod products;
pub mod provinces;

pub use auth::{LoginCommand, LogoutCommand, RefreshCommand, RegisterCommand, WhoamiCommand};
pub use categories::{CategoriesAction, CategoriesCommand};
pub use config::ConfigCommand;
pub use orders::{OrdersAction, OrdersCommand};
pub use products::{ProductsAction, ProductsCommand};
pub use provinces::ProvincesCommand;

use crate::context::AppContext;
use crate::error::CliResult;

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self, ctx: &AppContext) -> CliResult<()>;
}
