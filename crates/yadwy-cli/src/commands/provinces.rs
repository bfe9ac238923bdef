// Shipping provinces

use super::Command;
use crate::context::AppContext;
use crate::error::CliResult;

pub struct ProvincesCommand {
    pub active_only: bool,
}

#[async_trait::async_trait]
impl Command for ProvincesCommand {
    async fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        let service = ctx.api.provinces();
        let provinces = if self.active_only {
            service.list_active().await?
        } else {
            service.list().await?
        };
        for province in &provinces {
            println!("{}", ctx.style.province_row(province));
        }
        Ok(())
    }
}
