// Category commands

use yadwy_api::CategoryListParams;

use super::Command;
use crate::context::AppContext;
use crate::error::CliResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoriesAction {
    List { parent: Option<i64>, children: bool },
    Show { id: i64 },
    Delete { id: i64 },
}

pub struct CategoriesCommand {
    pub action: CategoriesAction,
}

impl CategoriesCommand {
    pub fn new(action: CategoriesAction) -> Self {
        Self { action }
    }
}

#[async_trait::async_trait]
impl Command for CategoriesCommand {
    async fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        let categories = ctx.api.categories();
        match &self.action {
            CategoriesAction::List { parent, children } => {
                let params = CategoryListParams {
                    parent_id: *parent,
                    include_children: *children,
                };
                let list = categories.list(&params).await?;
                if list.is_empty() {
                    println!("{}", ctx.style.info("No categories"));
                } else {
                    println!("{}", ctx.style.category_tree(&list));
                }
            }
            CategoriesAction::Show { id } => {
                let category = categories.get(*id).await?;
                println!("{}", ctx.style.category_tree(std::slice::from_ref(&category)));
            }
            CategoriesAction::Delete { id } => {
                ctx.require_login()?;
                categories.delete(*id).await?;
                println!("{}", ctx.style.success(&format!("Deleted category {}", id)));
            }
        }
        Ok(())
    }
}
