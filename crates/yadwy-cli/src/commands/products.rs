// Product catalog commands

use yadwy_api::{CreateProductRequest, ProductListParams};

use super::Command;
use crate::context::AppContext;
use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq)]
pub enum ProductsAction {
    List {
        seller: Option<i64>,
        category: Option<i64>,
        visible: Option<bool>,
        page: Option<u32>,
        size: Option<u32>,
    },
    Show {
        id: i64,
    },
    Create {
        name: String,
        description: String,
        price: f64,
        category: i64,
        hidden: bool,
    },
}

pub struct ProductsCommand {
    pub action: ProductsAction,
}

impl ProductsCommand {
    pub fn new(action: ProductsAction) -> Self {
        Self { action }
    }
}

#[async_trait::async_trait]
impl Command for ProductsCommand {
    async fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        match &self.action {
            ProductsAction::List {
                seller,
                category,
                visible,
                page,
                size,
            } => {
                let params = ProductListParams {
                    seller_id: *seller,
                    category_id: *category,
                    visible: *visible,
                    page: *page,
                    size: *size,
                };
                let products = ctx.api.products().list(&params).await?;
                if products.is_empty() {
                    println!("{}", ctx.style.info("No products"));
                }
                for product in products.items() {
                    println!("{}", ctx.style.product_row(product));
                }
                Ok(())
            }
            ProductsAction::Show { id } => {
                let product = ctx.api.products().get(*id).await?;
                println!("{}", ctx.style.product_row(&product));
                if !product.description.is_empty() {
                    println!("\n{}", product.description);
                }
                Ok(())
            }
            ProductsAction::Create {
                name,
                description,
                price,
                category,
                hidden,
            } => {
                ctx.require_login()?;
                if !price.is_finite() {
                    return Err(CliError::invalid("--price must be a number"));
                }
                let request = CreateProductRequest {
                    name: name.clone(),
                    description: description.clone(),
                    price: *price,
                    category_id: *category,
                    visible: !hidden,
                };
                let product = ctx.api.products().create(&request).await?;
                println!(
                    "{}",
                    ctx.style
                        .success(&format!("Created product {} ({})", product.id, product.name))
                );
                Ok(())
            }
        }
    }
}
