// Seller order commands

use tracing::debug;
use yadwy_api::{Listing, PageParams, SellerOrder};

use super::Command;
use crate::context::AppContext;
use crate::error::{CliError, CliResult};

/// Upper bound on pages fetched by `orders list --all`
const MAX_PAGES: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrdersAction {
    List {
        page: u32,
        size: Option<u32>,
        sort: Option<String>,
        all: bool,
    },
    Show {
        id: String,
    },
    SetStatus {
        id: String,
        status: String,
    },
}

pub struct OrdersCommand {
    pub action: OrdersAction,
}

impl OrdersCommand {
    pub fn new(action: OrdersAction) -> Self {
        Self { action }
    }

    /// Walk pages until the backend signals the end
    async fn fetch_all(ctx: &AppContext, first: PageParams) -> CliResult<Vec<SellerOrder>> {
        let orders = ctx.api.orders();
        let mut params = first;
        let mut collected = Vec::new();

        for _ in 0..MAX_PAGES {
            let listing: Listing<SellerOrder> = orders.list(&params).await?;
            let more = listing.has_more(params.size);
            debug!(page = params.page, count = listing.len(), more, "fetched orders page");
            collected.extend(listing.into_items());
            if !more {
                break;
            }
            params = params.next();
        }
        Ok(collected)
    }
}

#[async_trait::async_trait]
impl Command for OrdersCommand {
    async fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        ctx.require_login()?;

        match &self.action {
            OrdersAction::List {
                page,
                size,
                sort,
                all,
            } => {
                let size = size.unwrap_or(ctx.settings.page_size);
                if size == 0 {
                    return Err(CliError::invalid("--size must be greater than 0"));
                }
                let mut params = PageParams::new(*page, size);
                if let Some(sort) = sort {
                    params = params.with_sort(sort.clone());
                }

                let (orders, more) = if *all {
                    (Self::fetch_all(ctx, params).await?, false)
                } else {
                    let listing = ctx.api.orders().list(&params).await?;
                    let more = listing.has_more(size);
                    (listing.into_items(), more)
                };

                if orders.is_empty() {
                    println!("{}", ctx.style.info("No orders"));
                    return Ok(());
                }
                for order in &orders {
                    println!("{}", ctx.style.order_row(order));
                }
                if more {
                    println!(
                        "{}",
                        ctx.style
                            .info(&format!("More orders available: --page {}", page + 1))
                    );
                }
                Ok(())
            }
            OrdersAction::Show { id } => {
                let order = ctx.api.orders().get(id).await?;
                println!("{}", ctx.style.order_detail(&order));
                Ok(())
            }
            OrdersAction::SetStatus { id, status } => {
                let order = ctx.api.orders().update_status(id, status).await?;
                println!(
                    "{}",
                    ctx.style.success(&format!("Order #{} is now {}", order.id, order.status))
                );
                Ok(())
            }
        }
    }
}
