// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::context::AppContext;
use crate::error::CliResult;
use crate::settings::Settings;

/// Yadwy seller dashboard in the terminal
#[derive(Parser, Debug)]
#[command(name = "yadwy")]
#[command(bin_name = "yadwy")]
#[command(about = "Manage your Yadwy store from the terminal")]
#[command(
    long_about = "Manage your Yadwy store from the terminal.\n\nQuick start:\n  yadwy login <PHONE>     Sign in\n  yadwy orders list       Recent orders\n  yadwy products list     Your catalog\n\nThe backend URL comes from YADWY_API_URL or api_url in ~/.config/yadwy/config.toml."
)]
#[command(version)]
#[command(author = "Yadwy Contributors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use this config file instead of ~/.config/yadwy/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Sign in with phone number and password
    Login {
        #[arg(value_name = "PHONE")]
        phone: String,

        /// Read from YADWY_PASSWORD or prompted when omitted
        #[arg(long, env = "YADWY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create a seller account
    Register {
        /// Store name
        #[arg(long)]
        name: String,

        #[arg(value_name = "PHONE")]
        phone: String,

        #[arg(long, env = "YADWY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget stored tokens
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Exchange the refresh token for a new access token
    Refresh,

    /// Seller orders
    Orders {
        #[command(subcommand)]
        action: OrdersSubcommand,
    },

    /// Product catalog
    Products {
        #[command(subcommand)]
        action: ProductsSubcommand,
    },

    /// Product categories
    Categories {
        #[command(subcommand)]
        action: CategoriesSubcommand,
    },

    /// Shipping provinces and fees
    Provinces {
        /// Only provinces accepting deliveries
        #[arg(long)]
        active: bool,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Subcommand, Debug, Clone)]
pub enum OrdersSubcommand {
    /// List orders, newest page first
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,

        /// Defaults to page_size from the config
        #[arg(long)]
        size: Option<u32>,

        /// e.g. createdAt,desc
        #[arg(long)]
        sort: Option<String>,

        /// Follow pages until the last one
        #[arg(long)]
        all: bool,
    },

    /// Show one order
    Show {
        #[arg(value_name = "ORDER_ID")]
        id: String,
    },

    /// Change an order's status
    SetStatus {
        #[arg(value_name = "ORDER_ID")]
        id: String,

        #[arg(value_name = "STATUS")]
        status: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProductsSubcommand {
    List {
        #[arg(long)]
        seller: Option<i64>,

        #[arg(long)]
        category: Option<i64>,

        /// true or false
        #[arg(long)]
        visible: Option<bool>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        size: Option<u32>,
    },

    Show {
        #[arg(value_name = "PRODUCT_ID")]
        id: i64,
    },

    Create {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long)]
        price: f64,

        #[arg(long)]
        category: i64,

        /// Create as a draft, not visible to customers
        #[arg(long)]
        hidden: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum CategoriesSubcommand {
    List {
        /// Only children of this category
        #[arg(long)]
        parent: Option<i64>,

        /// Include nested children
        #[arg(long)]
        tree: bool,
    },

    Show {
        #[arg(value_name = "CATEGORY_ID")]
        id: i64,
    },

    Delete {
        #[arg(value_name = "CATEGORY_ID")]
        id: i64,
    },
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();

        crate::logging::init_logging(cli.verbose, cli.quiet);

        let settings = Settings::load(cli.config.as_deref())?;
        if let Commands::Config = cli.command {
            return ConfigCommand.execute(&settings);
        }

        let ctx = AppContext::from_settings(settings)?;
        Self::execute(&cli.command, &ctx).await
    }

    /// Build the handler for a parsed command
    pub fn handler(command: &Commands) -> Option<Box<dyn Command>> {
        let handler: Box<dyn Command> = match command {
            Commands::Login { phone, password } => {
                Box::new(LoginCommand::new(phone.clone(), password.clone()))
            }
            Commands::Register {
                name,
                phone,
                password,
            } => Box::new(RegisterCommand {
                name: name.clone(),
                phone_number: phone.clone(),
                password: password.clone(),
            }),
            Commands::Logout => Box::new(LogoutCommand),
            Commands::Whoami => Box::new(WhoamiCommand),
            Commands::Refresh => Box::new(RefreshCommand),
            Commands::Orders { action } => Box::new(OrdersCommand::new(match action {
                OrdersSubcommand::List {
                    page,
                    size,
                    sort,
                    all,
                } => OrdersAction::List {
                    page: *page,
                    size: *size,
                    sort: sort.clone(),
                    all: *all,
                },
                OrdersSubcommand::Show { id } => OrdersAction::Show { id: id.clone() },
                OrdersSubcommand::SetStatus { id, status } => OrdersAction::SetStatus {
                    id: id.clone(),
                    status: status.clone(),
                },
            })),
            Commands::Products { action } => Box::new(ProductsCommand::new(match action {
                ProductsSubcommand::List {
                    seller,
                    category,
                    visible,
                    page,
                    size,
                } => ProductsAction::List {
                    seller: *seller,
                    category: *category,
                    visible: *visible,
                    page: *page,
                    size: *size,
                },
                ProductsSubcommand::Show { id } => ProductsAction::Show { id: *id },
                ProductsSubcommand::Create {
                    name,
                    description,
                    price,
                    category,
                    hidden,
                } => ProductsAction::Create {
                    name: name.clone(),
                    description: description.clone(),
                    price: *price,
                    category: *category,
                    hidden: *hidden,
                },
            })),
            Commands::Categories { action } => Box::new(CategoriesCommand::new(match action {
                CategoriesSubcommand::List { parent, tree } => CategoriesAction::List {
                    parent: *parent,
                    children: *tree,
                },
                CategoriesSubcommand::Show { id } => CategoriesAction::Show { id: *id },
                CategoriesSubcommand::Delete { id } => CategoriesAction::Delete { id: *id },
            })),
            Commands::Provinces { active } => Box::new(ProvincesCommand {
                active_only: *active,
            }),
            Commands::Config => return None,
        };
        Some(handler)
    }

    /// Execute a command
    pub async fn execute(command: &Commands, ctx: &AppContext) -> CliResult<()> {
        match Self::handler(command) {
            Some(handler) => handler.execute(ctx).await,
            None => ConfigCommand.execute(&ctx.settings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_orders_list() {
        let cli = Cli::try_parse_from([
            "yadwy", "orders", "list", "--page", "2", "--size", "20", "--sort", "createdAt,desc",
        ])
        .unwrap();
        match cli.command {
            Commands::Orders {
                action:
                    OrdersSubcommand::List {
                        page,
                        size,
                        sort,
                        all,
                    },
            } => {
                assert_eq!(page, 2);
                assert_eq!(size, Some(20));
                assert_eq!(sort.as_deref(), Some("createdAt,desc"));
                assert!(!all);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_set_status_with_global_flag() {
        let cli =
            Cli::try_parse_from(["yadwy", "orders", "set-status", "17", "SHIPPED", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Orders {
                action: OrdersSubcommand::SetStatus { .. }
            }
        ));
    }

    #[test]
    fn test_product_price_must_be_numeric() {
        let result = Cli::try_parse_from([
            "yadwy", "products", "create", "--name", "Mug", "--price", "cheap", "--category", "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_has_no_handler() {
        assert!(CommandRouter::handler(&Commands::Config).is_none());
        assert!(CommandRouter::handler(&Commands::Whoami).is_some());
    }
}
