//! Quán Ngon CLI - Order food from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (password prompted when omitted)
//! qn login -e lan@example.com
//!
//! # Browse the menu
//! qn menu list
//! qn menu show 64f1c2a9b3d4e5f601234567
//!
//! # Place an order
//! qn order place 64f1c2a9b3d4e5f601234567 -q 2 -a "12 Lý Thường Kiệt, Hà Nội"
//!
//! # Admin back-office
//! qn admin stats
//! qn admin recent orders -n 3
//! ```
//!
//! # Environment Variables
//!
//! - `QUANNGON_API_BASE_URL` - Backend base URL (default `http://localhost:1111`)
//! - `QUANNGON_TOKEN_FILE` - Token file path (default `~/.quanngon/token`)
//! - `QUANNGON_HTTP_TIMEOUT_SECS` - Request timeout in seconds

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Parser, Subcommand};
use quanngon_api::Api;
use quanngon_api::config::ApiConfig;
use quanngon_api::dashboard::DEFAULT_RECENT_LIMIT;
use quanngon_api::token::FileTokenStore;
use quanngon_shell::SessionShell;

mod commands;

#[derive(Parser)]
#[command(name = "qn")]
#[command(author, version, about = "Quán Ngon ordering client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the access token
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create a customer account
    Register {
        /// Full name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Vietnamese phone number
        #[arg(short = 't', long)]
        phone: String,

        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Show the signed-in account
    Whoami,
    /// Drop the stored access token
    Logout,
    /// Featured dishes and site counters
    Home,
    /// Browse the menu
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
    /// Place and inspect orders
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Browse categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Admin back-office queries
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum MenuAction {
    /// List dishes
    List {
        /// Only dishes in this category id
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one dish
    Show {
        /// Menu item id
        id: String,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Order one dish for delivery
    Place {
        /// Menu item id
        menu_id: String,

        /// How many portions
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,

        /// Delivery address
        #[arg(short, long)]
        address: String,
    },
    /// List your orders (admins see all)
    List,
    /// Show one order
    Show {
        /// Order id
        id: String,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// List categories
    List,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Collection counts for the dashboard
    Stats,
    /// Most recently created records
    Recent {
        #[command(subcommand)]
        target: RecentTarget,
    },
}

#[derive(Subcommand)]
enum RecentTarget {
    /// Newest accounts
    Users {
        /// How many records
        #[arg(short = 'n', long, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: usize,
    },
    /// Newest orders
    Orders {
        /// How many records
        #[arg(short = 'n', long, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: usize,
    },
    /// Newest dishes
    Menus {
        /// How many records
        #[arg(short = 'n', long, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env()?;
    let store = Arc::new(FileTokenStore::new(&config.token_file));
    let api = Api::new(&config, store)?;
    let shell = SessionShell::new(api);

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&shell, &email, password).await?;
        }
        Commands::Register {
            name,
            email,
            phone,
            password,
        } => {
            commands::auth::register(shell.api(), &name, &email, &phone, password).await?;
        }
        Commands::Whoami => commands::auth::whoami(&shell).await?,
        Commands::Logout => commands::auth::logout(&shell)?,
        Commands::Home => commands::home::overview(shell.api()).await,
        Commands::Menu { action } => match action {
            MenuAction::List { category } => {
                commands::menu::list(shell.api(), category.as_deref()).await?;
            }
            MenuAction::Show { id } => commands::menu::show(shell.api(), &id).await?,
        },
        Commands::Order { action } => match action {
            OrderAction::Place {
                menu_id,
                quantity,
                address,
            } => {
                commands::order::place(&shell, &menu_id, quantity, &address).await?;
            }
            OrderAction::List => commands::order::list(shell.api()).await?,
            OrderAction::Show { id } => commands::order::show(shell.api(), &id).await?,
        },
        Commands::Category { action } => match action {
            CategoryAction::List => commands::category::list(shell.api()).await?,
        },
        Commands::Admin { action } => match action {
            AdminAction::Stats => commands::admin::stats(shell.api()).await?,
            AdminAction::Recent { target } => match target {
                RecentTarget::Users { limit } => {
                    commands::admin::recent_users(shell.api(), limit).await?;
                }
                RecentTarget::Orders { limit } => {
                    commands::admin::recent_orders(shell.api(), limit).await?;
                }
                RecentTarget::Menus { limit } => {
                    commands::admin::recent_menus(shell.api(), limit).await?;
                }
            },
        },
    }
    Ok(())
}
