//! Pantry CLI
//!
//! Command-line interface for the pantry API:
//! - Dashboard of expiring ingredients
//! - Add, edit and delete ingredients
//! - Recipe suggestions for what is about to spoil
//! - Seed or reset the server's data

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tokio::sync::Mutex;

use pantry::config::{self, Config};
use pantry::view::ingredients::DELETE_PROMPT;
use pantry::view::{Horizon, IngredientsView, RecipesState, RecipesView};
use pantry::{logging, render, IngredientDraft, PantryClient, Session};

#[derive(Parser)]
#[command(name = "pantry")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track pantry expiry dates and find recipes for what is about to spoil")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pantry API URL (overrides the config file and PANTRY_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: <config dir>/pantry/config.toml, then ./pantry.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show pantry stats and what expires this week
    Dashboard,

    /// List all ingredients
    List,

    /// Add an ingredient
    Add {
        /// Ingredient name
        #[arg(short, long)]
        name: String,
        /// Expiry date (YYYY-MM-DD)
        #[arg(short, long)]
        expiry: String,
        /// Quantity, e.g. "1 gallon" or "500g"
        #[arg(short, long)]
        quantity: Option<String>,
        /// Category, e.g. "Dairy"
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Edit an ingredient; omitted fields keep their current values
    Edit {
        /// Ingredient ID
        id: i64,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        expiry: Option<String>,
        #[arg(short, long)]
        quantity: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete an ingredient
    Delete {
        /// Ingredient ID
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Suggest recipes that use expiring ingredients
    Recipes {
        /// Expiry horizon in days (3, 7, 14 or 30)
        #[arg(short, long, default_value_t = 7)]
        days: u32,
        /// Show the full details of one recipe
        #[arg(long)]
        show: Option<i64>,
    },

    /// Load the server's sample ingredients
    Seed,

    /// Delete every ingredient on the server
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = config::generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write config to {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    tracing::debug!("Using pantry API at {}", config.api.base_url);

    let client = PantryClient::new(config.client_config()).context("Failed to create HTTP client")?;
    let session = Session::new(client);
    let today = Local::now().date_naive();
    let format = cli.format;

    match cli.command {
        Commands::Dashboard => {
            let view = session.load_dashboard().await;
            match format {
                OutputFormat::Json => print_json(&DashboardOutput {
                    stats: *view.stats(),
                    expiring: view.rows(today),
                })?,
                OutputFormat::Table => println!("{}", render::dashboard(&view, today)),
            }
        }

        Commands::List => {
            let mut view = IngredientsView::new();
            session.refresh_ingredients(&mut view).await;
            print_ingredients(&view, format, today)?;
        }

        Commands::Add {
            name,
            expiry,
            quantity,
            category,
        } => {
            let mut view = IngredientsView::new();
            view.open_add();
            *view.draft_mut() = IngredientDraft {
                name,
                expiry_date: expiry,
                quantity: quantity.unwrap_or_default(),
                category: category.unwrap_or_default(),
            };

            let mutation = view.submit()?;
            if let Some(alert) = session.run_mutation(&mut view, mutation).await {
                fail(&alert);
            }
            eprintln!("Ingredient added.");
            print_ingredients(&view, format, today)?;
        }

        Commands::Edit {
            id,
            name,
            expiry,
            quantity,
            category,
        } => {
            let mut view = IngredientsView::new();
            session.refresh_ingredients(&mut view).await;
            if !view.open_edit(id) {
                // Not in the list; let the server decide.
                view.begin_edit(id, IngredientDraft::default());
            }

            let draft = view.draft_mut();
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(expiry) = expiry {
                draft.expiry_date = expiry;
            }
            if let Some(quantity) = quantity {
                draft.quantity = quantity;
            }
            if let Some(category) = category {
                draft.category = category;
            }

            let mutation = view.submit()?;
            if let Some(alert) = session.run_mutation(&mut view, mutation).await {
                fail(&alert);
            }
            eprintln!("Ingredient {} updated.", id);
            print_ingredients(&view, format, today)?;
        }

        Commands::Delete { id, yes } => {
            let mut view = IngredientsView::new();
            view.request_delete(id);

            if !yes && !confirm(DELETE_PROMPT)? {
                view.cancel_delete();
                eprintln!("Cancelled.");
                return Ok(());
            }

            if let Some(mutation) = view.confirm_delete() {
                if let Some(alert) = session.run_mutation(&mut view, mutation).await {
                    fail(&alert);
                }
            }
            eprintln!("Ingredient {} deleted.", id);
            print_ingredients(&view, format, today)?;
        }

        Commands::Recipes { days, show } => {
            let horizon = Horizon::try_from(days)?;
            let view = Mutex::new(RecipesView::new());
            session.select_horizon(&view, horizon).await;
            let mut view = view.into_inner();

            if let Some(id) = show {
                view.select_recipe(id);
            }

            match (format, view.state()) {
                (_, RecipesState::Failed { message }) => {
                    if format == OutputFormat::Table {
                        println!("{}", render::recipes(&view));
                    }
                    fail(message);
                }
                (OutputFormat::Json, RecipesState::Loaded(suggestions)) => match show {
                    Some(id) => match view.selected_recipe() {
                        Some(recipe) => print_json(recipe)?,
                        None => fail(&format!("Recipe {} is not among the suggestions", id)),
                    },
                    None => print_json(suggestions)?,
                },
                (OutputFormat::Table, _) => match show {
                    Some(id) => match view.selected_recipe() {
                        Some(recipe) => println!("{}", render::recipe_detail(recipe)),
                        None => fail(&format!("Recipe {} is not among the suggestions", id)),
                    },
                    None => println!("{}", render::recipes(&view)),
                },
                (OutputFormat::Json, RecipesState::Loading) => {
                    fail("No recipe response was applied")
                }
            }
        }

        Commands::Seed => match session.seed().await {
            Ok(ack) => println!(
                "{}",
                ack.message.as_deref().unwrap_or("Sample ingredients added.")
            ),
            Err(e) => fail(&e.alert_message("Error adding test data")),
        },

        Commands::Reset { yes } => {
            if !yes && !confirm("This deletes every ingredient. Are you sure?")? {
                eprintln!("Cancelled.");
                return Ok(());
            }
            match session.reset().await {
                Ok(ack) => println!(
                    "Deleted {} ingredients.",
                    ack.deleted_count.unwrap_or_default()
                ),
                Err(e) => fail(&e.alert_message("Error resetting database")),
            }
        }

        Commands::Config { .. } => unreachable!("handled before the client is built"),
    }

    Ok(())
}

#[derive(Serialize)]
struct DashboardOutput {
    stats: pantry::Stats,
    expiring: Vec<pantry::view::IngredientRow>,
}

fn print_ingredients(
    view: &IngredientsView,
    format: OutputFormat,
    today: NaiveDate,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(&view.rows(today)),
        OutputFormat::Table => {
            println!("{}", render::ingredients(view, today));
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Print an alert and exit with a failure status
fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
