//! Linux Distros - Main entry point
//!
//! Seeds the database and prints the distribution table.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use linux_distros::{
    app::open_store,
    config::Config,
    display::{count_line, deliver, print_section, TextTable},
    error::Result,
    on_startup, seed, TITLE,
};

#[derive(Parser)]
#[command(name = "linux-distros")]
#[command(author, version, about = "Show a table of well-known Linux distributions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LINUX_DISTROS_CONFIG")]
    config: Option<std::path::PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the database and show the table (default)
    Show {
        /// Print records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Reset the database to the reference list without showing it
    Seed,

    /// Show or edit configuration
    Config {
        /// Print current configuration
        #[arg(long)]
        show: bool,

        /// Create default configuration file
        #[arg(long)]
        init: bool,
    },

    /// Database operations
    Db {
        /// Show database path and row count
        #[arg(long)]
        info: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load and validate configuration
    let config = if let Some(ref path) = cli.config {
        Config::load_from(path)?
    } else {
        Config::load()?
    };
    config.validate()?;

    // Initialize logging; stdout is reserved for the table
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Show { json }) => run_show(&config, json).await,
        None => run_show(&config, false).await,

        Some(Commands::Seed) => {
            let db = open_store(&config).await?;
            let report = seed::seed(&db).await?;
            println!(
                "Seeded {} distributions (removed {} old rows)",
                report.inserted, report.cleared
            );
            for (id, err) in &report.failures {
                println!("  id {id}: {err}");
            }
            Ok(())
        }

        Some(Commands::Config { show, init }) => {
            if init {
                let default_config = Config::default();
                default_config.save()?;
                println!(
                    "Created default configuration at {}",
                    Config::config_path()?.display()
                );
            } else if show {
                let contents = toml::to_string_pretty(&config)?;
                println!("{contents}");
            } else {
                println!("Configuration path: {}", Config::config_path()?.display());
            }
            Ok(())
        }

        Some(Commands::Db { info }) => {
            if info {
                let db = open_store(&config).await?;
                if let Some(path) = db.path() {
                    println!("Database path: {}", path.display());
                }
                println!("{}", count_line(&db.count().await));
            } else {
                println!("Database path: {}", config.database_path()?.display());
                println!("Run `linux-distros db --info` for the row count");
            }
            Ok(())
        }
    }
}

async fn run_show(config: &Config, json: bool) -> Result<()> {
    let startup = on_startup(config).await;

    if let Some(ref err) = startup.open_error {
        eprintln!("Error: {err}");
    }

    let outcome = startup.pending.wait().await;

    if json {
        println!("{}", serde_json::to_string_pretty(outcome.records())?);
        return Ok(());
    }

    print_section(TITLE);
    let mut table = TextTable::new(std::io::stdout().lock());
    deliver(&outcome, &mut table);
    println!("\n{}", outcome.status_line());

    Ok(())
}
