use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vehicle_patterns::{
    AppConfig,
    adapters::ConsolePrompter,
    application::Session,
    builders::{CarBuilder, VanBuilder},
    directors::{CarDirector, VanDirector, VehicleDirector},
    factories::{FactoryRegistry, vehicle_parts},
};

#[derive(Parser)]
#[command(name = "vehicle-patterns")]
#[command(about = "Abstract Factory and Builder walkthrough over vehicle parts")]
struct Cli {
    /// TOML file overriding prompt titles, game choices and messages
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive console session (default)
    Interactive,
    /// List the vehicle kinds the factory registry knows
    Kinds,
    /// Print body, chassis and glass parts for each kind
    Parts {
        /// Kind names, e.g. Car Truck Van
        #[arg(required = true)]
        kinds: Vec<String>,
    },
    /// Assemble a vehicle with its director and print it
    Build {
        #[arg(value_enum)]
        vehicle: Buildable,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Buildable {
    Car,
    Van,
}

/// Logs go to stderr so the console transcript on stdout stays readable.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "vehicle_patterns=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    let registry = FactoryRegistry::global();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let prompter = ConsolePrompter::new(io::stdin().lock(), io::stdout());
            Session::new(&config, registry, prompter, io::stdout())
                .run()
                .context("console session failed")?;
        }
        Commands::Kinds => {
            for kind in registry.available_kinds() {
                println!("{kind}");
            }
        }
        Commands::Parts { kinds } => {
            for name in &kinds {
                let factory = registry.get_by_name(name)?;
                let parts = vehicle_parts(factory);
                println!("{name}: {}", parts.as_array().join(", "));
            }
        }
        Commands::Build { vehicle } => {
            let vehicle = match vehicle {
                Buildable::Car => CarDirector::new(CarBuilder).build()?,
                Buildable::Van => VanDirector::new(VanBuilder).build()?,
            };
            println!("{vehicle}");
        }
    }

    Ok(())
}
