//! wiregen CLI - Java message classes from protocol schemas
//!
//! Commands:
//! - `wiregen generate` - Generate the classes for one schema
//! - `wiregen check` - Resolve a schema without writing anything

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod check;
mod generate;

#[derive(Parser)]
#[command(name = "wiregen")]
#[command(author, version, about = "Generate Java message classes from protocol schemas", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the message class and its structures
    Generate {
        /// Path to the JSON schema
        #[arg(short, long)]
        input: String,

        /// Output root (default: output_dir from the config)
        #[arg(short, long)]
        output: Option<String>,

        /// Path to a wiregen.toml config
        #[arg(short, long)]
        config: Option<String>,

        /// Base package, overrides the config
        #[arg(short, long)]
        package: Option<String>,
    },

    /// Resolve a schema and print what would be generated
    Check {
        /// Path to the JSON schema
        #[arg(short, long)]
        input: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_string().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            input,
            output,
            config,
            package,
        } => {
            generate::run(&input, output, config, package)?;
        }
        Commands::Check { input } => {
            check::run(&input)?;
        }
    }

    Ok(())
}
