//! catlog CLI - Rule string checker and previewer
//!
//! Commands:
//! - `catlog check` - Parse a rule string and list accepted and dropped tokens
//! - `catlog apply` - Show the threshold each category would end up with
//! - `catlog demo` - Declare sample categories and emit one record per level

use clap::{Parser, Subcommand};

mod apply;
mod check;
mod config;
mod demo;

#[derive(Parser)]
#[command(name = "catlog")]
#[command(author, version, about = "Check and preview catlog rule strings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a rule string and report dropped tokens
    Check {
        /// Rule string, e.g. "*=1,network=3"
        rules: String,

        /// Fail if any token is dropped
        #[arg(short, long)]
        strict: bool,
    },

    /// Show the threshold each category gets under a rule string
    Apply {
        /// Rule string, e.g. "*=1,network=3"
        rules: String,

        /// Category and its default level (name=level, level as name or 0-5)
        #[arg(short, long = "category", value_name = "NAME=LEVEL")]
        categories: Vec<String>,
    },

    /// Emit sample records through the gate
    Demo {
        /// Path to a JSON or TOML configuration file
        #[arg(short, long)]
        config: Option<String>,

        /// Rule string, overrides the configuration
        #[arg(short, long)]
        rules: Option<String>,

        /// Comma-separated category names to declare
        #[arg(long, default_value = "default,network,storage")]
        categories: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { rules, strict } => {
            check::run(&rules, strict)?;
        }
        Commands::Apply { rules, categories } => {
            apply::run(&rules, &categories)?;
        }
        Commands::Demo {
            config,
            rules,
            categories,
        } => {
            demo::run(config, rules, &categories)?;
        }
    }

    Ok(())
}
