use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;

use commands::config::ConfigAction;

#[derive(Parser)]
#[command(name = "workout-cli", version, about = "Workout metrics CLI")]
pub struct Cli {
    /// Print summaries as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Config file (default: ~/.config/workout-metrics/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a single sensor package
    Calc(commands::calc::CalcArgs),
    /// Summarize a batch file of sensor packages
    Batch(commands::batch::BatchArgs),
    /// Summarize the built-in sample packages
    Demo,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let load_config = !matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::Reset | ConfigAction::Path
        } | Commands::Completions { .. }
    );
    let ctx = match commands::Context::new(cli.config, cli.json, load_config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    logging::init(&ctx.config.logging.level);
    tracing::debug!(path = %ctx.config_path.display(), load_config, "config resolved");

    let result = match cli.command {
        Commands::Calc(args) => commands::calc::run(&ctx, args),
        Commands::Batch(args) => commands::batch::run(&ctx, args),
        Commands::Demo => commands::demo::run(&ctx),
        Commands::Config { action } => commands::config::run(&ctx, action),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
