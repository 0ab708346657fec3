pub mod batch;
pub mod calc;
pub mod completions;
pub mod config;
pub mod demo;

use std::path::PathBuf;

use workout_core::{Config, InfoMessage, OutputFormat};

/// Settings shared by every command.
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
    pub format: OutputFormat,
}

impl Context {
    /// Resolve the config path and, when `load_config` is set, parse the file.
    /// Commands that repair or locate the config run on defaults instead.
    pub fn new(
        config_path: Option<PathBuf>,
        json: bool,
        load_config: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = match config_path {
            Some(path) => path,
            None => Config::default_path()?,
        };
        let config = if load_config {
            Config::load_from(&config_path)?
        } else {
            Config::default()
        };
        let format = if json {
            OutputFormat::Json
        } else {
            config.output.format
        };
        Ok(Self {
            config,
            config_path,
            format,
        })
    }
}

/// Print one summary per line in the selected format.
pub fn print_messages(
    ctx: &Context,
    messages: &[InfoMessage],
) -> Result<(), Box<dyn std::error::Error>> {
    for message in messages {
        match ctx.format {
            OutputFormat::Text => println!("{message}"),
            OutputFormat::Json => println!("{}", serde_json::to_string(message)?),
        }
    }
    Ok(())
}
