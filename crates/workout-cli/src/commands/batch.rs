use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};

use workout_core::{process_packages, PackageFile};

use super::{print_messages, Context};

#[derive(Args)]
pub struct BatchArgs {
    /// Batch file (.json or .toml); reads JSON from stdin when omitted or "-"
    file: Option<PathBuf>,
}

pub fn run(ctx: &Context, args: BatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let file = match args.file.as_deref() {
        None => read_stdin()?,
        Some(path) if path == Path::new("-") => read_stdin()?,
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            if path.extension().is_some_and(|ext| ext == "toml") {
                PackageFile::from_toml_str(&content)?
            } else {
                PackageFile::from_json_str(&content)?
            }
        }
    };
    tracing::debug!(packages = file.packages.len(), "batch loaded");

    let messages = process_packages(&file.packages)?;
    print_messages(ctx, &messages)
}

fn read_stdin() -> Result<PackageFile, Box<dyn std::error::Error>> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    Ok(PackageFile::from_json_str(&content)?)
}
