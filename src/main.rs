#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::style)]

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use remaster::cli::Args;
use remaster::config::MihomoConfig;
use remaster::overwrite::overwrite;
use remaster::profile::OverwriteProfile;
use tracing::Level;

fn main() {
    let args = Args::parse();
    let is_verbose = args.verbose;
    tracing_subscriber::fmt()
        .with_max_level(if is_verbose {
            Level::TRACE
        } else {
            Level::INFO
        })
        .init();

    if let Err(e) = run(args) {
        tracing::error!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    tracing::info!("Loading overwrite profile from: {}", args.profile);
    let profile = OverwriteProfile::from_file(Path::new(&args.profile))?;
    tracing::debug!("Known subscriptions: {:?}", profile.subscription_names());

    let mut config = match args.base.as_deref() {
        Some(path) => {
            tracing::info!("Loading base config from: {}", path);
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read base config from {}", path))?;
            MihomoConfig::from_yaml(&content)
                .with_context(|| format!("Failed to parse base config from {}", path))?
        }
        None => MihomoConfig::new(),
    };

    overwrite(&mut config, &profile, args.subscription.as_deref());

    if !config.is_complete() {
        tracing::warn!("Generated config is missing required runtime fields");
    }

    let yaml = config
        .to_yaml()
        .context("Failed to serialize config to YAML")?;

    match args.output.as_deref() {
        Some(path) => {
            let path = Path::new(path);
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create output directory {:?}", parent))?;
            }
            fs::write(path, &yaml)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            tracing::info!("Config written to {:?}", path);
        }
        None => print!("{}", yaml),
    }

    tracing::info!("Config overwrite complete!");
    Ok(())
}
