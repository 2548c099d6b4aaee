//! mailsift command line interface.
//!
//! Classify message text from the terminal and manage configuration, using
//! the same service gateway and mapping policy as the TUI.

use std::io::Read;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

use mailsift_core::{
    fallback::fallback_classify, policy, AppConfig, AppPaths, ClassifierClient, ClassifierSource,
};

#[derive(Parser)]
#[command(name = "mailsift", version, about = "Classify mail text into folders")]
struct Cli {
    /// Path to a config file (overrides global and local config)
    #[arg(long, global = true, env = "MAILSIFT_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify text and print the destination folder
    Classify {
        /// Text to classify; read from stdin when omitted
        text: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Skip the remote service and use the local keyword rules
        #[arg(long)]
        offline: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a default global config file if none exists
    Init,
    /// Print the global config file path
    Path,
    /// Print the effective configuration
    Show,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = try_main(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn try_main(cli: Cli) -> Result<()> {
    let paths = AppPaths::discover(cli.config.clone()).context("discovering config paths")?;

    match cli.command {
        Commands::Classify {
            text,
            json,
            offline,
        } => {
            let config = AppConfig::load(&paths).context("loading configuration")?;
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let text = text.trim();
            if text.is_empty() {
                anyhow::bail!("no text to classify");
            }
            classify(&config, text, json, offline)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init => {
                if AppConfig::ensure_default(&paths.global_config)? {
                    println!("wrote {}", paths.global_config.display());
                } else {
                    println!("already exists: {}", paths.global_config.display());
                }
                Ok(())
            }
            ConfigCommands::Path => {
                println!("{}", paths.global_config.display());
                Ok(())
            }
            ConfigCommands::Show => {
                let config = AppConfig::load(&paths).context("loading configuration")?;
                print!("{}", toml::to_string_pretty(&config)?);
                Ok(())
            }
        },
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
    Ok(buf)
}

fn classify(config: &AppConfig, text: &str, json: bool, offline: bool) -> Result<()> {
    let (result, source) = if offline {
        debug!("offline mode, using local keyword rules");
        (fallback_classify(text), ClassifierSource::Fallback)
    } else {
        let client =
            ClassifierClient::from_config(&config.classifier, config.ui.fallback_delay_ms)
                .context("building classifier client")?;
        let outcome = client.classify_with_fallback(text);
        if let Some(advisory) = &outcome.advisory {
            eprintln!("note: {advisory}");
        }
        (outcome.result, outcome.source)
    };

    let (folder, labels) = policy::route(&result);

    if json {
        let out = serde_json::json!({
            "folder": folder.as_str(),
            "labels": labels,
            "primary_classification": result.primary_classification,
            "source": match source {
                ClassifierSource::Remote => "remote",
                ClassifierSource::Fallback => "fallback",
            },
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("folder: {folder}");
        println!("labels: {}", labels.join(", "));
    }
    Ok(())
}
