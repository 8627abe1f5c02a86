//! GenderKit CLI - encode, decode and edit gender tokens.
//!
//! ```text
//! genderkit encode Nonbinary --pronouns they/them/their/theirs/themselves
//! genderkit decode 'ONonbinary|they/them/their/theirs/themselves'
//! genderkit describe M Genderfluid
//! genderkit repronoun F they/them/their/theirs/themselves
//! genderkit compare 'OAgender|he/him/his/his/himself' 'OAgender|she/her/her/hers/herself'
//! ```
//!
//! Results go to stdout; logs go to stderr, filtered by `RUST_LOG` or the
//! `[logging] filter` config value.

mod commands;

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use genderkit_config::{GenderKitConfig, OutputFormat, Settings};

#[derive(Parser)]
#[command(name = "genderkit", version, about = "Encode, decode and edit gender tokens")]
struct Cli {
    /// Output format; overrides `[output] format` in the config file.
    #[arg(long, global = true, value_parser = OutputFormat::parse)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a token from a label and optional pronouns.
    Encode {
        description: String,
        /// Pronoun token, e.g. "xe/xem/xyr/xyrs/xemself".
        #[arg(long)]
        pronouns: Option<String>,
    },
    /// Validate a token and print it.
    Decode { token: String },
    /// Change a token's description.
    Describe { token: String, description: String },
    /// Change a token's pronouns.
    Repronoun { token: String, pronouns: String },
    /// Check whether two tokens name the same gender.
    Compare { lhs: String, rhs: String },
}

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn load_settings() -> (Settings, Vec<String>) {
    match GenderKitConfig::load() {
        Ok(Some(config)) => config.resolve(),
        Ok(None) => (Settings::default(), Vec::new()),
        Err(err) => (Settings::default(), vec![err.to_string()]),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (settings, init_warnings) = load_settings();
    init_tracing(settings.log_filter());
    for warning in init_warnings {
        tracing::warn!("{warning}");
    }

    let settings = match cli.format {
        Some(format) => settings.with_format(format),
        None => settings,
    };
    let format = settings.format();

    let output = match cli.command {
        Command::Encode {
            description,
            pronouns,
        } => commands::render_gender(
            &commands::encode(&description, pronouns.as_deref())?,
            format,
        )?,
        Command::Decode { token } => commands::render_gender(&commands::decode(&token)?, format)?,
        Command::Describe { token, description } => {
            commands::render_gender(&commands::describe(&token, &description)?, format)?
        }
        Command::Repronoun { token, pronouns } => {
            commands::render_gender(&commands::repronoun(&token, &pronouns)?, format)?
        }
        Command::Compare { lhs, rhs } => {
            commands::render_comparison(commands::compare(&lhs, &rhs)?, format)?
        }
    };

    println!("{output}");
    Ok(())
}
