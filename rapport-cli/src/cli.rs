//! CLI parser and base-profile loading.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use personality::{PersonalityConfig, PersonalityProfile};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "rapport")]
#[command(about = "Tiered memory and personality adaptation CLI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Also append logs to this file (overrides LOG_FILE)
    #[arg(long, global = true)]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a JSONL transcript and print per-user memory and personality reports.
    Replay {
        /// One turn per line: {"userId", "sessionId", "content", "type"?, "timestamp"?}
        transcript: PathBuf,

        /// Base personality profile as a JSON file (falls back to RAPPORT_BASE_PROFILE).
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Run a retrieval for every user with this query.
        #[arg(short, long)]
        query: Option<String>,

        #[arg(short, long, default_value = "5")]
        limit: usize,

        /// Consolidate each user's memory before reporting.
        #[arg(long)]
        consolidate: bool,
    },
}

/// Loads the base profile from `path`, or from `config` when no path is given.
/// Fails when neither supplies one.
pub fn load_base_profile(
    path: Option<&Path>,
    config: &PersonalityConfig,
) -> Result<PersonalityProfile> {
    let profile = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Read base profile {}", path.display()))?;
            serde_json::from_str::<PersonalityProfile>(&raw)
                .with_context(|| format!("Parse base profile {}", path.display()))?
        }
        None => config.base_profile.ok_or_else(|| {
            anyhow!("No base profile: pass --profile <file> or set RAPPORT_BASE_PROFILE")
        })?,
    };
    profile.validate()?;
    Ok(profile)
}
