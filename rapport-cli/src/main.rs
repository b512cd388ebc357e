//! rapport CLI: replay transcripts through tiered memory and personality adaptation.
//! Config from env (.env supported) and CLI args.

use anyhow::{Context, Result};
use clap::Parser;
use rapport_cli::{load_base_profile, replay, Cli, Commands, RapportConfig, ReplayOptions};
use std::fs::File;
use std::io::BufReader;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RapportConfig::from_env()?.with_log_file_override(cli.log_file);
    rapport_core::init_tracing(config.log_file.as_deref())?;

    match cli.command {
        Commands::Replay {
            transcript,
            profile,
            query,
            limit,
            consolidate,
        } => {
            let base = load_base_profile(profile.as_deref(), &config.personality)?;
            let file = File::open(&transcript)
                .with_context(|| format!("Open transcript {}", transcript.display()))?;

            let options = ReplayOptions {
                query,
                limit,
                consolidate,
            };
            let summary = replay(BufReader::new(file), base, config.memory, &options)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
    }
}
