//! # rapport-cli
//!
//! Operational tooling over the memory store and personality engine: argument
//! parsing, configuration loading and transcript replay.

pub mod cli;
pub mod config;
pub mod replay;

pub use cli::{load_base_profile, Cli, Commands};
pub use config::RapportConfig;
pub use replay::{replay, ReplayOptions, ReplaySummary, TranscriptLine, UserReport};
