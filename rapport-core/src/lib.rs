//! # rapport-core
//!
//! Shared plumbing for the rapport workspace: the [`RapportError`] taxonomy,
//! tracing initialization, environment helpers and the [`Clock`] used by the
//! memory store and the personality engine. Holds no memory or personality
//! logic of its own.

pub mod clock;
pub mod env;
pub mod error;
pub mod logger;

pub use clock::{Clock, ManualClock, SystemClock};
pub use env::env_parse;
pub use error::{RapportError, Result};
pub use logger::init_tracing;
