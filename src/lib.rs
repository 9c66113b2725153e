pub mod cleaners;
pub mod config;
pub mod error;
pub mod pipeline;

pub(crate) use anyhow::{Context, Result};

pub use cleaners::{all_whitespace, html, inline_whitespace, underscores};
pub use config::CleanerConfig;
pub use error::CleanError;
pub use pipeline::{clean_text, Pipeline, Step};
