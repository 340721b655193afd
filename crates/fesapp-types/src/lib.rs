//! Core types for fare estimation

mod category;
mod error;

pub use category::*;
pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Currency code used for every amount in the system
pub const CURRENCY: &str = "SLL";

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// How strictly fare inputs are checked before pricing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Reject negative or non-finite distance and fuel price
    #[default]
    Strict,
    /// Price any numeric input, reproducing historical outputs
    Compatible,
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationMode::Strict => write!(f, "strict"),
            ValidationMode::Compatible => write!(f, "compatible"),
        }
    }
}
