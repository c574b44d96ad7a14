//! Error types emitted by the Tollway CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use tollway_core::{OptimizeRequestError, PricingTableError};

/// Errors emitted by the Tollway CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The configured budget is unusable.
    #[error("invalid --budget: {source}")]
    InvalidBudget {
        #[source]
        source: OptimizeRequestError,
    },
    /// The configured region is not one the pricing table knows.
    #[error("invalid --region {value:?}: {reason}")]
    InvalidRegion { value: String, reason: String },
    /// The configured departure time is not `HH:MM`.
    #[error("invalid --departure-time {value:?} (expected HH:MM): {source}")]
    InvalidDepartureTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// Opening the request file failed.
    #[error("failed to open request at {path:?}: {source}")]
    OpenRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Request JSON could not be decoded.
    #[error("failed to parse request JSON at {path:?}: {source}")]
    ParseRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The request payload failed validation.
    #[error("request in {path:?} failed validation: {source}")]
    InvalidRequest {
        path: Utf8PathBuf,
        #[source]
        source: OptimizeRequestError,
    },
    /// The built-in pricing table could not be constructed.
    #[error("failed to build pricing table: {0}")]
    PricingTable(#[from] PricingTableError),
    /// Serialising the optimisation result failed.
    #[error("failed to serialise optimisation result: {0}")]
    SerialiseResult(#[source] serde_json::Error),
    /// Writing the result failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
