//! Error types emitted by the lost-and-found CLI.
//!
//! Keep this error type reasonably small, as CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use lostfound_core::RecordValidationError;
use lostfound_matcher::MatchWeightsError;
use thiserror::Error;

/// Errors emitted by the lost-and-found CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required positional argument is missing after configuration merging.
    #[error("missing {field} path (pass it as the first argument or set {env})")]
    MissingArgument {
        /// Name of the missing argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// `--limit` was zero.
    #[error("--{field} must be at least 1")]
    ZeroLimit {
        /// Name of the offending option.
        field: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Name of the option holding the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Name of the option holding the path.
        field: &'static str,
        /// Path that is not a regular file.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Name of the option holding the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the snapshot file failed.
    #[error("failed to open snapshot at {path:?}: {source}")]
    OpenSnapshot {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Snapshot JSON could not be decoded.
    #[error("failed to parse snapshot JSON at {path:?}: {source}")]
    ParseSnapshot {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Decoding error.
        #[source]
        source: serde_json::Error,
    },
    /// The snapshot held malformed records.
    #[error("snapshot in {path:?} failed validation: {source}")]
    InvalidSnapshot {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// First validation failure.
        #[source]
        source: RecordValidationError,
    },
    /// The configured weights were incoherent.
    #[error(transparent)]
    InvalidWeights(#[from] MatchWeightsError),
    /// Serialising the match report failed.
    #[error("failed to serialise match report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Creating the report file failed.
    #[error("failed to create report file at {path:?}: {source}")]
    CreateReport {
        /// Report path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Writing the match report failed.
    #[error("failed to write match report: {0}")]
    WriteReport(#[source] std::io::Error),
}
