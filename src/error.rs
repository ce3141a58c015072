//! Error types for ragcheck operations.
//!
//! This module defines [`RagcheckError`], the primary error type, and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Every check converts its own faults into a failing
//! [`CheckResult`](crate::report::CheckResult) at its boundary, so errors of
//! this type never reach the runner. They surface only inside the probe
//! helpers (interpreter interrogation, report serialization).

use thiserror::Error;

/// Core error type for ragcheck operations.
#[derive(Debug, Error)]
pub enum RagcheckError {
    /// An interpreter probe command could not be executed or produced no
    /// usable output.
    #[error("Interpreter probe failed: {message}")]
    InterpreterProbe { message: String },

    /// The interpreter reported a version string that did not parse.
    #[error("Unparseable version string: {raw:?}")]
    VersionParse { raw: String },

    /// Report serialization failed.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for ragcheck operations.
pub type Result<T> = std::result::Result<T, RagcheckError>;
