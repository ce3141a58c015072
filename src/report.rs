//! Check results and the aggregate report.
//!
//! Each probe produces exactly one [`CheckResult`]; the runner collects them
//! into a [`Report`] that is serialized once and printed to stdout.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The probed capability is present and working.
    Ok,
    /// The probe failed; `details` carries the reason.
    Error,
}

/// The result of one diagnostic probe.
///
/// Results are immutable once created and carry no relationships to each
/// other; their order in the report equals invocation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Check identifier (e.g. "python", "sqlite", "ollama_cli").
    pub name: String,
    /// Whether the check passed.
    pub status: CheckStatus,
    /// Human-readable outcome: a version string, an error message, or a summary.
    pub details: String,
}

impl CheckResult {
    /// Create a passing result.
    pub fn ok(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Ok,
            details: details.into(),
        }
    }

    /// Create a failing result.
    pub fn error(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Error,
            details: details.into(),
        }
    }

    /// Create a result from a boolean outcome.
    pub fn from_flag(name: impl Into<String>, ok: bool, details: impl Into<String>) -> Self {
        if ok {
            Self::ok(name, details)
        } else {
            Self::error(name, details)
        }
    }

    /// Whether the check passed.
    pub fn is_ok(&self) -> bool {
        self.status == CheckStatus::Ok
    }
}

/// The top-level report: every check's result, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// One entry per check, ordered.
    pub results: Vec<CheckResult>,
}

impl Report {
    /// Render the report as indented JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether every check passed.
    pub fn all_ok(&self) -> bool {
        self.results.iter().all(CheckResult::is_ok)
    }
}
