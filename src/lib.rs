//! Ragcheck - Environment health checks for local RAG development stacks.
//!
//! Ragcheck verifies that a machine is ready for local retrieval-augmented
//! generation work: a recent Python interpreter, the LangChain packages, a
//! reachable Ollama CLI or server, and a working SQLite. It runs a fixed
//! sequence of independent probes and prints one JSON report to stdout.
//!
//! # Modules
//!
//! - [`checks`] - The individual diagnostic probes
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`exec`] - External command execution with deadlines
//! - [`python`] - Probing the ambient Python interpreter
//! - [`report`] - Check results and the aggregate report
//! - [`runner`] - Sequential check execution
//!
//! # Example
//!
//! ```
//! use ragcheck::report::{CheckResult, Report};
//!
//! let report = Report {
//!     results: vec![CheckResult::ok("sqlite", "In-memory DB create/insert/select OK")],
//! };
//! assert!(report.to_json().unwrap().contains("\"status\": \"ok\""));
//! ```

pub mod checks;
pub mod cli;
pub mod error;
pub mod exec;
pub mod python;
pub mod report;
pub mod runner;

pub use error::{RagcheckError, Result};
