//! Python package dependency checks.
//!
//! Each target is probed independently: import the module through the
//! ambient interpreter and read its self-reported version. A module without
//! a version attribute reports "unknown" and still passes.

use crate::python::{Availability, Interpreter};
use crate::report::CheckResult;

/// The packages the RAG toolchain needs, as (module identifier, display
/// name) pairs. Display names follow the PyPI distribution names.
pub const PYTHON_DEPENDENCIES: &[(&str, &str)] = &[
    ("langchain", "langchain"),
    ("langchain_community", "langchain-community"),
    ("langchain_ollama", "langchain-ollama"),
    ("dotenv", "python-dotenv"),
    ("pypdf", "pypdf"),
];

/// Check that `module` is importable, reporting under `display` (defaults to
/// the module identifier).
pub fn check_import(
    interpreter: &Interpreter,
    module: &str,
    display: Option<&str>,
) -> CheckResult {
    let name = display.unwrap_or(module);
    match interpreter.module_version(module) {
        Availability::Available { version } => {
            CheckResult::ok(name, format!("Import OK (version: {})", version))
        }
        Availability::Unavailable { reason } => {
            CheckResult::error(name, format!("Import failed: {}", reason))
        }
    }
}
