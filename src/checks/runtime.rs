//! Interpreter runtime check.
//!
//! Verifies that the environment's Python interpreter meets the minimum the
//! LangChain stack supports.

use crate::python::{Interpreter, PythonVersion};
use crate::report::CheckResult;

/// Minimum supported interpreter version (major, minor).
const MIN_SUPPORTED: (u32, u32) = (3, 9);

/// Name this check reports under.
const CHECK_NAME: &str = "python";

/// Check the ambient interpreter's version.
pub fn check_python(interpreter: &Interpreter) -> CheckResult {
    match interpreter.version() {
        Ok(version) => evaluate(version),
        Err(err) => CheckResult::error(CHECK_NAME, err.to_string()),
    }
}

/// Evaluate a detected version against the minimum. Pure comparison; the
/// details string always names the detected version and appends a
/// remediation note when below minimum.
pub(crate) fn evaluate(version: PythonVersion) -> CheckResult {
    let ok = (version.major, version.minor) >= MIN_SUPPORTED;
    let mut details = format!("Python {} detected", version);
    if !ok {
        details.push_str(&format!(
            " (requires >= {}.{})",
            MIN_SUPPORTED.0, MIN_SUPPORTED.1
        ));
    }
    CheckResult::from_flag(CHECK_NAME, ok, details)
}
