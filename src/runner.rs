//! Sequential check execution.
//!
//! The runner owns the fixed, ordered check list. Every check produces
//! exactly one result regardless of outcome, so a report always carries the
//! same names in the same order.

use crate::checks::{database, dependency, runtime, service};
use crate::python::Interpreter;
use crate::report::Report;

/// Runs the fixed diagnostic sequence.
pub struct CheckRunner {
    interpreter: Interpreter,
}

impl CheckRunner {
    /// Create a runner, locating the ambient Python interpreter once.
    pub fn new() -> Self {
        Self {
            interpreter: Interpreter::locate(),
        }
    }

    /// Create a runner against a specific interpreter binary.
    pub fn with_interpreter(interpreter: Interpreter) -> Self {
        Self { interpreter }
    }

    /// Run every check in order and collect the report.
    pub fn run(&self) -> Report {
        let mut results = Vec::new();

        // Core runtime
        results.push(runtime::check_python(&self.interpreter));

        // LangChain ecosystem imports
        for (module, display) in dependency::PYTHON_DEPENDENCIES {
            results.push(dependency::check_import(
                &self.interpreter,
                module,
                Some(display),
            ));
        }

        // External / system checks
        results.push(service::check_ollama());
        results.push(database::check_sqlite());

        for result in &results {
            tracing::debug!(name = %result.name, ok = result.is_ok(), "check finished");
        }

        Report { results }
    }
}

impl Default for CheckRunner {
    fn default() -> Self {
        Self::new()
    }
}
