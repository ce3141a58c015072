//! Probing the ambient Python interpreter.
//!
//! The RAG toolchain being diagnosed is a Python stack, so several checks
//! need to interrogate whatever interpreter the environment provides. This
//! module wraps that interrogation: locating a `python3`/`python` binary on
//! PATH, asking it for its version triple, and asking it whether a module
//! imports and what version that module reports.
//!
//! Probes run short `-c` snippets through [`exec::run`] so a broken shim
//! cannot hang the whole diagnostic.

use std::fmt;
use std::time::Duration;

use regex::Regex;

use crate::error::{RagcheckError, Result};
use crate::exec::{self, Outcome};

/// Interpreter names tried in order when locating Python on PATH.
const CANDIDATES: &[&str] = &["python3", "python"];

/// Snippet printing the interpreter's own version, e.g. "3.11.4".
const VERSION_SNIPPET: &str = "import platform; print(platform.python_version())";

/// Snippet importing a module (passed as argv) and printing its
/// self-reported version, with "unknown" as the sentinel for modules that
/// carry no `__version__` attribute.
const IMPORT_SNIPPET: &str = "import importlib, sys\n\
     mod = importlib.import_module(sys.argv[1])\n\
     print(getattr(mod, '__version__', 'unknown'))";

/// Timeout for each interpreter invocation.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// A Python version triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PythonVersion {
    /// Parse a version triple out of probe output.
    ///
    /// Tolerates surrounding text ("Python 3.11.4") and a missing patch
    /// component.
    pub fn parse(raw: &str) -> Result<Self> {
        let re = Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("static regex");
        let caps = re
            .captures(raw)
            .ok_or_else(|| RagcheckError::VersionParse {
                raw: raw.trim().to_string(),
            })?;

        let component = |idx: usize| -> u32 {
            caps.get(idx)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0)
        };

        Ok(Self {
            major: component(1),
            minor: component(2),
            patch: component(3),
        })
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Whether a Python module is importable, and what version it reports.
///
/// An absent version attribute is the `"unknown"` sentinel, never a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// The module imported successfully.
    Available { version: String },
    /// The import failed; `reason` is the interpreter's final error line.
    Unavailable { reason: String },
}

/// Handle to a Python interpreter binary.
#[derive(Debug, Clone)]
pub struct Interpreter {
    program: String,
}

impl Interpreter {
    /// Wrap a specific interpreter binary (name on PATH or absolute path).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Locate a working interpreter on PATH.
    ///
    /// Tries each candidate with `--version`; the first that runs wins. When
    /// none respond, falls back to the primary candidate so later probes
    /// produce "not found" failures instead of panicking here.
    pub fn locate() -> Self {
        for candidate in CANDIDATES {
            if let Outcome::Completed(out) = exec::run(candidate, &["--version"], PROBE_TIMEOUT) {
                if out.success() {
                    tracing::debug!("Located interpreter: {}", candidate);
                    return Self::new(*candidate);
                }
            }
        }
        Self::new(CANDIDATES[0])
    }

    /// The binary this handle invokes.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Ask the interpreter for its version triple.
    pub fn version(&self) -> Result<PythonVersion> {
        match exec::run(&self.program, &["-c", VERSION_SNIPPET], PROBE_TIMEOUT) {
            Outcome::Completed(out) if out.success() => PythonVersion::parse(&out.stdout),
            Outcome::Completed(out) => Err(RagcheckError::InterpreterProbe {
                message: format!(
                    "{} exited with code {}: {}",
                    self.program,
                    out.code.map_or_else(|| "none".to_string(), |c| c.to_string()),
                    final_error_line(&out.stderr),
                ),
            }),
            Outcome::NotFound => Err(RagcheckError::InterpreterProbe {
                message: format!("{} not found on PATH", self.program),
            }),
            Outcome::TimedOut => Err(RagcheckError::InterpreterProbe {
                message: format!(
                    "{} timed out after {}s",
                    self.program,
                    PROBE_TIMEOUT.as_secs()
                ),
            }),
            Outcome::Failed(err) => Err(RagcheckError::InterpreterProbe { message: err }),
        }
    }

    /// Ask the interpreter whether `module` imports, and what version it
    /// reports.
    pub fn module_version(&self, module: &str) -> Availability {
        match exec::run(
            &self.program,
            &["-c", IMPORT_SNIPPET, module],
            PROBE_TIMEOUT,
        ) {
            Outcome::Completed(out) if out.success() => Availability::Available {
                version: out.stdout.trim().to_string(),
            },
            Outcome::Completed(out) => Availability::Unavailable {
                reason: final_error_line(&out.stderr),
            },
            Outcome::NotFound => Availability::Unavailable {
                reason: format!("{} not found on PATH", self.program),
            },
            Outcome::TimedOut => Availability::Unavailable {
                reason: format!(
                    "{} timed out after {}s",
                    self.program,
                    PROBE_TIMEOUT.as_secs()
                ),
            },
            Outcome::Failed(err) => Availability::Unavailable { reason: err },
        }
    }
}

/// Extract the most useful line from interpreter stderr.
///
/// Python prints a traceback ending in the actual error
/// ("ModuleNotFoundError: No module named 'pypdf'"); the last non-empty line
/// is the one worth surfacing.
fn final_error_line(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("no error output")
        .to_string()
}
