//! Ollama service probe.
//!
//! Two-phase strategy: try the CLI with each version argument variant, then
//! fall back to the local HTTP API. The fallback is reached only when every
//! variant was skipped because the tool did not recognize it; a missing
//! binary or a genuine failure ends the probe immediately.

use std::time::Duration;

use crate::exec::{self, Outcome};
use crate::report::CheckResult;

/// The model-serving tool probed for.
const TOOL: &str = "ollama";

/// Argument variants tried in order. Older releases accept `--version`,
/// some builds only accept the `version` subcommand.
const VERSION_VARIANTS: &[&[&str]] = &[&["--version"], &["version"]];

/// Base URL of the local Ollama server.
const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Version endpoint on the Ollama API.
const VERSION_ENDPOINT: &str = "/api/version";

/// Timeout for each CLI attempt and for the HTTP probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Probe the local Ollama installation.
pub fn check_ollama() -> CheckResult {
    probe_service(TOOL, DEFAULT_BASE_URL, PROBE_TIMEOUT)
}

/// CLI-then-HTTP probe against a specific binary and server base URL.
pub(crate) fn probe_service(binary: &str, base_url: &str, timeout: Duration) -> CheckResult {
    for variant in VERSION_VARIANTS {
        match exec::run(binary, variant, timeout) {
            Outcome::Completed(out) if out.success() => {
                let captured = if !out.stdout.trim().is_empty() {
                    out.stdout.trim().to_string()
                } else if !out.stderr.trim().is_empty() {
                    out.stderr.trim().to_string()
                } else {
                    format!("{} {} OK", TOOL, variant.join(" "))
                };
                return CheckResult::ok("ollama_cli", captured);
            }
            Outcome::Completed(out) => {
                // An unrecognized flag/subcommand says nothing about whether
                // the tool works; move on to the next variant.
                let stderr = out.stderr.trim().to_lowercase();
                if stderr.contains("unknown command") || stderr.contains("unknown flag") {
                    continue;
                }
                let code = out
                    .code
                    .map_or_else(|| "none".to_string(), |c| c.to_string());
                return CheckResult::error(
                    "ollama_cli",
                    format!("Exit code {}: {}", code, out.stderr.trim()),
                );
            }
            Outcome::NotFound => {
                return CheckResult::error("ollama_cli", format!("{} CLI not found on PATH", TOOL));
            }
            Outcome::TimedOut => {
                return CheckResult::error(
                    "ollama_cli",
                    format!("Command timed out after {}s", timeout.as_secs()),
                );
            }
            Outcome::Failed(err) => {
                return CheckResult::error("ollama_cli", format!("Command error: {}", err));
            }
        }
    }

    // Every variant was unrecognized; ask the server directly.
    probe_http(base_url, timeout)
}

/// GET the version endpoint of a running Ollama server.
fn probe_http(base_url: &str, timeout: Duration) -> CheckResult {
    let url = format!("{}{}", base_url, VERSION_ENDPOINT);
    tracing::debug!("Falling back to HTTP probe: {}", url);

    let client = match reqwest::blocking::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(err) => {
            return CheckResult::error("ollama_http", format!("HTTP probe error: {}", err));
        }
    };

    match client.get(&url).send() {
        Ok(response) => {
            let status = response.status();
            if status.is_success() {
                let body = response.text().unwrap_or_default();
                let body = body.trim();
                CheckResult::ok(
                    "ollama_http",
                    format!(
                        "HTTP {} {} @ {}: {}",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or(""),
                        VERSION_ENDPOINT,
                        if body.is_empty() { "OK" } else { body },
                    ),
                )
            } else {
                CheckResult::error(
                    "ollama_http",
                    format!(
                        "HTTP error @ {}: {} {}",
                        VERSION_ENDPOINT,
                        status.as_u16(),
                        status.canonical_reason().unwrap_or(""),
                    ),
                )
            }
        }
        Err(err) => CheckResult::error(
            "ollama_http",
            format!("HTTP connection error to {}: {}", base_url, err),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn create_fake_tool(path: &Path, body: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[cfg(unix)]
    #[test]
    fn cli_success_reports_stdout() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("ollama");
        create_fake_tool(&bin, "echo v0.1.0");

        let result = probe_service(&bin.to_string_lossy(), DEFAULT_BASE_URL, PROBE_TIMEOUT);
        assert!(result.is_ok());
        assert_eq!(result.name, "ollama_cli");
        assert_eq!(result.details, "v0.1.0");
    }

    #[cfg(unix)]
    #[test]
    fn cli_success_with_silent_stdout_uses_stderr() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("ollama");
        create_fake_tool(&bin, "echo 'ollama version is 0.5.1' >&2");

        let result = probe_service(&bin.to_string_lossy(), DEFAULT_BASE_URL, PROBE_TIMEOUT);
        assert!(result.is_ok());
        assert_eq!(result.details, "ollama version is 0.5.1");
    }

    #[test]
    fn missing_binary_reports_not_found() {
        let result = probe_service(
            "this-ollama-does-not-exist-12345",
            DEFAULT_BASE_URL,
            PROBE_TIMEOUT,
        );
        assert!(!result.is_ok());
        assert_eq!(result.name, "ollama_cli");
        assert!(result.details.contains("not found"));
    }

    #[cfg(unix)]
    #[test]
    fn genuine_failure_stops_without_http_fallback() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("ollama");
        create_fake_tool(&bin, "echo 'daemon unreachable' >&2\nexit 7");

        // Unroutable base URL: reaching the fallback would fail loudly.
        let result = probe_service(&bin.to_string_lossy(), "http://127.0.0.1:1", PROBE_TIMEOUT);
        assert!(!result.is_ok());
        assert_eq!(result.name, "ollama_cli");
        assert!(result.details.contains("Exit code 7"));
        assert!(result.details.contains("daemon unreachable"));
    }

    #[cfg(unix)]
    #[test]
    fn unrecognized_variants_fall_back_to_http_success() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("ollama");
        create_fake_tool(&bin, "echo \"Error: unknown flag: $1\" >&2\nexit 1");

        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/version");
            then.status(200).body("{\"version\":\"0.5.1\"}");
        });

        let result = probe_service(&bin.to_string_lossy(), &server.base_url(), PROBE_TIMEOUT);
        mock.assert();
        assert!(result.is_ok());
        assert_eq!(result.name, "ollama_http");
        assert!(result.details.contains("HTTP 200"));
        assert!(result.details.contains("0.5.1"));
    }

    #[cfg(unix)]
    #[test]
    fn http_fallback_reports_server_errors() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("ollama");
        create_fake_tool(&bin, "echo 'unknown command' >&2\nexit 1");

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/version");
            then.status(500);
        });

        let result = probe_service(&bin.to_string_lossy(), &server.base_url(), PROBE_TIMEOUT);
        assert!(!result.is_ok());
        assert_eq!(result.name, "ollama_http");
        assert!(result.details.contains("500"));
    }

    #[cfg(unix)]
    #[test]
    fn http_fallback_reports_connection_failure() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("ollama");
        create_fake_tool(&bin, "echo 'unknown command' >&2\nexit 1");

        // Nothing listens here; connection is refused immediately.
        let result = probe_service(
            &bin.to_string_lossy(),
            "http://127.0.0.1:9",
            PROBE_TIMEOUT,
        );
        assert!(!result.is_ok());
        assert_eq!(result.name, "ollama_http");
        assert!(result.details.contains("HTTP connection error"));
    }

    #[cfg(unix)]
    #[test]
    fn second_variant_succeeds_after_first_is_unrecognized() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("ollama");
        create_fake_tool(
            &bin,
            "if [ \"$1\" = \"--version\" ]; then\n\
             echo 'Error: unknown flag: --version' >&2\n\
             exit 1\n\
             fi\n\
             echo 'ollama version is 0.3.6'",
        );

        let result = probe_service(&bin.to_string_lossy(), DEFAULT_BASE_URL, PROBE_TIMEOUT);
        assert!(result.is_ok());
        assert_eq!(result.name, "ollama_cli");
        assert_eq!(result.details, "ollama version is 0.3.6");
    }

    #[cfg(unix)]
    #[test]
    fn hung_tool_reports_timeout() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("ollama");
        create_fake_tool(&bin, "sleep 30");

        let result = probe_service(
            &bin.to_string_lossy(),
            DEFAULT_BASE_URL,
            Duration::from_millis(200),
        );
        assert!(!result.is_ok());
        assert_eq!(result.name, "ollama_cli");
        assert!(result.details.contains("timed out"));
    }
}
