//! External command execution with deadlines.
//!
//! `std::process::Command::output()` blocks until the child exits, which is
//! unacceptable for probes against tools that may hang (a wedged `ollama`
//! daemon, a misconfigured interpreter shim). [`run`] spawns the child with
//! piped stdio, drains the pipes on background threads, and polls
//! `try_wait()` against a deadline, killing the child if it expires.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Interval between `try_wait` polls while the child runs.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Captured output of a completed command.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    /// Exit code, if the process exited normally (None when killed by signal).
    pub code: Option<i32>,
    /// Decoded stdout (lossy UTF-8).
    pub stdout: String,
    /// Decoded stderr (lossy UTF-8).
    pub stderr: String,
}

impl CapturedOutput {
    /// Whether the command exited with status 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// What happened when a command was invoked.
#[derive(Debug)]
pub enum Outcome {
    /// The command ran to completion within the deadline.
    Completed(CapturedOutput),
    /// The binary was not found on PATH.
    NotFound,
    /// The command was still running when the deadline expired; it was killed.
    TimedOut,
    /// Spawning or waiting failed for another reason.
    Failed(String),
}

/// Run `program` with `args`, capturing output, bounded by `timeout`.
pub fn run(program: &str, args: &[&str], timeout: Duration) -> Outcome {
    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Outcome::NotFound,
        Err(err) => return Outcome::Failed(err.to_string()),
    };

    // Drain pipes on separate threads so a chatty child can't deadlock
    // against a full pipe buffer while we poll for exit.
    let stdout_reader = spawn_reader(child.stdout.take());
    let stderr_reader = spawn_reader(child.stderr.take());

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    let _ = stdout_reader.join();
                    let _ = stderr_reader.join();
                    return Outcome::TimedOut;
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(err) => {
                let _ = child.kill();
                let _ = child.wait();
                return Outcome::Failed(err.to_string());
            }
        }
    };

    let stdout = stdout_reader.join().unwrap_or_default();
    let stderr = stderr_reader.join().unwrap_or_default();

    Outcome::Completed(CapturedOutput {
        code: status.code(),
        stdout,
        stderr,
    })
}

/// Read a pipe to the end on a background thread, decoding lossily.
fn spawn_reader<R: Read + Send + 'static>(source: Option<R>) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut reader) = source {
            let _ = reader.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}
