//! Test driver for the workspace binaries.
//!
//! Spawns `flagcheck` or `clo-trace` with:
//! - stdin: closed
//! - stdout and stderr: pipes, captured for assertions
//! - a scrubbed environment for the variables the binaries read

use std::io::Write;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::Once;

/// Environment variables cleared before every spawn so the caller's shell
/// cannot leak defaults into a test.
const SCRUBBED_ENV: &[&str] = &["FLAGCHECK_OPTIONS", "FLAGCHECK_LOG"];

/// Directory holding the built binaries.
pub fn target_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CARGO_TARGET_DIR") {
        return PathBuf::from(dir).join("debug");
    }
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(format!("{manifest_dir}/../target/debug"))
}

static BUILD_INIT: Once = Once::new();

/// Build the workspace binaries (flagcheck + clo-trace) if not already done.
pub fn ensure_binaries() {
    BUILD_INIT.call_once(|| {
        let manifest_dir = env!("CARGO_MANIFEST_DIR");
        let workspace_root = format!("{manifest_dir}/..");
        let status = Command::new("cargo")
            .args(["build", "-p", "flagcheck", "-p", "cloparse", "--bins"])
            .current_dir(&workspace_root)
            .status()
            .expect("failed to run cargo build");
        assert!(status.success(), "cargo build of the workspace binaries failed");
    });
}

/// Path of a built workspace binary, building it first if needed.
pub fn binary(name: &str) -> String {
    ensure_binaries();
    target_dir().join(name).to_string_lossy().into_owned()
}

/// A running binary.
pub struct TestSession {
    child: Child,
}

impl TestSession {
    /// Spawn `binary` with the given arguments.
    ///
    /// `env` are additional environment variables to set.
    pub fn spawn(
        binary: &str,
        args: &[&str],
        env: &[(&str, &str)],
    ) -> std::io::Result<TestSession> {
        Self::spawn_in(binary, args, env, None)
    }

    /// Like `spawn`, but with an optional working directory.
    pub fn spawn_in(
        binary: &str,
        args: &[&str],
        env: &[(&str, &str)],
        cwd: Option<&str>,
    ) -> std::io::Result<TestSession> {
        let mut cmd = Command::new(binary);
        cmd.args(args);
        for k in SCRUBBED_ENV {
            cmd.env_remove(k);
        }
        for (k, v) in env {
            cmd.env(k, v);
        }
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let child = cmd.spawn()?;
        Ok(TestSession { child })
    }

    /// Wait for the child to exit and assert the exit code.
    pub fn wait_exit(self, expected_code: i32) -> SessionOutput {
        let output = self
            .child
            .wait_with_output()
            .expect("failed to wait for child");
        let code = output.status.code().unwrap_or(-1);

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        assert_eq!(
            code, expected_code,
            "expected exit code {expected_code}, got {code}\nstdout:\n{stdout}\nstderr:\n{stderr}"
        );

        SessionOutput { stdout, stderr }
    }
}

/// Output captured from a completed session.
pub struct SessionOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Write `content` to a fresh file in `dir` and return its path.
pub fn write_file(dir: &std::path::Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).expect("failed to create file");
    f.write_all(content.as_bytes()).expect("failed to write file");
    path.to_string_lossy().into_owned()
}
