use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Variable the Go toolchain reads its workspace from.
pub const WORKSPACE_ENV: &str = "GOPATH";

/// Exit code for anything that is not a normal child exit.
pub const FAILURE_CODE: i32 = 2;

/// How a forwarded toolchain invocation ended.
#[derive(Debug)]
pub enum ChildOutcome {
    Exited(i32),
    Signaled,
    SpawnFailed(io::Error),
}

impl ChildOutcome {
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::Exited(code),
            None => Self::Signaled,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exited(code) => *code,
            Self::Signaled | Self::SpawnFailed(_) => FAILURE_CODE,
        }
    }
}

/// Build the toolchain command with stdio passed through.
///
/// Any inherited `GOPATH` is dropped; it is set again only for a non-empty `gopath`.
pub fn command<I, S>(program: &str, args: I, gopath: Option<&Path>) -> Command
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args)
        .env_remove(WORKSPACE_ENV)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    if let Some(path) = gopath.filter(|p| !p.as_os_str().is_empty()) {
        cmd.env(WORKSPACE_ENV, path);
    }
    cmd
}

/// Run `program args...` and wait for it.
pub fn forward<I, S>(program: &str, args: I, gopath: Option<&Path>) -> ChildOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let outcome = match command(program, args, gopath).status() {
        Ok(status) => ChildOutcome::from_status(status),
        Err(e) => ChildOutcome::SpawnFailed(e),
    };

    match &outcome {
        ChildOutcome::Exited(_) => {}
        ChildOutcome::Signaled => {
            eprintln!("failed to end cleanly: `{program}` was terminated by a signal")
        }
        ChildOutcome::SpawnFailed(e) => {
            eprintln!("failed to end cleanly: couldn't run `{program}`: {e}")
        }
    }
    outcome
}
