#![allow(dead_code)]

use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

pub const MISSING_TOOLCHAIN: &str = "gong-test-missing-go";

pub fn normalize_output(output: &[u8]) -> String {
    String::from_utf8_lossy(output).replace("\r\n", "\n")
}

/// The gong binary, run in `dir` with the toolchain swapped for `toolchain`.
pub fn gong(dir: &Path, toolchain: impl AsRef<std::ffi::OsStr>) -> Command {
    let mut cmd = Command::cargo_bin("gong").expect("binary");
    cmd.current_dir(dir)
        .env("GONG_GO", toolchain)
        .env_remove("GOPATH");
    cmd
}

/// A stand-in for `go` that logs its arguments and GOPATH, then exits with
/// `$FAKE_GO_EXIT` (default 0).
#[cfg(unix)]
pub fn fake_go(dir: &Path) -> (PathBuf, PathBuf) {
    let bin = dir.join("fakebin");
    fs::create_dir_all(&bin).expect("create fakebin");
    let log = dir.join("go.log");
    let executable = bin.join("go");

    let script = format!(
        r#"#!/bin/sh
printf 'args=%s\n' "$*" >> "{log}"
printf 'GOPATH=%s\n' "${{GOPATH-<unset>}}" >> "{log}"
echo "fake go $*"
exit "${{FAKE_GO_EXIT:-0}}"
"#,
        log = log.display()
    );
    fs::write(&executable, script).expect("write fake go");
    let mut perms = fs::metadata(&executable).expect("metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&executable, perms).expect("set executable bit");

    (executable, log)
}

pub fn read_log(log: &Path) -> String {
    fs::read_to_string(log).unwrap_or_default()
}

/// Working directory as the child process will see it.
pub fn resolved(path: &Path) -> PathBuf {
    fs::canonicalize(path).expect("canonicalize")
}
