mod common;

use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

use common::{MISSING_TOOLCHAIN, gong, normalize_output, resolved};

#[test]
fn setup_creates_marker_workspace_and_link() {
    let tmp = tempdir().expect("tempdir");

    gong(tmp.path(), MISSING_TOOLCHAIN)
        .arg("setup")
        .write_stdin("example.org/x/y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("creating symlinks... done."));

    assert!(tmp.path().join(".gong").is_file());
    for sub in ["src", "bin", "pkg"] {
        assert!(tmp.path().join(".gong.deps").join(sub).is_dir(), "missing {sub}");
    }
    let link = tmp.path().join(".gong.deps/src/example.org/x/y");
    assert_eq!(resolved(&link), resolved(tmp.path()));
}

#[test]
fn setup_reprompts_on_invalid_paths() {
    let tmp = tempdir().expect("tempdir");

    let assert = gong(tmp.path(), MISSING_TOOLCHAIN)
        .arg("setup")
        .write_stdin("/abs\na//b\n\nexample.org/x/y/\n")
        .assert()
        .success();

    let stdout = normalize_output(&assert.get_output().stdout);
    assert!(stdout.contains("-- can't start with a slash ('/')"), "stdout was: {stdout}");
    assert!(stdout.contains("-- can't use double slashes ('//')"), "stdout was: {stdout}");
    assert!(fs::symlink_metadata(tmp.path().join(".gong.deps/src/example.org/x/y")).is_ok());
}

#[test]
fn setup_without_input_fails_with_code_2() {
    let tmp = tempdir().expect("tempdir");

    gong(tmp.path(), MISSING_TOOLCHAIN)
        .arg("setup")
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed!"));

    // partial state is left behind for a later `setup`
    assert!(tmp.path().join(".gong").is_file());
}

#[test]
fn repeated_setup_with_new_path_adds_link() {
    let tmp = tempdir().expect("tempdir");

    gong(tmp.path(), MISSING_TOOLCHAIN)
        .arg("setup")
        .write_stdin("example.org/x/y\n")
        .assert()
        .success();

    gong(tmp.path(), MISSING_TOOLCHAIN)
        .arg("setup")
        .write_stdin("example.org/x/z\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("running setup again"));

    assert!(fs::symlink_metadata(tmp.path().join(".gong.deps/src/example.org/x/y")).is_ok());
    assert!(fs::symlink_metadata(tmp.path().join(".gong.deps/src/example.org/x/z")).is_ok());
}

#[test]
fn repeated_setup_with_same_path_fails() {
    let tmp = tempdir().expect("tempdir");

    gong(tmp.path(), MISSING_TOOLCHAIN)
        .arg("setup")
        .write_stdin("example.org/x/y\n")
        .assert()
        .success();

    gong(tmp.path(), MISSING_TOOLCHAIN)
        .arg("setup")
        .write_stdin("example.org/x/y\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed!"));
}
