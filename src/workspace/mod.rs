//! Project roots and their per-project dependency workspace.
//!
//! A project root is any directory holding a `.gong` marker file. Its
//! dependency workspace lives in `.gong.deps` and mirrors a GOPATH layout.

pub mod import_path;
pub mod provision;
pub mod root;

use std::path::{Path, PathBuf};

pub use provision::ensure_workspace;
pub use root::locate_root_from_cwd;

pub const MARKER_FILE: &str = ".gong";
pub const DEPS_DIR: &str = ".gong.deps";
pub const WORKSPACE_SUBDIRS: [&str; 3] = ["src", "bin", "pkg"];

/// Dependency workspace of the project rooted at `root`.
pub fn deps_path(root: &Path) -> PathBuf {
    root.join(DEPS_DIR)
}
