use std::fs::OpenOptions;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::import_path;
use super::root::locate_root;
use super::{DEPS_DIR, MARKER_FILE, WORKSPACE_SUBDIRS};
use crate::utils::paths;

/// Make sure a project root with a dependency workspace exists for `start`.
///
/// With an existing root and `force == false` nothing is touched. Otherwise the
/// root (or `start`, when there is none yet) is provisioned and the operator
/// is asked for the project's import path on `input`. Returns the root.
pub fn ensure_workspace(
    start: &Path,
    force: bool,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<PathBuf> {
    let root = match locate_root(start) {
        Ok(root) if !force => return Ok(root),
        Ok(root) => {
            writeln!(output, "gong: running setup again for {}", root.display())?;
            root
        }
        Err(e) => {
            writeln!(output, "{e}, starting a new project")?;
            start.to_path_buf()
        }
    };

    provision(&root, input, output)?;
    Ok(root)
}

fn provision(root: &Path, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    write!(output, "setting up project in {}... ", root.display())?;
    output.flush()?;
    write_marker(root)?;
    create_layout(root)?;
    writeln!(output, "done.")?;

    let import_path = import_path::prompt(input, output)?;

    write!(output, "creating symlinks... ")?;
    output.flush()?;
    link_project(root, &import_path)?;
    writeln!(output, "done.")?;

    writeln!(
        output,
        "Setup should be completed now! Make sure to use gong as a wrapper"
    )?;
    writeln!(
        output,
        "to your `go` commands so that you have environment variables set correctly."
    )?;
    Ok(())
}

fn write_marker(root: &Path) -> Result<()> {
    let marker = root.join(MARKER_FILE);
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&marker)
        .with_context(|| format!("writing marker file {}", marker.display()))?;
    Ok(())
}

fn create_layout(root: &Path) -> Result<()> {
    let deps = root.join(DEPS_DIR);
    for sub in WORKSPACE_SUBDIRS {
        let dir = deps.join(sub);
        paths::create_dir_all(&dir)
            .with_context(|| format!("creating directory {}", dir.display()))?;
    }
    Ok(())
}

/// Link `.gong.deps/src/<import_path>` back to `root` through a relative target.
fn link_project(root: &Path, import_path: &str) -> Result<()> {
    let root = paths::clean(root);
    let src = root.join(DEPS_DIR).join("src");
    let link = paths::clean(&src.join(import_path));
    if link == src || !link.starts_with(&src) {
        bail!(
            "project path `{import_path}` does not stay inside {}",
            src.display()
        );
    }

    let base_dir = match link.parent() {
        Some(parent) => parent.to_path_buf(),
        None => src,
    };
    paths::create_dir_all(&base_dir)
        .with_context(|| format!("creating directory {}", base_dir.display()))?;

    let target = paths::relative_path(&base_dir, &root);
    paths::symlink_dir(&target, &link)
        .with_context(|| format!("linking {} -> {}", link.display(), target.display()))?;
    Ok(())
}
