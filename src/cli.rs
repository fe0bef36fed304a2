use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::Settings;
use crate::tools::help;
use crate::tools::toolchain::{self, FAILURE_CODE};
use crate::workspace;

/// Root CLI for gong
#[derive(Parser, Debug)]
#[command(name = "gong")]
#[command(about = "Per-project GOPATH workspaces for the Go toolchain")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// `setup`, `help`, or any go command with its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

/// Arguments after the program name, exactly as given.
pub fn parse_args(argv: Vec<OsString>) -> Result<Vec<OsString>, clap::Error> {
    // clap would take a leading `--` as its own end-of-options marker
    if argv.get(1).is_some_and(|first| first == "--") {
        return Ok(argv[1..].to_vec());
    }
    Cli::try_parse_from(argv).map(|cli| cli.args)
}

/// What one invocation does, decided by its first argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing given: show help and fail.
    Usage,
    /// `setup`: provision the workspace again.
    Setup,
    /// A bare `help`.
    Help,
    /// Anything else, passed to the toolchain verbatim.
    Forward(Vec<OsString>),
}

impl Action {
    pub fn from_args(args: &[OsString]) -> Self {
        match args {
            [] => Action::Usage,
            [cmd, ..] if cmd == "setup" => Action::Setup,
            [cmd] if cmd == "help" => Action::Help,
            _ => Action::Forward(args.to_vec()),
        }
    }
}

/// Parse `argv` and dispatch. Returns the process exit code.
pub fn run<I, T>(argv: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let args = match parse_args(argv) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return FAILURE_CODE;
        }
    };

    match Action::from_args(&args) {
        Action::Usage => {
            show_help();
            FAILURE_CODE
        }
        Action::Help => {
            show_help();
            0
        }
        Action::Setup => match setup(true) {
            Ok(_) => 0,
            Err(e) => {
                eprintln!("failed! {e:#}");
                FAILURE_CODE
            }
        },
        Action::Forward(args) => {
            let root = match setup(false) {
                Ok(root) => root,
                Err(e) => {
                    eprintln!("failed! {e:#}");
                    return FAILURE_CODE;
                }
            };
            let settings = Settings::resolve(Some(&root));
            let gopath = workspace::deps_path(&root);
            toolchain::forward(&settings.toolchain, &args, Some(&gopath)).exit_code()
        }
    }
}

fn setup(force: bool) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("can't get working directory")?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    workspace::ensure_workspace(&cwd, force, &mut stdin.lock(), &mut stdout)
}

fn show_help() {
    let root = workspace::locate_root_from_cwd().ok().flatten();
    let settings = Settings::resolve(root.as_deref());
    help::print_help(&settings.toolchain, root.as_deref());
}
