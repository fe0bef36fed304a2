use std::fmt::Write;
use std::path::Path;

use super::toolchain;

/// Usage text, mentioning the current project when there is one.
pub fn usage(project_root: Option<&Path>) -> String {
    let mut text = String::new();
    text.push_str("gong is a nicer tool for managing Go source code\n\n");
    if let Some(root) = project_root {
        let _ = writeln!(text, "  -> in project {}\n", root.display());
    }
    text.push_str("Usage: gong command [args]\n\n");
    text.push_str("gong subcommands:\n");
    text.push_str("    setup                                  (re)Setup the project\n");
    text.push_str("    help                                   Show this help\n\n");
    text.push_str("Everything else is handed to the Go toolchain with GOPATH pointing\n");
    text.push_str("at the project's .gong.deps workspace, so `gong get` works just like\n");
    text.push_str("`go get` but keeps dependencies inside the project.\n\n");
    text.push_str("All of the go commands are supported. `go help` follows:\n");
    text
}

/// Print usage, then the toolchain's own help.
pub fn print_help(program: &str, project_root: Option<&Path>) {
    print!("{}", usage(project_root));
    // help runs outside any workspace
    toolchain::forward(program, ["help"], None);
}
