mod cli;
mod config;
mod tools;
mod utils;
mod workspace;

fn main() {
    let code = cli::run(std::env::args_os());
    std::process::exit(code);
}
