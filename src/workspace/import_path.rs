use std::io::{self, BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("the project path can't be empty")]
    Empty,
    #[error("can't start with a slash ('/')")]
    LeadingSlash,
    #[error("can't use double slashes ('//')")]
    DoubleSlash,
}

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("couldn't get the path... {0}")]
    Read(#[from] io::Error),
    #[error("couldn't get the path... input closed")]
    Closed,
}

fn normalize(candidate: &str) -> &str {
    let trimmed = candidate.trim();
    trimmed.strip_suffix('/').unwrap_or(trimmed)
}

/// Every rule the normalized `candidate` breaks, in reporting order.
pub fn problems(candidate: &str) -> Vec<ValidationError> {
    let path = normalize(candidate);
    let mut found = Vec::new();
    if path.starts_with('/') {
        found.push(ValidationError::LeadingSlash);
    }
    if path.contains("//") {
        found.push(ValidationError::DoubleSlash);
    }
    if path.is_empty() {
        found.push(ValidationError::Empty);
    }
    found
}

/// Normalize and check a user-entered import path such as `github.com/user/project`.
pub fn validate(candidate: &str) -> Result<String, ValidationError> {
    match problems(candidate).first() {
        Some(problem) => Err(*problem),
        None => Ok(normalize(candidate).to_string()),
    }
}

/// Ask for an import path on `input` until a valid one arrives.
pub fn prompt(input: &mut impl BufRead, output: &mut impl Write) -> Result<String, PromptError> {
    writeln!(
        output,
        "what is the project path going to be? (e.g. github.com/robxu9/gong)"
    )?;

    loop {
        write!(output, "  > ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Err(PromptError::Closed);
        }

        if let Ok(path) = validate(&line) {
            return Ok(path);
        }
        for reason in problems(&line) {
            if reason != ValidationError::Empty {
                writeln!(output, "-- {reason}")?;
            }
        }
    }
}
