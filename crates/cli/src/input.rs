//! Console input: prompting, parsing, and retry on malformed entry.
//!
//! Malformed input never reaches the core. Each prompt re-asks until the
//! operator enters something parseable; only I/O failures (closed stdin)
//! propagate out.

use std::io::{self, Write};

use domain::Money;
use thiserror::Error;

use crate::render;

/// Malformed console entry. Owned entirely by the presentation layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The entry was empty.
    #[error("Invalid input. Please enter a non-empty value.")]
    Empty,

    /// The entry was not a valid number.
    #[error("Invalid input. Please enter a valid number.")]
    NotANumber,
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(line.trim().to_string())
}

fn parse_number(line: &str) -> Result<u32, InputError> {
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    line.parse().map_err(|_| InputError::NotANumber)
}

fn parse_text(line: &str) -> Result<String, InputError> {
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(line.to_string())
}

fn parse_amount(line: &str) -> Result<Money, InputError> {
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    let value: f64 = line.parse().map_err(|_| InputError::NotANumber)?;
    Ok(Money::from_cents((value * 100.0).round() as i64))
}

/// Prompts for a whole number, re-asking on malformed entry.
pub fn number(prompt: &str) -> io::Result<u32> {
    loop {
        match parse_number(&read_line(prompt)?) {
            Ok(value) => return Ok(value),
            Err(err) => render::error(&err.to_string()),
        }
    }
}

/// Prompts for a non-empty line of text, re-asking on empty entry.
pub fn text(prompt: &str) -> io::Result<String> {
    loop {
        match parse_text(&read_line(prompt)?) {
            Ok(value) => return Ok(value),
            Err(err) => render::error(&err.to_string()),
        }
    }
}

/// Prompts for a money amount entered as a decimal (e.g. `150.0`),
/// re-asking on malformed entry.
pub fn amount(prompt: &str) -> io::Result<Money> {
    loop {
        match parse_amount(&read_line(prompt)?) {
            Ok(value) => return Ok(value),
            Err(err) => render::error(&err.to_string()),
        }
    }
}
