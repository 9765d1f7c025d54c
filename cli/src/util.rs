//! Utilities

use std::{fmt::Display, process::exit};

use colored::Colorize;

/// Prints an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "x".red(), msg.red());
}

/// Prints a notice on stdout
pub fn notice(msg: &str) {
    println!("{}", msg.yellow());
}

/// Result extension trait
pub trait ResultExt<T, E>
where
    Self: Sized,
{
    /// Unwraps a result or exits with an error
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Display,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                error(err.to_string().as_str());
                exit(1);
            }
        }
    }
}
