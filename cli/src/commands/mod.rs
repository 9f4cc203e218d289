pub mod build;
pub mod check;
pub mod generate;

use std::fmt;

/// A command-line mistake: reported with the command's usage text.
#[derive(Debug)]
pub struct UsageError {
    pub command: &'static str,
    pub message: String,
}

impl UsageError {
    pub fn new(command: &'static str, message: impl Into<String>) -> Self {
        Self {
            command,
            message: message.into(),
        }
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for UsageError {}
