use std::{error::Error, fmt, io};

use super::tokens::Function;

/// Every way a script run can fail. Line numbers are 1-based.
#[derive(Debug)]
pub enum ScriptError {
    /// The script file could not be read.
    Io { path: String, source: io::Error },
    /// A line in keyword position is not a known command.
    InvalidCommand { line: usize, content: String },
    /// An argument line has the wrong number or kind of fields.
    MalformedArguments { line: usize, command: Function, content: String, reason: String },
    /// The script ended where an argument line was expected.
    TruncatedScript { line: usize, command: Function },
    /// The picture could not be shown or written.
    Raster(Box<dyn Error>),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io { path, source } => {
                write!(f, "Script '{}' could not be read: {}", path, source)
            }
            ScriptError::InvalidCommand { line, content } => {
                write!(f, "line {}: '{}' is an invalid command", line, content)
            }
            ScriptError::MalformedArguments { line, command, content, reason } => {
                write!(f, "line {}: malformed arguments for '{}' ('{}'): {}", line, command, content, reason)
            }
            ScriptError::TruncatedScript { line, command } => {
                write!(f, "line {}: '{}' expects an argument line but the script ended", line, command)
            }
            ScriptError::Raster(error) => {
                write!(f, "picture error: {}", error)
            }
        }
    }
}

impl Error for ScriptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScriptError::Io { source, .. } => Some(source),
            ScriptError::Raster(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}
