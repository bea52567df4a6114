use std::sync::Arc;

use crate::error::PlaybackError;

/// A string-command interpreter in the style of MCI: one textual command in,
/// a textual response or a numeric error out.
pub trait CommandInterpreter {
    fn issue(&self, command: &str) -> Result<String, PlaybackError>;
}

impl<T: CommandInterpreter + ?Sized> CommandInterpreter for &T {
    fn issue(&self, command: &str) -> Result<String, PlaybackError> {
        (**self).issue(command)
    }
}

impl<T: CommandInterpreter + ?Sized> CommandInterpreter for Arc<T> {
    fn issue(&self, command: &str) -> Result<String, PlaybackError> {
        (**self).issue(command)
    }
}

impl<T: CommandInterpreter + ?Sized> CommandInterpreter for Box<T> {
    fn issue(&self, command: &str) -> Result<String, PlaybackError> {
        (**self).issue(command)
    }
}

/// Join command parts with single spaces.
pub fn join_command<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|part| part.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Quote a source path containing whitespace so MCI reads it as one argument.
pub fn quote_source(source: &str) -> String {
    let already_quoted = source.len() >= 2 && source.starts_with('"') && source.ends_with('"');
    if already_quoted || !source.chars().any(char::is_whitespace) {
        source.to_string()
    } else {
        format!("\"{source}\"")
    }
}

#[cfg(test)]
pub use scripted::ScriptedInterpreter;
