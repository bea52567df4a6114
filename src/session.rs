use std::time::Duration;

use crate::error::PlaybackError;
use crate::interpreter::{CommandInterpreter, join_command, quote_source};

pub const DEFAULT_ALIAS: &str = "media";
pub const DEFAULT_DEVICE_TYPE: &str = "waveaudio";

/// Drives one alias-bound media session through a command interpreter.
///
/// Playback state lives entirely in the interpreter. Commands other than
/// `open` assume the alias is already open; when it isn't, the interpreter's
/// error comes back as [`PlaybackError::Command`].
pub struct MediaSession<I> {
    interpreter: I,
    alias: String,
    device_type: String,
}

impl<I: CommandInterpreter> MediaSession<I> {
    pub fn new(interpreter: I) -> Self {
        Self {
            interpreter,
            alias: DEFAULT_ALIAS.to_string(),
            device_type: DEFAULT_DEVICE_TYPE.to_string(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn with_device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = device_type.into();
        self
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Open `source`, play it, wait out its reported length, then close.
    ///
    /// The wait is fixed from the length queried at start. A seek issued while
    /// waiting does not shorten or extend it.
    pub async fn open_and_play(&self, source: &str) -> Result<(), PlaybackError> {
        log::debug!("starting {source}");
        let length = self.start(source)?;
        tokio::time::sleep(length).await;
        log::debug!("closing {}", self.alias);
        self.close()?;
        log::debug!("returning");
        Ok(())
    }

    /// Open and start playback without waiting. Returns the reported length.
    pub fn start(&self, source: &str) -> Result<Duration, PlaybackError> {
        let alias = self.alias.as_str();
        let source = quote_source(source);
        self.command(&[
            "open",
            source.as_str(),
            "type",
            self.device_type.as_str(),
            "alias",
            alias,
        ])?;
        self.command(&["play", alias])?;
        self.command(&["set", alias, "time", "format", "milliseconds"])?;
        let length = self.command(&["status", alias, "length"])?;
        let ms = length
            .trim()
            .parse::<u64>()
            .map_err(|_| PlaybackError::InvalidLength(length.clone()))?;
        Ok(duration_from_length(ms))
    }

    pub fn close(&self) -> Result<(), PlaybackError> {
        self.command(&["close", self.alias.as_str()]).map(|_| ())
    }

    pub fn pause(&self) -> Result<(), PlaybackError> {
        self.best_effort("pause")
    }

    pub fn resume(&self) -> Result<(), PlaybackError> {
        self.best_effort("resume")
    }

    /// Seek to `seconds` from the start and keep playing.
    pub fn seek(&self, seconds: u64) -> Result<(), PlaybackError> {
        let ms = seconds.saturating_mul(1000).to_string();
        let alias = self.alias.as_str();
        self.command(&["seek", alias, "to", ms.as_str()])?;
        self.command(&["play", alias])?;
        Ok(())
    }

    /// Pass `command` to the interpreter unmodified.
    pub fn send_raw(&self, command: &str) -> Result<String, PlaybackError> {
        log::debug!("raw command: {command}");
        self.interpreter.issue(command)
    }

    fn command(&self, parts: &[&str]) -> Result<String, PlaybackError> {
        self.interpreter.issue(&join_command(parts))
    }

    // A missing session is not worth failing a pause or resume over.
    fn best_effort(&self, verb: &str) -> Result<(), PlaybackError> {
        match self.command(&[verb, self.alias.as_str()]) {
            Ok(_) => Ok(()),
            Err(err) if err.is_no_session() => {
                log::warn!("cannot {verb}, is any media playing? ({err})");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

/// Convert an MCI length in milliseconds to a wait, keeping fractional seconds.
pub fn duration_from_length(ms: u64) -> Duration {
    Duration::from_secs_f64(ms as f64 / 1000.0)
}
