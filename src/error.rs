use thiserror::Error;

/// MCI error code reported when a command targets an alias with no open device.
pub const NO_SESSION_CODE: u32 = 263;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The interpreter returned a non-zero code. `message` is its own text for that code.
    #[error("Error Code: {code}, {message}")]
    Command { code: u32, message: String },
    #[error("length query returned a non-numeric response: {0:?}")]
    InvalidLength(String),
}

impl PlaybackError {
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Command { code, .. } => Some(*code),
            Self::InvalidLength(_) => None,
        }
    }

    pub fn is_no_session(&self) -> bool {
        self.code() == Some(NO_SESSION_CODE)
    }
}
