pub mod error;
pub mod interpreter;
#[cfg(windows)]
pub mod mci;
pub mod session;

pub use error::PlaybackError;
pub use interpreter::CommandInterpreter;
pub use session::MediaSession;
