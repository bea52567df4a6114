//! `winmm` backed interpreter. Windows only.

use windows::Win32::Foundation::HWND;
use windows::Win32::Media::Multimedia::{mciGetErrorStringW, mciSendStringW};
use windows::core::PCWSTR;

use crate::error::PlaybackError;
use crate::interpreter::CommandInterpreter;

pub const DEFAULT_BUFFER_LEN: usize = 600;

pub struct MciInterpreter {
    buffer_len: usize,
}

impl Default for MciInterpreter {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_LEN)
    }
}

impl MciInterpreter {
    pub fn new(buffer_len: usize) -> Self {
        Self {
            buffer_len: buffer_len.max(2),
        }
    }

    fn error_message(&self, code: u32) -> String {
        let mut buf = vec![0u16; self.buffer_len];
        let capacity = self.buffer_len - 1;
        // SAFETY: the slice is valid for `capacity` wide chars and stays alive for the call.
        let found = unsafe { mciGetErrorStringW(code, &mut buf[..capacity]) };
        if found.as_bool() {
            from_wide(&buf)
        } else {
            format!("unknown MCI error {code}")
        }
    }
}

impl CommandInterpreter for MciInterpreter {
    fn issue(&self, command: &str) -> Result<String, PlaybackError> {
        let wide: Vec<u16> = command.encode_utf16().chain(std::iter::once(0)).collect();
        let mut buf = vec![0u16; self.buffer_len];
        let capacity = self.buffer_len - 1;

        // SAFETY: `wide` is NUL-terminated and both buffers outlive the call.
        let code = unsafe {
            mciSendStringW(
                PCWSTR(wide.as_ptr()),
                Some(&mut buf[..capacity]),
                HWND::default(),
            )
        };

        if code != 0 {
            return Err(PlaybackError::Command {
                code,
                message: self.error_message(code),
            });
        }
        Ok(from_wide(&buf))
    }
}

fn from_wide(buf: &[u16]) -> String {
    let end = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..end])
}
