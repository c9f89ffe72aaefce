// src/exit.rs
//! Standardized process exit codes for `landsphere`.
//!
//! Provides a stable contract for scripts calling the engine once per query.

use std::process::Termination;

use crate::error::LandsphereError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LandsphereExit {
    /// Query answered. Empty results ("no data") are still a success.
    Success = 0,
    /// Generic error (e.g. missing dataset, unreadable file).
    Error = 1,
    /// Input validation failed (malformed dataset row, bad config file).
    InvalidInput = 2,
}

impl LandsphereExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed command.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<LandsphereError>() {
            Some(e) if e.is_invalid_input() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for LandsphereExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
