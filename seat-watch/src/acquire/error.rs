//! Fatal acquisition errors.

/// Process exit code for fatal authentication failures.
pub const EXIT_AUTH_FAILURE: u8 = 1;

/// Conditions that end a run without a reservation.
#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    /// The session expired more often than re-logins are allowed
    #[error("re-login failed too many times ({attempts} attempts), aborting")]
    ReloginExhausted { attempts: u32 },

    /// A re-login was attempted and did not succeed
    #[error("re-login failed, aborting: {reason}")]
    LoginFailed { reason: String },
}

impl AcquireError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AcquireError::ReloginExhausted { .. } | AcquireError::LoginFailed { .. } => {
                EXIT_AUTH_FAILURE
            }
        }
    }
}
