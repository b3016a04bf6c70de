/// Convenience result type used throughout framebake.
pub type BakeResult<T> = Result<T, BakeError>;

/// Errors produced by the build-and-bake pipeline.
#[derive(thiserror::Error, Debug)]
pub enum BakeError {
    /// Invalid user input or configuration (arguments, profiles, frame sizes).
    #[error("validation error: {0}")]
    Validation(String),

    /// No usable toolchain profile for the host.
    #[error("platform error: {0}")]
    Platform(String),

    /// The compiler ran but did not succeed.
    #[error("compile error: compiler exited with {status}")]
    Compile {
        /// Human-readable exit status (`exit status: 1`, `termination by signal`).
        status: String,
    },

    /// The GIF could not be produced.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error (IO, codec, spawn) with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BakeError {
    /// Build a [`BakeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BakeError::Platform`].
    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform(msg.into())
    }

    /// Build a [`BakeError::Compile`] from a rendered exit status.
    pub fn compile(status: impl Into<String>) -> Self {
        Self::Compile {
            status: status.into(),
        }
    }

    /// Build a [`BakeError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
