/// Convenience result type used across crossrot.
pub type CrossRotResult<T> = Result<T, CrossRotError>;

/// Top-level error taxonomy used at the crate boundaries.
///
/// The animation core itself has no error surface: idle updates, repeated starts and traversal
/// past the chain ends are all defined as no-ops.
#[derive(thiserror::Error, Debug)]
pub enum CrossRotError {
    /// Invalid user-provided configuration or sizes.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while handing frames to a sink (PNG files).
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CrossRotError {
    /// Build a [`CrossRotError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CrossRotError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CrossRotError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`CrossRotError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
