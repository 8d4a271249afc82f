/// Convenience result alias used across the crate.
pub type PageResult<T> = Result<T, PageError>;

/// Page-level failures.
///
/// Individual content units never produce a `PageError`; their failures are captured as
/// [`crate::RenderError`] and rendered in place.
#[derive(thiserror::Error, Debug)]
pub enum PageError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("payload error: {0}")]
    Payload(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("fetch error: {0}")]
    Fetch(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PageError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn payload(msg: impl Into<String>) -> Self {
        Self::Payload(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
