pub type AdsmithResult<T> = Result<T, AdsmithError>;

#[derive(thiserror::Error, Debug)]
pub enum AdsmithError {
    /// User-correctable input problem, reported before any rendering starts.
    #[error("validation error: {0}")]
    Validation(String),

    /// A single (image, platform, variant) entry failed; the batch continues.
    #[error("render error: {0}")]
    Render(String),

    /// The archive could not be built; nothing is offered for download.
    #[error("archive error: {0} (please retry)")]
    Archive(String),

    #[error("a batch generation is already running")]
    Busy,

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AdsmithError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn archive(msg: impl Into<String>) -> Self {
        Self::Archive(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Fatal errors abort a batch; everything else is either reported up front or skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Archive(_) | Self::Other(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
