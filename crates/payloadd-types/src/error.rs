use thiserror::Error;

/// Errors a payload may raise while running.
///
/// The registry converts these into a failed `PayloadResult` whose output is
/// the error's display string, so the message here is what the client ends
/// up seeing.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Free-form failure; displays the message verbatim.
    #[error("{0}")]
    Failed(String),
}

impl PayloadError {
    /// Shorthand for [`PayloadError::Failed`].
    pub fn failed(message: impl Into<String>) -> Self {
        PayloadError::Failed(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_displays_verbatim() {
        let err = PayloadError::failed("boom");
        assert_eq!(err.to_string(), "boom");
        assert!(matches!(err, PayloadError::Failed(ref message) if message == "boom"));
    }
}
