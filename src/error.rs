/// Crate-wide result alias.
pub type BendayResult<T> = Result<T, BendayError>;

/// Error type for the effect pipeline and its backends.
#[derive(thiserror::Error, Debug)]
pub enum BendayError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("pipeline error: {0}")]
    Pipeline(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BendayError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn pipeline(msg: impl Into<String>) -> Self {
        Self::Pipeline(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            BendayError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            BendayError::pipeline("x")
                .to_string()
                .contains("pipeline error:")
        );
        assert!(
            BendayError::backend("x")
                .to_string()
                .contains("backend error:")
        );
        assert!(
            BendayError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = BendayError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
