use thiserror::Error as ThisError;

/// A recognized attribute carries a value of the wrong kind.
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum AttributeError {
    #[error("attribute '{key}' should be text, found {found}")]
    ExpectedText { key: String, found: &'static str },

    #[error("attribute '{key}' should be numeric, found {found}")]
    ExpectedNumber { key: String, found: &'static str },
}
