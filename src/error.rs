use thiserror::Error;

/// Raised by `assert_value` when a value does not satisfy its spec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssertError {
    /// One rendered diagnostic per mismatch, displayed newline-joined.
    #[error("{}", .messages.join("\n"))]
    Mismatch { messages: Vec<String> },
}

impl AssertError {
    pub fn messages(&self) -> &[String] {
        match self {
            AssertError::Mismatch { messages } => messages,
        }
    }
}
