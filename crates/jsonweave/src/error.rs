use thiserror::Error;

/// Error raised when the accumulated fragment buffer is not decodable JSON.
///
/// The decoder tolerates a single truncated trailing string literal, so this
/// only fires for structurally invalid input. The failing fragment stays in
/// the parser's buffer; there is no local recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at byte offset {offset}")]
pub struct DecodeError {
    message: String,
    offset: usize,
}

impl DecodeError {
    /// Byte offset into the accumulated buffer where decoding failed.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl From<jiter::JsonError> for DecodeError {
    fn from(err: jiter::JsonError) -> Self {
        Self {
            message: err.error_type.to_string(),
            offset: err.index,
        }
    }
}
