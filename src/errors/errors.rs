use thiserror::Error;

use crate::Position;

/// Upper bound on the characters of remaining input kept in an error.
pub const NEAR_CONTEXT_CHARS: usize = 16;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unrecognised token near {near:?} at byte {}", .position.0)]
    UnrecognizedToken { near: String, position: Position },
}

impl LexError {
    /// Builds the error from the unconsumed input, keeping at most
    /// [`NEAR_CONTEXT_CHARS`] characters of it and nothing past the first newline.
    pub fn unrecognized_token(remainder: &str, position: Position) -> Self {
        let near = remainder
            .chars()
            .take_while(|c| *c != '\n')
            .take(NEAR_CONTEXT_CHARS)
            .collect();

        LexError::UnrecognizedToken { near, position }
    }

    pub fn get_position(&self) -> &Position {
        match self {
            LexError::UnrecognizedToken { position, .. } => position,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            LexError::UnrecognizedToken { .. } => "UnrecognizedToken",
        }
    }
}
