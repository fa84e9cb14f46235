use serde::{Deserialize, Serialize};

/// A single normalized term produced by tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Lowercased term text.
    pub text: String,
    /// Ordinal position in the token stream.
    pub position: u32,
    /// Byte offset of the term in the original text.
    pub offset: usize,
}

impl Token {
    pub fn new(text: String, position: u32, offset: usize) -> Self {
        Token {
            text,
            position,
            offset,
        }
    }
}
