use serde::Serialize;
use std::fmt;

/// Position in source text, as far as the lexer recorded it
///
/// Which fields are filled depends on the attributes the lexer was asked to
/// emit, so every component is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub line: Option<usize>,      // Line number (1-based)
    pub file_pos: Option<usize>,  // Byte offset (0-based)
    pub token_pos: Option<usize>, // Token offset (0-based)
}

impl Position {
    pub fn new(line: usize, file_pos: usize, token_pos: usize) -> Self {
        Self { line: Some(line), file_pos: Some(file_pos), token_pos: Some(token_pos) }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_unknown(&self) -> bool {
        self.line.is_none() && self.file_pos.is_none() && self.token_pos.is_none()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.file_pos) {
            (Some(line), Some(offset)) => write!(f, "line {}, offset {}", line, offset),
            (Some(line), None) => write!(f, "line {}", line),
            (None, Some(offset)) => write!(f, "offset {}", offset),
            (None, None) => write!(f, "unknown position"),
        }
    }
}
