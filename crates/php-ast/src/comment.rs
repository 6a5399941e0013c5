//! Source comments attached to nodes

use crate::span::Position;
use serde::Serialize;
use std::fmt;

/// Comment kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    /// `// ...`, `# ...` or `/* ... */`
    Plain,
    /// `/** ... */`
    Doc,
}

/// A comment as the lexer saw it, including its delimiters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub kind: CommentKind,
    pub text: String,
    pub line: Option<usize>,
    pub file_pos: Option<usize>,
    pub token_pos: Option<usize>,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_kind(CommentKind::Plain, text)
    }

    pub fn doc(text: impl Into<String>) -> Self {
        Self::with_kind(CommentKind::Doc, text)
    }

    pub fn with_kind(kind: CommentKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into(), line: None, file_pos: None, token_pos: None }
    }

    /// Sets the line the comment starts at
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets all start coordinates at once
    pub fn at(mut self, position: Position) -> Self {
        self.line = position.line;
        self.file_pos = position.file_pos;
        self.token_pos = position.token_pos;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_doc(&self) -> bool {
        self.kind == CommentKind::Doc
    }

    pub fn start_position(&self) -> Position {
        Position { line: self.line, file_pos: self.file_pos, token_pos: self.token_pos }
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
