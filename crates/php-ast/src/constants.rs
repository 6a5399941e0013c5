//! Constants shared by the node model

/// Separates the parts of a namespaced name
pub const NAMESPACE_SEPARATOR: char = '\\';

/// [`NAMESPACE_SEPARATOR`] as a string, for joining parts
pub const NAMESPACE_SEPARATOR_STR: &str = "\\";

/// Prefix of a relative name in source code
pub const RELATIVE_PREFIX: &str = "namespace";

/// Class names that refer to the enclosing class hierarchy rather than a declared class
pub const SPECIAL_CLASS_NAMES: [&str; 3] = ["self", "parent", "static"];

// Well-known attribute keys written by the lexer

/// Comments preceding the node, in source order
pub const ATTR_COMMENTS: &str = "comments";

/// Line the node starts at (1-based)
pub const ATTR_START_LINE: &str = "startLine";

/// Line the node ends at (1-based)
pub const ATTR_END_LINE: &str = "endLine";

/// File offset the node starts at (0-based)
pub const ATTR_START_FILE_POS: &str = "startFilePos";

/// File offset the node ends at (0-based)
pub const ATTR_END_FILE_POS: &str = "endFilePos";

/// Token offset the node starts at (0-based)
pub const ATTR_START_TOKEN_POS: &str = "startTokenPos";

/// Token offset the node ends at (0-based)
pub const ATTR_END_TOKEN_POS: &str = "endTokenPos";

/// Set on inline HTML that swallowed a newline directly after a closing tag
pub const ATTR_HAS_LEADING_NEWLINE: &str = "hasLeadingNewline";
