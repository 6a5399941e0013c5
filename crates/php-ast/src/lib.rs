pub mod attributes;
pub mod comment;
pub mod constants;
pub mod dump;
pub mod error;
pub mod name;
pub mod node;
pub mod scalar;
pub mod span;
pub mod stmt;
pub mod visit;

// Re-export commonly used items
pub use attributes::{AttrValue, AttributeBag};
pub use comment::{Comment, CommentKind};
pub use error::{NodeError, Result, SliceBound};
pub use name::{prepare_name, Name, NameInput, NameKind};
pub use node::{AstNode, Node, SubNode};
pub use scalar::{Encapsed, EncapsedStringPart};
pub use span::Position;
pub use stmt::InlineHtml;
pub use visit::{walk, Visitor};
