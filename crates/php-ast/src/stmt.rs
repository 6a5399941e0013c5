//! Statement nodes

use crate::attributes::AttributeBag;
use crate::constants::ATTR_HAS_LEADING_NEWLINE;
use crate::node::{AstNode, SubNode};

/// Text outside of `<?php ... ?>` tags
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InlineHtml {
    pub value: String,
    attributes: AttributeBag,
}

impl InlineHtml {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), attributes: AttributeBag::new() }
    }

    pub fn with_attributes(value: impl Into<String>, attributes: AttributeBag) -> Self {
        Self { value: value.into(), attributes }
    }

    /// Whether a newline right after the closing tag was dropped from `value`
    pub fn has_leading_newline(&self) -> bool {
        self.attributes.get(ATTR_HAS_LEADING_NEWLINE).and_then(|v| v.as_bool()).unwrap_or(false)
    }
}

impl AstNode for InlineHtml {
    fn node_type(&self) -> &'static str {
        "Stmt_InlineHTML"
    }

    fn sub_node_names(&self) -> &'static [&'static str] {
        &["value"]
    }

    fn sub_node(&self, name: &str) -> Option<SubNode<'_>> {
        match name {
            "value" => Some(SubNode::Str(&self.value)),
            _ => None,
        }
    }

    fn attributes(&self) -> &AttributeBag {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeBag {
        &mut self.attributes
    }
}
