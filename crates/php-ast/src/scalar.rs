//! Scalar nodes

use crate::attributes::AttributeBag;
use crate::node::{AstNode, Node, SubNode};

/// String with embedded variables: `"Hello $name"`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Encapsed {
    /// String parts interleaved with embedded expressions
    pub parts: Vec<Node>,
    attributes: AttributeBag,
}

impl Encapsed {
    pub fn new(parts: Vec<Node>) -> Self {
        Self { parts, attributes: AttributeBag::new() }
    }

    pub fn with_attributes(parts: Vec<Node>, attributes: AttributeBag) -> Self {
        Self { parts, attributes }
    }
}

impl AstNode for Encapsed {
    fn node_type(&self) -> &'static str {
        "Scalar_Encapsed"
    }

    fn sub_node_names(&self) -> &'static [&'static str] {
        &["parts"]
    }

    fn sub_node(&self, name: &str) -> Option<SubNode<'_>> {
        match name {
            "parts" => Some(SubNode::Nodes(&self.parts)),
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

/// Literal text between the embedded expressions of an [`Encapsed`] string
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EncapsedStringPart {
    pub value: String,
    attributes: AttributeBag,
}

impl EncapsedStringPart {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), attributes: AttributeBag::new() }
    }

    pub fn with_attributes(value: impl Into<String>, attributes: AttributeBag) -> Self {
        Self { value: value.into(), attributes }
    }
}

impl AstNode for EncapsedStringPart {
    fn node_type(&self) -> &'static str {
        "Scalar_EncapsedStringPart"
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
