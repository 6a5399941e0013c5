//! The generic node contract
//!
//! Tree walkers never need to know the concrete variant: [`AstNode::node_type`]
//! names it, [`AstNode::sub_node_names`] lists its structural fields in
//! declaration order and [`AstNode::sub_node`] reads one of them.

use crate::attributes::{AttrValue, AttributeBag};
use crate::comment::{Comment, CommentKind};
use crate::constants::*;
use crate::name::Name;
use crate::scalar::{Encapsed, EncapsedStringPart};
use crate::span::Position;
use crate::stmt::InlineHtml;
use serde::Serialize;

/// Read-only view of one structural field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SubNode<'a> {
    Node(&'a Node),
    Nodes(&'a [Node]),
    Str(&'a str),
}

impl<'a> SubNode<'a> {
    /// Nodes held by this field, empty for scalar payload
    pub fn nodes(self) -> Vec<&'a Node> {
        match self {
            SubNode::Node(node) => vec![node],
            SubNode::Nodes(nodes) => nodes.iter().collect(),
            SubNode::Str(_) => Vec::new(),
        }
    }

    pub fn as_str(self) -> Option<&'a str> {
        match self {
            SubNode::Str(s) => Some(s),
            _ => None,
        }
    }
}

pub trait AstNode {
    /// Type tag, stable per variant (e.g. `Name_FullyQualified`)
    fn node_type(&self) -> &'static str;

    /// Structural fields in declaration order; the same for every instance of a variant
    fn sub_node_names(&self) -> &'static [&'static str];

    /// Reads the structural field `name`
    fn sub_node(&self, name: &str) -> Option<SubNode<'_>>;

    fn attributes(&self) -> &AttributeBag;

    fn attributes_mut(&mut self) -> &mut AttributeBag;

    // Attribute passthrough

    fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttrValue>)
    where
        Self: Sized,
    {
        self.attributes_mut().set(key, value);
    }

    fn has_attribute(&self, key: &str) -> bool {
        self.attributes().has(key)
    }

    /// Present and not Null
    fn is_attribute_set(&self, key: &str) -> bool {
        self.attributes().is_set(key)
    }

    fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes().get(key)
    }

    fn attribute_or(&self, key: &str, default: impl Into<AttrValue>) -> AttrValue
    where
        Self: Sized,
    {
        self.attributes().get_or(key, default)
    }

    /// Live reference into the attribute bag
    fn attribute_mut(&mut self, key: &str) -> Option<&mut AttrValue> {
        self.attributes_mut().get_mut(key)
    }

    /// Live reference into the attribute bag, inserting `default` when absent
    fn attribute_entry(&mut self, key: impl Into<String>, default: impl Into<AttrValue>) -> &mut AttrValue
    where
        Self: Sized,
    {
        self.attributes_mut().entry_or(key, default)
    }

    fn remove_attribute(&mut self, key: &str) -> Option<AttrValue> {
        self.attributes_mut().remove(key)
    }

    /// Replaces the whole bag
    fn set_attributes(&mut self, attributes: AttributeBag) {
        *self.attributes_mut() = attributes;
    }

    fn attribute_map(&self) -> &AttributeBag {
        self.attributes()
    }

    // Positions

    fn line(&self) -> Option<usize> {
        self.start_line()
    }

    fn set_line(&mut self, line: usize) {
        self.attributes_mut().set(ATTR_START_LINE, line);
    }

    fn start_line(&self) -> Option<usize> {
        position_attribute(self.attributes(), ATTR_START_LINE)
    }

    fn end_line(&self) -> Option<usize> {
        position_attribute(self.attributes(), ATTR_END_LINE)
    }

    fn start_file_pos(&self) -> Option<usize> {
        position_attribute(self.attributes(), ATTR_START_FILE_POS)
    }

    fn end_file_pos(&self) -> Option<usize> {
        position_attribute(self.attributes(), ATTR_END_FILE_POS)
    }

    fn start_token_pos(&self) -> Option<usize> {
        position_attribute(self.attributes(), ATTR_START_TOKEN_POS)
    }

    fn end_token_pos(&self) -> Option<usize> {
        position_attribute(self.attributes(), ATTR_END_TOKEN_POS)
    }

    fn start_position(&self) -> Position {
        Position {
            line: self.start_line(),
            file_pos: self.start_file_pos(),
            token_pos: self.start_token_pos(),
        }
    }

    fn end_position(&self) -> Position {
        Position {
            line: self.end_line(),
            file_pos: self.end_file_pos(),
            token_pos: self.end_token_pos(),
        }
    }

    // Comments

    /// Comments preceding the node, empty when none were recorded
    fn comments(&self) -> &[Comment] {
        self.attributes().get(ATTR_COMMENTS).and_then(AttrValue::as_comments).unwrap_or(&[])
    }

    /// The last preceding comment, if it is a doc comment
    fn doc_comment(&self) -> Option<&Comment> {
        self.comments().last().filter(|comment| comment.is_doc())
    }

    /// Replaces the trailing doc comment, or appends one.
    ///
    /// The comment is stored with kind [`CommentKind::Doc`] whatever kind it
    /// was passed with.
    fn set_doc_comment(&mut self, mut doc_comment: Comment) {
        doc_comment.kind = CommentKind::Doc;

        let slot = self.attributes_mut().entry_or(ATTR_COMMENTS, Vec::<Comment>::new());
        if slot.as_comments().is_none() {
            log::trace!("overwriting non-comment `{}` attribute", ATTR_COMMENTS);
            *slot = AttrValue::Comments(Vec::new());
        }

        if let Some(comments) = slot.as_comments_mut() {
            if comments.last().is_some_and(Comment::is_doc) {
                log::trace!("replacing trailing doc comment");
                comments.pop();
            } else {
                log::trace!("appending doc comment after {} comment(s)", comments.len());
            }
            comments.push(doc_comment);
        }
    }
}

fn position_attribute(attributes: &AttributeBag, key: &str) -> Option<usize> {
    attributes.get(key).and_then(AttrValue::as_usize)
}

/// Any node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Name(Name),
    Encapsed(Encapsed),
    EncapsedStringPart(EncapsedStringPart),
    InlineHtml(InlineHtml),
}

impl Node {
    /// Child nodes, in `sub_node_names` order
    pub fn children(&self) -> Vec<&Node> {
        self.sub_node_names()
            .iter()
            .filter_map(|field| self.sub_node(field))
            .flat_map(SubNode::nodes)
            .collect()
    }

    pub fn as_name(&self) -> Option<&Name> {
        match self {
            Node::Name(name) => Some(name),
            _ => None,
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $node:ident => $body:expr) => {
        match $self {
            Node::Name($node) => $body,
            Node::Encapsed($node) => $body,
            Node::EncapsedStringPart($node) => $body,
            Node::InlineHtml($node) => $body,
        }
    };
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        dispatch!(self, node => node.node_type())
    }

    fn sub_node_names(&self) -> &'static [&'static str] {
        dispatch!(self, node => node.sub_node_names())
    }

    fn sub_node(&self, name: &str) -> Option<SubNode<'_>> {
        dispatch!(self, node => node.sub_node(name))
    }

    fn attributes(&self) -> &AttributeBag {
        dispatch!(self, node => node.attributes())
    }

    fn attributes_mut(&mut self) -> &mut AttributeBag {
        dispatch!(self, node => node.attributes_mut())
    }
}

impl From<Name> for Node {
    fn from(name: Name) -> Self {
        Node::Name(name)
    }
}

impl From<Encapsed> for Node {
    fn from(encapsed: Encapsed) -> Self {
        Node::Encapsed(encapsed)
    }
}

impl From<EncapsedStringPart> for Node {
    fn from(part: EncapsedStringPart) -> Self {
        Node::EncapsedStringPart(part)
    }
}

impl From<InlineHtml> for Node {
    fn from(html: InlineHtml) -> Self {
        Node::InlineHtml(html)
    }
}

// `node["startLine"]` reads and writes the node's attribute bag
macro_rules! impl_attribute_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl std::ops::Index<&str> for $ty {
                type Output = AttrValue;

                fn index(&self, key: &str) -> &AttrValue {
                    &self.attributes()[key]
                }
            }

            impl std::ops::IndexMut<&str> for $ty {
                fn index_mut(&mut self, key: &str) -> &mut AttrValue {
                    &mut self.attributes_mut()[key]
                }
            }
        )*
    };
}

impl_attribute_index!(Node, Name, Encapsed, EncapsedStringPart, InlineHtml);
