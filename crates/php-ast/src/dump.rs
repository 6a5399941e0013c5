//! JSON representation of node trees
//!
//! Each node becomes an object with its `nodeType`, one entry per sub node
//! and, when non-empty, its `attributes`.

use crate::error::Result;
use crate::name::Name;
use crate::node::{AstNode, Node};
use crate::scalar::{Encapsed, EncapsedStringPart};
use crate::stmt::InlineHtml;
use serde::ser::{Serialize, SerializeMap, Serializer};

fn serialize_node<N, S>(node: &N, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    N: AstNode + ?Sized,
    S: Serializer,
{
    let mut map = serializer.serialize_map(None)?;
    map.serialize_entry("nodeType", node.node_type())?;
    for field in node.sub_node_names() {
        if let Some(sub_node) = node.sub_node(field) {
            map.serialize_entry(field, &sub_node)?;
        }
    }
    if !node.attributes().is_empty() {
        map.serialize_entry("attributes", node.attributes())?;
    }
    map.end()
}

macro_rules! impl_node_serialize {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                    serialize_node(self, serializer)
                }
            }
        )*
    };
}

impl_node_serialize!(Node, Name, Encapsed, EncapsedStringPart, InlineHtml);

pub fn to_json<N: Serialize + ?Sized>(node: &N) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(node)?)
}

pub fn to_json_string_pretty<N: Serialize + ?Sized>(node: &N) -> Result<String> {
    Ok(serde_json::to_string_pretty(node)?)
}
