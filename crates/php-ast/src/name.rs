//! Namespaced names and their algebra
//!
//! A [`Name`] holds a single string of one or more parts joined by `\`.
//! Whether the name was written fully qualified (`\Foo\Bar`) or relative
//! (`namespace\Foo\Bar`) is carried by its [`NameKind`], never by the
//! string itself: `Name::fully_qualified("Foo\\Bar")` stores `Foo\Bar`.

use crate::attributes::{AttrValue, AttributeBag};
use crate::constants::{
    NAMESPACE_SEPARATOR, NAMESPACE_SEPARATOR_STR, RELATIVE_PREFIX, SPECIAL_CLASS_NAMES,
};
use crate::error::{NodeError, Result, SliceBound};
use crate::node::{AstNode, SubNode};
use std::fmt;

/// How a name resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameKind {
    /// Resolved against the current namespace and imports
    #[default]
    Plain,
    /// Written with a leading separator
    FullyQualified,
    /// Written with the `namespace\` prefix
    Relative,
}

impl NameKind {
    pub fn node_type(self) -> &'static str {
        match self {
            NameKind::Plain => "Name",
            NameKind::FullyQualified => "Name_FullyQualified",
            NameKind::Relative => "Name_Relative",
        }
    }

    /// Concatenates two names into a name of this kind.
    ///
    /// The kinds of the operands are ignored: concatenating a relative name
    /// through `NameKind::FullyQualified` yields a fully qualified name.
    /// A missing side is the identity, so `concat(None, Some(b))` is `b`
    /// re-created with this kind and `concat(None, None)` is `None`.
    pub fn concat(
        self,
        name1: Option<NameInput<'_>>,
        name2: Option<NameInput<'_>>,
        attributes: AttributeBag,
    ) -> Result<Option<Name>> {
        let joined = match (name1, name2) {
            (None, None) => return Ok(None),
            (None, Some(name)) | (Some(name), None) => prepare_name(name)?,
            (Some(first), Some(second)) => {
                let mut joined = prepare_name(first)?;
                joined.push(NAMESPACE_SEPARATOR);
                joined.push_str(&prepare_name(second)?);
                joined
            }
        };
        Ok(Some(Name { name: joined, kind: self, attributes }))
    }
}

/// The shapes a name can be built from
#[derive(Debug, Clone, PartialEq)]
pub enum NameInput<'a> {
    Str(String),
    Parts(Vec<String>),
    Name(&'a Name),
}

impl From<&str> for NameInput<'_> {
    fn from(s: &str) -> Self {
        NameInput::Str(s.to_string())
    }
}

impl From<String> for NameInput<'_> {
    fn from(s: String) -> Self {
        NameInput::Str(s)
    }
}

impl From<Vec<String>> for NameInput<'_> {
    fn from(parts: Vec<String>) -> Self {
        NameInput::Parts(parts)
    }
}

impl From<Vec<&str>> for NameInput<'_> {
    fn from(parts: Vec<&str>) -> Self {
        NameInput::Parts(parts.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for NameInput<'_> {
    fn from(parts: &[&str]) -> Self {
        NameInput::Parts(parts.iter().map(|part| part.to_string()).collect())
    }
}

impl<'a> From<&'a Name> for NameInput<'a> {
    fn from(name: &'a Name) -> Self {
        NameInput::Name(name)
    }
}

/// Attribute values produced by passes that store names loosely
impl<'a> TryFrom<&'a AttrValue> for NameInput<'a> {
    type Error = NodeError;

    fn try_from(value: &'a AttrValue) -> Result<Self> {
        match value {
            AttrValue::String(s) => Ok(NameInput::Str(s.clone())),
            AttrValue::Name(name) => Ok(NameInput::Name(name)),
            AttrValue::List(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(NameInput::Parts)
                .ok_or_else(unsupported_input),
            _ => Err(unsupported_input()),
        }
    }
}

fn unsupported_input() -> NodeError {
    log::debug!("rejecting name input that is neither a string, a part list nor a name");
    NodeError::InvalidArgument("Expected string, part list or Name node".to_string())
}

/// Normalizes any accepted name shape to its string form
pub fn prepare_name(name: NameInput<'_>) -> Result<String> {
    match name {
        NameInput::Str(s) => Ok(s),
        NameInput::Name(name) => Ok(name.name.clone()),
        NameInput::Parts(parts) => {
            if parts.is_empty() {
                log::debug!("rejecting empty name part list");
                return Err(NodeError::InvalidArgument(
                    "Name part array cannot be empty".to_string(),
                ));
            }
            Ok(parts.join(NAMESPACE_SEPARATOR_STR))
        }
    }
}

/// A possibly namespaced name
#[derive(Debug, Clone, PartialEq)]
pub struct Name {
    pub name: String,
    pub kind: NameKind,
    attributes: AttributeBag,
}

impl Name {
    pub fn new<'a>(name: impl Into<NameInput<'a>>) -> Result<Self> {
        Self::with_kind(NameKind::Plain, name, AttributeBag::new())
    }

    pub fn fully_qualified<'a>(name: impl Into<NameInput<'a>>) -> Result<Self> {
        Self::with_kind(NameKind::FullyQualified, name, AttributeBag::new())
    }

    pub fn relative<'a>(name: impl Into<NameInput<'a>>) -> Result<Self> {
        Self::with_kind(NameKind::Relative, name, AttributeBag::new())
    }

    pub fn with_kind<'a>(
        kind: NameKind,
        name: impl Into<NameInput<'a>>,
        attributes: AttributeBag,
    ) -> Result<Self> {
        Ok(Self { name: prepare_name(name.into())?, kind, attributes })
    }

    /// Plain-kind concatenation; see [`NameKind::concat`]
    pub fn concat(
        name1: Option<NameInput<'_>>,
        name2: Option<NameInput<'_>>,
        attributes: AttributeBag,
    ) -> Result<Option<Name>> {
        NameKind::Plain.concat(name1, name2, attributes)
    }

    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.name.split(NAMESPACE_SEPARATOR)
    }

    /// Everything before the first separator
    pub fn first(&self) -> &str {
        match self.name.find(NAMESPACE_SEPARATOR) {
            Some(pos) => &self.name[..pos],
            None => &self.name,
        }
    }

    /// Everything after the last separator
    pub fn last(&self) -> &str {
        match self.name.rfind(NAMESPACE_SEPARATOR) {
            Some(pos) => &self.name[pos + NAMESPACE_SEPARATOR.len_utf8()..],
            None => &self.name,
        }
    }

    pub fn is_unqualified(&self) -> bool {
        !self.name.contains(NAMESPACE_SEPARATOR)
    }

    /// True iff the name contains a separator, whatever its kind
    pub fn is_qualified(&self) -> bool {
        self.name.contains(NAMESPACE_SEPARATOR)
    }

    pub fn is_fully_qualified(&self) -> bool {
        self.kind == NameKind::FullyQualified
    }

    pub fn is_relative(&self) -> bool {
        self.kind == NameKind::Relative
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn to_lower_string(&self) -> String {
        self.name.to_lowercase()
    }

    /// `self`, `parent` or `static`, in any case
    pub fn is_special_class_name(&self) -> bool {
        self.is_unqualified()
            && SPECIAL_CLASS_NAMES.iter().any(|special| self.name.eq_ignore_ascii_case(special))
    }

    /// The name as it would be written in source
    pub fn to_code_string(&self) -> String {
        match self.kind {
            NameKind::Plain => self.name.clone(),
            NameKind::FullyQualified => format!("{}{}", NAMESPACE_SEPARATOR, self.name),
            NameKind::Relative => {
                format!("{}{}{}", RELATIVE_PREFIX, NAMESPACE_SEPARATOR, self.name)
            }
        }
    }

    /// Gets a slice of the name's parts, with `array_slice` semantics.
    ///
    /// Negative `offset` and `length` count from the end. An empty slice is
    /// `Ok(None)`, which [`NameKind::concat`] treats as the missing side.
    /// The result keeps this name's kind and a copy of its attributes.
    pub fn slice(&self, offset: isize, length: Option<isize>) -> Result<Option<Name>> {
        if offset == 1 && length.is_none() {
            return Ok(self.name.find(NAMESPACE_SEPARATOR).map(|pos| {
                self.derive(self.name[pos + NAMESPACE_SEPARATOR.len_utf8()..].to_string())
            }));
        }

        let parts: Vec<&str> = self.parts().collect();
        let num_parts = parts.len() as isize;

        let real_offset = if offset < 0 { offset + num_parts } else { offset };
        if real_offset < 0 || real_offset > num_parts {
            log::debug!("slice offset {} out of bounds for `{}`", offset, self.name);
            return Err(NodeError::OutOfBounds { bound: SliceBound::Offset, value: offset });
        }

        let real_length = match length {
            None => num_parts - real_offset,
            Some(length) => {
                let real_length = if length < 0 { length + num_parts - real_offset } else { length };
                if real_length < 0 || real_length > num_parts {
                    log::debug!("slice length {} out of bounds for `{}`", length, self.name);
                    return Err(NodeError::OutOfBounds { bound: SliceBound::Length, value: length });
                }
                real_length
            }
        };

        // A length running past the end is clamped, as array_slice does
        let start = real_offset as usize;
        let end = (real_offset + real_length).min(num_parts) as usize;
        if start >= end {
            return Ok(None);
        }

        Ok(Some(self.derive(parts[start..end].join(NAMESPACE_SEPARATOR_STR))))
    }

    fn derive(&self, name: String) -> Name {
        Name { name, kind: self.kind, attributes: self.attributes.clone() }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AstNode for Name {
    fn node_type(&self) -> &'static str {
        self.kind.node_type()
    }

    fn sub_node_names(&self) -> &'static [&'static str] {
        &["name"]
    }

    fn sub_node(&self, name: &str) -> Option<SubNode<'_>> {
        match name {
            "name" => Some(SubNode::Str(&self.name)),
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

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Name {
        Name::new(s).unwrap()
    }

    #[test]
    fn test_fast_path_matches_general_slice() {
        for s in ["A", "A\\B", "A\\B\\C"] {
            let n = name(s);
            let rest = n.parts().count() as isize - 1;
            assert_eq!(n.slice(1, None).unwrap(), n.slice(1, Some(rest)).unwrap());
        }
    }

    #[test]
    fn test_slice_clamps_long_length() {
        let sliced = name("A\\B\\C").slice(1, Some(3)).unwrap().unwrap();
        assert_eq!(sliced.name, "B\\C");
    }

    #[test]
    fn test_negative_length() {
        let sliced = name("A\\B\\C\\D").slice(1, Some(-1)).unwrap().unwrap();
        assert_eq!(sliced.name, "B\\C");
    }
}
