// SPDX-FileCopyrightText: 2025 The prjava authors
//
// SPDX-License-Identifier: Apache-2.0

//! Generic, untyped syntax trees,
//! as handed over by an external Java parser.
//!
//! A [`Node`] is a tag name plus an ordered list of children.
//! Each child is either a nested node, a literal token,
//! or an empty slot.
//! Nodes are never mutated after construction.

use std::fmt::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Node(Node),
    Token(String),
    Absent,
}

impl Child {
    #[must_use]
    pub const fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Token(_) | Self::Absent => None,
        }
    }

    #[must_use]
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Self::Token(token) => Some(token),
            Self::Node(_) | Self::Absent => None,
        }
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for Child {
    fn from(token: &str) -> Self {
        Self::Token(token.to_owned())
    }
}

impl From<String> for Child {
    fn from(token: String) -> Self {
        Self::Token(token)
    }
}

impl<T: Into<Self>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    children: Vec<Child>,
}

impl Node {
    pub fn new(name: impl Into<String>, children: Vec<Child>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// A node without any children.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Child> {
        self.children.get(idx)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Writes `value` as a double-quoted token,
/// using Java escapes.
pub fn write_quoted<W: Write>(value: &str, f: &mut W) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '\u{08}' => f.write_str("\\b"),
            '\t' => f.write_str("\\t"),
            '\n' => f.write_str("\\n"),
            '\u{0C}' => f.write_str("\\f"),
            '\r' => f.write_str("\\r"),
            '"' => f.write_str("\\\""),
            '\\' => f.write_str("\\\\"),
            '\0'..='\u{1F}' | '\u{7F}' => write!(f, "\\u{:04x}", u32::from(c)),
            _ => f.write_char(c),
        }?;
    }
    f.write_char('"')
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => node.fmt(f),
            Self::Token(token) => write_quoted(token, f),
            Self::Absent => f.write_str("null"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        f.write_char('(')?;
        let mut first = true;
        for child in &self.children {
            if first {
                first = false;
            } else {
                f.write_str(", ")?;
            }
            child.fmt(f)?;
        }
        f.write_char(')')
    }
}

/// Builds a [`Node`] from a tag and a list of children,
/// each of which converts into a [`Child`].
///
/// ```
/// use prjava::node;
/// let id = node!("PrimaryIdentifier", "x");
/// assert_eq!(id.to_string(), "PrimaryIdentifier(\"x\")");
/// ```
#[macro_export]
macro_rules! node {
    ($name:expr) => {
        $crate::tree::Node::leaf($name)
    };
    ($name:expr, $($child:expr),+ $(,)?) => {
        $crate::tree::Node::new(
            $name,
            vec![$($crate::tree::Child::from($child)),+],
        )
    };
}
