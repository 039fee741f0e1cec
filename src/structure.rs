//! # Structure Export
//!
//! A backend-independent mirror of a component tree, used to inspect and
//! snapshot layouts without touching a provider.
//!
//! ```
//! use tabula::components::{Barcode, Col, Component, Row};
//!
//! let row = Row::new(10.0).add(Col::new(6).add(Barcode::new("12345")));
//! let node = row.structure();
//!
//! assert_eq!(node.kind, "row");
//! assert_eq!(node.children[0].kind, "col");
//! assert_eq!(node.children[0].children[0].value, "12345");
//! ```
//!
//! Nodes are rebuilt on every `structure()` call and own nothing from the
//! component they describe.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::Result;

/// Auxiliary properties of a structure node, keyed by name.
pub type Details = BTreeMap<String, Value>;

/// One node of an exported structure tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Component variant tag ("row", "col", "barcode", ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Primary display value: size, height or content.
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: Details,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            details: Details::new(),
            children: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: Details) -> Self {
        self.details = details;
        self
    }

    /// Append a child node.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Total node count, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Pre-order iterator over this node and its descendants.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Pretty JSON rendering, for snapshot tests and debugging.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
