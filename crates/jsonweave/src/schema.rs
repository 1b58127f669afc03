//! Static field-schema descriptors.
//!
//! A tree's shape is declared once, up front, as plain data: an ordered list
//! of `(name, kind)` pairs per struct, with kinds nesting arbitrarily. No
//! runtime type introspection is involved — a descriptor resolves into
//! concrete nodes exactly once, when the tree is built.

use crate::{
    atomic::AtomicValue, collection::CollectionStream, node::StreamNode, scalar::ScalarStream,
    structure::StructStream,
};

/// The kind of node a schema position resolves to.
///
/// # Examples
///
/// ```
/// use jsonweave::{NodeSchema, StructSchema};
///
/// let schema = StructSchema::new()
///     .text("title")
///     .list("tags", NodeSchema::Scalar)
///     .nested("meta", StructSchema::new().text("author").atom("year"));
/// ```
#[derive(Clone, Debug)]
pub enum NodeSchema {
    /// A growing text leaf ([`ScalarStream`]).
    Scalar,
    /// A wholesale-replaced leaf ([`AtomicValue`]).
    Atomic,
    /// An append-only sequence of the given item kind ([`CollectionStream`]).
    Collection(Box<NodeSchema>),
    /// A nested fixed-shape aggregate ([`StructStream`]).
    Struct(StructSchema),
}

impl NodeSchema {
    /// Resolve the descriptor into a freshly built node.
    #[must_use]
    pub fn instantiate(&self) -> StreamNode {
        match self {
            Self::Scalar => StreamNode::Scalar(ScalarStream::new()),
            Self::Atomic => StreamNode::Atomic(AtomicValue::new()),
            Self::Collection(item) => {
                let item = (**item).clone();
                StreamNode::Collection(CollectionStream::new(move || item.instantiate()))
            }
            Self::Struct(schema) => StreamNode::Struct(StructStream::new(schema.clone())),
        }
    }
}

/// Ordered field declarations for a [`StructStream`].
///
/// Declaration order matters twice: it is the order fields appear in
/// completion snapshots, and it is expected to match the order fields arrive
/// in the underlying JSON text.
#[derive(Clone, Debug, Default)]
pub struct StructSchema {
    fields: Vec<(String, NodeSchema)>,
}

impl StructSchema {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field of an arbitrary kind.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, schema: NodeSchema) -> Self {
        self.fields.push((name.into(), schema));
        self
    }

    /// Declare a growing text field.
    #[must_use]
    pub fn text(self, name: impl Into<String>) -> Self {
        self.field(name, NodeSchema::Scalar)
    }

    /// Declare a wholesale-replaced field.
    #[must_use]
    pub fn atom(self, name: impl Into<String>) -> Self {
        self.field(name, NodeSchema::Atomic)
    }

    /// Declare an append-only list field of the given item kind.
    #[must_use]
    pub fn list(self, name: impl Into<String>, item: NodeSchema) -> Self {
        self.field(name, NodeSchema::Collection(Box::new(item)))
    }

    /// Declare a nested struct field.
    #[must_use]
    pub fn nested(self, name: impl Into<String>, schema: StructSchema) -> Self {
        self.field(name, NodeSchema::Struct(schema))
    }

    pub(crate) fn into_fields(self) -> Vec<(String, NodeSchema)> {
        self.fields
    }
}
