//! The shared node capability set and the dynamic node union.

use crate::{
    atomic::AtomicValue, collection::CollectionStream, scalar::ScalarStream,
    structure::StructStream, value::Value,
};

/// Capabilities shared by every node in a streaming tree.
///
/// A node accepts successive full-value snapshots through [`update`] and
/// reduces each one to the incremental change since the previous snapshot.
/// [`finalize`] declares the node's value closed and notifies completion
/// observers; it may be invoked any number of times, and each invocation
/// re-emits completion with the then-current value.
///
/// [`update`]: Node::update
/// [`finalize`]: Node::finalize
pub trait Node {
    /// Feed one full-value snapshot. Snapshots of the wrong JSON type for the
    /// node are silently ignored.
    fn update(&mut self, snapshot: &Value);

    /// Declare the value closed and notify completion observers.
    fn finalize(&mut self);

    /// The node's current materialized state as an owned value.
    fn snapshot(&self) -> Value;
}

/// A node of any kind, as instantiated from a schema descriptor.
///
/// Schema-built trees are heterogeneous — a struct field may be a scalar, an
/// atomic, a collection, or a nested struct — so children are carried behind
/// this union and unwrapped with the `as_*` accessors where a concrete kind
/// is expected.
#[derive(Debug)]
pub enum StreamNode {
    /// A growing text leaf.
    Scalar(ScalarStream),
    /// A wholesale-replaced opaque leaf.
    Atomic(AtomicValue),
    /// An append-only sequence of nodes.
    Collection(CollectionStream<StreamNode>),
    /// A fixed-shape aggregate of named nodes.
    Struct(StructStream),
}

impl StreamNode {
    /// Returns the inner [`ScalarStream`], if this node is one.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&ScalarStream> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Mutable variant of [`as_scalar`](Self::as_scalar).
    pub fn as_scalar_mut(&mut self) -> Option<&mut ScalarStream> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner [`AtomicValue`], if this node is one.
    #[must_use]
    pub fn as_atomic(&self) -> Option<&AtomicValue> {
        match self {
            Self::Atomic(a) => Some(a),
            _ => None,
        }
    }

    /// Mutable variant of [`as_atomic`](Self::as_atomic).
    pub fn as_atomic_mut(&mut self) -> Option<&mut AtomicValue> {
        match self {
            Self::Atomic(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the inner [`CollectionStream`], if this node is one.
    #[must_use]
    pub fn as_collection(&self) -> Option<&CollectionStream<StreamNode>> {
        match self {
            Self::Collection(c) => Some(c),
            _ => None,
        }
    }

    /// Mutable variant of [`as_collection`](Self::as_collection).
    pub fn as_collection_mut(&mut self) -> Option<&mut CollectionStream<StreamNode>> {
        match self {
            Self::Collection(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the inner [`StructStream`], if this node is one.
    #[must_use]
    pub fn as_struct(&self) -> Option<&StructStream> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Mutable variant of [`as_struct`](Self::as_struct).
    pub fn as_struct_mut(&mut self) -> Option<&mut StructStream> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }
}

impl Node for StreamNode {
    fn update(&mut self, snapshot: &Value) {
        match self {
            Self::Scalar(s) => s.update(snapshot),
            Self::Atomic(a) => a.update(snapshot),
            Self::Collection(c) => c.update(snapshot),
            Self::Struct(s) => s.update(snapshot),
        }
    }

    fn finalize(&mut self) {
        match self {
            Self::Scalar(s) => s.finalize(),
            Self::Atomic(a) => a.finalize(),
            Self::Collection(c) => c.finalize(),
            Self::Struct(s) => s.finalize(),
        }
    }

    fn snapshot(&self) -> Value {
        match self {
            Self::Scalar(s) => s.snapshot(),
            Self::Atomic(a) => a.snapshot(),
            Self::Collection(c) => c.snapshot(),
            Self::Struct(s) => s.snapshot(),
        }
    }
}
