//! Channel adapters bridging observers into async consumers.
//!
//! The diff and finalize algorithms stay synchronous; these helpers only
//! forward observer payloads into unbounded [`tokio::sync::mpsc`] channels,
//! so an async task can consume chunks or completions with `recv().await`.
//! Because observers fire sequentially in registration order, the channel
//! preserves exactly the order a synchronous observer would see.
//!
//! # Examples
//!
//! ```
//! use jsonweave::{stream, StreamParser, StructSchema, StructStream};
//!
//! let mut root = StructStream::new(StructSchema::new().text("name"));
//! let mut chunks = {
//!     let name = root.field("name").unwrap();
//!     stream::scalar_chunks(name.borrow_mut().as_scalar_mut().unwrap())
//! };
//!
//! let mut parser = StreamParser::new(root);
//! parser.push(r#"{"name": "strea"#)?;
//! parser.push(r#"med"}"#)?;
//!
//! // In an async task this would be `chunks.recv().await`.
//! assert_eq!(chunks.try_recv().ok().as_deref(), Some("strea"));
//! assert_eq!(chunks.try_recv().ok().as_deref(), Some("med"));
//! # Ok::<(), jsonweave::DecodeError>(())
//! ```

use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use crate::{
    collection::CollectionStream, node::Node, scalar::ScalarStream, structure::StructStream,
    value::Value,
};

/// Receive every chunk appended to a scalar, in arrival order.
///
/// The channel closes when the node (and with it the sending observer) is
/// dropped.
#[must_use]
pub fn scalar_chunks(scalar: &mut ScalarStream) -> UnboundedReceiver<String> {
    let (tx, rx) = unbounded_channel();
    scalar.on_append(move |chunk| {
        let _ = tx.send(chunk.to_owned());
    });
    rx
}

/// Receive the full scalar text once per finalize.
#[must_use]
pub fn scalar_completions(scalar: &mut ScalarStream) -> UnboundedReceiver<String> {
    let (tx, rx) = unbounded_channel();
    scalar.on_complete(move |value| {
        let _ = tx.send(value.to_owned());
    });
    rx
}

/// Receive a materialized snapshot of each child appended to a collection.
///
/// Snapshots are taken at append time; later growth of an element is
/// observable through the node tree, not through this channel.
#[must_use]
pub fn collection_appends<T: Node>(
    collection: &mut CollectionStream<T>,
) -> UnboundedReceiver<Value> {
    let (tx, rx) = unbounded_channel();
    collection.on_append(move |item| {
        let _ = tx.send(item.borrow().snapshot());
    });
    rx
}

/// Receive the struct's full object snapshot once per finalize.
#[must_use]
pub fn struct_completions(structure: &mut StructStream) -> UnboundedReceiver<Value> {
    let (tx, rx) = unbounded_channel();
    structure.on_complete(move |snapshot| {
        let _ = tx.send(snapshot.clone());
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::{collection_appends, scalar_chunks, struct_completions};
    use crate::{
        collection::CollectionStream,
        node::Node,
        scalar::ScalarStream,
        schema::StructSchema,
        structure::StructStream,
        value::Value,
    };

    #[test]
    fn chunks_drain_in_order_without_an_executor() {
        let mut scalar = ScalarStream::new();
        let mut rx = scalar_chunks(&mut scalar);
        scalar.update(&Value::from("a"));
        scalar.update(&Value::from("ab"));
        assert_eq!(rx.try_recv().ok().as_deref(), Some("a"));
        assert_eq!(rx.try_recv().ok().as_deref(), Some("b"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn appended_items_arrive_as_snapshots() {
        let mut list = CollectionStream::new(ScalarStream::new);
        let mut rx = collection_appends(&mut list);
        list.update(&Value::Array(vec![Value::from("x")]));
        assert_eq!(rx.try_recv().ok(), Some(Value::from("x")));
    }

    #[test]
    fn struct_completion_snapshot_is_forwarded() {
        let mut root = StructStream::new(StructSchema::new().text("k"));
        let mut rx = struct_completions(&mut root);
        root.update(&Value::Object(vec![("k".to_string(), Value::from("v"))]));
        root.finalize();
        assert_eq!(
            rx.try_recv().ok(),
            Some(Value::Object(vec![("k".to_string(), Value::from("v"))]))
        );
    }
}
