//! Incrementally materialize a typed value tree from a stream of JSON text
//! fragments.
//!
//! A token-by-token producer (typically a language model emitting a JSON
//! document) yields fragments that only ever *extend* what came before. This
//! crate accumulates those fragments, re-decodes the whole buffer after each
//! push through a partial-JSON decoder ([`jiter`]), and fans the resulting
//! snapshot out to a tree of typed nodes. Each node diffs the snapshot
//! against what it already holds and emits only the increment:
//!
//! - [`ScalarStream`] — growing text, fires a chunk per newly arrived suffix;
//! - [`AtomicValue`] — opaque value replaced wholesale, completion only;
//! - [`CollectionStream`] — append-only list of child nodes;
//! - [`StructStream`] — fixed shape of named children, built from a
//!   [`StructSchema`].
//!
//! The stream never marks a sub-value as finished. Completion is inferred
//! from structure instead: a list element closes when the next element
//! arrives, a struct field closes when the next field first arrives, and
//! everything still open closes when the tree is finalized at end of stream.
//!
//! Trees are single-writer: `push`, `update` and `finalize` run to
//! completion before the next call, observers fire synchronously in
//! registration order, and an observer must not call back into the tree it
//! is observing.
//!
//! ```
//! use jsonweave::{NodeSchema, StreamParser, StructSchema, StructStream};
//!
//! let schema = StructSchema::new()
//!     .text("title")
//!     .list("tags", NodeSchema::Scalar);
//! let root = StructStream::new(schema);
//! root.field("title")
//!     .unwrap()
//!     .borrow_mut()
//!     .as_scalar_mut()
//!     .unwrap()
//!     .on_append(|chunk| print!("{chunk}"));
//!
//! let mut parser = StreamParser::new(root);
//! parser.push(r#"{"title": "streaming "#)?;
//! parser.push(r#"json", "tags": ["incremental"]}"#)?;
//! let root = parser.finish();
//! let title = root.field("title").unwrap();
//! assert_eq!(title.borrow().as_scalar().unwrap().value(), "streaming json");
//! # Ok::<(), jsonweave::DecodeError>(())
//! ```

#![allow(missing_docs)]

mod atomic;
mod collection;
mod decode;
mod error;
mod node;
mod parser;
mod scalar;
mod schema;
mod structure;
mod value;

pub mod fragments;
#[cfg(feature = "async")]
pub mod stream;


pub use atomic::AtomicValue;
pub use collection::{CollectionStream, ItemHandle};
pub use error::DecodeError;
pub use node::{Node, StreamNode};
pub use parser::{ParserSession, StreamParser};
pub use scalar::ScalarStream;
pub use schema::{NodeSchema, StructSchema};
pub use structure::{FieldHandle, StructStream};
pub use value::{Array, Map, Value};
