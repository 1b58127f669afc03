//! Wholesale-replaced opaque leaf.

use core::fmt;

use crate::{node::Node, value::Value};

/// A leaf node holding an opaque value that is replaced, never diffed.
///
/// Atomics cover the JSON types with no incremental notion — numbers,
/// booleans, nulls, or whole sub-documents the caller does not want streamed.
/// There are no append events; the only signal is completion. A node that was
/// never updated finalizes silently, which keeps "never arrived" and
/// "arrived as `null`" distinguishable.
#[derive(Default)]
pub struct AtomicValue {
    value: Option<Value>,
    on_complete: Vec<Box<dyn FnMut(&Value)>>,
}

impl AtomicValue {
    /// Create an empty atomic node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last value received, or `None` if no update ever arrived.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// `true` until the first update, no matter what the update carried.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Register an observer fired with the held value on every finalize.
    pub fn on_complete(&mut self, observer: impl FnMut(&Value) + 'static) {
        self.on_complete.push(Box::new(observer));
    }
}

impl Node for AtomicValue {
    fn update(&mut self, snapshot: &Value) {
        self.value = Some(snapshot.clone());
    }

    fn finalize(&mut self) {
        if let Some(value) = &self.value {
            for observer in &mut self.on_complete {
                observer(value);
            }
        }
    }

    fn snapshot(&self) -> Value {
        self.value.clone().unwrap_or(Value::Null)
    }
}

impl fmt::Debug for AtomicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicValue")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
