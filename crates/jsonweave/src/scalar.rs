//! Growing text leaf.

use core::fmt;

use crate::{node::Node, value::Value};

type TextObserver = Box<dyn FnMut(&str)>;

/// A leaf node holding a monotonically growing text value.
///
/// Each snapshot is expected to extend the previously seen text; the node
/// reduces the snapshot to the newly arrived suffix and hands that chunk to
/// append observers. Snapshots shorter than the held text are treated as
/// stale and ignored, never as errors.
///
/// # Examples
///
/// ```
/// use jsonweave::{Node, ScalarStream, Value};
///
/// let mut name = ScalarStream::new();
/// name.on_append(|chunk| print!("{chunk}"));
/// name.update(&Value::from("Hello"));
/// name.update(&Value::from("Hello World"));
/// assert_eq!(name.value(), "Hello World");
/// ```
#[derive(Default)]
pub struct ScalarStream {
    buf: String,
    on_append: Vec<TextObserver>,
    on_complete: Vec<TextObserver>,
}

impl ScalarStream {
    /// Create an empty scalar node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full text accumulated so far.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.buf
    }

    /// Register an observer fired with each newly arrived chunk.
    ///
    /// Observers run in registration order and cannot be removed.
    pub fn on_append(&mut self, observer: impl FnMut(&str) + 'static) {
        self.on_append.push(Box::new(observer));
    }

    /// Register an observer fired with the full text on every finalize.
    pub fn on_complete(&mut self, observer: impl FnMut(&str) + 'static) {
        self.on_complete.push(Box::new(observer));
    }

    fn push_snapshot(&mut self, snapshot: &str) {
        // Length comparison alone decides staleness: an equal-length snapshot
        // is the one we already hold, a shorter one is out of date.
        if snapshot.len() <= self.buf.len() {
            return;
        }
        let chunk = if self.buf.is_empty() {
            snapshot.to_owned()
        } else {
            // Drops the *first* occurrence of the held text, wherever it
            // appears. Callers may rely on this exact reduction, so it stays
            // even though a snapshot that repeats the held text elsewhere
            // yields a surprising chunk.
            snapshot.replacen(self.buf.as_str(), "", 1)
        };
        if chunk.is_empty() {
            return;
        }
        self.buf.push_str(&chunk);
        for observer in &mut self.on_append {
            observer(&chunk);
        }
    }
}

impl Node for ScalarStream {
    fn update(&mut self, snapshot: &Value) {
        if let Some(text) = snapshot.as_str() {
            self.push_snapshot(text);
        }
    }

    fn finalize(&mut self) {
        for observer in &mut self.on_complete {
            observer(&self.buf);
        }
    }

    fn snapshot(&self) -> Value {
        Value::String(self.buf.clone())
    }
}

impl fmt::Debug for ScalarStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarStream")
            .field("buf", &self.buf)
            .finish_non_exhaustive()
    }
}
