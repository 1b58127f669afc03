//! Fixed-shape aggregate of named child nodes.

use core::fmt;
use std::{cell::RefCell, rc::Rc};

use crate::{
    node::{Node, StreamNode},
    schema::StructSchema,
    value::{Map, Value},
};

/// Shared handle to a named child of a [`StructStream`].
pub type FieldHandle = Rc<RefCell<StreamNode>>;

/// A fixed-shape aggregate built once from a [`StructSchema`].
///
/// One child node exists per declared field, built eagerly at construction;
/// the shape never changes afterwards. The stream never says "this field is
/// done", so the struct infers it: a known key arriving for the first time
/// closes the field that was active before it. The field that arrives last
/// stays active until the struct itself is finalized.
///
/// # Examples
///
/// ```
/// use jsonweave::{Node, StructSchema, StructStream, Value};
///
/// let mut root = StructStream::new(StructSchema::new().text("name"));
/// root.update(&Value::Object(vec![("name".to_string(), Value::from("streamed"))]));
/// let name = root.field("name").unwrap();
/// assert_eq!(name.borrow().as_scalar().unwrap().value(), "streamed");
/// ```
pub struct StructStream {
    fields: Vec<(String, FieldHandle)>,
    parsed_keys: Vec<String>,
    on_complete: Vec<Box<dyn FnMut(&Value)>>,
}

impl StructStream {
    /// Build the aggregate and all of its children from a schema.
    #[must_use]
    pub fn new(schema: StructSchema) -> Self {
        let fields = schema
            .into_fields()
            .into_iter()
            .map(|(name, node)| (name, Rc::new(RefCell::new(node.instantiate()))))
            .collect();
        Self {
            fields,
            parsed_keys: Vec::new(),
            on_complete: Vec::new(),
        }
    }

    /// Handle to the child for a declared field, or `None` for unknown names.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldHandle> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, node)| node)
    }

    /// Declared field names, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// The key currently considered active, if any key has arrived yet.
    #[must_use]
    pub fn active_key(&self) -> Option<&str> {
        self.parsed_keys.last().map(String::as_str)
    }

    /// Register an observer fired on every finalize with an object snapshot
    /// of all declared fields, set or not.
    pub fn on_complete(&mut self, observer: impl FnMut(&Value) + 'static) {
        self.on_complete.push(Box::new(observer));
    }

    /// Record the first arrival of a known key. Seeing a key for the first
    /// time is the only evidence that the previously active field's text is
    /// closed, so that field is finalized here.
    fn note_arrival(&mut self, key: &str) {
        if self.parsed_keys.iter().any(|k| k == key) {
            return;
        }
        if let Some(previous) = self.parsed_keys.last().cloned() {
            if let Some(child) = self.field(&previous) {
                child.borrow_mut().finalize();
            }
        }
        self.parsed_keys.push(key.to_owned());
    }
}

impl Node for StructStream {
    fn update(&mut self, snapshot: &Value) {
        let Some(entries) = snapshot.as_object() else {
            return;
        };
        for (key, field_value) in entries {
            // Keys outside the declared shape are dropped, not errors.
            if self.field(key).is_none() {
                continue;
            }
            self.note_arrival(key);
            if let Some(child) = self.field(key) {
                child.borrow_mut().update(field_value);
            }
        }
    }

    /// Close the struct: the still-active field is finalized first, then
    /// completion observers receive a snapshot of every declared field.
    ///
    /// Legal on a struct that never saw an update — observers then get the
    /// all-default snapshot.
    fn finalize(&mut self) {
        if let Some(active) = self.parsed_keys.last().cloned() {
            if let Some(child) = self.field(&active) {
                child.borrow_mut().finalize();
            }
        }
        let snapshot = self.snapshot();
        for observer in &mut self.on_complete {
            observer(&snapshot);
        }
    }

    fn snapshot(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(name, node)| (name.clone(), node.borrow().snapshot()))
                .collect::<Map>(),
        )
    }
}

impl fmt::Debug for StructStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructStream")
            .field("keys", &self.fields.iter().map(|(k, _)| k).collect::<Vec<_>>())
            .field("parsed_keys", &self.parsed_keys)
            .finish_non_exhaustive()
    }
}
