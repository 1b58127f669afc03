//! Append-only sequence of child nodes.

use core::fmt;
use std::{cell::RefCell, rc::Rc};

use crate::{node::Node, value::Value};

/// Shared handle to a child node of a [`CollectionStream`].
///
/// Append observers receive the live node, not a value copy: a retained clone
/// of the handle observes every later mutation of that element.
pub type ItemHandle<T> = Rc<RefCell<T>>;

/// An ordered, append-only sequence of child nodes of one item kind.
///
/// The sequence grows by index: known indices update their child in place,
/// a brand-new index appends a freshly built child. The arrival of a new
/// element is the only available signal that the previous element's text is
/// closed, so the previous last child is finalized at that moment. Elements
/// are never removed or reordered, and a snapshot shorter than the sequence
/// leaves trailing children untouched.
pub struct CollectionStream<T> {
    items: Vec<ItemHandle<T>>,
    make_item: Box<dyn Fn() -> T>,
    on_append: Vec<Box<dyn FnMut(&ItemHandle<T>)>>,
    on_complete: Vec<Box<dyn FnMut(&[ItemHandle<T>])>>,
}

impl<T: Node> CollectionStream<T> {
    /// Create an empty collection whose children are built by `make_item`.
    pub fn new(make_item: impl Fn() -> T + 'static) -> Self {
        Self {
            items: Vec::new(),
            make_item: Box::new(make_item),
            on_append: Vec::new(),
            on_complete: Vec::new(),
        }
    }

    /// The live child handles, in append order.
    #[must_use]
    pub fn items(&self) -> &[ItemHandle<T>] {
        &self.items
    }

    /// Number of children appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` while no element has ever arrived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Register an observer fired with each newly appended child handle.
    ///
    /// Observers run in registration order and cannot be removed.
    pub fn on_append(&mut self, observer: impl FnMut(&ItemHandle<T>) + 'static) {
        self.on_append.push(Box::new(observer));
    }

    /// Register an observer fired with the live child list on every finalize.
    pub fn on_complete(&mut self, observer: impl FnMut(&[ItemHandle<T>]) + 'static) {
        self.on_complete.push(Box::new(observer));
    }
}

impl<T: Node> Node for CollectionStream<T> {
    fn update(&mut self, snapshot: &Value) {
        let Some(elements) = snapshot.as_array() else {
            return;
        };
        for (index, element) in elements.iter().enumerate() {
            if let Some(existing) = self.items.get(index) {
                existing.borrow_mut().update(element);
                continue;
            }
            // A new index closes the previous element: nothing else in the
            // stream ever marks it done.
            if let Some(last) = self.items.last() {
                last.borrow_mut().finalize();
            }
            let item = Rc::new(RefCell::new((self.make_item)()));
            item.borrow_mut().update(element);
            self.items.push(Rc::clone(&item));
            for observer in &mut self.on_append {
                observer(&item);
            }
        }
    }

    /// Fires completion observers with the child handles as they stand.
    ///
    /// Children are not finalized here; the last element of a closed list is
    /// only ever finalized through the owning parent's chain.
    fn finalize(&mut self) {
        for observer in &mut self.on_complete {
            observer(&self.items);
        }
    }

    fn snapshot(&self) -> Value {
        Value::Array(self.items.iter().map(|item| item.borrow().snapshot()).collect())
    }
}

impl<T> fmt::Debug for CollectionStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionStream")
            .field("len", &self.items.len())
            .finish_non_exhaustive()
    }
}
