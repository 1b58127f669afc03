//! The fragment-accumulating parser driving a streaming tree.

use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::{decode::decode_partial, error::DecodeError, node::Node, structure::StructStream};

/// Owns the growing fragment buffer and drives snapshot decoding.
///
/// Every pushed fragment is appended to the buffer, the **entire** buffer is
/// re-decoded into a best-effort snapshot, and the snapshot is forwarded to
/// the root struct. The root then fans the value out to its children, which
/// diff it against what they already hold.
///
/// # Examples
///
/// ```
/// use jsonweave::{StreamParser, StructSchema, StructStream};
///
/// let root = StructStream::new(StructSchema::new().text("name"));
/// let mut parser = StreamParser::new(root);
/// parser.push(r#"{"name": "Hello"#)?;
/// parser.push(r#" World"}"#)?;
/// let root = parser.finish();
/// let name = root.field("name").unwrap();
/// assert_eq!(name.borrow().as_scalar().unwrap().value(), "Hello World");
/// # Ok::<(), jsonweave::DecodeError>(())
/// ```
pub struct StreamParser {
    buffer: String,
    root: StructStream,
}

impl StreamParser {
    /// Create a parser feeding the given root struct.
    #[must_use]
    pub fn new(root: StructStream) -> Self {
        Self {
            buffer: String::new(),
            root,
        }
    }

    /// Append one fragment and fan the re-decoded snapshot out to the tree.
    ///
    /// Empty and whitespace-only fragments are dropped without touching the
    /// buffer or the tree.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the accumulated buffer is structurally
    /// invalid JSON (a truncated trailing string literal is fine). The failed
    /// fragment stays in the buffer; there is no rollback and no retry.
    pub fn push(&mut self, fragment: &str) -> Result<(), DecodeError> {
        if fragment.trim().is_empty() {
            return Ok(());
        }
        self.buffer.push_str(fragment);
        let snapshot = decode_partial(self.buffer.as_bytes())?;
        self.root.update(&snapshot);
        Ok(())
    }

    /// The accumulated fragment text, including any fragment whose decode
    /// failed.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The root struct being fed.
    #[must_use]
    pub fn root(&self) -> &StructStream {
        &self.root
    }

    /// Mutable access to the root struct, e.g. to register observers.
    pub fn root_mut(&mut self) -> &mut StructStream {
        &mut self.root
    }

    /// End the stream: finalize the root and hand it back.
    #[must_use]
    pub fn finish(mut self) -> StructStream {
        self.root.finalize();
        self.root
    }

    /// Borrow the parser as a scoped session.
    ///
    /// Dropping the returned guard finalizes the root exactly once, whether
    /// the scope ends normally, through an early `?` return, or during
    /// unwinding. Errors from the scope body propagate untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonweave::{StreamParser, StructSchema, StructStream};
    ///
    /// let root = StructStream::new(StructSchema::new().text("name"));
    /// let mut parser = StreamParser::new(root);
    /// {
    ///     let mut session = parser.session();
    ///     session.push(r#"{"name": "x"}"#)?;
    /// } // root finalized here
    /// # Ok::<(), jsonweave::DecodeError>(())
    /// ```
    pub fn session(&mut self) -> ParserSession<'_> {
        ParserSession { parser: self }
    }
}

impl fmt::Debug for StreamParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamParser")
            .field("buffered_bytes", &self.buffer.len())
            .field("root", &self.root)
            .finish()
    }
}

/// RAII guard tying stream end to scope exit.
///
/// Derefs to the underlying [`StreamParser`]; on drop, the root is finalized.
pub struct ParserSession<'a> {
    parser: &'a mut StreamParser,
}

impl Deref for ParserSession<'_> {
    type Target = StreamParser;

    fn deref(&self) -> &StreamParser {
        self.parser
    }
}

impl DerefMut for ParserSession<'_> {
    fn deref_mut(&mut self) -> &mut StreamParser {
        self.parser
    }
}

impl Drop for ParserSession<'_> {
    fn drop(&mut self) {
        self.parser.root.finalize();
    }
}
