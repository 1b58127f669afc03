//! React to an LLM tool-call response while it is still streaming.
//!
//! The assistant emits one JSON document in small, irregular fragments, the
//! way `chat.completions`-style APIs deliver partial tokens:
//!
//! ```text
//! {
//!   "moderation": { "decision": "allow" | "block", "reason": string | null },
//!   "filename":   string,
//!   "code":       string
//! }
//! ```
//!
//! Two things happen while the payload arrives:
//!
//! 1. As soon as `moderation.decision` prefixes to `"block"` we abort,
//!    before the expensive `code` field has even started streaming.
//! 2. Each chunk of `code` is printed the moment it materializes, so a UI
//!    could render the snippet token by token.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonweave --example tool_call
//! ```

use jsonweave::{StreamParser, StructSchema, StructStream};

fn main() {
    // A toy assistant response in ten tiny fragments. In real life this
    // would come from the network.
    let simulated_stream: [&str; 10] = [
        r#"{"moderation":{"decision":"al"#,
        r#"lo"#,
        r#"w","reason":null},"#,
        r#""filename":"example.rs","#,
        r#""code":"use jsonweave::StreamParser;\n"#,
        r#"fn main() {\n"#,
        r#"    let _ = Stream"#,
        r#"Parser::new;\n"#,
        r#"    println!(\"hello\");\n}\n"#,
        r#""}"#,
    ];

    let schema = StructSchema::new()
        .nested(
            "moderation",
            StructSchema::new().text("decision").atom("reason"),
        )
        .text("filename")
        .text("code");
    let mut root = StructStream::new(schema);

    // Stream the code snippet to stdout as it materializes.
    root.field("code")
        .unwrap()
        .borrow_mut()
        .as_scalar_mut()
        .unwrap()
        .on_append(|chunk| print!("{chunk}"));

    let decision = {
        let moderation = root.field("moderation").unwrap();
        let moderation = moderation.borrow();
        moderation
            .as_struct()
            .unwrap()
            .field("decision")
            .cloned()
            .unwrap()
    };

    let mut parser = StreamParser::new(root);
    for fragment in simulated_stream {
        if let Err(err) = parser.push(fragment) {
            eprintln!("malformed stream: {err}");
            return;
        }

        // The decision prefix is enough to abort early, long before the
        // document is complete.
        if decision.borrow().as_scalar().unwrap().value().starts_with("block") {
            eprintln!("moderation blocked the content, aborting");
            return;
        }
    }

    let root = parser.finish();
    let filename = root.field("filename").unwrap();
    println!(
        "wrote {}",
        filename.borrow().as_scalar().unwrap().value()
    );
}
