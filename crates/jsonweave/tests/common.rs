#![allow(missing_docs)]
#![allow(dead_code)]
#![allow(clippy::needless_raw_string_hashes)]

use jsonweave::{NodeSchema, StructSchema};

// This stream simulates a structured tool-call response delivered in
// irregular fragments. Seams intentionally land in hostile places: inside
// string literals, inside the `null` literal, inside an object key, and
// between a member's colon and its number value.
#[rustfmt::skip]
pub const STREAM: [&str; 8] = [
    r#"{"moderation":{"decision":"al"#,                                  // mid string value
    r#"low","reason":nu"#,                                               // mid null literal
    r#"ll},"filename":"exam"#,                                           // object end -> new member
    r#"ple.rs","code":"fn main() {\n"#,                                  // mid escaped string
    r#"    println!(\"hi\");\n}\n","tags":["cl"#,                        // string end -> array start
    r#"i","json"],"entities":[{"kind":"function","na"#,                  // mid object key
    r#"me":"main"},{"kind":"macro","name":"println"}],"confidence":"#,   // colon with no value yet
    r#"0.87}"#,
];

pub fn payload() -> String {
    STREAM.concat()
}

pub fn tool_call_schema() -> StructSchema {
    StructSchema::new()
        .nested(
            "moderation",
            StructSchema::new().text("decision").atom("reason"),
        )
        .text("filename")
        .text("code")
        .list("tags", NodeSchema::Scalar)
        .list(
            "entities",
            NodeSchema::Struct(StructSchema::new().text("kind").text("name")),
        )
        .atom("confidence")
}
