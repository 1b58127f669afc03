#![allow(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

mod common;

use std::{cell::RefCell, fmt::Write, rc::Rc};

use jsonweave::{Node, StreamParser, StructStream, Value};

type Log = Rc<RefCell<String>>;

fn logged(log: &Log, line: &str) {
    writeln!(log.borrow_mut(), "{line}").unwrap();
}

/// Wire one observer per interesting node so the whole callback sequence of a
/// streaming session lands in a single reviewable transcript.
fn instrument(root: &mut StructStream, log: &Log) {
    {
        let moderation = root.field("moderation").unwrap();
        let mut moderation = moderation.borrow_mut();
        let moderation = moderation.as_struct_mut().unwrap();
        let sink = Rc::clone(log);
        moderation
            .field("decision")
            .unwrap()
            .borrow_mut()
            .as_scalar_mut()
            .unwrap()
            .on_append(move |chunk| {
                logged(&sink, &format!("append moderation.decision {}", Value::from(chunk)));
            });
        let sink = Rc::clone(log);
        moderation
            .field("decision")
            .unwrap()
            .borrow_mut()
            .as_scalar_mut()
            .unwrap()
            .on_complete(move |v| {
                logged(&sink, &format!("complete moderation.decision {}", Value::from(v)));
            });
        let sink = Rc::clone(log);
        moderation
            .field("reason")
            .unwrap()
            .borrow_mut()
            .as_atomic_mut()
            .unwrap()
            .on_complete(move |v| logged(&sink, &format!("complete moderation.reason {v}")));
        let sink = Rc::clone(log);
        moderation.on_complete(move |v| logged(&sink, &format!("complete moderation {v}")));
    }
    for field in ["filename", "code"] {
        let sink = Rc::clone(log);
        root.field(field)
            .unwrap()
            .borrow_mut()
            .as_scalar_mut()
            .unwrap()
            .on_append(move |chunk| {
                logged(&sink, &format!("append {field} {}", Value::from(chunk)));
            });
        let sink = Rc::clone(log);
        root.field(field)
            .unwrap()
            .borrow_mut()
            .as_scalar_mut()
            .unwrap()
            .on_complete(move |v| {
                logged(&sink, &format!("complete {field} {}", Value::from(v)));
            });
    }
    {
        let tags = root.field("tags").unwrap();
        let mut tags = tags.borrow_mut();
        let tags = tags.as_collection_mut().unwrap();
        let sink = Rc::clone(log);
        tags.on_append(move |item| {
            logged(&sink, &format!("append tags {}", item.borrow().snapshot()));
        });
        let sink = Rc::clone(log);
        tags.on_complete(move |items| {
            let list = Value::Array(items.iter().map(|item| item.borrow().snapshot()).collect());
            logged(&sink, &format!("complete tags {list}"));
        });
    }
    {
        let entities = root.field("entities").unwrap();
        let mut entities = entities.borrow_mut();
        let entities = entities.as_collection_mut().unwrap();
        let sink = Rc::clone(log);
        entities.on_append(move |item| {
            logged(&sink, &format!("append entities {}", item.borrow().snapshot()));
        });
        let sink = Rc::clone(log);
        entities.on_append(move |item| {
            let mut element = item.borrow_mut();
            let element = element.as_struct_mut().unwrap();
            let sink = Rc::clone(&sink);
            element
                .field("name")
                .unwrap()
                .borrow_mut()
                .as_scalar_mut()
                .unwrap()
                .on_complete(move |v| {
                    logged(&sink, &format!("complete entity.name {}", Value::from(v)));
                });
        });
        let sink = Rc::clone(log);
        entities.on_complete(move |items| {
            let list = Value::Array(items.iter().map(|item| item.borrow().snapshot()).collect());
            logged(&sink, &format!("complete entities {list}"));
        });
    }
    let sink = Rc::clone(log);
    root.field("confidence")
        .unwrap()
        .borrow_mut()
        .as_atomic_mut()
        .unwrap()
        .on_complete(move |v| logged(&sink, &format!("complete confidence {v}")));
    let sink = Rc::clone(log);
    root.on_complete(move |v| logged(&sink, &format!("complete root {v}")));
}

#[test]
fn event_log_over_hostile_seams() {
    let log: Log = Rc::new(RefCell::new(String::from("\n")));
    let mut root = StructStream::new(common::tool_call_schema());
    instrument(&mut root, &log);

    let mut parser = StreamParser::new(root);
    for fragment in common::STREAM {
        parser.push(fragment).unwrap();
    }
    let _root = parser.finish();

    insta::assert_snapshot!(log.borrow(), @r#"
    append moderation.decision "al"
    append moderation.decision "low"
    complete moderation.decision "allow"
    complete moderation.reason null
    complete moderation {"decision":"allow","reason":null}
    append filename "exam"
    append filename "ple.rs"
    complete filename "example.rs"
    append code "fn main() {\n"
    append code "    println!(\"hi\");\n}\n"
    complete code "fn main() {\n    println!(\"hi\");\n}\n"
    append tags "cl"
    append tags "json"
    complete tags ["cli","json"]
    append entities {"kind":"function","name":""}
    complete entity.name "main"
    append entities {"kind":"macro","name":"println"}
    complete entities [{"kind":"function","name":"main"},{"kind":"macro","name":"println"}]
    complete confidence 0.87
    complete root {"moderation":{"decision":"allow","reason":null},"filename":"example.rs","code":"fn main() {\n    println!(\"hi\");\n}\n","tags":["cli","json"],"entities":[{"kind":"function","name":"main"},{"kind":"macro","name":"println"}],"confidence":0.87}
    "#);
}
