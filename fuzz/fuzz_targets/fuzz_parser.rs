#![no_main]
use jsonweave::{NodeSchema, StreamParser, StructSchema, StructStream};
use libfuzzer_sys::fuzz_target;

fn schema() -> StructSchema {
    StructSchema::new()
        .text("a")
        .atom("b")
        .list("c", NodeSchema::Scalar)
        .nested("d", StructSchema::new().text("e").list("f", NodeSchema::Atomic))
}

fn parser(data: &[u8]) {
    if data.len() < 5 {
        return;
    }

    let split_seed = u64::from(u32::from_le_bytes(data[..4].try_into().unwrap()));
    let text = String::from_utf8_lossy(&data[4..]).into_owned();
    if text.is_empty() {
        return;
    }

    let mut parser = StreamParser::new(StructStream::new(schema()));
    for fragment in seeded_fragments(&text, split_seed) {
        // Structurally invalid buffers keep erroring on every later push;
        // both the error path and the no-rollback buffer are worth hitting.
        let _ = parser.push(fragment);
    }
    let _root = parser.finish();
}

fuzz_target!(|data: &[u8]| parser(data));

/// Cut `text` into fragments of a seed-derived size, each at least one byte
/// and each ending on a UTF-8 boundary so slicing cannot panic.
fn seeded_fragments(text: &str, seed: u64) -> Vec<&str> {
    let len = text.len();
    let mut fragments = Vec::new();
    let mut start = 0;

    while start < len {
        let mut size = (seed as usize % (len - start)) + 1;
        while start + size < len && !text.is_char_boundary(start + size) {
            size += 1;
        }
        fragments.push(&text[start..start + size]);
        start += size;
    }

    fragments
}
