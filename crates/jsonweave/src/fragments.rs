//! Helpers for simulating fragment streams.
//!
//! Tests and examples use these to cut a complete payload into the kind of
//! irregular pieces a token-by-token producer emits.

/// Split `payload` into approximately equal-sized fragments without breaking
/// UTF-8 code points.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn split_fragments(payload: &str, parts: usize) -> Vec<&str> {
    assert!(parts > 0);
    let len = payload.len();
    let size = len.div_ceil(parts);
    let mut fragments = Vec::new();
    let mut start = 0;
    while start < len {
        let mut end = core::cmp::min(start + size, len);
        while end < len && !payload.is_char_boundary(end) {
            end += 1;
        }
        fragments.push(&payload[start..end]);
        start = end;
    }
    fragments
}

/// Return the accumulated-buffer states a fragment stream passes through: a
/// sequence of prefixes converging to `payload`.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn growing_prefixes(payload: &str, parts: usize) -> Vec<&str> {
    let fragments = split_fragments(payload, parts);
    let mut prefixes = Vec::with_capacity(fragments.len());
    let mut end = 0;
    for fragment in fragments {
        end += fragment.len();
        prefixes.push(&payload[..end]);
    }
    prefixes
}
