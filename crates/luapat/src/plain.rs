// Plain substring search, used when the pattern has no special bytes or the
// caller asks for a literal search.

use memchr::memchr;

/// Position of the first occurrence of `needle` in `haystack`.
/// The first byte is located with `memchr`, the rest compared in place.
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let Some((&first, rest)) = needle.split_first() else {
        // empty strings are everywhere
        return Some(0);
    };
    if needle.len() > haystack.len() {
        return None;
    }
    // needle cannot start after this point
    let last_start = haystack.len() - needle.len();
    let mut from = 0;
    while let Some(i) = memchr(first, &haystack[from..=last_start]) {
        let at = from + i;
        if &haystack[at + 1..at + needle.len()] == rest {
            return Some(at);
        }
        from = at + 1;
        if from > last_start {
            break;
        }
    }
    None
}
