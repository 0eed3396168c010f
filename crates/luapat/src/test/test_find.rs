// Tests for find: positions, init handling and the plain fast path
use crate::*;

fn span(subject: &[u8], pattern: &[u8], init: i64) -> Option<(usize, usize)> {
    find(subject, pattern, init, false)
        .unwrap()
        .map(|f| (f.start, f.end))
}

#[test]
fn test_find_empty_patterns() {
    assert_eq!(span(b"", b"", 1), Some((1, 0)));
    assert_eq!(span(b"alo", b"", 1), Some((1, 0)));
    assert_eq!(span(b"alo", b"", 4), Some((4, 3)));
    assert_eq!(span(b"alo", b"", 5), None);
}

#[test]
fn test_find_embedded_zeros() {
    assert_eq!(span(b"a\0o a\0o a\0o", b"a", 1), Some((1, 1)));
    assert_eq!(span(b"a\0o a\0o a\0o", b"a\0o", 2), Some((5, 7)));
    assert_eq!(span(b"a\0o a\0o a\0o", b"a\0o", 9), Some((9, 11)));
    assert_eq!(span(b"a\0a\0a\0a\0\0ab", b"\0ab", 2), Some((9, 11)));
    assert_eq!(span(b"a\0a\0a\0a\0\0ab", b"b", 1), Some((11, 11)));
    assert_eq!(span(b"a\0a\0a\0a\0\0ab", b"b\0", 1), None);
    assert_eq!(span(b"", b"\0", 1), None);
    assert_eq!(span(b"alo123alo", b"12", 1), Some((4, 5)));
}

#[test]
fn test_find_negative_init() {
    assert_eq!(span(b"test", b"t", -1), Some((4, 4)));
    assert_eq!(span(b"test", b"t", -4), Some((1, 1)));
    assert_eq!(span(b"test", b"t", -100), Some((1, 1)));
    assert_eq!(span(b"test", b"e", -2), None);
}

#[test]
fn test_find_anchor() {
    assert_eq!(span(b"alo^123alo", b"^12", 1), None);
    assert_eq!(span(b"123alo", b"^12", 1), Some((1, 2)));
    // the anchor binds to the start position, not the subject start
    assert_eq!(span(b"abcabc", b"^abc", 4), Some((4, 6)));
    assert_eq!(span(b"abcabc", b"^abc", 3), None);
}

#[test]
fn test_find_reports_only_explicit_captures() {
    let found = find(b"  test  ", b"([^ ]+)", 1, false).unwrap().unwrap();
    assert_eq!((found.start, found.end), (3, 6));
    assert_eq!(found.captures.to_vec(), vec![Capture::Bytes(b"test")]);

    let found = find(b"  test  ", b"[^ ]+", 1, false).unwrap().unwrap();
    assert!(found.captures.is_empty());
}

#[test]
fn test_find_escaped_paren() {
    assert_eq!(span(b"(\xe1lo)", b"%(\xe1", 1), Some((1, 2)));
}

#[test]
fn test_find_lazy_fail() {
    assert_eq!(span(b"test", b"te-x", 1), None);
}

#[test]
fn test_find_plain() {
    let found = find(b"a.b", b".", 1, true).unwrap().unwrap();
    assert_eq!((found.start, found.end), (2, 2));
    assert!(found.captures.is_empty());
    assert_eq!(find(b"a+b", b"a+", 1, true).unwrap().map(|f| f.start), Some(1));
    assert_eq!(find(b"abc", b"[", 1, true), Ok(None));
    assert_eq!(find(b"abc", b"", 10, true), Ok(None));
}

#[test]
fn test_find_without_specials_is_literal() {
    // ')' and ']' do not force the matcher
    assert_eq!(span(b"f(x)", b"x)", 1), Some((3, 4)));
    assert_eq!(span(b"a]b", b"]", 1), Some((2, 2)));
}

#[test]
fn test_find_literal_special_as_item() {
    assert_eq!(span(b"a+b", b"+b", 1), Some((2, 3)));
}

#[test]
fn test_find_with_captures_and_positions() {
    let found = find(b"hello world", b"o()", 6, false).unwrap().unwrap();
    assert_eq!((found.start, found.end), (8, 8));
    assert_eq!(found.captures.to_vec(), vec![Capture::Position(9)]);
}

#[test]
fn test_find_empty_position_capture() {
    let found = find(b"hello", b"()", 1, false).unwrap().unwrap();
    assert_eq!((found.start, found.end), (1, 0));
    assert_eq!(found.captures.to_vec(), vec![Capture::Position(1)]);
}

#[test]
fn test_find_anchor_after_init() {
    assert_eq!(span(b"aaa", b"^a", 2), Some((2, 2)));
    assert_eq!(span(b"baa", b"^a", 1), None);
}

#[test]
fn test_find_captures_outlive_pattern() {
    let subject = b"id: 42";
    let found = {
        let pattern = String::from("(%d+)");
        find(subject, pattern.as_bytes(), 1, false).unwrap().unwrap()
    };
    assert_eq!((found.start, found.end), (5, 6));
    assert_eq!(found.captures.to_vec(), vec![Capture::Bytes(b"42")]);
}
