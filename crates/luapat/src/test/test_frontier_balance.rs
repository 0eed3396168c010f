// Tests for %f frontiers and %b balanced matches
use crate::*;

fn sub(subject: &[u8], pattern: &[u8], template: &str) -> Vec<u8> {
    gsub(subject, pattern, template.into(), None).unwrap().0
}

fn span(subject: &[u8], pattern: &[u8]) -> Option<(usize, usize)> {
    find(subject, pattern, 1, false)
        .unwrap()
        .map(|f| (f.start, f.end))
}

#[test]
fn test_frontier_gsub() {
    assert_eq!(sub(b"aaa aa a aaa a", b"%f[%w]a", "x"), b"xaa xa x xaa x");
    assert_eq!(sub(b"[[]] [][] [[[[", b"%f[[].", "x"), b"x[]] x]x] x[[[");
    assert_eq!(sub(b"01abc45de3", b"%f[%d]", "."), b".01abc.45de.3");
    assert_eq!(sub(b"01abc45 de3x", b"%f[%D]%w", "."), b"01.bc45 de3.");
    assert_eq!(sub(b"function", b"%f[^\0]%w", "."), b".unction");
    assert_eq!(sub(b"function", b"%f[\0]", "."), b"function.");
}

#[test]
fn test_frontier_all_caps_word() {
    assert_eq!(
        gsub(b"THE (quick) fox", b"%f[%a]%u+%f[%A]", "X".into(), None),
        Ok((b"X (quick) fox".to_vec(), 1))
    );
}

#[test]
fn test_frontier_subject_edges() {
    assert_eq!(span(b"a", b"%f[a]"), Some((1, 0)));
    assert_eq!(span(b"a", b"%f[^%z]"), Some((1, 0)));
    assert_eq!(span(b"a", b"%f[^%l]"), Some((2, 1)));
    assert_eq!(span(b"aba", b"%f[a%z]"), Some((3, 2)));
    assert_eq!(span(b"aba", b"%f[%z]"), Some((4, 3)));
    assert_eq!(span(b"aba", b"%f[%l%z]"), None);
    assert_eq!(span(b"aba", b"%f[^%l%z]"), None);
}

#[test]
fn test_frontier_chains() {
    assert_eq!(
        span(b" alo aalo allo", b"%f[%S].-%f[%s].-%f[%S]"),
        Some((2, 5))
    );
    assert_eq!(
        r#match(b" alo aalo allo", b"%f[%S](.-%f[%s].-%f[%S])", 1)
            .unwrap()
            .unwrap()
            .to_vec(),
        vec![Capture::Bytes(b"alo ")]
    );
}

fn is_balanced(s: &[u8]) -> bool {
    let (stripped, _) = gsub(s, b"%b()", "".into(), None).unwrap();
    find(&stripped, b"[()]", 1, false).unwrap().is_none()
}

#[test]
fn test_balance_strips_groups() {
    assert!(is_balanced(b"(9 ((8))(\0) 7) \0\0 a b ()(c)() a"));
    assert!(!is_balanced(b"(9 ((8) 7) a b (\0 c) a"));
}

#[test]
fn test_balance_same_delimiters() {
    assert_eq!(sub(b"alo 'oi' alo", b"%b''", "\""), b"alo \" alo");
}

#[test]
fn test_balance_match() {
    assert_eq!(
        r#match(b"f(a(b)c) + g(d)", b"%w%b()", 1)
            .unwrap()
            .unwrap()
            .to_vec(),
        vec![Capture::Bytes(b"f(a(b)c)")]
    );
    assert_eq!(span(b"(open", b"%b()"), None);
    assert_eq!(span(b"x[y]z", b"%b[]"), Some((2, 4)));
}
