// Tests for gmatch iteration
use crate::*;

fn all<'s>(subject: &'s [u8], pattern: &'s [u8]) -> Vec<Vec<Capture<'s>>> {
    gmatch(subject, pattern)
        .map(|caps| caps.unwrap().to_vec())
        .collect()
}

fn positions(subject: &[u8], pattern: &[u8]) -> Vec<usize> {
    gmatch(subject, pattern)
        .map(|caps| caps.unwrap().first().and_then(Capture::as_position).unwrap())
        .collect()
}

#[test]
fn test_gmatch_empty_matches() {
    assert_eq!(positions(b"abcde", b"()"), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(all(b"abc", b"").len(), 4);
}

#[test]
fn test_gmatch_words() {
    let words: Vec<&[u8]> = gmatch(b"first second word", b"%w+")
        .map(|caps| caps.unwrap().first().and_then(Capture::as_bytes).unwrap())
        .collect();
    assert_eq!(words, vec![&b"first"[..], &b"second"[..], &b"word"[..]]);
}

#[test]
fn test_gmatch_back_references() {
    let starts: Vec<usize> = gmatch(b"xuxx uu ppar r", b"()(.)%2")
        .map(|caps| caps.unwrap().first().and_then(Capture::as_position).unwrap())
        .collect();
    assert_eq!(starts, vec![3, 6, 9]);
}

#[test]
fn test_gmatch_pairs() {
    let mut pairs = Vec::new();
    for caps in gmatch(b"13 14 10 = 11, 15= 16, 22=23", b"(%d+)%s*=%s*(%d+)") {
        let caps = caps.unwrap();
        let key: i64 = std::str::from_utf8(caps.get(0).unwrap().as_bytes().unwrap())
            .unwrap()
            .parse()
            .unwrap();
        let value: i64 = std::str::from_utf8(caps.get(1).unwrap().as_bytes().unwrap())
            .unwrap()
            .parse()
            .unwrap();
        pairs.push((key, value));
    }
    assert_eq!(pairs, vec![(10, 11), (15, 16), (22, 23)]);
}

#[test]
fn test_gmatch_frontier_positions() {
    assert_eq!(
        positions(b"alo alo th02 is 1hat", b"()%f[%w%d]"),
        vec![1, 5, 9, 14, 17]
    );
}

#[test]
fn test_gmatch_empty_after_nonempty() {
    assert_eq!(
        all(b"baaac", b"a*"),
        vec![
            vec![Capture::Bytes(b"")],
            vec![Capture::Bytes(b"aaa")],
            vec![Capture::Bytes(b"")],
        ]
    );
}

#[test]
fn test_gmatch_no_match() {
    assert!(all(b"hello", b"%d").is_empty());
    assert!(all(b"", b"a").is_empty());
}

#[test]
fn test_gmatch_unfinished_capture() {
    let mut it = gmatch(b"abc", b"(a");
    assert_eq!(it.next(), Some(Err(PatternError::UnfinishedCapture)));
    assert_eq!(it.next(), None);
}

#[test]
fn test_gmatch_with_options() {
    let opts = MatchOptions::with_escape(b'#').unwrap();
    let words: Vec<Vec<Capture>> = gmatch_with(b"one two", b"#a+", &opts)
        .unwrap()
        .map(|caps| caps.unwrap().to_vec())
        .collect();
    assert_eq!(
        words,
        vec![vec![Capture::Bytes(b"one")], vec![Capture::Bytes(b"two")]]
    );

    let bad = MatchOptions {
        escape: b'*',
        ..MatchOptions::default()
    };
    assert!(matches!(
        gmatch_with(b"x", b"x", &bad),
        Err(PatternError::InvalidEscape('*'))
    ));
}
