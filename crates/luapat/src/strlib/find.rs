// find / match: one scan over successive anchor positions

use crate::error::PatternResult;
use crate::options::MatchOptions;
use crate::pattern::{Captures, MatchState};
use crate::plain::find_bytes;

/// Result of a successful `find`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Found<'s> {
    /// 1-based position of the first matched byte
    pub start: usize,
    /// 1-based position of the last matched byte (`start - 1` for an empty
    /// match)
    pub end: usize,
    /// Explicit captures only; empty when the pattern has none
    pub captures: Captures<'s>,
}

impl Found<'_> {
    /// 0-based half-open byte range of the match.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start - 1..self.end
    }
}

/// Translate a 1-based, possibly negative start position into a 0-based
/// index. Negative values count back from the end; anything before the
/// subject clamps to its start, anything past `len + 1` cannot match.
pub fn start_index(init: i64, len: usize) -> Option<usize> {
    let pos = if init >= 0 {
        usize::try_from(init).unwrap_or(usize::MAX)
    } else {
        let back = usize::try_from(init.unsigned_abs()).unwrap_or(usize::MAX);
        if back > len { 0 } else { len - back + 1 }
    };
    let pos = pos.max(1);
    if pos > len + 1 { None } else { Some(pos - 1) }
}

/// Split off a leading `^`, returning whether the pattern is anchored.
#[inline]
pub(crate) fn split_anchor(pattern: &[u8]) -> (bool, &[u8]) {
    match pattern.split_first() {
        Some((b'^', rest)) => (true, rest),
        _ => (false, pattern),
    }
}

/// Try every position from `init` (only `init` itself if anchored).
/// Returns the 0-based match span, leaving the captures in `ms`.
fn scan(ms: &mut MatchState<'_, '_>, init: usize, anchor: bool) -> PatternResult<Option<(usize, usize)>> {
    let mut s1 = init;
    loop {
        ms.reset();
        if let Some(e) = ms.do_match(s1, 0)? {
            return Ok(Some((s1, e)));
        }
        s1 += 1;
        if anchor || s1 > ms.text.len() {
            return Ok(None);
        }
    }
}

/// `find` with default options.
pub fn find<'s>(
    subject: &'s [u8],
    pattern: &[u8],
    init: i64,
    plain: bool,
) -> PatternResult<Option<Found<'s>>> {
    find_with(subject, pattern, init, plain, &MatchOptions::default())
}

/// Locate the first match of `pattern` in `subject` starting at `init`.
/// With `plain`, or when the pattern has no special bytes, this is a literal
/// substring search.
pub fn find_with<'s>(
    subject: &'s [u8],
    pattern: &[u8],
    init: i64,
    plain: bool,
    opts: &MatchOptions,
) -> PatternResult<Option<Found<'s>>> {
    opts.validate()?;
    let Some(init) = start_index(init, subject.len()) else {
        return Ok(None);
    };

    // FAST PATH: explicit request or no special bytes
    if plain || opts.is_plain(pattern) {
        trace!("plain search for {:?} from {}", pattern, init);
        return Ok(find_bytes(&subject[init..], pattern).map(|i| {
            let start = init + i;
            Found {
                start: start + 1,
                end: start + pattern.len(),
                captures: Captures::new(),
            }
        }));
    }

    let (anchor, pat) = split_anchor(pattern);
    let mut ms = MatchState::new(subject, pat, opts);
    match scan(&mut ms, init, anchor)? {
        Some((s, e)) => Ok(Some(Found {
            start: s + 1,
            end: e,
            captures: ms.get_captures(None)?,
        })),
        None => Ok(None),
    }
}

/// `match` with default options.
pub fn r#match<'s>(subject: &'s [u8], pattern: &[u8], init: i64) -> PatternResult<Option<Captures<'s>>> {
    match_with(subject, pattern, init, &MatchOptions::default())
}

/// Captures of the first match of `pattern` at or after `init`; the whole
/// match when the pattern has no captures.
pub fn match_with<'s>(
    subject: &'s [u8],
    pattern: &[u8],
    init: i64,
    opts: &MatchOptions,
) -> PatternResult<Option<Captures<'s>>> {
    opts.validate()?;
    let Some(init) = start_index(init, subject.len()) else {
        return Ok(None);
    };
    let (anchor, pat) = split_anchor(pattern);
    let mut ms = MatchState::new(subject, pat, opts);
    match scan(&mut ms, init, anchor)? {
        Some(span) => ms.get_captures(Some(span)).map(Some),
        None => Ok(None),
    }
}
