// Core pattern matching engine: direct interpretation, no AST
//
// Follows lstrlib.c:
// - MatchState holds subject, pattern, capture stack and recursion budget
// - do_match walks the pattern with backtracking, looping in place for
//   sequential items and recursing only at capture boundaries and quantifiers
// - Fixed capture slots (no heap alloc during matching)

use super::class::{class_end, match_bracket_class, single_match};
use crate::error::{PatternError, PatternResult};
use crate::limits::MAXCAPTURES;
use crate::options::MatchOptions;

/// One slot of the capture stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CaptureRecord {
    /// Capture started, not yet closed by `)`.
    Open { start: usize },
    /// `()` marker; records only its offset and is never closed.
    Position { start: usize },
    /// Closed capture covering `start..start + len`.
    Closed { start: usize, len: usize },
}

impl CaptureRecord {
    #[inline(always)]
    pub(crate) fn start(&self) -> usize {
        match *self {
            CaptureRecord::Open { start }
            | CaptureRecord::Position { start }
            | CaptureRecord::Closed { start, .. } => start,
        }
    }
}

/// Match state for one attempt. Subject and pattern are borrowed for the
/// whole call; captures borrow only the subject.
pub(crate) struct MatchState<'s, 'p> {
    pub(crate) text: &'s [u8],
    pub(crate) pat: &'p [u8],
    pub(crate) esc: u8,
    /// Number of capture records opened (finished or not).
    pub(crate) level: usize,
    pub(crate) captures: [CaptureRecord; MAXCAPTURES],
    /// Remaining recursion budget
    depth: usize,
    max_depth: usize,
}

impl<'s, 'p> MatchState<'s, 'p> {
    pub(crate) fn new(text: &'s [u8], pat: &'p [u8], opts: &MatchOptions) -> Self {
        Self {
            text,
            pat,
            esc: opts.escape,
            level: 0,
            captures: [CaptureRecord::Open { start: 0 }; MAXCAPTURES],
            depth: opts.max_depth,
            max_depth: opts.max_depth,
        }
    }

    /// Reset for the next anchor position (avoids re-zeroing the capture array)
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.level = 0;
        self.depth = self.max_depth;
    }

    /// Try to match `pat[p..]` against `text[s..]`.
    /// Returns `Ok(Some(end))` on success, `Ok(None)` if the pattern does not
    /// match here.
    pub(crate) fn do_match(&mut self, s: usize, p: usize) -> PatternResult<Option<usize>> {
        if self.depth == 0 {
            debug!("recursion budget of {} exhausted", self.max_depth);
            return Err(PatternError::TooComplex);
        }
        self.depth -= 1;
        let res = self.match_inner(s, p)?;
        self.depth += 1;
        Ok(res)
    }

    fn match_inner(&mut self, mut s: usize, mut p: usize) -> PatternResult<Option<usize>> {
        let pat = self.pat;
        let esc = self.esc;
        // Tail calls become another turn of this loop
        loop {
            if p == pat.len() {
                return Ok(Some(s));
            }

            match pat[p] {
                b'(' => {
                    return if pat.get(p + 1) == Some(&b')') {
                        self.start_capture(s, p + 2, CaptureRecord::Position { start: s })
                    } else {
                        self.start_capture(s, p + 1, CaptureRecord::Open { start: s })
                    };
                }
                b')' => return self.end_capture(s, p + 1),
                b'$' if p + 1 == pat.len() => {
                    return Ok((s == self.text.len()).then_some(s));
                }
                c if c == esc => match pat.get(p + 1) {
                    Some(b'b') => match self.match_balance(s, p + 2)? {
                        Some(e) => {
                            s = e;
                            p += 4;
                            continue;
                        }
                        None => return Ok(None),
                    },
                    Some(b'f') => {
                        p += 2;
                        if pat.get(p) != Some(&b'[') {
                            return Err(PatternError::MissingFrontierSet { esc: esc as char });
                        }
                        let ep = class_end(pat, p, esc)?;
                        let previous = if s == 0 { 0 } else { self.text[s - 1] };
                        let current = self.text.get(s).copied().unwrap_or(0);
                        if !match_bracket_class(previous, pat, p, ep - 1, esc)
                            && match_bracket_class(current, pat, p, ep - 1, esc)
                        {
                            p = ep;
                            continue;
                        }
                        return Ok(None);
                    }
                    Some(&d) if d.is_ascii_digit() => match self.match_capture(s, d)? {
                        Some(e) => {
                            s = e;
                            p += 2;
                            continue;
                        }
                        None => return Ok(None),
                    },
                    // class escape, handled as an ordinary item
                    _ => {}
                },
                _ => {}
            }

            // Single item (literal, `.`, class, `[set]`) plus optional suffix
            let ep = class_end(pat, p, esc)?;
            let suffix = pat.get(ep).copied();
            if !single_match(self.text, s, pat, p, ep, esc) {
                if matches!(suffix, Some(b'*' | b'?' | b'-')) {
                    // accept empty
                    p = ep + 1;
                    continue;
                }
                return Ok(None);
            }
            match suffix {
                Some(b'?') => {
                    if let Some(res) = self.do_match(s + 1, ep + 1)? {
                        return Ok(Some(res));
                    }
                    p = ep + 1;
                }
                // one match already done
                Some(b'+') => return self.max_expand(s + 1, p, ep),
                Some(b'*') => return self.max_expand(s, p, ep),
                Some(b'-') => return self.min_expand(s, p, ep),
                _ => {
                    s += 1;
                    p = ep;
                }
            }
        }
    }

    /// Greedy repetition: count every byte the item matches, then back off
    /// one at a time until the rest of the pattern matches.
    fn max_expand(&mut self, s: usize, p: usize, ep: usize) -> PatternResult<Option<usize>> {
        let mut i = 0;
        while single_match(self.text, s + i, self.pat, p, ep, self.esc) {
            i += 1;
        }
        loop {
            if let Some(res) = self.do_match(s + i, ep + 1)? {
                return Ok(Some(res));
            }
            if i == 0 {
                return Ok(None);
            }
            i -= 1;
        }
    }

    /// Lazy repetition: try the rest of the pattern first, consuming one more
    /// byte only when it fails.
    fn min_expand(&mut self, mut s: usize, p: usize, ep: usize) -> PatternResult<Option<usize>> {
        loop {
            if let Some(res) = self.do_match(s, ep + 1)? {
                return Ok(Some(res));
            }
            if single_match(self.text, s, self.pat, p, ep, self.esc) {
                s += 1;
            } else {
                return Ok(None);
            }
        }
    }

    fn start_capture(
        &mut self,
        s: usize,
        p: usize,
        record: CaptureRecord,
    ) -> PatternResult<Option<usize>> {
        let level = self.level;
        if level >= MAXCAPTURES {
            return Err(PatternError::TooManyCaptures);
        }
        self.captures[level] = record;
        self.level = level + 1;
        let res = self.do_match(s, p)?;
        if res.is_none() {
            // undo capture
            self.level -= 1;
        }
        Ok(res)
    }

    fn end_capture(&mut self, s: usize, p: usize) -> PatternResult<Option<usize>> {
        let l = self.capture_to_close()?;
        let start = self.captures[l].start();
        self.captures[l] = CaptureRecord::Closed {
            start,
            len: s - start,
        };
        let res = self.do_match(s, p)?;
        if res.is_none() {
            self.captures[l] = CaptureRecord::Open { start };
        }
        Ok(res)
    }

    /// Innermost capture still open.
    fn capture_to_close(&self) -> PatternResult<usize> {
        self.captures[..self.level]
            .iter()
            .rposition(|cap| matches!(cap, CaptureRecord::Open { .. }))
            .ok_or(PatternError::InvalidPatternCapture)
    }

    /// Balanced match `%bxy`; `p` points at `x`.
    fn match_balance(&self, s: usize, p: usize) -> PatternResult<Option<usize>> {
        if p + 1 >= self.pat.len() {
            return Err(PatternError::MissingBalanceArgs {
                esc: self.esc as char,
            });
        }
        let open = self.pat[p];
        let close = self.pat[p + 1];
        if self.text.get(s) != Some(&open) {
            return Ok(None);
        }
        let mut cont = 1usize;
        for (i, &c) in self.text.iter().enumerate().skip(s + 1) {
            if c == close {
                cont -= 1;
                if cont == 0 {
                    return Ok(Some(i + 1));
                }
            } else if c == open {
                cont += 1;
            }
        }
        // subject ends out of balance
        Ok(None)
    }

    /// Back-reference `%1`-`%9` (`d` is the digit byte).
    fn match_capture(&self, s: usize, d: u8) -> PatternResult<Option<usize>> {
        let l = self.check_capture(d)?;
        let CaptureRecord::Closed { start, len } = self.captures[l] else {
            // position captures hold no text
            return Ok(None);
        };
        let captured = &self.text[start..start + len];
        Ok(self.text[s..].starts_with(captured).then_some(s + len))
    }

    fn check_capture(&self, d: u8) -> PatternResult<usize> {
        let index = (d - b'0') as usize;
        match index.checked_sub(1) {
            Some(l) if l < self.level && !matches!(self.captures[l], CaptureRecord::Open { .. }) => {
                Ok(l)
            }
            _ => Err(PatternError::InvalidCaptureIndex {
                esc: self.esc as char,
                index,
            }),
        }
    }
}
