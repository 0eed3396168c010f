// gmatch: lazy iteration over successive non-overlapping matches

use crate::error::PatternResult;
use crate::options::MatchOptions;
use crate::pattern::{Captures, MatchState};

/// Iterator over the captures of every match of a pattern in a subject.
///
/// A leading `^` is not an anchor here; it is matched as an ordinary byte.
/// An empty match is produced at most once per position: a match ending
/// where the previous one ended is skipped. After an error the iterator is
/// exhausted.
pub struct GMatch<'s, 'p> {
    ms: MatchState<'s, 'p>,
    /// Next position to try
    src: usize,
    /// End of the last match
    last_match: Option<usize>,
    done: bool,
}

impl<'s, 'p> GMatch<'s, 'p> {
    pub fn new(subject: &'s [u8], pattern: &'p [u8], opts: &MatchOptions) -> PatternResult<Self> {
        opts.validate()?;
        Ok(Self {
            ms: MatchState::new(subject, pattern, opts),
            src: 0,
            last_match: None,
            done: false,
        })
    }

    /// Current scan position (0-based).
    pub fn position(&self) -> usize {
        self.src
    }
}

impl<'s> Iterator for GMatch<'s, '_> {
    type Item = PatternResult<Captures<'s>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let len = self.ms.text.len();
        let mut src = self.src;
        while src <= len {
            self.ms.reset();
            match self.ms.do_match(src, 0) {
                Ok(Some(e)) if Some(e) != self.last_match => {
                    self.src = e;
                    self.last_match = Some(e);
                    let caps = self.ms.get_captures(Some((src, e)));
                    self.done = caps.is_err();
                    return Some(caps);
                }
                Ok(_) => src += 1,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
        self.src = src;
        self.done = true;
        None
    }
}

impl std::iter::FusedIterator for GMatch<'_, '_> {}

/// `gmatch` with default options.
pub fn gmatch<'s, 'p>(subject: &'s [u8], pattern: &'p [u8]) -> GMatch<'s, 'p> {
    GMatch {
        ms: MatchState::new(subject, pattern, &MatchOptions::default()),
        src: 0,
        last_match: None,
        done: false,
    }
}

/// Iterate the matches of `pattern` with explicit options.
pub fn gmatch_with<'s, 'p>(
    subject: &'s [u8],
    pattern: &'p [u8],
    opts: &MatchOptions,
) -> PatternResult<GMatch<'s, 'p>> {
    GMatch::new(subject, pattern, opts)
}
