// Capture materialization: turns the capture stack of a finished match into
// values callers can keep.

use super::matcher::{CaptureRecord, MatchState};
use crate::error::{PatternError, PatternResult};
use crate::limits::MAXCAPTURES;

/// A capture value returned to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture<'s> {
    /// Substring of the subject
    Bytes(&'s [u8]),
    /// 1-based subject position, from a `()` capture
    Position(usize),
}

impl<'s> Capture<'s> {
    pub fn as_bytes(&self) -> Option<&'s [u8]> {
        match *self {
            Capture::Bytes(b) => Some(b),
            Capture::Position(_) => None,
        }
    }

    pub fn as_position(&self) -> Option<usize> {
        match *self {
            Capture::Bytes(_) => None,
            Capture::Position(p) => Some(p),
        }
    }

    /// Append the text form of this capture: the bytes themselves, or the
    /// decimal position.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        match *self {
            Capture::Bytes(b) => out.extend_from_slice(b),
            Capture::Position(p) => {
                let mut buffer = itoa::Buffer::new();
                out.extend_from_slice(buffer.format(p).as_bytes());
            }
        }
    }
}

/// Fixed-size capture results: avoids Vec allocation on every match
#[derive(Debug, Clone, Copy)]
pub struct Captures<'s> {
    data: [Capture<'s>; MAXCAPTURES],
    count: usize,
}

impl<'s> Captures<'s> {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            data: [Capture::Position(0); MAXCAPTURES],
            count: 0,
        }
    }

    #[inline(always)]
    fn push(&mut self, cap: Capture<'s>) {
        self.data[self.count] = cap;
        self.count += 1;
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub fn iter(&self) -> std::slice::Iter<'_, Capture<'s>> {
        self.data[..self.count].iter()
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&Capture<'s>> {
        self.data[..self.count].get(index)
    }

    #[inline(always)]
    pub fn first(&self) -> Option<&Capture<'s>> {
        self.get(0)
    }

    pub fn as_slice(&self) -> &[Capture<'s>] {
        &self.data[..self.count]
    }

    pub fn to_vec(&self) -> Vec<Capture<'s>> {
        self.as_slice().to_vec()
    }
}

impl Default for Captures<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Captures<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, 's> IntoIterator for &'a Captures<'s> {
    type Item = &'a Capture<'s>;
    type IntoIter = std::slice::Iter<'a, Capture<'s>>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.data[..self.count].iter()
    }
}

// Substrings serialize as (lossy UTF-8) strings, positions as integers.
#[cfg(feature = "serde")]
impl serde::Serialize for Capture<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Capture::Bytes(b) => serializer.serialize_str(&String::from_utf8_lossy(b)),
            Capture::Position(p) => serializer.serialize_u64(p as u64),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Captures<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'s> MatchState<'s, '_> {
    /// Capture `i` of a match spanning `whole`. With no capture opened,
    /// index 0 stands for the whole match.
    pub(crate) fn get_capture(
        &self,
        i: usize,
        whole: Option<(usize, usize)>,
    ) -> PatternResult<Capture<'s>> {
        if i >= self.level {
            return match whole {
                Some((s, e)) if i == 0 => Ok(Capture::Bytes(&self.text[s..e])),
                _ => Err(PatternError::InvalidCaptureIndex {
                    esc: self.esc as char,
                    index: i + 1,
                }),
            };
        }
        match self.captures[i] {
            CaptureRecord::Open { .. } => Err(PatternError::UnfinishedCapture),
            CaptureRecord::Position { start } => Ok(Capture::Position(start + 1)),
            CaptureRecord::Closed { start, len } => {
                Ok(Capture::Bytes(&self.text[start..start + len]))
            }
        }
    }

    /// All captures of a finished match. `whole` is the match span, used as
    /// the single capture when the pattern opened none; `find` passes `None`
    /// so it reports only explicit captures.
    pub(crate) fn get_captures(&self, whole: Option<(usize, usize)>) -> PatternResult<Captures<'s>> {
        let nlevels = if self.level == 0 && whole.is_some() {
            1
        } else {
            self.level
        };
        let mut result = Captures::new();
        for i in 0..nlevels {
            result.push(self.get_capture(i, whole)?);
        }
        Ok(result)
    }
}
