// Pattern errors
//
// Every condition here aborts the whole operation. A pattern that simply
// does not match is never an error; it is an `Ok(None)` / empty result.

use thiserror::Error;

/// A fatal error raised while scanning a pattern, matching, or building a
/// replacement. `esc` is the escape byte in effect, so messages read the way
/// the user wrote the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("malformed pattern (ends with '{esc}')")]
    EndsWithEscape { esc: char },
    #[error("malformed pattern (missing ']')")]
    MissingBracket,
    #[error("malformed pattern (missing arguments to '{esc}b')")]
    MissingBalanceArgs { esc: char },
    #[error("missing '[' after '{esc}f' in pattern")]
    MissingFrontierSet { esc: char },
    #[error("invalid pattern capture")]
    InvalidPatternCapture,
    #[error("invalid capture index {esc}{index}")]
    InvalidCaptureIndex { esc: char, index: usize },
    #[error("unfinished capture")]
    UnfinishedCapture,
    #[error("too many captures")]
    TooManyCaptures,
    #[error("pattern too complex")]
    TooComplex,
    #[error("invalid use of '{esc}' in replacement string")]
    InvalidReplacementEscape { esc: char },
    #[error("invalid replacement value (a {0})")]
    InvalidReplacementValue(&'static str),
    #[error("escape byte {0:?} cannot be any of \"^$*+?.([-)]\"")]
    InvalidEscape(char),
}

impl PatternError {
    /// True for errors detected from the pattern text alone, as opposed to
    /// limits hit while matching or a bad replacement.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            PatternError::EndsWithEscape { .. }
                | PatternError::MissingBracket
                | PatternError::MissingBalanceArgs { .. }
                | PatternError::MissingFrontierSet { .. }
                | PatternError::InvalidPatternCapture
                | PatternError::InvalidCaptureIndex { .. }
                | PatternError::UnfinishedCapture
        )
    }
}

pub type PatternResult<T> = Result<T, PatternError>;
