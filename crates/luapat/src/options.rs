use crate::error::{PatternError, PatternResult};
use crate::limits::{ESCAPE, FORBIDDEN_ESCAPES, MAXCCALLS, SPECIALS};

/// Per-call knobs for the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchOptions {
    /// Recursion budget for one match attempt. Reaching zero reports
    /// "pattern too complex".
    pub max_depth: usize,
    /// Escape byte used by the pattern syntax and replacement templates.
    pub escape: u8,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_depth: MAXCCALLS,
            escape: ESCAPE,
        }
    }
}

impl MatchOptions {
    /// Options with a different escape byte. Bytes with a meaning of their
    /// own in the syntax are refused.
    pub fn with_escape(escape: u8) -> PatternResult<Self> {
        let opts = Self {
            escape,
            ..Self::default()
        };
        opts.validate()?;
        Ok(opts)
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> PatternResult<()> {
        if FORBIDDEN_ESCAPES.contains(&self.escape) {
            return Err(PatternError::InvalidEscape(self.escape as char));
        }
        Ok(())
    }

    /// Check if pattern has no special bytes, so a plain substring search
    /// finds exactly what the matcher would.
    #[inline]
    pub fn is_plain(&self, pat: &[u8]) -> bool {
        !pat
            .iter()
            .any(|&c| c == self.escape || SPECIALS.contains(&c))
    }

    /// Load options from a JSON object; missing fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
