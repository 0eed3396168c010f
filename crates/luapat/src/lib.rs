// Lua Patterns
// Byte-oriented find / match / gmatch / gsub with Lua 5.3 pattern syntax

#[macro_use]
mod macros;

#[cfg(test)]
mod test;

pub mod error;
pub mod limits;
pub mod options;
/// Pattern items and the capture types handed out by the operations. The
/// matcher and its capture stack stay internal:
///
/// ```compile_fail
/// let opts = luapat::MatchOptions::default();
/// let _ms = luapat::pattern::MatchState::new(b"abc", b"(b)", &opts);
/// ```
pub mod pattern;
pub mod plain;
pub mod strlib;

pub use error::{PatternError, PatternResult};
pub use options::MatchOptions;
pub use pattern::{Capture, Captures};
pub use strlib::{
    Found, GMatch, Lookup, Repl, ReplValue, find, find_with, gmatch, gmatch_with, gsub, gsub_with,
    r#match, match_with,
};
