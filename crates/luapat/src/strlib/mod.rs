// Driving operations: find, match, gmatch and gsub over byte strings.
//
// Each one runs the matcher at successive start positions and shapes the
// result. Only `find` has a plain substring fast path.

mod find;
mod gmatch;
mod gsub;
mod repl;

pub use find::{Found, find, find_with, r#match, match_with, start_index};
pub use gmatch::{GMatch, gmatch, gmatch_with};
pub use gsub::{gsub, gsub_with};
pub use repl::{Lookup, Repl, ReplValue};
