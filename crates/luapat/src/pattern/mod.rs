// Lua pattern matching: byte-oriented, zero-AST design
//
// Modeled after lstrlib.c. Operates on `&[u8]`; every byte is a "character".
//
// 1. NO AST / parse phase; the pattern is interpreted directly during matching
// 2. Fixed-size capture array (MAXCAPTURES slots); no heap allocation while matching
// 3. MatchState tracks all state for one attempt
// 4. The pattern is walked with index arithmetic (like C pointers)
// 5. Recursion-limited so pathological patterns report an error instead of
//    overflowing the stack

mod capture;
mod class;
mod matcher;

pub use capture::{Capture, Captures};
pub(crate) use matcher::MatchState;
