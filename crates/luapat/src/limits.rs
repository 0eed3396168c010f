//! Centralized pattern-matching limits and syntax constants.
//!
//! Mirrors the `luaconf.h` / `lstrlib.c` defaults. All magic numbers that
//! control matcher behavior are collected here for easy tuning.

// ===== Captures =====

/// Maximum number of captures a single pattern can open.
/// Matches Lua's LUA_MAXCAPTURES.
pub const MAXCAPTURES: usize = 32;

// ===== Recursion =====

/// Default recursion budget for one match attempt.
/// Matches Lua's MAXCCALLS for `match`.
pub const MAXCCALLS: usize = 200;

// ===== Syntax =====

/// Default escape byte for classes, `%b`, `%f`, back-references and
/// replacement templates.
pub const ESCAPE: u8 = b'%';

/// Bytes that force the matcher instead of the plain search, not counting
/// the escape byte itself.
pub const SPECIALS: &[u8] = b"^$*+?.([-";

/// Bytes that cannot serve as the escape byte.
pub const FORBIDDEN_ESCAPES: &[u8] = b"^$*+?.([-)]";
