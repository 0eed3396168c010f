// Replacement values for gsub: template string, lookup table, or callback

use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::error::{PatternError, PatternResult};
use crate::pattern::{Capture, Captures};

/// What to put in place of each match.
pub enum Repl<'r> {
    /// Template text: `%0` whole match, `%1`-`%9` captures, `%%` the escape
    /// byte itself (with the configured escape byte in place of `%`).
    Template(&'r [u8]),
    /// Keyed by the first capture, or the whole match if there is none.
    Lookup(&'r dyn Lookup),
    /// Called with all captures of each match.
    Call(&'r mut dyn FnMut(&Captures<'_>) -> ReplValue),
}

impl<'r> From<&'r [u8]> for Repl<'r> {
    fn from(template: &'r [u8]) -> Self {
        Repl::Template(template)
    }
}

impl<'r> From<&'r str> for Repl<'r> {
    fn from(template: &'r str) -> Self {
        Repl::Template(template.as_bytes())
    }
}

/// Value produced by a lookup or callback replacement, shaped like the
/// values a scripting host hands back.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplValue {
    Nil,
    Bool(bool),
    Integer(i64),
    Number(f64),
    Bytes(Vec<u8>),
    /// Any other host value; carries its type name for error messages.
    Opaque(&'static str),
}

impl ReplValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            ReplValue::Nil => "nil",
            ReplValue::Bool(_) => "boolean",
            ReplValue::Integer(_) | ReplValue::Number(_) => "number",
            ReplValue::Bytes(_) => "string",
            ReplValue::Opaque(name) => *name,
        }
    }

    /// Append this value in place of `matched`. `nil` and `false` keep the
    /// original text; strings and numbers are written out; anything else is
    /// an error.
    pub fn write_or_keep(&self, out: &mut Vec<u8>, matched: &[u8]) -> PatternResult<()> {
        match self {
            ReplValue::Nil | ReplValue::Bool(false) => out.extend_from_slice(matched),
            ReplValue::Bytes(b) => out.extend_from_slice(b),
            ReplValue::Integer(n) => {
                let mut buffer = itoa::Buffer::new();
                out.extend_from_slice(buffer.format(*n).as_bytes());
            }
            ReplValue::Number(n) => out.extend_from_slice(fmt_number(*n).as_bytes()),
            ReplValue::Bool(true) | ReplValue::Opaque(_) => {
                return Err(PatternError::InvalidReplacementValue(self.type_name()));
            }
        }
        Ok(())
    }
}

/// Float to text the way Lua prints it: integral values keep a `.0`.
fn fmt_number(n: f64) -> String {
    if n.is_nan() {
        String::from(if n.is_sign_negative() { "-nan" } else { "nan" })
    } else if n.is_infinite() {
        String::from(if n < 0.0 { "-inf" } else { "inf" })
    } else if n.fract() == 0.0 && n.abs() < 1e16 {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}

impl From<&str> for ReplValue {
    fn from(s: &str) -> Self {
        ReplValue::Bytes(s.as_bytes().to_vec())
    }
}

impl From<String> for ReplValue {
    fn from(s: String) -> Self {
        ReplValue::Bytes(s.into_bytes())
    }
}

impl From<&[u8]> for ReplValue {
    fn from(b: &[u8]) -> Self {
        ReplValue::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for ReplValue {
    fn from(b: Vec<u8>) -> Self {
        ReplValue::Bytes(b)
    }
}

impl From<i64> for ReplValue {
    fn from(n: i64) -> Self {
        ReplValue::Integer(n)
    }
}

impl From<f64> for ReplValue {
    fn from(n: f64) -> Self {
        ReplValue::Number(n)
    }
}

impl From<bool> for ReplValue {
    fn from(b: bool) -> Self {
        ReplValue::Bool(b)
    }
}

impl<T: Into<ReplValue>> From<Option<T>> for ReplValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ReplValue::Nil, Into::into)
    }
}

/// A table consulted by `Repl::Lookup`.
pub trait Lookup {
    fn lookup(&self, key: &Capture<'_>) -> ReplValue;
}

impl<S: BuildHasher> Lookup for HashMap<Vec<u8>, Vec<u8>, S> {
    fn lookup(&self, key: &Capture<'_>) -> ReplValue {
        key.as_bytes().and_then(|k| self.get(k)).cloned().into()
    }
}

impl<S: BuildHasher> Lookup for HashMap<String, String, S> {
    fn lookup(&self, key: &Capture<'_>) -> ReplValue {
        key.as_bytes()
            .and_then(|k| std::str::from_utf8(k).ok())
            .and_then(|k| self.get(k))
            .map(String::as_str)
            .into()
    }
}

impl<S: BuildHasher> Lookup for HashMap<usize, Vec<u8>, S> {
    fn lookup(&self, key: &Capture<'_>) -> ReplValue {
        key.as_position().and_then(|k| self.get(&k)).cloned().into()
    }
}

impl<S: BuildHasher> Lookup for HashMap<Vec<u8>, ReplValue, S> {
    fn lookup(&self, key: &Capture<'_>) -> ReplValue {
        key.as_bytes()
            .and_then(|k| self.get(k))
            .cloned()
            .unwrap_or(ReplValue::Nil)
    }
}
