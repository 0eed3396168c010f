// Pattern items and byte classes
// Handles %a, %d, %l, %u, %w, %s, %p, %c, %g, %x, %z and their uppercase inverses,
// [set] membership, and finding where a single pattern item ends.
//
// Classification is byte-wise with C-locale ASCII meanings; bytes >= 0x80 belong
// to no class.

use crate::error::{PatternError, PatternResult};

/// Return the pattern index after the single item starting at `pat[p]`
/// (past `[set]`, `%x`, or one literal byte). Repetition suffixes are not
/// consumed.
///
/// The first byte of a set body is always a member, so `[]]` and `[^]]` are
/// sets containing `]`.
pub(crate) fn class_end(pat: &[u8], p: usize, esc: u8) -> PatternResult<usize> {
    let c = pat[p];
    let mut q = p + 1;
    if c == esc {
        if q >= pat.len() {
            return Err(PatternError::EndsWithEscape { esc: esc as char });
        }
        return Ok(q + 1);
    }
    if c == b'[' {
        if q < pat.len() && pat[q] == b'^' {
            q += 1;
        }
        // look for a ']'
        loop {
            if q >= pat.len() {
                return Err(PatternError::MissingBracket);
            }
            let member = pat[q];
            q += 1;
            if member == esc && q < pat.len() {
                // skip escapes (e.g. '%]')
                q += 1;
            }
            if q < pat.len() && pat[q] == b']' {
                return Ok(q + 1);
            }
        }
    }
    Ok(q)
}

#[inline(always)]
fn is_space(c: u8) -> bool {
    // C isspace: ' ', \t, \n, \v, \f, \r
    matches!(c, b' ' | b'\t'..=b'\r')
}

/// Check if byte `c` belongs to the class named by `cl`.
/// Lowercase class letters test membership, uppercase ones its complement;
/// any other byte matches only itself (`%.` is a literal dot).
#[inline]
pub(crate) fn match_class(c: u8, cl: u8) -> bool {
    let res = match cl.to_ascii_lowercase() {
        b'a' => c.is_ascii_alphabetic(),
        b'c' => c.is_ascii_control(),
        b'd' => c.is_ascii_digit(),
        b'g' => c.is_ascii_graphic(),
        b'l' => c.is_ascii_lowercase(),
        b'p' => c.is_ascii_punctuation(),
        b's' => is_space(c),
        b'u' => c.is_ascii_uppercase(),
        b'w' => c.is_ascii_alphanumeric(),
        b'x' => c.is_ascii_hexdigit(),
        // deprecated option
        b'z' => c == 0,
        _ => return cl == c,
    };
    if cl.is_ascii_lowercase() { res } else { !res }
}

/// Match byte `c` against the set `pat[p..=ec]`, where `pat[p]` is `[` and
/// `pat[ec]` is the closing `]`.
pub(crate) fn match_bracket_class(c: u8, pat: &[u8], p: usize, ec: usize, esc: u8) -> bool {
    let mut sig = true;
    let mut i = p;
    if pat[i + 1] == b'^' {
        sig = false;
        i += 1;
    }
    loop {
        i += 1;
        if i >= ec {
            break;
        }
        if pat[i] == esc {
            i += 1;
            if match_class(c, pat[i]) {
                return sig;
            }
        } else if pat[i + 1] == b'-' && i + 2 < ec {
            // Range: lo-hi on raw byte values
            i += 2;
            if pat[i - 2] <= c && c <= pat[i] {
                return sig;
            }
        } else if pat[i] == c {
            return sig;
        }
    }
    !sig
}

/// Match the subject byte at `s` (if any) against the item `pat[p..ep]`.
#[inline]
pub(crate) fn single_match(text: &[u8], s: usize, pat: &[u8], p: usize, ep: usize, esc: u8) -> bool {
    let Some(&c) = text.get(s) else {
        return false;
    };
    match pat[p] {
        b'.' => true,
        b if b == esc => match_class(c, pat[p + 1]),
        b'[' => match_bracket_class(c, pat, p, ep - 1, esc),
        b => b == c,
    }
}
