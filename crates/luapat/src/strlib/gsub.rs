// gsub: rebuild the subject with every match replaced

use super::find::split_anchor;
use super::repl::Repl;
use crate::error::{PatternError, PatternResult};
use crate::options::MatchOptions;
use crate::pattern::MatchState;

/// `gsub` with default options.
pub fn gsub(
    subject: &[u8],
    pattern: &[u8],
    repl: Repl<'_>,
    max_count: Option<usize>,
) -> PatternResult<(Vec<u8>, usize)> {
    gsub_with(subject, pattern, repl, max_count, &MatchOptions::default())
}

/// Replace up to `max_count` matches of `pattern` in `subject` (all of them
/// when `None`). Returns the new text and the number of substitutions.
///
/// A leading `^` anchors the pattern to the start of the subject, so at most
/// one substitution happens. An empty match right where the previous match
/// ended is not counted; one byte is copied instead.
pub fn gsub_with(
    subject: &[u8],
    pattern: &[u8],
    mut repl: Repl<'_>,
    max_count: Option<usize>,
    opts: &MatchOptions,
) -> PatternResult<(Vec<u8>, usize)> {
    opts.validate()?;
    let max_count = max_count.unwrap_or(subject.len() + 1);
    let (anchor, pat) = split_anchor(pattern);
    if anchor {
        trace!("anchored gsub for {:?}", pat);
    }

    let mut ms = MatchState::new(subject, pat, opts);
    let mut out = Vec::with_capacity(subject.len());
    let mut src = 0;
    let mut last_match = None;
    let mut n = 0;

    while n < max_count {
        ms.reset();
        match ms.do_match(src, 0)? {
            Some(e) if Some(e) != last_match => {
                n += 1;
                add_value(&ms, &mut out, src, e, &mut repl)?;
                src = e;
                last_match = Some(e);
            }
            _ if src < subject.len() => {
                out.push(subject[src]);
                src += 1;
            }
            _ => break,
        }
        if anchor {
            break;
        }
    }
    out.extend_from_slice(&subject[src..]);

    debug!("gsub made {} substitutions", n);
    Ok((out, n))
}

/// Append the replacement for the match `s..e`.
fn add_value(
    ms: &MatchState<'_, '_>,
    out: &mut Vec<u8>,
    s: usize,
    e: usize,
    repl: &mut Repl<'_>,
) -> PatternResult<()> {
    let value = match repl {
        Repl::Template(template) => return add_template(ms, out, s, e, *template),
        Repl::Lookup(table) => table.lookup(&ms.get_capture(0, Some((s, e)))?),
        Repl::Call(f) => (*f)(&ms.get_captures(Some((s, e)))?),
    };
    value.write_or_keep(out, &ms.text[s..e])
}

/// Expand a replacement template for the match `s..e`.
fn add_template(
    ms: &MatchState<'_, '_>,
    out: &mut Vec<u8>,
    s: usize,
    e: usize,
    template: &[u8],
) -> PatternResult<()> {
    let esc = ms.esc;
    let mut bytes = template.iter().copied();
    while let Some(c) = bytes.next() {
        if c != esc {
            out.push(c);
            continue;
        }
        // Digits are checked before the escape byte itself
        match bytes.next() {
            Some(b'0') => out.extend_from_slice(&ms.text[s..e]),
            Some(d @ b'1'..=b'9') => {
                ms.get_capture((d - b'1') as usize, Some((s, e)))?
                    .write_to(out);
            }
            Some(d) if d == esc => out.push(esc),
            _ => {
                return Err(PatternError::InvalidReplacementEscape { esc: esc as char });
            }
        }
    }
    Ok(())
}
