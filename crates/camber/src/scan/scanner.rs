//! First-match scanning over mapped image bytes.
//!
//! Scans are anchored on the longest run of literal bytes in the pattern so
//! the hot path is a SIMD substring search; the full mask-qualified pattern
//! is only verified at anchor hits. Patterns with no literal bytes fall back
//! to a position-by-position walk.

use memchr::memmem;

use super::Pattern;

/// First position in `haystack` matching `pattern`, or `None`.
///
/// A miss is not an error: callers treat it as "this field is unsupported on
/// the current game build".
pub fn find_pattern(haystack: &[u8], pattern: &Pattern) -> Option<usize> {
    let bytes = pattern.bytes();
    if haystack.len() < bytes.len() {
        return None;
    }

    let (anchor_offset, anchor) = literal_anchor(bytes);
    if anchor.is_empty() {
        return (0..=haystack.len() - bytes.len())
            .find(|&pos| verify(&haystack[pos..pos + bytes.len()], bytes));
    }

    let finder = memmem::Finder::new(&anchor);
    for anchor_pos in finder.find_iter(haystack) {
        let Some(start) = anchor_pos.checked_sub(anchor_offset) else {
            continue;
        };
        if start + bytes.len() > haystack.len() {
            continue;
        }
        if verify(&haystack[start..start + bytes.len()], bytes) {
            return Some(start);
        }
    }

    None
}

/// All match positions, in order.
pub fn find_all(haystack: &[u8], pattern: &Pattern) -> Vec<usize> {
    let bytes = pattern.bytes();
    if haystack.len() < bytes.len() {
        return Vec::new();
    }

    let (anchor_offset, anchor) = literal_anchor(bytes);
    if anchor.is_empty() {
        return (0..=haystack.len() - bytes.len())
            .filter(|&pos| verify(&haystack[pos..pos + bytes.len()], bytes))
            .collect();
    }

    let finder = memmem::Finder::new(&anchor);
    let mut matches = Vec::new();
    for anchor_pos in finder.find_iter(haystack) {
        let Some(start) = anchor_pos.checked_sub(anchor_offset) else {
            continue;
        };
        if start + bytes.len() > haystack.len() {
            continue;
        }
        if verify(&haystack[start..start + bytes.len()], bytes) {
            matches.push(start);
        }
    }

    matches
}

fn verify(window: &[u8], bytes: &[Option<u8>]) -> bool {
    bytes
        .iter()
        .zip(window)
        .all(|(p, b)| p.is_none_or(|value| value == *b))
}

/// Longest run of consecutive literal bytes, as (offset into pattern, bytes).
fn literal_anchor(bytes: &[Option<u8>]) -> (usize, Vec<u8>) {
    let mut best_start = 0;
    let mut best_len = 0;
    let mut run_start = 0;
    let mut run_len = 0;

    for (i, byte) in bytes.iter().enumerate() {
        if byte.is_some() {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if run_len > best_len {
                best_start = run_start;
                best_len = run_len;
            }
        } else {
            run_len = 0;
        }
    }

    let anchor = bytes[best_start..best_start + best_len]
        .iter()
        .filter_map(|b| *b)
        .collect();
    (best_start, anchor)
}
