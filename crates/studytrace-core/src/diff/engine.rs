//! Diff computation engine.
//!
//! The core entry point is [`compute_diff`], which accepts two plain-text
//! blobs and produces a [`ContentDiff`]. Granularity is token-level: the
//! input is split into alternating runs of whitespace and non-whitespace, so
//! a one-word edit inside a sentence diffs to that word, not the whole
//! sentence, and concatenating the tokens reproduces the input byte-for-byte.

use crate::diff::model::{ContentDiff, DiffOp, DiffSegment};

/// Upper bound on the LCS table size.
///
/// Inputs whose token-count product exceeds this fall back to a whole-text
/// delete+insert pair, which is still an exact diff.
const LCS_CELL_LIMIT: usize = 1_000_000;

/// Compute a structural diff transforming `before` into `after`.
///
/// Total over all inputs: equal texts yield the identity diff, an empty
/// `before` yields a single full insert, an empty `after` a single full
/// delete. [`ContentDiff::apply`] on `before` always reconstructs `after`
/// exactly.
pub fn compute_diff(before: &str, after: &str) -> ContentDiff {
    if before == after {
        return ContentDiff::identity();
    }
    if before.is_empty() {
        return ContentDiff::new(vec![DiffSegment::new(DiffOp::Insert, after)]);
    }
    if after.is_empty() {
        return ContentDiff::new(vec![DiffSegment::new(DiffOp::Delete, before)]);
    }

    let a = tokenize(before);
    let b = tokenize(after);

    if a.len().saturating_mul(b.len()) > LCS_CELL_LIMIT {
        return ContentDiff::new(vec![
            DiffSegment::new(DiffOp::Delete, before),
            DiffSegment::new(DiffOp::Insert, after),
        ]);
    }

    let table = lcs_table(&a, &b);
    let ops = backtrack(&a, &b, &table);
    ContentDiff::new(merge(ops))
}

/// Split text into alternating whitespace / non-whitespace runs.
///
/// Concatenating the tokens reproduces the input exactly.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;

    for (idx, ch) in text.char_indices() {
        let ws = ch.is_whitespace();
        match in_whitespace {
            Some(prev) if prev != ws => {
                tokens.push(&text[start..idx]);
                start = idx;
                in_whitespace = Some(ws);
            }
            None => in_whitespace = Some(ws),
            _ => {}
        }
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

/// Build the suffix LCS-length table: `table[i][j]` is the LCS length of
/// `a[i..]` and `b[j..]`, stored flat with stride `b.len() + 1`.
fn lcs_table(a: &[&str], b: &[&str]) -> Vec<u32> {
    let stride = b.len() + 1;
    let mut table = vec![0u32; (a.len() + 1) * stride];

    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            table[i * stride + j] = if a[i] == b[j] {
                table[(i + 1) * stride + j + 1] + 1
            } else {
                table[(i + 1) * stride + j].max(table[i * stride + j + 1])
            };
        }
    }
    table
}

/// Walk the LCS table forward, emitting one op per token.
///
/// On a tie the delete side wins, so within one change hunk every delete
/// precedes every insert.
fn backtrack(a: &[&str], b: &[&str], table: &[u32]) -> Vec<(DiffOp, String)> {
    let stride = b.len() + 1;
    let mut ops = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            ops.push((DiffOp::Keep, a[i].to_string()));
            i += 1;
            j += 1;
        } else if table[(i + 1) * stride + j] >= table[i * stride + j + 1] {
            ops.push((DiffOp::Delete, a[i].to_string()));
            i += 1;
        } else {
            ops.push((DiffOp::Insert, b[j].to_string()));
            j += 1;
        }
    }
    for token in &a[i..] {
        ops.push((DiffOp::Delete, token.to_string()));
    }
    for token in &b[j..] {
        ops.push((DiffOp::Insert, token.to_string()));
    }
    ops
}

/// Merge adjacent ops of the same kind into contiguous segments.
fn merge(ops: Vec<(DiffOp, String)>) -> Vec<DiffSegment> {
    let mut segments: Vec<DiffSegment> = Vec::new();
    for (op, text) in ops {
        match segments.last_mut() {
            Some(last) if last.op == op => last.text.push_str(&text),
            _ => segments.push(DiffSegment::new(op, text)),
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_inputs_yield_identity() {
        assert!(compute_diff("same text", "same text").is_empty());
        assert!(compute_diff("", "").is_empty());
    }

    #[test]
    fn test_empty_before_is_single_insert() {
        let diff = compute_diff("", "hello");

        assert_eq!(
            diff.segments,
            vec![DiffSegment::new(DiffOp::Insert, "hello")]
        );
    }

    #[test]
    fn test_empty_after_is_single_delete() {
        let diff = compute_diff("hello", "");

        assert_eq!(
            diff.segments,
            vec![DiffSegment::new(DiffOp::Delete, "hello")]
        );
    }

    #[test]
    fn test_word_change_is_localized() {
        let diff = compute_diff("the cat sat", "the cats sat");

        assert_eq!(
            diff.segments,
            vec![
                DiffSegment::new(DiffOp::Keep, "the "),
                DiffSegment::new(DiffOp::Delete, "cat"),
                DiffSegment::new(DiffOp::Insert, "cats"),
                DiffSegment::new(DiffOp::Keep, " sat"),
            ]
        );
    }

    #[test]
    fn test_deletes_precede_inserts_in_a_hunk() {
        let diff = compute_diff("one two", "three four");

        let first_insert = diff
            .segments
            .iter()
            .position(|s| s.op == DiffOp::Insert)
            .unwrap();
        let last_delete = diff
            .segments
            .iter()
            .rposition(|s| s.op == DiffOp::Delete)
            .unwrap();
        assert!(last_delete < first_insert);
    }

    #[test]
    fn test_apply_reconstructs_after() {
        let cases = [
            ("cat", "cats"),
            ("the cat sat", "the cats sat on the mat"),
            ("a b c d", "a c d e"),
            ("", "x"),
            ("x", ""),
            ("tabs\tand  spaces", "tabs and spaces"),
        ];
        for (before, after) in cases {
            let diff = compute_diff(before, after);
            assert_eq!(
                diff.apply(before).unwrap(),
                after,
                "reconstruction failed for {:?} -> {:?}",
                before,
                after
            );
        }
    }

    #[test]
    fn test_tokenize_round_trips() {
        let text = " leading and\ttrailing ";
        let tokens = tokenize(text);

        assert_eq!(tokens.concat(), text);
    }

    #[test]
    fn test_oversized_input_falls_back_to_replace() {
        // Token-pair product over the cell budget, with no shared tokens
        let before = "a ".repeat(1100);
        let after = "b ".repeat(1100);
        let diff = compute_diff(&before, &after);

        assert_eq!(diff.segments.len(), 2);
        assert_eq!(diff.apply(&before).unwrap(), after);
    }
}
