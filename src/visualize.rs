//! Plain-text grid of an alignment, for diagnostics and test failures.
//!
//! ```text
//! scs | X | A | B | Y
//! 0   | X | A | B
//! 1
//! 2   |   | A | B | Y
//! ```

use std::fmt::{Display, Write};

use crate::alignment::{compute_alignments, ScsResult};
use crate::traits::StructuralEq;

const HEADER_LABEL: &str = "scs";

/// Render `sequences` aligned onto `supersequence`.
///
/// Alignments are recomputed with [`PartialEq`]; elements of a sequence that
/// do not embed are simply not shown.
pub fn visualize_alignment<T, S>(sequences: &[S], supersequence: &[T]) -> String
where
    T: PartialEq + Clone + Display,
    S: AsRef<[T]>,
{
    let result = ScsResult {
        supersequence: supersequence.to_vec(),
        alignments: compute_alignments(sequences, supersequence, &StructuralEq),
        sequence_count: sequences.len(),
    };
    render_result(&result)
}

/// Render a computed result: one row for the supersequence, then one row per
/// original sequence with blanks where it has no element.
pub fn render_result<T: Display>(result: &ScsResult<T>) -> String {
    let cols = result.supersequence.len();
    let header: Vec<String> = result.supersequence.iter().map(ToString::to_string).collect();

    let mut rows: Vec<Vec<Option<String>>> = vec![vec![None; cols]; result.sequence_count];
    for a in &result.alignments {
        if let Some(cell) = rows
            .get_mut(a.sequence_index)
            .and_then(|row| row.get_mut(a.supersequence_position))
        {
            *cell = Some(a.element.to_string());
        }
    }

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            if let Some(c) = cell {
                *w = (*w).max(c.chars().count());
            }
        }
    }
    let label_width = HEADER_LABEL
        .len()
        .max(result.sequence_count.saturating_sub(1).to_string().len());

    let mut out = String::new();
    push_line(&mut out, HEADER_LABEL, label_width, header.iter().map(Some), &widths);
    for (idx, row) in rows.iter().enumerate() {
        out.push('\n');
        // Rows stop after their last element; trailing gaps are not drawn.
        let used = row.iter().rposition(Option::is_some).map_or(0, |last| last + 1);
        push_line(
            &mut out,
            &idx.to_string(),
            label_width,
            row[..used].iter().map(Option::as_ref),
            &widths,
        );
    }
    out
}

fn push_line<'c, I>(out: &mut String, label: &str, label_width: usize, cells: I, widths: &[usize])
where
    I: Iterator<Item = Option<&'c String>>,
{
    let start = out.len();
    let _ = write!(out, "{label:<label_width$}");
    for (cell, &w) in cells.zip(widths) {
        let text = cell.map_or("", String::as_str);
        let _ = write!(out, " | {text:<w$}");
    }
    let trimmed = out[start..].trim_end().len();
    out.truncate(start + trimmed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_gaps_as_blanks() {
        let seqs = vec![vec!['A', 'B', 'C'], vec!['A', 'C']];
        let grid = visualize_alignment(&seqs, &['A', 'B', 'C']);
        assert_eq!(grid, "scs | A | B | C\n0   | A | B | C\n1   | A |   | C");
    }

    #[test]
    fn columns_widen_to_longest_cell() {
        let seqs = vec![vec![7, 100], vec![7]];
        let grid = visualize_alignment(&seqs, &[7, 100]);
        assert_eq!(grid, "scs | 7 | 100\n0   | 7 | 100\n1   | 7");
    }

    #[test]
    fn inner_gaps_are_drawn_and_trailing_gaps_are_not() {
        let seqs = vec![vec![1, 3], vec![1, 2], vec![], vec![2, 3]];
        let grid = visualize_alignment(&seqs, &[1, 2, 3]);
        assert_eq!(
            grid,
            "scs | 1 | 2 | 3\n0   | 1 |   | 3\n1   | 1 | 2\n2\n3   |   | 2 | 3"
        );
        assert!(grid.lines().all(|line| !line.ends_with('|')));
    }

    #[test]
    fn concatenation_fallback_rows_end_at_last_element() {
        let seqs = vec![vec![1, 2, 3], vec![4, 5]];
        let grid = visualize_alignment(&seqs, &[1, 2, 3, 4, 5]);
        assert_eq!(
            grid,
            "scs | 1 | 2 | 3 | 4 | 5\n0   | 1 | 2 | 3\n1   |   |   |   | 4 | 5"
        );
    }

    #[test]
    fn empty_inputs_render_header_only() {
        let seqs: Vec<Vec<u8>> = vec![vec![]];
        let grid = visualize_alignment(&seqs, &[]);
        assert_eq!(grid, "scs\n0");
        let none: Vec<Vec<u8>> = Vec::new();
        assert_eq!(visualize_alignment(&none, &[]), "scs");
    }
}
