//! Input normalisation ahead of the exact search.
//!
//! Empty sequences impose no embedding constraint and structurally identical
//! sequences impose the same constraint twice, yet both multiply the solver's
//! state space. Normalisation removes them while keeping first-seen order.

use crate::traits::{sequences_eq, ElementEq};

/// Outcome of normalising a list of sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized<'a, T> {
    /// No non-empty sequence remained.
    Empty,
    /// Exactly one distinct non-empty sequence remained; it is its own SCS.
    Single(&'a [T]),
    /// Two or more distinct non-empty sequences, in first-seen order.
    Many(Vec<&'a [T]>),
}

impl<'a, T> Normalized<'a, T> {
    /// Number of distinct non-empty sequences.
    pub fn len(&self) -> usize {
        match self {
            Normalized::Empty => 0,
            Normalized::Single(_) => 1,
            Normalized::Many(seqs) => seqs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Normalized::Empty)
    }

    /// Borrowed views of the remaining sequences.
    pub fn into_vec(self) -> Vec<&'a [T]> {
        match self {
            Normalized::Empty => Vec::new(),
            Normalized::Single(seq) => vec![seq],
            Normalized::Many(seqs) => seqs,
        }
    }
}

/// Drop empty sequences and collapse structural duplicates.
///
/// Pure and infallible: degenerate inputs map to [`Normalized::Empty`] or
/// [`Normalized::Single`]. Deduplication compares whole sequences with `eq`,
/// so it is quadratic in the number of sequences; callers are expected to
/// pass a handful of short orderings.
pub fn normalize<'a, T, S, E>(sequences: &'a [S], eq: &E) -> Normalized<'a, T>
where
    S: AsRef<[T]>,
    E: ElementEq<T> + ?Sized,
{
    let non_empty: Vec<&'a [T]> = sequences
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty())
        .collect();

    match non_empty.len() {
        0 => return Normalized::Empty,
        1 => return Normalized::Single(non_empty[0]),
        _ => {}
    }

    let mut distinct: Vec<&'a [T]> = Vec::with_capacity(non_empty.len());
    for seq in non_empty {
        if !distinct.iter().any(|kept| sequences_eq(kept, seq, eq)) {
            distinct.push(seq);
        }
    }

    if distinct.len() == 1 {
        Normalized::Single(distinct[0])
    } else {
        Normalized::Many(distinct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::StructuralEq;

    #[test]
    fn empty_input_and_all_empty_sequences() {
        let none: Vec<Vec<u8>> = Vec::new();
        assert_eq!(normalize(&none, &StructuralEq), Normalized::Empty);

        let blanks: Vec<Vec<u8>> = vec![vec![], vec![], vec![]];
        assert_eq!(normalize(&blanks, &StructuralEq), Normalized::Empty);
    }

    #[test]
    fn single_survivor_is_returned_verbatim() {
        let seqs = vec![vec![], vec![1, 2, 3], vec![]];
        assert_eq!(normalize(&seqs, &StructuralEq), Normalized::Single(&[1, 2, 3][..]));
    }

    #[test]
    fn duplicates_collapse_to_single() {
        let seqs = vec![vec!['a', 'b'], vec!['a', 'b'], vec!['a', 'b']];
        assert_eq!(normalize(&seqs, &StructuralEq), Normalized::Single(&['a', 'b'][..]));
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let seqs = vec![vec![3, 1], vec![1, 2], vec![3, 1], vec![], vec![2], vec![1, 2]];
        let n = normalize(&seqs, &StructuralEq);
        assert_eq!(n.len(), 3);
        assert_eq!(n.into_vec(), vec![&[3, 1][..], &[1, 2][..], &[2][..]]);
    }

    #[test]
    fn prefix_is_not_a_duplicate() {
        let seqs = vec![vec![1, 2], vec![1, 2, 3]];
        assert_eq!(normalize(&seqs, &StructuralEq).len(), 2);
    }

    #[test]
    fn custom_predicate_drives_dedup() {
        let seqs = vec![vec!["A", "b"], vec!["a", "B"]];
        let ci = |x: &&str, y: &&str| x.eq_ignore_ascii_case(y);
        assert_eq!(normalize(&seqs, &ci), Normalized::Single(&["A", "b"][..]));
    }
}
