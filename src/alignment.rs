//! Mapping original sequences onto a solved supersequence.
//!
//! Each original sequence is re-embedded independently with a greedy
//! leftmost match: scan the supersequence once and consume the sequence's
//! next element whenever it matches. Given that the supersequence admits the
//! sequence as a subsequence, this always succeeds and yields one valid,
//! deterministic embedding. Because this runs over the original list, empty
//! and duplicate sequences are aligned like any other.

use crate::traits::ElementEq;

/// One element of an original sequence placed in the supersequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceAlignment<T> {
    /// Index of the sequence in the original input list.
    pub sequence_index: usize,
    /// Position of the element within that sequence.
    pub input_position: usize,
    /// Slot of the supersequence the element occupies.
    pub supersequence_position: usize,
    /// The element, as it appears in the original sequence.
    pub element: T,
}

/// A supersequence together with the alignment of every original sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScsResult<T> {
    pub supersequence: Vec<T>,
    /// Grouped by `sequence_index`, ascending, then by `input_position`.
    pub alignments: Vec<SequenceAlignment<T>>,
    /// Number of original sequences, including empty ones.
    pub sequence_count: usize,
}

impl<T> ScsResult<T> {
    /// The empty result for a given number of (necessarily empty) inputs.
    pub fn empty(sequence_count: usize) -> Self {
        Self {
            supersequence: Vec::new(),
            alignments: Vec::new(),
            sequence_count,
        }
    }

    /// Alignments of one original sequence, in input order.
    pub fn alignments_for(&self, sequence_index: usize) -> impl Iterator<Item = &SequenceAlignment<T>> {
        self.alignments
            .iter()
            .filter(move |a| a.sequence_index == sequence_index)
    }

    pub fn len(&self) -> usize {
        self.supersequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supersequence.is_empty()
    }
}

/// Align every sequence in `originals` onto `supersequence`.
///
/// If some sequence does not embed into `supersequence` (which cannot happen
/// for a supersequence produced by this crate), its trailing unmatched
/// elements are left without an alignment entry.
pub fn compute_alignments<T, S, E>(
    originals: &[S],
    supersequence: &[T],
    eq: &E,
) -> Vec<SequenceAlignment<T>>
where
    T: Clone,
    S: AsRef<[T]>,
    E: ElementEq<T> + ?Sized,
{
    let total = originals.iter().map(|s| s.as_ref().len()).sum();
    let mut out = Vec::with_capacity(total);
    for (idx, seq) in originals.iter().enumerate() {
        align_one(idx, seq.as_ref(), supersequence, eq, &mut out);
    }
    out
}

/// Parallel variant of [`compute_alignments`]; output order is identical.
///
/// Standalone: [`ScsEngine::run_with_alignments`](crate::ScsEngine::run_with_alignments)
/// always aligns sequentially, so its bounds do not change with the
/// `parallel` feature. Call this directly on a computed supersequence when
/// there are many long inputs to align.
#[cfg(feature = "parallel")]
pub fn compute_alignments_par<T, S, E>(
    originals: &[S],
    supersequence: &[T],
    eq: &E,
) -> Vec<SequenceAlignment<T>>
where
    T: Clone + Send + Sync,
    S: AsRef<[T]> + Sync,
    E: ElementEq<T> + Sync + ?Sized,
{
    use rayon::prelude::*;

    originals
        .par_iter()
        .enumerate()
        .flat_map_iter(|(idx, seq)| {
            let mut out = Vec::with_capacity(seq.as_ref().len());
            align_one(idx, seq.as_ref(), supersequence, eq, &mut out);
            out
        })
        .collect()
}

fn align_one<T, E>(
    sequence_index: usize,
    seq: &[T],
    supersequence: &[T],
    eq: &E,
    out: &mut Vec<SequenceAlignment<T>>,
) where
    T: Clone,
    E: ElementEq<T> + ?Sized,
{
    let mut next = 0usize;
    for (slot, item) in supersequence.iter().enumerate() {
        let Some(wanted) = seq.get(next) else {
            break;
        };
        if eq.eq(wanted, item) {
            out.push(SequenceAlignment {
                sequence_index,
                input_position: next,
                supersequence_position: slot,
                element: wanted.clone(),
            });
            next += 1;
        }
    }
    if next < seq.len() {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            sequence_index,
            aligned = next,
            len = seq.len(),
            "sequence does not embed into supersequence"
        );
    }
}
