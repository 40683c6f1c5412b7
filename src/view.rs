//! Read-only queries over an [`ScsResult`].
//!
//! The view indexes the alignment list once so that per-sequence lookups by
//! input position or by supersequence slot are constant time. This is the
//! layer a table renderer uses to place each original ordering's items into
//! the columns of the merged ordering.

use std::collections::HashMap;

use crate::alignment::{ScsResult, SequenceAlignment};

/// Indexed view of one [`ScsResult`].
///
/// Sequence indices that do not exist yield empty slices or `None`.
#[derive(Debug)]
pub struct AlignmentView<'r, T> {
    result: &'r ScsResult<T>,
    by_sequence: Vec<Vec<&'r SequenceAlignment<T>>>,
    forward: Vec<Vec<usize>>,
    reverse: Vec<HashMap<usize, usize>>,
}

impl<'r, T> AlignmentView<'r, T> {
    pub fn new(result: &'r ScsResult<T>) -> Self {
        let count = result
            .alignments
            .iter()
            .map(|a| a.sequence_index + 1)
            .max()
            .unwrap_or(0)
            .max(result.sequence_count);

        let mut by_sequence: Vec<Vec<&'r SequenceAlignment<T>>> = vec![Vec::new(); count];
        for a in &result.alignments {
            by_sequence[a.sequence_index].push(a);
        }
        for entries in &mut by_sequence {
            entries.sort_by_key(|a| a.input_position);
        }

        let forward = by_sequence
            .iter()
            .map(|entries| entries.iter().map(|a| a.supersequence_position).collect())
            .collect();
        let reverse = by_sequence
            .iter()
            .map(|entries| {
                entries
                    .iter()
                    .map(|a| (a.supersequence_position, a.input_position))
                    .collect()
            })
            .collect();

        Self {
            result,
            by_sequence,
            forward,
            reverse,
        }
    }

    pub fn result(&self) -> &'r ScsResult<T> {
        self.result
    }

    /// Number of original sequences covered by the view.
    pub fn sequence_count(&self) -> usize {
        self.by_sequence.len()
    }

    pub fn supersequence_len(&self) -> usize {
        self.result.supersequence.len()
    }

    /// Alignments of sequence `idx`, ordered by input position.
    pub fn for_sequence(&self, idx: usize) -> &[&'r SequenceAlignment<T>] {
        self.by_sequence.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `map[input_position] == supersequence_position` for sequence `idx`.
    pub fn position_map(&self, idx: usize) -> &[usize] {
        self.forward.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Supersequence slot → input position for sequence `idx`.
    pub fn reverse_map(&self, idx: usize) -> Option<&HashMap<usize, usize>> {
        self.reverse.get(idx)
    }

    /// Input position of sequence `idx` placed at `slot`, if any.
    pub fn input_position_at(&self, idx: usize, slot: usize) -> Option<usize> {
        self.reverse.get(idx)?.get(&slot).copied()
    }

    pub fn has_element_at(&self, idx: usize, slot: usize) -> bool {
        self.input_position_at(idx, slot).is_some()
    }

    /// Element of sequence `idx` placed at `slot`, if any.
    pub fn element_at(&self, idx: usize, slot: usize) -> Option<&'r T> {
        let pos = self.input_position_at(idx, slot)?;
        self.by_sequence
            .get(idx)?
            .get(pos)
            .copied()
            .map(|a| &a.element)
    }

    /// Sequences occupying `slot`, with their elements, by ascending index.
    pub fn column(&self, slot: usize) -> Vec<(usize, &'r T)> {
        (0..self.sequence_count())
            .filter_map(|idx| self.element_at(idx, slot).map(|e| (idx, e)))
            .collect()
    }
}
