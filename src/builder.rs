use crate::traits::{ElementEq, StructuralEq};
use crate::utils::DEFAULT_MAX_MEMO_ENTRIES;
use crate::ScsEngine;

/// Step-by-step configuration of an [`ScsEngine`].
///
/// ```
/// use scs_dp::ScsEngineBuilder;
///
/// let orders = vec!["north", "North"];
/// let chars: Vec<Vec<char>> = orders.iter().map(|s| s.chars().collect()).collect();
/// let engine = ScsEngineBuilder::new(&chars)
///     .with_eq(|a: &char, b: &char| a.eq_ignore_ascii_case(b))
///     .with_max_memo_entries(10_000)
///     .build();
/// assert_eq!(engine.run().0.len(), 5);
/// ```
pub struct ScsEngineBuilder<'a, T, E = StructuralEq> {
    sequences: Vec<&'a [T]>,
    eq: E,
    max_memo_entries: Option<usize>,
}

impl<'a, T> ScsEngineBuilder<'a, T, StructuralEq> {
    pub fn new<S: AsRef<[T]>>(sequences: &'a [S]) -> Self {
        Self {
            sequences: sequences.iter().map(AsRef::as_ref).collect(),
            eq: StructuralEq,
            max_memo_entries: None,
        }
    }
}

impl<'a, T, E> ScsEngineBuilder<'a, T, E> {
    pub fn with_max_memo_entries(mut self, max_memo_entries: usize) -> Self {
        self.max_memo_entries = Some(max_memo_entries);
        self
    }
    pub fn with_eq<F: ElementEq<T>>(self, eq: F) -> ScsEngineBuilder<'a, T, F> {
        ScsEngineBuilder {
            sequences: self.sequences,
            eq,
            max_memo_entries: self.max_memo_entries,
        }
    }
    /// # Panics
    /// Panics if a memo bound of zero was configured.
    pub fn build(self) -> ScsEngine<'a, T, E>
    where
        E: ElementEq<T>,
    {
        let cap = self.max_memo_entries.unwrap_or(DEFAULT_MAX_MEMO_ENTRIES);
        ScsEngine::from_slices(self.sequences, self.eq, cap)
    }
}
