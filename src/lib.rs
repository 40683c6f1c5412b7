//! Shortest Common Supersequence DP (SCS-DP)
//!
//! This crate merges several orderings of the same kind of item into one
//! canonical ordering: the shortest sequence that contains every input as an
//! order-preserving, not necessarily contiguous, subsequence. Alongside the
//! merged sequence it reports, for every original input, which slot each of
//! its elements occupies.
//!
//! ## Core idea
//! 1. Normalise the inputs: drop empty sequences, collapse duplicates.
//! 2. Run an exact, memoised search over tuples of read pointers, advancing
//!    all sequences together whenever their heads agree.
//! 3. Re-embed each *original* sequence into the result with a greedy
//!    leftmost match to obtain its alignment.
//!
//! The multi-sequence problem is NP-hard. The search is exact but bounded by
//! a memo size limit; past it the engine falls back to the concatenation of
//! the inputs, which is always a valid (if long) common supersequence. Use it
//! for a handful of short orderings.
//!
//! ## Quick start
//! ```
//! use scs_dp::{shortest_common_supersequence_with_alignments, AlignmentView};
//!
//! let routes = vec![vec!["depot", "mill", "ford"], vec!["depot", "bridge", "ford"]];
//! let result = shortest_common_supersequence_with_alignments(&routes);
//! assert_eq!(result.supersequence.len(), 4);
//!
//! let view = AlignmentView::new(&result);
//! assert_eq!(view.position_map(1).len(), 3);
//! assert!(view.has_element_at(0, 0) && view.has_element_at(1, 0));
//! ```
//!
//! ## Features
//! - `tracing` (default): spans around each solve and a warning when the memo
//!   bound forces the fallback.
//! - `parallel`: [`alignment::compute_alignments_par`], a rayon-backed aligner
//!   called directly; the engine itself always aligns sequentially.
//! - `heavy`: long-running stress tests.

pub mod alignment;
pub mod builder;
pub mod engine;
pub mod normalize;
pub mod traits;
pub mod utils;
pub mod view;
pub mod visualize;

pub use crate::alignment::{compute_alignments, ScsResult, SequenceAlignment};
pub use crate::builder::ScsEngineBuilder;
pub use crate::engine::{ScsEngine, SolveStats};
pub use crate::traits::{ElementEq, StructuralEq};
pub use crate::view::AlignmentView;
pub use crate::visualize::visualize_alignment;

/// Shortest common supersequence of `sequences` under [`PartialEq`].
///
/// ```
/// let scs = scs_dp::shortest_common_supersequence(&[vec![1, 2], vec![1, 2], vec![1, 2]]);
/// assert_eq!(scs, vec![1, 2]);
/// ```
pub fn shortest_common_supersequence<T, S>(sequences: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    ScsEngine::new(sequences).run().0
}

/// As [`shortest_common_supersequence`], comparing elements with `eq`.
pub fn shortest_common_supersequence_by<T, S, E>(sequences: &[S], eq: E) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    E: ElementEq<T>,
{
    ScsEngine::with_eq(sequences, eq).run().0
}

/// Shortest common supersequence plus the alignment of every input.
pub fn shortest_common_supersequence_with_alignments<T, S>(sequences: &[S]) -> ScsResult<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    ScsEngine::new(sequences).run_with_alignments().0
}

/// As [`shortest_common_supersequence_with_alignments`], comparing elements
/// with `eq`.
pub fn shortest_common_supersequence_with_alignments_by<T, S, E>(
    sequences: &[S],
    eq: E,
) -> ScsResult<T>
where
    T: Clone,
    S: AsRef<[T]>,
    E: ElementEq<T>,
{
    ScsEngine::with_eq(sequences, eq).run_with_alignments().0
}
