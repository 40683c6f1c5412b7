//! Exact multi-sequence shortest common supersequence search.
//!
//! The search runs over tuples of read pointers, one per normalised sequence.
//! From a state, the next supersequence element is the current head of some
//! sequence that has not been fully consumed ("active"). Two rules drive the
//! search:
//! 1. If every active head is equal, that element is forced: it is emitted
//!    once and all active pointers advance together.
//! 2. Otherwise each distinct head is tried in turn as the next element. The
//!    sequence it came from advances, and so does every other active
//!    sequence whose head equals it. The branch with the strictly shortest
//!    completion wins; equal lengths keep the lowest sequence index.
//!
//! Results are memoised per state in a map keyed by the packed pointer tuple
//! (see [`StateCodec`]). The traversal uses an explicit worklist, so recursion
//! depth never depends on the input. The memo is bounded; when the bound is
//! reached the exact search is abandoned and the concatenation of the
//! normalised sequences is returned instead.
//!
//! The problem is NP-hard in the number of sequences. The engine is meant for
//! merging a handful of short orderings, where the exact answer is cheap.

use std::collections::HashMap;

use crate::alignment::{compute_alignments, ScsResult};
use crate::normalize::{normalize, Normalized};
use crate::traits::{ElementEq, StructuralEq};
use crate::utils::{state_space_size, StateCodec, DEFAULT_MAX_MEMO_ENTRIES};

/// Counters describing one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Sequences passed in, including empty and duplicate ones.
    pub input_sequences: usize,
    /// Distinct non-empty sequences left after normalisation.
    pub distinct_sequences: usize,
    /// `Π (len_i + 1)` over the distinct sequences. `None` when no search
    /// was needed (fewer than two distinct sequences) or the product does
    /// not fit in a `u128`.
    pub state_space: Option<u128>,
    /// Memo entries held when the search finished or was abandoned.
    pub memo_entries: usize,
    /// States expanded by the search.
    pub expansions: usize,
    /// True if the memo bound was hit and the result is the concatenation
    /// fallback rather than an exact optimum.
    pub fell_back: bool,
}

impl SolveStats {
    /// Whether the returned supersequence is a proven shortest one.
    pub fn is_exact(&self) -> bool {
        !self.fell_back
    }
}

/// Shortest common supersequence solver for one set of input sequences.
///
/// When several sequences differ at their heads and one head is chosen as the
/// next element, every other sequence whose head equals it advances as well.
/// This differs from the textbook rule that advances only the chosen
/// sequence: the two agree for two sequences, but with three or more the
/// single-pointer rule can miss the optimum (`[A, C]`, `[B]`, `[A, D]` merge
/// to four elements here and five under it). Lengths may therefore be shorter
/// than those of implementations using the single-pointer rule.
///
/// Typical usage:
/// ```
/// use scs_dp::ScsEngine;
///
/// let orders = vec![vec!['X', 'A', 'B'], vec!['Y', 'A', 'B']];
/// let (scs, stats) = ScsEngine::new(&orders).run();
/// assert_eq!(scs.len(), 4);
/// assert!(stats.is_exact());
/// ```
pub struct ScsEngine<'a, T, E = StructuralEq> {
    sequences: Vec<&'a [T]>,
    eq: E,
    max_memo_entries: usize,
}

impl<'a, T: PartialEq> ScsEngine<'a, T, StructuralEq> {
    /// Create an engine comparing elements with [`PartialEq`] and using
    /// [`DEFAULT_MAX_MEMO_ENTRIES`].
    pub fn new<S: AsRef<[T]>>(sequences: &'a [S]) -> Self {
        Self::with_eq(sequences, StructuralEq)
    }
}

impl<'a, T, E: ElementEq<T>> ScsEngine<'a, T, E> {
    /// Create an engine with an explicit equality predicate.
    pub fn with_eq<S: AsRef<[T]>>(sequences: &'a [S], eq: E) -> Self {
        Self::with_limits(sequences, eq, DEFAULT_MAX_MEMO_ENTRIES)
    }

    /// Create an engine with an explicit predicate and memo bound.
    ///
    /// # Panics
    /// Panics if `max_memo_entries == 0`.
    pub fn with_limits<S: AsRef<[T]>>(sequences: &'a [S], eq: E, max_memo_entries: usize) -> Self {
        Self::from_slices(
            sequences.iter().map(AsRef::as_ref).collect(),
            eq,
            max_memo_entries,
        )
    }

    pub(crate) fn from_slices(sequences: Vec<&'a [T]>, eq: E, max_memo_entries: usize) -> Self {
        assert!(max_memo_entries > 0, "max_memo_entries must be positive");
        Self {
            sequences,
            eq,
            max_memo_entries,
        }
    }

    /// The original input sequences, in order.
    pub fn sequences(&self) -> &[&'a [T]] {
        &self.sequences
    }

    /// The equality predicate in use.
    pub fn eq_predicate(&self) -> &E {
        &self.eq
    }

    /// Return the configured memo bound.
    pub fn max_memo_entries(&self) -> usize {
        self.max_memo_entries
    }
}

impl<'a, T: Clone, E: ElementEq<T>> ScsEngine<'a, T, E> {
    /// Compute a shortest common supersequence.
    ///
    /// Returns the supersequence together with [`SolveStats`]. The result
    /// always embeds every input; it is optimal unless
    /// [`SolveStats::fell_back`] is set.
    pub fn run(&self) -> (Vec<T>, SolveStats) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("scs_run", sequences = self.sequences.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut stats = SolveStats {
            input_sequences: self.sequences.len(),
            ..SolveStats::default()
        };

        let normalized = {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("normalize");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            normalize(&self.sequences, &self.eq)
        };
        stats.distinct_sequences = normalized.len();

        let seqs = match normalized {
            Normalized::Empty => {
                #[cfg(feature = "tracing")]
                tracing::debug!("no non-empty sequences; supersequence is empty");
                return (Vec::new(), stats);
            }
            Normalized::Single(seq) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(len = seq.len(), "single distinct sequence; returned verbatim");
                return (seq.to_vec(), stats);
            }
            Normalized::Many(seqs) => seqs,
        };

        let lens: Vec<usize> = seqs.iter().map(|s| s.len()).collect();
        stats.state_space = state_space_size(&lens);

        let Some(codec) = StateCodec::new(&lens) else {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                sequences = seqs.len(),
                "pointer state space overflows u128; using concatenation fallback"
            );
            stats.fell_back = true;
            return (concatenate(&seqs), stats);
        };

        let mut search = Search::new(&seqs, &codec, &self.eq, self.max_memo_entries);
        let outcome = search.solve();
        stats.memo_entries = search.memo.len();
        stats.expansions = search.expansions;

        match outcome {
            Ok(()) => (search.rebuild(), stats),
            Err(CapExceeded) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    memo_entries = stats.memo_entries,
                    cap = self.max_memo_entries,
                    state_space = ?stats.state_space,
                    "memo bound exceeded; using concatenation fallback"
                );
                stats.fell_back = true;
                (concatenate(&seqs), stats)
            }
        }
    }

    /// Compute the supersequence and align every original sequence onto it.
    ///
    /// Alignments are derived from the original list, so empty and duplicate
    /// inputs get their own (possibly empty) entries.
    pub fn run_with_alignments(&self) -> (ScsResult<T>, SolveStats) {
        let (supersequence, stats) = self.run();

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("align", len = supersequence.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let alignments = compute_alignments(&self.sequences, &supersequence, &self.eq);
        (
            ScsResult {
                supersequence,
                alignments,
                sequence_count: self.sequences.len(),
            },
            stats,
        )
    }
}

fn concatenate<T: Clone>(seqs: &[&[T]]) -> Vec<T> {
    seqs.iter().flat_map(|s| s.iter().cloned()).collect()
}

/// How the optimal completion leaves a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    /// Every pointer is at its end.
    End,
    /// Emit the head of sequence `lead` and move to `child`. Every active
    /// sequence whose head equals that element advances with it.
    Emit { lead: usize, child: u128 },
}

#[derive(Debug, Clone, Copy)]
struct MemoEntry {
    /// Length of the shortest completion from this state.
    remaining: usize,
    decision: Decision,
}

/// Classification of a state before its successors are known.
enum Step {
    End,
    /// All active heads agree, so the next element is forced.
    Sync { lead: usize, child: u128 },
    Branch,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    key: u128,
    expanded: bool,
}

#[derive(Debug)]
struct CapExceeded;

struct Search<'s, 'a, T, E: ?Sized> {
    seqs: &'s [&'a [T]],
    codec: &'s StateCodec,
    eq: &'s E,
    cap: usize,
    memo: HashMap<u128, MemoEntry>,
    expansions: usize,
}

impl<'s, 'a, T, E: ElementEq<T> + ?Sized> Search<'s, 'a, T, E> {
    fn new(seqs: &'s [&'a [T]], codec: &'s StateCodec, eq: &'s E, cap: usize) -> Self {
        Self {
            seqs,
            codec,
            eq,
            cap,
            memo: HashMap::new(),
            expansions: 0,
        }
    }

    /// Fill the memo for every state reachable from the all-zero tuple.
    ///
    /// A frame is visited twice: once to expand it (pushing unresolved
    /// successors above it) and once, after those successors are resolved,
    /// to pick its decision. Pointers only grow, so successors never sit
    /// below their parent on the stack.
    fn solve(&mut self) -> Result<(), CapExceeded> {
        let mut stack = vec![Frame {
            key: 0,
            expanded: false,
        }];
        let mut ptrs = Vec::with_capacity(self.codec.arity());
        let mut pending = Vec::with_capacity(self.codec.arity());

        while let Some(frame) = stack.pop() {
            if self.memo.contains_key(&frame.key) {
                continue;
            }
            self.codec.decode_into(frame.key, &mut ptrs);

            if frame.expanded {
                let entry = self.resolve(frame.key, &ptrs);
                self.memo.insert(frame.key, entry);
                continue;
            }

            if self.memo.len() >= self.cap {
                return Err(CapExceeded);
            }
            self.expansions += 1;

            pending.clear();
            match self.classify(frame.key, &ptrs) {
                Step::End => {}
                Step::Sync { child, .. } => {
                    if !self.memo.contains_key(&child) {
                        pending.push(child);
                    }
                }
                Step::Branch => {
                    pending.extend(
                        (0..ptrs.len())
                            .filter_map(|i| self.branch_child(frame.key, &ptrs, i))
                            .filter(|child| !self.memo.contains_key(child)),
                    );
                }
            }

            if pending.is_empty() {
                let entry = self.resolve(frame.key, &ptrs);
                self.memo.insert(frame.key, entry);
            } else {
                stack.push(Frame {
                    key: frame.key,
                    expanded: true,
                });
                // Reverse so the lowest index is explored first.
                stack.extend(pending.iter().rev().map(|&key| Frame {
                    key,
                    expanded: false,
                }));
            }
        }
        Ok(())
    }

    #[inline]
    fn head(&self, ptrs: &[usize], i: usize) -> Option<&'a T> {
        let seq: &'a [T] = self.seqs[i];
        seq.get(ptrs[i])
    }

    fn classify(&self, key: u128, ptrs: &[usize]) -> Step {
        let mut active = (0..ptrs.len()).filter_map(|i| self.head(ptrs, i).map(|h| (i, h)));
        let Some((lead, head)) = active.next() else {
            return Step::End;
        };
        let mut child = key + self.codec.stride(lead);
        for (i, other) in active {
            if !self.eq.eq(head, other) {
                return Step::Branch;
            }
            child += self.codec.stride(i);
        }
        Step::Sync { lead, child }
    }

    /// Successor reached by emitting the head of sequence `i`.
    ///
    /// Every active sequence whose head equals it advances too. Returns
    /// `None` if `i` is exhausted or an earlier sequence has an equal head,
    /// since that branch is then identical to the earlier one.
    fn branch_child(&self, key: u128, ptrs: &[usize], i: usize) -> Option<u128> {
        let head = self.head(ptrs, i)?;
        let mut child = key;
        for j in 0..ptrs.len() {
            let Some(other) = self.head(ptrs, j) else {
                continue;
            };
            if j == i || self.eq.eq(head, other) {
                if j < i {
                    return None;
                }
                child += self.codec.stride(j);
            }
        }
        Some(child)
    }

    /// Decide a state whose successors are all memoised.
    ///
    /// The strictly shortest branch wins; on equal lengths the branch led by
    /// the lowest sequence index is kept.
    fn resolve(&self, key: u128, ptrs: &[usize]) -> MemoEntry {
        let end = MemoEntry {
            remaining: 0,
            decision: Decision::End,
        };
        match self.classify(key, ptrs) {
            Step::End => end,
            Step::Sync { lead, child } => {
                let rest = self.memo.get(&child).map_or(0, |e| e.remaining);
                MemoEntry {
                    remaining: rest + 1,
                    decision: Decision::Emit { lead, child },
                }
            }
            Step::Branch => {
                let mut best: Option<MemoEntry> = None;
                for lead in 0..ptrs.len() {
                    let Some(child) = self.branch_child(key, ptrs, lead) else {
                        continue;
                    };
                    debug_assert!(self.memo.contains_key(&child), "successor not resolved");
                    let Some(next) = self.memo.get(&child) else {
                        continue;
                    };
                    let remaining = next.remaining + 1;
                    if best.map_or(true, |b| remaining < b.remaining) {
                        best = Some(MemoEntry {
                            remaining,
                            decision: Decision::Emit { lead, child },
                        });
                    }
                }
                best.unwrap_or(end)
            }
        }
    }
}

impl<'s, 'a, T: Clone, E: ?Sized> Search<'s, 'a, T, E> {
    /// Walk the memoised decisions from the start state.
    fn rebuild(&self) -> Vec<T> {
        let capacity = self.memo.get(&0).map_or(0, |e| e.remaining);
        let mut out = Vec::with_capacity(capacity);
        let mut key = 0u128;
        while let Some(entry) = self.memo.get(&key) {
            match entry.decision {
                Decision::End => break,
                Decision::Emit { lead, child } => {
                    let p = self.codec.pointer(key, lead);
                    out.push(self.seqs[lead][p].clone());
                    key = child;
                }
            }
        }
        debug_assert_eq!(out.len(), capacity);
        out
    }
}
