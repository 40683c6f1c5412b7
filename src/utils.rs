//! Assorted utilities and helpers.
//!
//! The central piece is [`StateCodec`], which packs a tuple of read pointers
//! into a single mixed-radix integer so the solver's memo can be keyed by a
//! `u128` instead of an allocated vector.

use crate::traits::ElementEq;

/// Default bound on distinct memo entries before the solver gives up on the
/// exact search.
pub const DEFAULT_MAX_MEMO_ENTRIES: usize = 500_000;

/// Size of the full pointer-tuple state space, `Π (len_i + 1)`.
///
/// Returns `None` if the product does not fit in a `u128`.
pub fn state_space_size(lens: &[usize]) -> Option<u128> {
    lens.iter()
        .try_fold(1u128, |acc, &len| acc.checked_mul(len as u128 + 1))
}

/// Mixed-radix encoding of pointer tuples.
///
/// For pointers `p_0..p_{k-1}` with `p_i ∈ 0..=len_i` the key is
/// `Σ p_i · stride_i` where `stride_0 = 1` and
/// `stride_{i+1} = stride_i · (len_i + 1)`. Advancing pointer `i` by one is
/// `key + stride_i`.
#[derive(Debug, Clone)]
pub struct StateCodec {
    lens: Vec<usize>,
    strides: Vec<u128>,
    space: u128,
}

impl StateCodec {
    /// Build a codec for sequences of the given lengths.
    ///
    /// Returns `None` when the state space overflows `u128`.
    pub fn new(lens: &[usize]) -> Option<Self> {
        let mut strides = Vec::with_capacity(lens.len());
        let mut acc = 1u128;
        for &len in lens {
            strides.push(acc);
            acc = acc.checked_mul(len as u128 + 1)?;
        }
        Some(Self {
            lens: lens.to_vec(),
            strides,
            space: acc,
        })
    }

    /// Number of pointers in a tuple.
    #[inline]
    pub fn arity(&self) -> usize {
        self.lens.len()
    }

    /// Total number of representable states.
    #[inline]
    pub fn space(&self) -> u128 {
        self.space
    }

    #[inline]
    pub fn stride(&self, i: usize) -> u128 {
        self.strides[i]
    }

    /// Key of the state where every pointer sits at its sequence's end.
    pub fn terminal(&self) -> u128 {
        self.encode(&self.lens)
    }

    pub fn encode(&self, pointers: &[usize]) -> u128 {
        debug_assert_eq!(pointers.len(), self.arity());
        pointers
            .iter()
            .zip(&self.strides)
            .map(|(&p, &s)| p as u128 * s)
            .sum()
    }

    /// Pointer `i` of the tuple packed in `key`.
    #[inline]
    pub fn pointer(&self, key: u128, i: usize) -> usize {
        ((key / self.strides[i]) % (self.lens[i] as u128 + 1)) as usize
    }

    /// Unpack `key` into `out`, reusing its allocation.
    pub fn decode_into(&self, key: u128, out: &mut Vec<usize>) {
        out.clear();
        out.extend((0..self.arity()).map(|i| self.pointer(key, i)));
    }
}

/// Whether `needle` embeds into `haystack` as an order-preserving subsequence.
pub fn is_subsequence_by<T, E>(needle: &[T], haystack: &[T], eq: &E) -> bool
where
    E: ElementEq<T> + ?Sized,
{
    let mut it = needle.iter().peekable();
    for h in haystack {
        match it.peek() {
            Some(n) if eq.eq(n, h) => {
                it.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    it.peek().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::StructuralEq;

    #[test]
    fn state_space_matches_product() {
        assert_eq!(state_space_size(&[]), Some(1));
        assert_eq!(state_space_size(&[0]), Some(1));
        assert_eq!(state_space_size(&[2, 3, 4]), Some(3 * 4 * 5));
        assert_eq!(state_space_size(&[usize::MAX, usize::MAX, usize::MAX]), None);
    }

    #[test]
    fn encode_decode_round_trip_over_small_space() {
        let codec = StateCodec::new(&[2, 0, 3]).unwrap();
        assert_eq!(codec.space(), 12);
        let mut out = Vec::new();
        for key in 0..codec.space() {
            codec.decode_into(key, &mut out);
            assert_eq!(codec.encode(&out), key);
            assert!(out[1] == 0 && out[0] <= 2 && out[2] <= 3);
        }
        assert_eq!(codec.terminal(), codec.space() - 1);
    }

    #[test]
    fn advancing_adds_stride() {
        let codec = StateCodec::new(&[4, 4]).unwrap();
        let key = codec.encode(&[1, 2]);
        assert_eq!(codec.pointer(key + codec.stride(0), 0), 2);
        assert_eq!(codec.pointer(key + codec.stride(1), 1), 3);
        assert_eq!(codec.pointer(key + codec.stride(1), 0), 1);
    }

    #[test]
    fn overflowing_space_has_no_codec() {
        assert!(StateCodec::new(&[u32::MAX as usize; 5]).is_none());
    }

    #[test]
    fn subsequence_check() {
        assert!(is_subsequence_by(b"", b"abc", &StructuralEq));
        assert!(is_subsequence_by(b"ac", b"abc", &StructuralEq));
        assert!(!is_subsequence_by(b"ca", b"abc", &StructuralEq));
        assert!(!is_subsequence_by(b"abcd", b"abc", &StructuralEq));
    }
}
