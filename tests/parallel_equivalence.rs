#![cfg(feature = "parallel")]

use proptest::prelude::*;
use scs_dp::{
    alignment::{compute_alignments, compute_alignments_par},
    shortest_common_supersequence, StructuralEq,
};

proptest! {
    #[test]
    fn parallel_alignments_match_sequential(raw in proptest::collection::vec("[ACGT]{0,6}", 0..6)) {
        let seqs: Vec<Vec<u8>> = raw.iter().map(|s| s.as_bytes().to_vec()).collect();
        let scs = shortest_common_supersequence(&seqs);
        let seq = compute_alignments(&seqs, &scs, &StructuralEq);
        let par = compute_alignments_par(&seqs, &scs, &StructuralEq);
        prop_assert_eq!(seq, par);
    }
}
