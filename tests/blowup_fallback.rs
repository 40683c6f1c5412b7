use scs_dp::{
    shortest_common_supersequence, utils::is_subsequence_by, ScsEngine, ScsEngineBuilder,
    StructuralEq,
};

/// Ten pairwise-divergent orderings of 1..=10: `j * m mod 11` for m = 1..=10.
fn divergent_permutations() -> Vec<Vec<u32>> {
    (1..=10u32)
        .map(|m| (1..=10u32).map(|j| (j * m) % 11).collect())
        .collect()
}

#[test]
fn default_cap_trips_on_intractable_input() {
    let seqs = divergent_permutations();
    let (scs, stats) = ScsEngine::new(&seqs).run();
    assert!(stats.fell_back, "expected the memo bound to trip: {stats:?}");
    assert!(stats.state_space.is_some_and(|s| s > 1_000_000_000));
    assert_eq!(scs.len(), seqs.iter().map(Vec::len).sum::<usize>());
    for seq in &seqs {
        assert!(is_subsequence_by(seq, &scs, &StructuralEq));
    }
    for v in 1..=10u32 {
        assert!(scs.contains(&v));
    }
}

#[test]
fn fallback_result_is_complete_with_alignments() {
    let seqs = divergent_permutations();
    let engine = ScsEngineBuilder::new(&seqs).with_max_memo_entries(64).build();
    let (result, stats) = engine.run_with_alignments();
    assert!(stats.fell_back);
    assert!(stats.memo_entries <= 64 + seqs.len() * 10);
    assert_eq!(result.alignments.len(), 100);
    for idx in 0..seqs.len() {
        let slots: Vec<usize> = result
            .alignments_for(idx)
            .map(|a| a.supersequence_position)
            .collect();
        assert_eq!(slots.len(), 10);
        assert!(slots.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn duplicates_do_not_count_against_the_cap() {
    // One distinct sequence repeated: no search at all.
    let seqs = vec![(0..50u32).collect::<Vec<_>>(); 12];
    let engine = ScsEngineBuilder::new(&seqs).with_max_memo_entries(1).build();
    let (scs, stats) = engine.run();
    assert!(stats.is_exact());
    assert_eq!(scs.len(), 50);
}

#[test]
fn mostly_agreeing_variants_stay_exact() {
    let base: Vec<u32> = (0..40).collect();
    let mut a = base.clone();
    a.insert(20, 1000);
    let mut b = base.clone();
    b.insert(10, 2000);
    let mut c = base;
    c.remove(30);
    let seqs = vec![a, b, c];
    let (scs, stats) = ScsEngine::new(&seqs).run();
    assert!(stats.is_exact());
    assert_eq!(scs.len(), 42);
    assert_eq!(shortest_common_supersequence(&seqs), scs);
}
