//! Duplicates are removed before solving but aligned from the original list.

use scs_dp::{
    shortest_common_supersequence_with_alignments, AlignmentView, ScsEngine, SequenceAlignment,
};

fn slots<T>(al: &[&SequenceAlignment<T>]) -> Vec<usize> {
    al.iter().map(|a| a.supersequence_position).collect()
}

#[test]
fn duplicate_sequences_get_identical_alignments() {
    let seqs = vec![
        vec!["gate", "hall", "yard"],
        vec!["gate", "yard", "hall"],
        vec!["gate", "hall", "yard"],
        vec!["gate", "hall", "yard"],
    ];
    let (result, stats) = ScsEngine::new(&seqs).run_with_alignments();
    assert_eq!(stats.input_sequences, 4);
    assert_eq!(stats.distinct_sequences, 2);

    let view = AlignmentView::new(&result);
    assert_eq!(view.sequence_count(), 4);
    let first = slots(view.for_sequence(0));
    assert_eq!(first.len(), 3);
    assert_eq!(slots(view.for_sequence(2)), first);
    assert_eq!(slots(view.for_sequence(3)), first);
    assert_eq!(view.for_sequence(1).len(), 3);
}

#[test]
fn duplicates_interleaved_with_empties() {
    let seqs: Vec<Vec<u8>> = vec![vec![], b"AB".to_vec(), vec![], b"AB".to_vec(), b"BA".to_vec()];
    let result = shortest_common_supersequence_with_alignments(&seqs);
    assert_eq!(result.supersequence.len(), 3);
    assert_eq!(result.sequence_count, 5);
    assert_eq!(result.alignments.len(), 6);

    let view = AlignmentView::new(&result);
    assert!(view.for_sequence(0).is_empty());
    assert!(view.for_sequence(2).is_empty());
    assert_eq!(view.position_map(1), view.position_map(3));
}

#[test]
fn all_duplicates_align_to_the_single_sequence() {
    let seqs = vec![vec![4, 5, 6]; 5];
    let result = shortest_common_supersequence_with_alignments(&seqs);
    assert_eq!(result.supersequence, vec![4, 5, 6]);
    let view = AlignmentView::new(&result);
    for idx in 0..5 {
        assert_eq!(view.position_map(idx), &[0, 1, 2]);
    }
}

#[test]
fn alignments_are_grouped_by_sequence_then_position() {
    let seqs = vec![vec![1, 2], vec![2, 3], vec![1, 2]];
    let result = shortest_common_supersequence_with_alignments(&seqs);
    let keys: Vec<(usize, usize)> = result
        .alignments
        .iter()
        .map(|a| (a.sequence_index, a.input_position))
        .collect();
    assert_eq!(keys, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
}
