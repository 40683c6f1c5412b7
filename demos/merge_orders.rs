//! Example: fold several visit orders over shared waypoints into one table.
//!
//! Run with:
//! `cargo run --example merge_orders`

use scs_dp::{shortest_common_supersequence_with_alignments, visualize::render_result, AlignmentView};

fn main() {
    let variants = vec![
        vec!["depot", "mill", "ford", "inn", "chapel"],
        vec!["depot", "ford", "inn", "chapel"],
        vec!["depot", "mill", "bridge", "inn"],
        vec!["depot", "ford", "inn", "chapel"],
    ];

    let result = shortest_common_supersequence_with_alignments(&variants);
    println!("Merged order ({} stops): {:?}", result.supersequence.len(), result.supersequence);
    println!();
    println!("{}", render_result(&result));
    println!();

    // Place each variant's visit number into the merged columns.
    let view = AlignmentView::new(&result);
    for idx in 0..view.sequence_count() {
        let cells: Vec<String> = (0..view.supersequence_len())
            .map(|slot| match view.input_position_at(idx, slot) {
                Some(pos) => format!("{:>3}", pos + 1),
                None => "  -".to_string(),
            })
            .collect();
        println!("variant {idx}: {}", cells.join(" "));
    }
}
