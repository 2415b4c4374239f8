// ABOUTME: Integration tests for the competition rank calculator
// ABOUTME: Covers tie sharing, gaps after ties and the structural rank properties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

mod helpers;

use bestlist_engine::models::BestlistRow;
use bestlist_engine::ranking::compute_ranks;
use helpers::row;

fn rows(performances: &[i64]) -> Vec<BestlistRow> {
    performances.iter().copied().map(row).collect()
}

#[test]
fn test_empty_list_has_no_ranks() {
    assert!(compute_ranks(&[]).is_empty());
}

#[test]
fn test_single_result_ranks_first() {
    assert_eq!(compute_ranks(&rows(&[850])), vec![1]);
}

#[test]
fn test_ties_share_rank_and_next_skips() {
    assert_eq!(compute_ranks(&rows(&[10, 10, 10, 20])), vec![1, 1, 1, 4]);
}

#[test]
fn test_best_first_sorted_scores() {
    // points-style list, higher first
    assert_eq!(
        compute_ranks(&rows(&[1000, 1000, 950, 900])),
        vec![1, 1, 3, 4]
    );
}

#[test]
fn test_all_tied() {
    assert_eq!(compute_ranks(&rows(&[700, 700, 700])), vec![1, 1, 1]);
}

#[test]
fn test_no_ties_is_positional() {
    assert_eq!(compute_ranks(&rows(&[10, 20, 30, 40])), vec![1, 2, 3, 4]);
}

#[test]
fn test_tie_groups_later_in_list() {
    assert_eq!(
        compute_ranks(&rows(&[10, 20, 20, 20, 30, 30, 40])),
        vec![1, 2, 2, 2, 5, 5, 7]
    );
}

#[test]
fn test_input_order_is_preserved_not_resorted() {
    // the calculator trusts the service's ordering, even when it looks
    // unsorted; equal neighbours still share
    assert_eq!(compute_ranks(&rows(&[20, 10, 10, 30])), vec![1, 2, 2, 4]);
}

#[test]
fn test_rank_structure_properties() {
    let performances: Vec<i64> = vec![5, 5, 7, 7, 7, 9, 11, 11, 13, 13, 13, 13, 17];
    let ranks = compute_ranks(&rows(&performances));

    assert_eq!(ranks.len(), performances.len());
    for (idx, &rank) in ranks.iter().enumerate() {
        assert!(rank >= 1);
        if idx == 0 {
            assert_eq!(rank, 1);
            continue;
        }
        if performances[idx] == performances[idx - 1] {
            assert_eq!(rank, ranks[idx - 1]);
        } else {
            // a fresh rank is always the 1-based position
            assert_eq!(rank, u32::try_from(idx).expect("small index") + 1);
        }
        assert!(
            rank == ranks[idx - 1] || rank == u32::try_from(idx).expect("small index") + 1,
            "rank {rank} at {idx} is neither shared nor positional"
        );
    }
}
