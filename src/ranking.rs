// ABOUTME: Competition ranking with shared ranks for ties and gaps after them
// ABOUTME: Annotates an already-sorted result list; never reorders it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Track Insights

//! # Rank Calculator
//!
//! Standard competition ranking: tied entries share a rank, and the next
//! distinct entry's rank is its 1-based position, not the previous rank
//! plus one. Performances `[10, 10, 10, 20]` rank `[1, 1, 1, 4]`.
//!
//! The input arrives pre-sorted in display order from the bestlist service.
//! Ties are exact integer equality on the encoded performance; this module
//! never compares with a tolerance and never re-sorts.

use crate::models::BestlistRow;

/// Assign competition ranks to an ordered result list.
///
/// The output has the same length as the input; element `i` is the rank of
/// row `i`.
#[must_use]
pub fn compute_ranks(rows: &[BestlistRow]) -> Vec<u32> {
    let mut ranks = Vec::with_capacity(rows.len());
    let mut current_rank = 1_u32;

    for (idx, row) in rows.iter().enumerate() {
        if idx > 0 && row.result.performance != rows[idx - 1].result.performance {
            // positions are 0-indexed here, ranks 1-based
            current_rank = u32::try_from(idx).unwrap_or(u32::MAX).saturating_add(1);
        }
        ranks.push(current_rank);
    }
    ranks
}
