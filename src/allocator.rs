// 🎄 Allocator - merit-ordered gift assignment over a shared stock pool
//
// Children are served strictly sequentially in priority order: a later
// child's gift availability depends on what earlier children consumed, so
// the order itself is the correctness property.

use crate::catalog::Catalog;
use crate::entities::{Child, Gift};
use crate::report::{AllocationReport, GiftAssignment};
use crate::validation;
use anyhow::Result;
use std::cmp::Ordering;

// ============================================================================
// COMPARATORS
// ============================================================================

/// Priority order over children: higher average score first; on equal
/// scores, the child with the larger id comes first. Total and
/// deterministic once the catalog has passed validation (scores finite).
fn compare_priority(a: &Child, b: &Child) -> Ordering {
    b.average_score
        .total_cmp(&a.average_score)
        .then_with(|| b.id.cmp(&a.id))
}

/// Cheapest-first order within one preference's candidate gifts
fn compare_price(a: &Gift, b: &Gift) -> Ordering {
    a.price.total_cmp(&b.price)
}

// ============================================================================
// ALLOCATION
// ============================================================================

/// Assign gifts to the catalog's children in place.
///
/// Validates first (no mutation on a malformed catalog), filters out young
/// adults, sorts the rest by priority, then runs each child through its
/// preference list against the live gift pool. Returns a report of every
/// committed assignment.
pub fn allocate(catalog: &mut Catalog) -> Result<AllocationReport> {
    validation::ensure_valid(catalog)?;

    let (children, gifts) = catalog.parts_mut();

    let mut order: Vec<usize> = children
        .iter()
        .enumerate()
        .filter(|(_, child)| !child.is_young_adult())
        .map(|(idx, _)| idx)
        .collect();
    let excluded = children.len() - order.len();
    order.sort_by(|&a, &b| compare_priority(&children[a], &children[b]));

    let mut report = AllocationReport::new(order.len(), excluded);

    for child_idx in order {
        let mut remaining = children[child_idx].assigned_budget;

        for pref_idx in 0..children[child_idx].gift_preferences.len() {
            let preference = children[child_idx].gift_preferences[pref_idx].clone();

            // Candidates: category match, affordable against the running
            // budget, still in stock - all against the pool as it exists now
            let mut candidates: Vec<usize> = gifts
                .iter()
                .enumerate()
                .filter(|(_, gift)| {
                    gift.matches_preference(&preference)
                        && gift.price <= remaining
                        && gift.in_stock()
                })
                .map(|(idx, _)| idx)
                .collect();
            candidates.sort_by(|&a, &b| compare_price(&gifts[a], &gifts[b]));

            for gift_idx in candidates {
                // The spend happens before the ownership check and is not
                // refunded when the candidate is rejected as already owned;
                // the shortfall carries into later candidates and
                // preferences. Historical behavior, kept as-is.
                remaining -= gifts[gift_idx].price;

                if !children[child_idx].has_gift(gifts[gift_idx].id) && remaining >= 0.0 {
                    children[child_idx].receive_gift(gifts[gift_idx].id);
                    gifts[gift_idx].take_one();
                    report.record(GiftAssignment {
                        child_id: children[child_idx].id,
                        gift_id: gifts[gift_idx].id,
                        category: gifts[gift_idx].category.clone(),
                        price: gifts[gift_idx].price,
                    });
                    // one gift per preference
                    break;
                }
            }
        }

        children[child_idx].assigned_budget = remaining;
    }

    Ok(report)
}

// ============================================================================
// TESTS
// ============================================================================
