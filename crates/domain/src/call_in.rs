// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Call-in aggregation: the host's dish-grouped view for phoning in the
//! combined order.
//!
//! ## Rules (Authoritative)
//!
//! 1. Only submitted orders participate.
//! 2. Orders group by dish name, exact match on the stored menu item name.
//! 3. Prices are read from the joined menu item at aggregation time, not
//!    cached at order creation, so a later price change is reflected
//!    retroactively.
//! 4. Groups are sorted alphabetically by dish name.
//! 5. At spice level 10 the histogram splits into an "Indian Hot" line and
//!    a plain level-10 line; either line is omitted when its count is zero.
//! 6. Monetary figures are rounded once, at output.
//!
//! The aggregation is order-independent: permuting the input produces
//! identical groups, totals, and output ordering.

use crate::totals::Totals;
use crate::types::{OrderItem, SpiceLevel};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

/// The party size above which the host is reminded to consider extra rice.
const LARGE_PARTY_THRESHOLD: usize = 2;

/// All submitted orders for one dish, summed for call-in.
#[derive(Debug, Clone, PartialEq)]
pub struct CallInGroup {
    /// The dish name as stored on the menu item.
    pub item_name: String,
    /// Unit price from the first joined menu item seen for this dish.
    /// Informational only; `total_cost` sums each order's own joined
    /// price, so the two can diverge across a catalog price change.
    pub unit_price: f64,
    /// Number of orders for this dish.
    pub total_quantity: usize,
    /// Sum of unit prices across the group, unrounded.
    pub total_cost: f64,
    /// Count of orders at each spice level, level 0 included.
    pub spice_levels: BTreeMap<u8, usize>,
    /// Orders in this group flagged Indian Hot (all at spice level 10).
    pub indian_hot_count: usize,
}

/// One line of a group's spice breakdown, ready for the host to read out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiceLine {
    /// A numeric spice level and how many orders want it.
    Level {
        /// The spice level.
        level: u8,
        /// The order count at this level.
        count: usize,
    },
    /// The Indian Hot subset of level-10 orders.
    IndianHot {
        /// The order count designated Indian Hot.
        count: usize,
    },
}

impl CallInGroup {
    /// Renders the spice histogram with the level-10 split applied.
    ///
    /// Levels below 10 appear in ascending order. The level-10 bucket is
    /// split into an Indian Hot line and a plain level-10 remainder; a
    /// zero-count line is omitted entirely.
    #[must_use]
    pub fn spice_lines(&self) -> Vec<SpiceLine> {
        let mut lines: Vec<SpiceLine> = Vec::new();

        for (&level, &count) in &self.spice_levels {
            if level == SpiceLevel::MAX.value() {
                continue;
            }
            lines.push(SpiceLine::Level { level, count });
        }

        if self.indian_hot_count > 0 {
            lines.push(SpiceLine::IndianHot {
                count: self.indian_hot_count,
            });
        }

        let max_level_count: usize = self
            .spice_levels
            .get(&SpiceLevel::MAX.value())
            .copied()
            .unwrap_or(0);
        let plain_max: usize = max_level_count.saturating_sub(self.indian_hot_count);
        if plain_max > 0 {
            lines.push(SpiceLine::Level {
                level: SpiceLevel::MAX.value(),
                count: plain_max,
            });
        }

        lines
    }
}

/// The host's complete call-in view.
#[derive(Debug, Clone, PartialEq)]
pub struct CallInSummary {
    /// Dish groups, sorted alphabetically by name.
    pub groups: Vec<CallInGroup>,
    /// Total number of submitted orders.
    pub total_items: usize,
    /// Grand total with tax.
    pub totals: Totals,
    /// True when more than two distinct participants submitted orders.
    /// Advisory only (extra rice reminder); no effect on totals.
    pub large_party: bool,
}

/// Compares dish names for group ordering.
///
/// Case-insensitive comparison with a byte-order tiebreak, standing in for
/// locale-aware collation.
fn compare_dish_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Aggregates an event's orders into the host's call-in view.
///
/// Filters to submitted orders, groups by dish name, and computes per-group
/// quantities, costs, spice histograms, and Indian Hot counts, plus the
/// tax-inclusive grand total.
#[must_use]
pub fn group_for_call_in(orders: &[OrderItem]) -> CallInSummary {
    let submitted: Vec<&OrderItem> = orders.iter().filter(|order| order.submitted).collect();

    let mut groups: Vec<CallInGroup> = Vec::new();
    for order in &submitted {
        let item_name: &str = &order.menu_item.name;
        let index: usize = match groups.iter().position(|group| group.item_name == item_name) {
            Some(existing) => existing,
            None => {
                groups.push(CallInGroup {
                    item_name: item_name.to_owned(),
                    unit_price: order.menu_item.price,
                    total_quantity: 0,
                    total_cost: 0.0,
                    spice_levels: BTreeMap::new(),
                    indian_hot_count: 0,
                });
                groups.len() - 1
            }
        };

        let group: &mut CallInGroup = &mut groups[index];
        *group
            .spice_levels
            .entry(order.spice_level.value())
            .or_insert(0) += 1;
        group.total_quantity += 1;
        group.total_cost += order.menu_item.price;
        if order.indian_hot {
            group.indian_hot_count += 1;
        }
    }

    groups.sort_by(|a, b| compare_dish_names(&a.item_name, &b.item_name));

    let subtotal: f64 = groups.iter().map(|group| group.total_cost).sum();

    let participant_names: HashSet<&str> = submitted
        .iter()
        .map(|order| order.participant_name.as_str())
        .collect();

    CallInSummary {
        total_items: submitted.len(),
        totals: Totals::from_subtotal(subtotal),
        large_party: participant_names.len() > LARGE_PARTY_THRESHOLD,
        groups,
    }
}
