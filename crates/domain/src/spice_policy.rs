// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Classification of which dishes expose spice-level controls.
//!
//! The restaurant's catalog does not carry reliable category metadata, so
//! dishes are classified by name against a fixed list of case-insensitive
//! substring patterns covering categories that are never spice-adjusted:
//! drinks, breads and rice (biryani is pre-spiced to fixed levels),
//! desserts, and pre-prepared sides.
//!
//! A `MenuItem` may carry a structured `spice_adjustable` flag that
//! overrides the patterns entirely; the pattern list is the fallback for
//! an uncurated catalog.
//!
//! Every pattern match yields the same answer (no spice selector), so the
//! first-match behavior is order-independent even when a name matches two
//! categories (e.g. "Chicken Biryani Rice" matches both "rice" and
//! "biryani").

use crate::types::MenuItem;

/// Name patterns for items that do not have adjustable spice levels.
const NON_SPICED_ITEM_PATTERNS: &[&str] = &[
    // Drinks
    "lassi",
    "chai",
    "tea",
    "coffee",
    "juice",
    "soda",
    "water",
    "drink",
    "beverage",
    // Bread & rice (plain varieties; biryani is pre-spiced)
    "naan",
    "roti",
    "chapati",
    "paratha",
    "kulcha",
    "bread",
    "rice",
    "biryani",
    // Desserts
    "kulfi",
    "gulab",
    "kheer",
    "halwa",
    "dessert",
    "sweet",
    "ice cream",
    // Appetizers and sides that are pre-prepared
    "papadum",
    "papad",
    "pickle",
    "chutney",
    "raita",
    "yogurt",
    "salad",
];

/// Determines whether a menu item should expose spice-level controls.
///
/// Returns false for `None`. When the item carries a structured
/// `spice_adjustable` flag, that flag wins; otherwise the item name is
/// matched case-insensitively against the non-spiced pattern list and any
/// match means no selector.
#[must_use]
pub fn supports_spice_selector(menu_item: Option<&MenuItem>) -> bool {
    let Some(item) = menu_item else {
        return false;
    };

    if let Some(adjustable) = item.spice_adjustable {
        return adjustable;
    }

    let item_name: String = item.name.to_lowercase();
    !NON_SPICED_ITEM_PATTERNS
        .iter()
        .any(|pattern| item_name.contains(pattern))
}

/// Returns the patterns used to identify non-spiced items.
///
/// Useful for debugging or configuration display.
#[must_use]
pub const fn non_spiced_patterns() -> &'static [&'static str] {
    NON_SPICED_ITEM_PATTERNS
}
