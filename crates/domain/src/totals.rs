// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monetary totals with tax.
//!
//! Amounts are accumulated unrounded and rounded to cents exactly once,
//! when a displayed figure is produced.

/// The fixed sales tax rate applied to every total.
pub const TAX_RATE: f64 = 0.07;

/// Rounds a dollar amount to cents.
#[must_use]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Displayed monetary figures for an order set.
///
/// Each field is rounded once, from the accumulated subtotal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Sum of item prices, rounded to cents.
    pub subtotal: f64,
    /// 7% tax on the subtotal, rounded to cents.
    pub tax: f64,
    /// Subtotal plus tax, rounded to cents.
    pub total: f64,
}

impl Totals {
    /// Computes displayed totals from an accumulated subtotal.
    ///
    /// Tax and total are each derived from the unrounded subtotal so no
    /// intermediate rounding error compounds.
    #[must_use]
    pub fn from_subtotal(subtotal: f64) -> Self {
        Self {
            subtotal: round_to_cents(subtotal),
            tax: round_to_cents(subtotal * TAX_RATE),
            total: round_to_cents(subtotal * (1.0 + TAX_RATE)),
        }
    }
}
