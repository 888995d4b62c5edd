// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Optimistic order state.
//!
//! The board holds the last repository-confirmed order list plus a log of
//! staged changes that have not been confirmed yet. Views are computed by
//! overlaying the staged changes on the confirmed list, so the caller sees
//! its own writes immediately while the repository round trip is in
//! flight. A confirmed change is folded into the confirmed list; a failed
//! change is reverted by dropping its staged entry.

use crate::repository::OrderPatch;
use ifn_domain::{OrderId, OrderItem};

/// One staged, not yet confirmed change.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    /// An optimistic order awaiting repository confirmation.
    Insert(OrderItem),
    /// A field update awaiting confirmation.
    Patch {
        /// The order being patched.
        id: OrderId,
        /// The staged field changes.
        patch: OrderPatch,
    },
    /// A removal awaiting confirmation.
    Remove {
        /// The order being removed.
        id: OrderId,
    },
}

impl PendingChange {
    fn matches(&self, target: OrderId) -> bool {
        match self {
            Self::Insert(order) => order.id == target,
            Self::Patch { id, .. } | Self::Remove { id } => *id == target,
        }
    }
}

/// Confirmed orders plus the staged-change overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderBoard {
    confirmed: Vec<OrderItem>,
    pending: Vec<PendingChange>,
}

impl OrderBoard {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            confirmed: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Replaces the confirmed list with a fresh repository read.
    ///
    /// The repository is the source of truth, so any staged changes are
    /// discarded rather than replayed over the new list.
    pub fn replace_confirmed(&mut self, orders: Vec<OrderItem>) {
        self.confirmed = orders;
        self.pending.clear();
    }

    /// Returns the last confirmed order list, without the overlay.
    #[must_use]
    pub fn confirmed(&self) -> &[OrderItem] {
        &self.confirmed
    }

    /// Returns whether any staged change awaits confirmation.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Computes the visible order list: confirmed orders with the staged
    /// changes overlaid in staging order.
    #[must_use]
    pub fn view(&self) -> Vec<OrderItem> {
        let mut orders: Vec<OrderItem> = self.confirmed.clone();
        for change in &self.pending {
            match change {
                PendingChange::Insert(order) => orders.push(order.clone()),
                PendingChange::Patch { id, patch } => {
                    if let Some(order) = orders.iter_mut().find(|order| order.id == *id) {
                        patch.apply_to(order);
                    }
                }
                PendingChange::Remove { id } => orders.retain(|order| order.id != *id),
            }
        }
        orders
    }

    /// Finds an order in the visible list.
    #[must_use]
    pub fn find(&self, id: OrderId) -> Option<OrderItem> {
        self.view().into_iter().find(|order| order.id == id)
    }

    /// Stages an optimistic insert.
    pub fn stage_insert(&mut self, order: OrderItem) {
        self.pending.push(PendingChange::Insert(order));
    }

    /// Retracts a staged insert before it was confirmed.
    ///
    /// Returns the retracted order, or `None` if no insert with that id
    /// is staged.
    pub fn retract_insert(&mut self, id: OrderId) -> Option<OrderItem> {
        let position: usize = self
            .pending
            .iter()
            .position(|change| matches!(change, PendingChange::Insert(order) if order.id == id))?;
        match self.pending.remove(position) {
            PendingChange::Insert(order) => Some(order),
            _ => None,
        }
    }

    /// Folds a confirmed insert into the confirmed list, replacing the
    /// staged placeholder.
    pub fn commit_insert(&mut self, local_id: OrderId, confirmed: OrderItem) {
        self.retract_insert(local_id);
        self.confirmed.push(confirmed);
    }

    /// Stages a field update.
    pub fn stage_patch(&mut self, id: OrderId, patch: OrderPatch) {
        self.pending.push(PendingChange::Patch { id, patch });
    }

    /// Folds a confirmed update into the confirmed list.
    pub fn commit_patch(&mut self, id: OrderId, confirmed: OrderItem) {
        self.drop_last_staged(id, |change| matches!(change, PendingChange::Patch { .. }));
        if let Some(order) = self.confirmed.iter_mut().find(|order| order.id == id) {
            *order = confirmed;
        }
    }

    /// Drops the most recently staged patch for an order after the
    /// repository rejected it.
    pub fn revert_patch(&mut self, id: OrderId) {
        self.drop_last_staged(id, |change| matches!(change, PendingChange::Patch { .. }));
    }

    /// Stages a removal.
    pub fn stage_remove(&mut self, id: OrderId) {
        self.pending.push(PendingChange::Remove { id });
    }

    /// Folds a confirmed removal into the confirmed list.
    pub fn commit_remove(&mut self, id: OrderId) {
        self.drop_last_staged(id, |change| matches!(change, PendingChange::Remove { .. }));
        self.confirmed.retain(|order| order.id != id);
    }

    /// Drops a staged removal after the repository rejected it.
    pub fn revert_remove(&mut self, id: OrderId) {
        self.drop_last_staged(id, |change| matches!(change, PendingChange::Remove { .. }));
    }

    fn drop_last_staged(&mut self, id: OrderId, kind: impl Fn(&PendingChange) -> bool) {
        let position: Option<usize> = self
            .pending
            .iter()
            .rposition(|change| change.matches(id) && kind(change));
        if let Some(position) = position {
            self.pending.remove(position);
        }
    }
}
