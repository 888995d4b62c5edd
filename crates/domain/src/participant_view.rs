// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-participant order listing with viewer-scoped visibility.
//!
//! Hosts see every participant's orders; everyone else sees only their
//! own. In the host view, unsubmitted orders still appear in the listing
//! (flagged by their own `submitted` field) but are excluded from every
//! total so pending items do not skew the bill. A participant's own view
//! totals everything in their in-progress cart.

use crate::totals::{Totals, round_to_cents};
use crate::types::{OrderItem, ParticipantToken};

/// Who is looking at the order set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer<'a> {
    /// The event host, granted the all-orders overview.
    Host,
    /// A regular participant, restricted to their own orders.
    Participant(&'a ParticipantToken),
}

/// One participant's orders with their subtotal.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantOrders {
    /// The participant's display name as stored on their orders.
    pub participant_name: String,
    /// The participant's orders, in input order.
    pub orders: Vec<OrderItem>,
    /// Sum of included item prices, rounded to cents.
    pub subtotal: f64,
}

/// The viewer-scoped listing with totals.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantView {
    /// Participant groups in first-seen input order.
    pub participants: Vec<ParticipantOrders>,
    /// Tax-inclusive totals over the included subtotals.
    pub totals: Totals,
}

/// Groups an event's orders by participant for the given viewer.
///
/// Non-host viewers are first restricted to their own orders by ownership
/// token. For a host viewer, unsubmitted orders are listed but excluded
/// from the subtotals and the grand total.
#[must_use]
pub fn group_by_participant(orders: &[OrderItem], viewer: Viewer<'_>) -> ParticipantView {
    let host_view: bool = matches!(viewer, Viewer::Host);

    let visible: Vec<&OrderItem> = match viewer {
        Viewer::Host => orders.iter().collect(),
        Viewer::Participant(token) => orders
            .iter()
            .filter(|order| order.is_owned_by(token))
            .collect(),
    };

    let mut participants: Vec<ParticipantOrders> = Vec::new();
    for order in visible {
        let index: usize = match participants
            .iter()
            .position(|group| group.participant_name == order.participant_name)
        {
            Some(existing) => existing,
            None => {
                participants.push(ParticipantOrders {
                    participant_name: order.participant_name.clone(),
                    orders: Vec::new(),
                    subtotal: 0.0,
                });
                participants.len() - 1
            }
        };

        let group: &mut ParticipantOrders = &mut participants[index];
        if !host_view || order.submitted {
            group.subtotal += order.menu_item.price;
        }
        group.orders.push(order.clone());
    }

    let grand_subtotal: f64 = participants.iter().map(|group| group.subtotal).sum();
    for group in &mut participants {
        group.subtotal = round_to_cents(group.subtotal);
    }

    ParticipantView {
        participants,
        totals: Totals::from_subtotal(grand_subtotal),
    }
}
