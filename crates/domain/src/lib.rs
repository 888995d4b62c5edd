// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod active_event;
mod call_in;
mod error;
mod participant_view;
mod spice_policy;
mod totals;
mod types;
mod validation;

pub use active_event::select_active_event;
pub use call_in::{CallInGroup, CallInSummary, SpiceLine, group_for_call_in};
pub use error::DomainError;
pub use participant_view::{ParticipantOrders, ParticipantView, Viewer, group_by_participant};
pub use spice_policy::{non_spiced_patterns, supports_spice_selector};
pub use totals::{TAX_RATE, Totals, round_to_cents};
pub use types::{
    Event, EventId, MenuItem, MenuItemId, OrderId, OrderItem, Participant, ParticipantToken,
    SpiceLevel,
};
pub use validation::{
    Customization, MAX_INSTRUCTION_CHARS, NewOrder, validate_guest_name,
    validate_special_instructions,
};
