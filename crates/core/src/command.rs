// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order form commands.
//!
//! Commands are plain data so a front end can queue and replay them; all
//! validation and authorization happens when the form applies them.

use crate::controller::FinalizeReport;
use ifn_domain::{MenuItem, OrderId, OrderItem, SpiceLevel};

/// Field changes for an edit command.
///
/// `None` leaves a field untouched. `special_instructions` is doubly
/// optional so an edit can clear the text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderUpdates {
    /// New spice level, if changing.
    pub spice_level: Option<SpiceLevel>,
    /// New Indian Hot designation, if changing.
    pub indian_hot: Option<bool>,
    /// New special instructions, if changing. `Some(None)` clears them.
    pub special_instructions: Option<Option<String>>,
}

/// One mutation of the order form.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Order a dish with the given customization.
    Add {
        /// The dish to order.
        menu_item: MenuItem,
        /// Requested spice level.
        spice_level: SpiceLevel,
        /// Requested Indian Hot designation.
        indian_hot: bool,
        /// Optional free-text instructions.
        special_instructions: Option<String>,
    },
    /// Order the same dish and customization as a visible order.
    Duplicate {
        /// The order to copy.
        id: OrderId,
    },
    /// Change the customization of an owned order.
    Edit {
        /// The order to edit.
        id: OrderId,
        /// The fields to change.
        updates: OrderUpdates,
    },
    /// Withdraw an owned order.
    Remove {
        /// The order to remove.
        id: OrderId,
    },
    /// Set the submitted flag on an order.
    ToggleSubmitted {
        /// The order to flag.
        id: OrderId,
        /// The new submitted state.
        submitted: bool,
    },
    /// Submit every unsubmitted order the actor owns.
    FinalizeAll,
}

/// The confirmed effect of an applied command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A new order was created.
    Created(OrderItem),
    /// An existing order was updated.
    Updated(OrderItem),
    /// An order was removed.
    Removed(OrderId),
    /// A batch submission finished, possibly partially.
    Finalized(FinalizeReport),
}
