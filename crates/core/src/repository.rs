// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order persistence contract.
//!
//! The repository is owned by the embedding application; this module only
//! defines the contract the order form talks to. Updates carry the version
//! the caller last observed so a concurrent write by another participant
//! is detected instead of silently lost.

use async_trait::async_trait;
use ifn_domain::{EventId, NewOrder, OrderItem, SpiceLevel};

/// Errors surfaced by the order repository collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The repository could not be reached.
    Unavailable {
        /// Description of the transport failure.
        message: String,
    },
    /// No record carries the given repository id.
    NotFound(i64),
    /// The record's version no longer matches the caller's expectation.
    VersionConflict {
        /// The contested record.
        id: i64,
        /// The version the caller expected.
        expected: u64,
        /// The version the repository holds.
        actual: u64,
    },
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { message } => write!(f, "Repository unavailable: {message}"),
            Self::NotFound(id) => write!(f, "No order record with id {id}"),
            Self::VersionConflict {
                id,
                expected,
                actual,
            } => write!(
                f,
                "Order record {id} is at version {actual}, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for RepositoryError {}

/// A partial update to an existing order record.
///
/// `None` fields are left untouched. `special_instructions` is doubly
/// optional so the patch can distinguish "leave as is" from "clear".
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPatch {
    /// New spice level, if changing.
    pub spice_level: Option<SpiceLevel>,
    /// New Indian Hot designation, if changing.
    pub indian_hot: Option<bool>,
    /// New special instructions, if changing. `Some(None)` clears them.
    pub special_instructions: Option<Option<String>>,
    /// New submitted flag, if changing.
    pub submitted: Option<bool>,
    /// The record version this patch was computed against.
    pub expected_version: u64,
}

impl OrderPatch {
    /// Creates an empty patch against the given record version.
    #[must_use]
    pub const fn new(expected_version: u64) -> Self {
        Self {
            spice_level: None,
            indian_hot: None,
            special_instructions: None,
            submitted: None,
            expected_version,
        }
    }

    /// Applies the patched fields to an order in place.
    ///
    /// Used for the optimistic local overlay; the repository applies the
    /// same fields authoritatively and bumps the version.
    pub fn apply_to(&self, order: &mut OrderItem) {
        if let Some(spice_level) = self.spice_level {
            order.spice_level = spice_level;
        }
        if let Some(indian_hot) = self.indian_hot {
            order.indian_hot = indian_hot;
        }
        if let Some(instructions) = &self.special_instructions {
            order.special_instructions = instructions.clone();
        }
        if let Some(submitted) = self.submitted {
            order.submitted = submitted;
        }
    }
}

/// The order persistence contract.
///
/// Implemented by the embedding application over its data store; the
/// order form only ever talks to this trait.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Lists every order recorded against an event.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` on transport failure.
    async fn list(&self, event_id: EventId) -> Result<Vec<OrderItem>, RepositoryError>;

    /// Creates an order record from a validated draft.
    ///
    /// The repository assigns the id and the initial version.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` on transport failure.
    async fn create(&self, draft: NewOrder) -> Result<OrderItem, RepositoryError>;

    /// Applies a partial update to an order record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the record is gone and
    /// `RepositoryError::VersionConflict` if another write landed since
    /// the patch's expected version.
    async fn update(&self, id: i64, patch: OrderPatch) -> Result<OrderItem, RepositoryError>;

    /// Deletes an order record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the record is already gone.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
