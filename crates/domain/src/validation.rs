// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order draft construction and input validation.

use crate::error::DomainError;
use crate::spice_policy::supports_spice_selector;
use crate::types::{EventId, MenuItem, OrderItem, Participant, SpiceLevel};

/// Maximum length of special instructions, in characters.
pub const MAX_INSTRUCTION_CHARS: usize = 200;

/// Validates special-instruction text.
///
/// Over-length instructions are rejected rather than truncated so the
/// participant can shorten them deliberately.
///
/// # Errors
///
/// Returns `DomainError::InstructionsTooLong` if the text exceeds
/// [`MAX_INSTRUCTION_CHARS`] characters.
pub fn validate_special_instructions(instructions: &str) -> Result<(), DomainError> {
    let length: usize = instructions.chars().count();
    if length > MAX_INSTRUCTION_CHARS {
        return Err(DomainError::InstructionsTooLong { length });
    }
    Ok(())
}

/// Validates and normalizes a guest display name.
///
/// # Errors
///
/// Returns `DomainError::EmptyParticipantName` if the name is empty after
/// trimming.
pub fn validate_guest_name(raw: &str) -> Result<String, DomainError> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyParticipantName);
    }
    Ok(trimmed.to_owned())
}

/// A resolved spice customization for a specific dish.
///
/// Construction goes through [`Customization::resolve`], which is the only
/// place the spice/Indian-Hot coupling rules live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Customization {
    /// The resolved spice level.
    pub spice_level: SpiceLevel,
    /// The resolved Indian Hot designation.
    pub indian_hot: bool,
}

impl Customization {
    /// Resolves a requested customization against a dish.
    ///
    /// Dishes without a spice selector are forced to level 0 with Indian
    /// Hot cleared, regardless of what the caller requested. For
    /// spice-adjustable dishes, Indian Hot is only valid at level 10.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IndianHotRequiresMaxSpice` if Indian Hot was
    /// requested below the maximum spice level on an adjustable dish.
    pub fn resolve(
        menu_item: &MenuItem,
        spice_level: SpiceLevel,
        indian_hot: bool,
    ) -> Result<Self, DomainError> {
        if !supports_spice_selector(Some(menu_item)) {
            return Ok(Self {
                spice_level: SpiceLevel::NONE,
                indian_hot: false,
            });
        }

        if indian_hot && !spice_level.is_max() {
            return Err(DomainError::IndianHotRequiresMaxSpice {
                spice_level: spice_level.value(),
            });
        }

        Ok(Self {
            spice_level,
            indian_hot,
        })
    }
}

/// A validated order draft, ready for the repository.
///
/// Drafts are always unsubmitted; the submitted flag only ever becomes
/// true through an explicit toggle after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    /// The event this order targets.
    pub event_id: EventId,
    /// The dish being ordered.
    pub menu_item: MenuItem,
    /// The participant placing the order.
    pub participant: Participant,
    /// The resolved spice customization.
    pub customization: Customization,
    /// Optional special instructions, validated and trimmed to `None`
    /// when blank.
    pub special_instructions: Option<String>,
}

impl NewOrder {
    /// Builds a validated order draft.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The participant display name is empty after trimming
    /// - Indian Hot is requested below spice level 10 on an adjustable dish
    /// - The special instructions exceed the character limit
    pub fn build(
        event_id: EventId,
        menu_item: MenuItem,
        participant: Participant,
        spice_level: SpiceLevel,
        indian_hot: bool,
        special_instructions: Option<String>,
    ) -> Result<Self, DomainError> {
        if participant.display_name.trim().is_empty() {
            return Err(DomainError::EmptyParticipantName);
        }

        let customization: Customization =
            Customization::resolve(&menu_item, spice_level, indian_hot)?;

        let special_instructions: Option<String> = match special_instructions {
            Some(text) => {
                validate_special_instructions(&text)?;
                if text.trim().is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
            None => None,
        };

        Ok(Self {
            event_id,
            menu_item,
            participant,
            customization,
            special_instructions,
        })
    }
}

impl OrderItem {
    /// Produces a draft duplicating this order for the given actor.
    ///
    /// The clone copies the dish, spice level, Indian Hot designation, and
    /// special instructions; the submitted flag is reset. Attribution goes
    /// to the duplicating actor, not the original owner: duplicating a
    /// visible order is how one participant orders the same dish as
    /// another.
    #[must_use]
    pub fn duplicate_for(&self, actor: &Participant) -> NewOrder {
        NewOrder {
            event_id: self.event_id,
            menu_item: self.menu_item.clone(),
            participant: actor.clone(),
            customization: Customization {
                spice_level: self.spice_level,
                indian_hot: self.indian_hot,
            },
            special_instructions: self.special_instructions.clone(),
        }
    }
}
