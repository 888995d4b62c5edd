// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::validation::MAX_INSTRUCTION_CHARS;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Spice level is outside the 0-10 range.
    InvalidSpiceLevel(u8),
    /// Indian Hot was requested at a spice level below the maximum.
    IndianHotRequiresMaxSpice {
        /// The spice level that was requested alongside Indian Hot.
        spice_level: u8,
    },
    /// Special instructions exceed the character limit.
    InstructionsTooLong {
        /// The character count of the rejected instructions.
        length: usize,
    },
    /// Participant display name is empty after trimming.
    EmptyParticipantName,
    /// Menu item name is empty.
    EmptyDishName,
    /// The named dish does not exist in the menu catalog.
    UnknownDish(String),
    /// Menu item price is negative or NaN.
    NegativePrice {
        /// The dish with the invalid price.
        name: String,
        /// The invalid price value.
        price: f64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSpiceLevel(level) => {
                write!(f, "Spice level must be between 0 and 10, got {level}")
            }
            Self::IndianHotRequiresMaxSpice { spice_level } => {
                write!(
                    f,
                    "Indian Hot requires spice level 10, got {spice_level}"
                )
            }
            Self::InstructionsTooLong { length } => {
                write!(
                    f,
                    "Special instructions must be at most {MAX_INSTRUCTION_CHARS} characters, got {length}"
                )
            }
            Self::EmptyParticipantName => {
                write!(f, "Participant name cannot be empty")
            }
            Self::EmptyDishName => write!(f, "Dish name cannot be empty"),
            Self::UnknownDish(name) => write!(f, "Dish '{name}' is not on the menu"),
            Self::NegativePrice { name, price } => {
                write!(f, "Price for '{name}' must be a non-negative amount, got {price}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
