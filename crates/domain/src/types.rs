// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, Time};

/// Repository-assigned identifier for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub i64);

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Repository-assigned identifier for a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub i64);

/// Identifier for an order line.
///
/// `Local` ids are generated client-side for optimistic display while a
/// create is still in flight. They are structurally distinct from `Remote`
/// ids so a removal attempted before confirmation can be recognized as a
/// pure local retraction rather than a repository delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderId {
    /// Client-generated placeholder id, not known to the repository.
    Local(u64),
    /// Repository-assigned id.
    Remote(i64),
}

impl OrderId {
    /// Returns whether this id is a client-side placeholder.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local(n) => write!(f, "local-{n}"),
            Self::Remote(n) => write!(f, "#{n}"),
        }
    }
}

/// A spice level in the 0-10 range.
///
/// Level 0 means "no spice selection" and is the forced value for dishes
/// without a spice selector. Level 10 is the only level at which the
/// Indian Hot designation applies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct SpiceLevel(u8);

impl SpiceLevel {
    /// The forced level for dishes without a spice selector.
    pub const NONE: Self = Self(0);
    /// The maximum spice level.
    pub const MAX: Self = Self(10);

    /// Creates a new `SpiceLevel`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSpiceLevel` if `level` is above 10.
    pub const fn new(level: u8) -> Result<Self, DomainError> {
        if level <= 10 {
            Ok(Self(level))
        } else {
            Err(DomainError::InvalidSpiceLevel(level))
        }
    }

    /// Returns the numeric level.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns whether this is the maximum level.
    #[must_use]
    pub const fn is_max(&self) -> bool {
        self.0 == Self::MAX.0
    }
}

impl std::fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable ownership token for a participant.
///
/// For authenticated users this equals the account id. For guests it is a
/// generated value persisted locally for the session, so two guests who
/// happen to share a display name do not own each other's orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantToken(String);

impl ParticipantToken {
    /// Creates a new `ParticipantToken`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// Returns the token value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// A person placing orders against an event.
///
/// The display name is resolved once (full name, else email, else guest
/// name) when the participant enters the event and is never re-resolved,
/// so renaming a guest does not relabel their past orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// The stable ownership token.
    pub token: ParticipantToken,
    /// The display label shown on orders.
    pub display_name: String,
}

impl Participant {
    /// Creates a new `Participant`.
    #[must_use]
    pub const fn new(token: ParticipantToken, display_name: String) -> Self {
        Self {
            token,
            display_name,
        }
    }
}

/// One scheduled group-ordering occasion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Repository-assigned identifier.
    pub id: EventId,
    /// The date of the event.
    pub date: Date,
    /// The start time of the event.
    pub start_time: Time,
    /// Where the group meets.
    pub location: String,
    /// The restaurant the order is phoned in to.
    pub restaurant: String,
    /// The participant hosting this event. Only the host may mutate the
    /// event or override submission flags on other participants' orders.
    pub host: Participant,
    /// When the event record was created.
    pub created_at: OffsetDateTime,
}

impl Event {
    /// Returns whether this event is active from a participant's
    /// perspective: its date has not yet passed.
    #[must_use]
    pub fn is_active(&self, today: Date) -> bool {
        self.date >= today
    }
}

/// A catalog dish, loaded read-only from the menu collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Repository-assigned identifier.
    pub id: MenuItemId,
    /// Dish name, unique within the catalog.
    pub name: String,
    /// Dish description.
    pub description: String,
    /// Price in dollars. Never negative.
    pub price: f64,
    /// The catalog's suggested spice level.
    pub default_spice_level: SpiceLevel,
    /// Whether the dish is vegetarian.
    pub vegetarian: bool,
    /// Whether the dish is vegan.
    pub vegan: bool,
    /// Structured spice-adjustability flag. When present it overrides the
    /// name-pattern classification; `None` falls back to the patterns
    /// because the catalog may not carry accurate category metadata.
    pub spice_adjustable: Option<bool>,
}

impl MenuItem {
    /// Creates a new `MenuItem`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming or the price
    /// is negative or NaN.
    pub fn new(
        id: MenuItemId,
        name: &str,
        description: &str,
        price: f64,
        default_spice_level: SpiceLevel,
        vegetarian: bool,
        vegan: bool,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyDishName);
        }
        // `price < 0.0` alone would wave NaN through into every sum.
        if price.is_nan() || price < 0.0 {
            return Err(DomainError::NegativePrice {
                name: name.to_owned(),
                price,
            });
        }
        Ok(Self {
            id,
            name: name.to_owned(),
            description: description.to_owned(),
            price,
            default_spice_level,
            vegetarian,
            vegan,
            spice_adjustable: None,
        })
    }

    /// Sets the structured spice-adjustability flag.
    #[must_use]
    pub const fn with_spice_adjustable(mut self, adjustable: bool) -> Self {
        self.spice_adjustable = Some(adjustable);
        self
    }
}

/// One participant's single-dish order line.
///
/// The menu item and event references are immutable after creation;
/// duplication creates a new `OrderItem` rather than re-parenting an
/// existing one. The joined menu item is read at aggregation time, so a
/// later catalog price change is reflected retroactively in totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// The order id, local until the repository confirms the create.
    pub id: OrderId,
    /// The event this order belongs to.
    pub event_id: EventId,
    /// The dish ordered, joined from the catalog.
    pub menu_item: MenuItem,
    /// Ownership token of the participant who placed the order.
    pub participant: ParticipantToken,
    /// Display label frozen at creation time.
    pub participant_name: String,
    /// Spice level. Always 0 for dishes without a spice selector.
    pub spice_level: SpiceLevel,
    /// Indian Hot designation. Invariant: true implies spice level 10.
    pub indian_hot: bool,
    /// Optional free-text instructions, at most 200 characters.
    pub special_instructions: Option<String>,
    /// Whether the owner has finalized this order for the event.
    pub submitted: bool,
    /// When the order was created.
    pub created_at: OffsetDateTime,
    /// Monotonic record version used to detect conflicting writes.
    pub version: u64,
}

impl OrderItem {
    /// Returns whether the given token owns this order.
    #[must_use]
    pub fn is_owned_by(&self, token: &ParticipantToken) -> bool {
        &self.participant == token
    }
}
