// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Participant identity resolution.
//!
//! Authenticated users carry their account id as the ownership token and
//! their profile name as the display label. Guests get a generated token
//! persisted through [`GuestProfileStore`] for the session, so a guest
//! keeps ownership of their orders across page loads and two guests who
//! share a display name do not own each other's orders.

use crate::error::CoreError;
use ifn_domain::{DomainError, Participant, ParticipantToken, validate_guest_name};
use rand::RngExt;
use rand::distr::Alphanumeric;
use tracing::debug;

const GUEST_TOKEN_PREFIX: &str = "guest-";
const GUEST_TOKEN_SUFFIX_LEN: usize = 16;

/// A signed-in user as reported by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Stable account identifier.
    pub account_id: String,
    /// Profile full name, if the user set one.
    pub full_name: Option<String>,
    /// Sign-in email address.
    pub email: String,
}

/// The identity collaborator contract.
pub trait IdentityProvider: Send + Sync {
    /// Returns the signed-in user, or `None` for a guest session.
    fn current_user(&self) -> Option<AuthenticatedUser>;
}

/// A guest's persisted session identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestProfile {
    /// Generated ownership token.
    pub token: ParticipantToken,
    /// The name the guest entered.
    pub name: String,
}

/// Local persistence for the guest identity.
pub trait GuestProfileStore: Send + Sync {
    /// Loads the persisted guest profile, if one exists.
    fn load(&self) -> Option<GuestProfile>;

    /// Persists the guest profile.
    fn save(&mut self, profile: &GuestProfile);

    /// Forgets the persisted guest profile.
    fn clear(&mut self);
}

fn generate_guest_token() -> ParticipantToken {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(GUEST_TOKEN_SUFFIX_LEN)
        .map(char::from)
        .collect();
    ParticipantToken::new(&format!("{GUEST_TOKEN_PREFIX}{suffix}"))
}

/// Resolves the acting participant for a session.
///
/// A signed-in user is labelled by their full name, falling back to their
/// email when the profile has no name. A guest is labelled by
/// `guest_name` when given, else by the name persisted from a previous
/// visit; either way the stored token is reused when present and the
/// resulting profile is saved back.
///
/// # Errors
///
/// Returns a validation error for a guest session with no usable name.
pub fn resolve_participant(
    identity: &dyn IdentityProvider,
    store: &mut dyn GuestProfileStore,
    guest_name: Option<&str>,
) -> Result<Participant, CoreError> {
    if let Some(user) = identity.current_user() {
        let display_name: String = match user.full_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => user.email,
        };
        debug!(account = %user.account_id, "resolved authenticated participant");
        return Ok(Participant::new(
            ParticipantToken::new(&user.account_id),
            display_name,
        ));
    }

    let stored: Option<GuestProfile> = store.load();
    let name: String = match guest_name {
        Some(raw) => validate_guest_name(raw)?,
        None => match &stored {
            Some(profile) => profile.name.clone(),
            None => return Err(CoreError::Validation(DomainError::EmptyParticipantName)),
        },
    };
    let token: ParticipantToken =
        stored.map_or_else(generate_guest_token, |profile| profile.token);

    let profile = GuestProfile {
        token: token.clone(),
        name: name.clone(),
    };
    store.save(&profile);
    debug!(token = token.value(), "resolved guest participant");
    Ok(Participant::new(token, name))
}
