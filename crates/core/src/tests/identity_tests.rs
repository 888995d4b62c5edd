// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::identity::{
    AuthenticatedUser, GuestProfile, GuestProfileStore, IdentityProvider, resolve_participant,
};
use ifn_domain::{DomainError, ParticipantToken};

struct NoUser;

impl IdentityProvider for NoUser {
    fn current_user(&self) -> Option<AuthenticatedUser> {
        None
    }
}

struct FixedUser(AuthenticatedUser);

impl IdentityProvider for FixedUser {
    fn current_user(&self) -> Option<AuthenticatedUser> {
        Some(self.0.clone())
    }
}

#[derive(Default)]
struct MemoryStore {
    profile: Option<GuestProfile>,
}

impl GuestProfileStore for MemoryStore {
    fn load(&self) -> Option<GuestProfile> {
        self.profile.clone()
    }

    fn save(&mut self, profile: &GuestProfile) {
        self.profile = Some(profile.clone());
    }

    fn clear(&mut self) {
        self.profile = None;
    }
}

#[test]
fn test_authenticated_user_keeps_account_token_and_full_name() {
    let identity = FixedUser(AuthenticatedUser {
        account_id: String::from("acct-priya"),
        full_name: Some(String::from("Priya Sharma")),
        email: String::from("priya@example.com"),
    });
    let mut store = MemoryStore::default();

    let actor = resolve_participant(&identity, &mut store, None).unwrap();

    assert_eq!(actor.token, ParticipantToken::new("acct-priya"));
    assert_eq!(actor.display_name, "Priya Sharma");
    assert!(store.profile.is_none());
}

#[test]
fn test_authenticated_user_falls_back_to_email() {
    let identity = FixedUser(AuthenticatedUser {
        account_id: String::from("acct-marcus"),
        full_name: Some(String::from("   ")),
        email: String::from("marcus@example.com"),
    });
    let mut store = MemoryStore::default();

    let actor = resolve_participant(&identity, &mut store, None).unwrap();

    assert_eq!(actor.display_name, "marcus@example.com");
}

#[test]
fn test_guest_gets_prefixed_token_and_persists() {
    let mut store = MemoryStore::default();

    let actor = resolve_participant(&NoUser, &mut store, Some("  Priya  ")).unwrap();

    assert_eq!(actor.display_name, "Priya");
    assert!(actor.token.value().starts_with("guest-"));
    assert_eq!(actor.token.value().len(), "guest-".len() + 16);

    let saved = store.profile.as_ref().unwrap();
    assert_eq!(saved.token, actor.token);
    assert_eq!(saved.name, "Priya");
}

#[test]
fn test_guest_reuses_stored_token_after_rename() {
    let mut store = MemoryStore::default();
    let first = resolve_participant(&NoUser, &mut store, Some("Priya")).unwrap();

    let second = resolve_participant(&NoUser, &mut store, Some("Pri")).unwrap();

    assert_eq!(second.token, first.token);
    assert_eq!(second.display_name, "Pri");
    assert_eq!(store.profile.as_ref().unwrap().name, "Pri");
}

#[test]
fn test_guest_without_name_uses_stored_profile() {
    let mut store = MemoryStore::default();
    let first = resolve_participant(&NoUser, &mut store, Some("Priya")).unwrap();

    let returning = resolve_participant(&NoUser, &mut store, None).unwrap();

    assert_eq!(returning.token, first.token);
    assert_eq!(returning.display_name, "Priya");
}

#[test]
fn test_guest_with_no_usable_name_is_rejected() {
    let mut store = MemoryStore::default();

    let result = resolve_participant(&NoUser, &mut store, None);
    assert_eq!(
        result,
        Err(CoreError::Validation(DomainError::EmptyParticipantName))
    );

    let blank = resolve_participant(&NoUser, &mut store, Some("   "));
    assert_eq!(
        blank,
        Err(CoreError::Validation(DomainError::EmptyParticipantName))
    );
}

#[test]
fn test_clear_forgets_the_guest() {
    let mut store = MemoryStore::default();
    let first = resolve_participant(&NoUser, &mut store, Some("Priya")).unwrap();
    store.clear();

    let second = resolve_participant(&NoUser, &mut store, Some("Priya")).unwrap();

    assert_ne!(second.token, first.token);
}
