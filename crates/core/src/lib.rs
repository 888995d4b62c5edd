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

mod command;
mod controller;
mod error;
mod identity;
mod repository;
mod state;

#[cfg(test)]
mod tests;

pub use command::{Command, OrderUpdates, Outcome};
pub use controller::{FinalizeReport, OrderForm};
pub use error::CoreError;
pub use identity::{
    AuthenticatedUser, GuestProfile, GuestProfileStore, IdentityProvider, resolve_participant,
};
pub use repository::{OrderPatch, OrderRepository, RepositoryError};
pub use state::{OrderBoard, PendingChange};
