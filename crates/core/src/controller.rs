// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The order form.
//!
//! One `OrderForm` represents one participant's session against one
//! event. Every mutation is staged on the optimistic board first, then
//! confirmed or reverted by the repository round trip, so the caller's
//! own writes are visible immediately. Adds are exposed in two phases
//! (`stage_add` / `settle_add`) so a removal that lands between staging
//! and confirmation stays a pure local retraction.

use crate::command::{Command, OrderUpdates, Outcome};
use crate::error::CoreError;
use crate::repository::{OrderPatch, OrderRepository, RepositoryError};
use crate::state::OrderBoard;
use ifn_catalog::{MenuCatalog, MenuSource};
use ifn_domain::{
    CallInSummary, Customization, DomainError, Event, MenuItem, NewOrder, OrderId, OrderItem,
    Participant, ParticipantView, SpiceLevel, Viewer, group_by_participant, group_for_call_in,
    validate_special_instructions,
};
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::{debug, warn};

/// The result of a batch submission.
///
/// Submission is best effort: orders that could not be flagged stay
/// unsubmitted and are reported alongside the ones that went through.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FinalizeReport {
    /// Orders flagged submitted.
    pub submitted: Vec<OrderId>,
    /// Orders left unsubmitted, with the error each one hit.
    pub failed: Vec<(OrderId, CoreError)>,
}

impl FinalizeReport {
    /// Returns whether every targeted order was submitted.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// One participant's order-form session against one event.
pub struct OrderForm<R: OrderRepository> {
    repository: Arc<R>,
    event: Event,
    actor: Participant,
    board: OrderBoard,
    next_local_id: u64,
}

impl<R: OrderRepository> OrderForm<R> {
    /// Creates a form for the given actor and event.
    ///
    /// The board starts empty; call [`OrderForm::refresh`] to load the
    /// event's orders.
    #[must_use]
    pub const fn new(repository: Arc<R>, event: Event, actor: Participant) -> Self {
        Self {
            repository,
            event,
            actor,
            board: OrderBoard::new(),
            next_local_id: 1,
        }
    }

    /// Returns the event this form targets.
    #[must_use]
    pub const fn event(&self) -> &Event {
        &self.event
    }

    /// Returns the acting participant.
    #[must_use]
    pub const fn actor(&self) -> &Participant {
        &self.actor
    }

    /// Returns whether the actor hosts the event.
    #[must_use]
    pub fn is_host(&self) -> bool {
        self.event.host.token == self.actor.token
    }

    /// Returns the visible order list, staged changes included.
    #[must_use]
    pub fn orders(&self) -> Vec<OrderItem> {
        self.board.view()
    }

    /// Computes the call-in summary over the visible orders.
    #[must_use]
    pub fn call_in_summary(&self) -> CallInSummary {
        group_for_call_in(&self.board.view())
    }

    /// Computes the per-participant view for the actor.
    ///
    /// The host sees every participant's orders; everyone else sees only
    /// their own.
    #[must_use]
    pub fn participant_view(&self) -> ParticipantView {
        let viewer: Viewer<'_> = if self.is_host() {
            Viewer::Host
        } else {
            Viewer::Participant(&self.actor.token)
        };
        group_by_participant(&self.board.view(), viewer)
    }

    /// Reloads the confirmed order list from the repository.
    ///
    /// Staged changes are discarded; the repository is the source of
    /// truth.
    ///
    /// # Errors
    ///
    /// Returns a repository error if the list could not be fetched.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        let orders: Vec<OrderItem> = self
            .repository
            .list(self.event.id)
            .await
            .map_err(CoreError::Repository)?;
        debug!(event = %self.event.id, count = orders.len(), "order list refreshed");
        self.board.replace_confirmed(orders);
        Ok(())
    }

    /// Stages an optimistic order from a validated draft and returns its
    /// placeholder id.
    pub fn stage_add(&mut self, draft: &NewOrder) -> OrderId {
        let id: OrderId = OrderId::Local(self.next_local_id);
        self.next_local_id += 1;
        let optimistic = OrderItem {
            id,
            event_id: draft.event_id,
            menu_item: draft.menu_item.clone(),
            participant: draft.participant.token.clone(),
            participant_name: draft.participant.display_name.clone(),
            spice_level: draft.customization.spice_level,
            indian_hot: draft.customization.indian_hot,
            special_instructions: draft.special_instructions.clone(),
            submitted: false,
            created_at: OffsetDateTime::now_utc(),
            version: 0,
        };
        self.board.stage_insert(optimistic);
        debug!(order = %id, dish = draft.menu_item.name, "order staged");
        id
    }

    /// Sends a staged order to the repository and swaps the placeholder
    /// for the confirmed record.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the staged order was retracted in
    /// the meantime; no create is issued in that case. A failed create
    /// retracts the placeholder and surfaces the repository error.
    pub async fn settle_add(&mut self, local_id: OrderId) -> Result<OrderItem, CoreError> {
        let staged: OrderItem = self
            .board
            .find(local_id)
            .ok_or(CoreError::NotFound(local_id))?;
        let draft = NewOrder {
            event_id: staged.event_id,
            menu_item: staged.menu_item.clone(),
            participant: Participant::new(
                staged.participant.clone(),
                staged.participant_name.clone(),
            ),
            customization: Customization {
                spice_level: staged.spice_level,
                indian_hot: staged.indian_hot,
            },
            special_instructions: staged.special_instructions.clone(),
        };
        match self.repository.create(draft).await {
            Ok(confirmed) => {
                debug!(order = %confirmed.id, "order create confirmed");
                self.board.commit_insert(local_id, confirmed.clone());
                Ok(confirmed)
            }
            Err(err) => {
                warn!(order = %local_id, error = %err, "order create failed, retracting");
                self.board.retract_insert(local_id);
                Err(Self::repository_error(err, local_id))
            }
        }
    }

    /// Orders a dish for the actor.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any repository call if the draft
    /// is invalid, or a repository error if the create fails.
    pub async fn add(
        &mut self,
        menu_item: MenuItem,
        spice_level: SpiceLevel,
        indian_hot: bool,
        special_instructions: Option<String>,
    ) -> Result<OrderItem, CoreError> {
        let draft: NewOrder = NewOrder::build(
            self.event.id,
            menu_item,
            self.actor.clone(),
            spice_level,
            indian_hot,
            special_instructions,
        )?;
        let local_id: OrderId = self.stage_add(&draft);
        self.settle_add(local_id).await
    }

    /// Orders a dish looked up by name from the menu catalog.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank or unknown dish name, plus
    /// anything [`OrderForm::add`] can return.
    pub async fn add_named<S: MenuSource>(
        &mut self,
        catalog: &MenuCatalog<S>,
        dish_name: &str,
        spice_level: SpiceLevel,
        indian_hot: bool,
        special_instructions: Option<String>,
    ) -> Result<OrderItem, CoreError> {
        let trimmed: &str = dish_name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation(DomainError::EmptyDishName));
        }
        let menu_item: MenuItem = catalog
            .item_by_name(trimmed)
            .await?
            .ok_or_else(|| CoreError::Validation(DomainError::UnknownDish(trimmed.to_owned())))?;
        self.add(menu_item, spice_level, indian_hot, special_instructions)
            .await
    }

    /// Orders the same dish and customization as a visible order,
    /// attributed to the actor.
    ///
    /// Any participant may duplicate any visible order; this is how one
    /// person orders "the same as" another.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no visible order carries the id,
    /// plus anything the create round trip can return.
    pub async fn duplicate(&mut self, id: OrderId) -> Result<OrderItem, CoreError> {
        let source: OrderItem = self.board.find(id).ok_or(CoreError::NotFound(id))?;
        let draft: NewOrder = source.duplicate_for(&self.actor);
        let local_id: OrderId = self.stage_add(&draft);
        self.settle_add(local_id).await
    }

    /// Changes the customization of an order the actor owns.
    ///
    /// Spice changes are re-resolved against the dish, so a non-spiced
    /// dish stays at level 0 and Indian Hot keeps requiring level 10.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Unauthorized` for another participant's order,
    /// `CoreError::NotFound` for an unknown or still-unconfirmed id,
    /// `CoreError::Conflict` when another write landed first, or a
    /// validation error for invalid field values.
    pub async fn edit(&mut self, id: OrderId, updates: &OrderUpdates) -> Result<OrderItem, CoreError> {
        let current: OrderItem = self.board.find(id).ok_or(CoreError::NotFound(id))?;
        if !current.is_owned_by(&self.actor.token) {
            return Err(CoreError::Unauthorized {
                action: "edit order",
            });
        }
        let OrderId::Remote(remote_id) = id else {
            // Still settling; the repository has nothing to patch yet.
            return Err(CoreError::NotFound(id));
        };
        let patch: OrderPatch = Self::validated_patch(&current, updates)?;
        self.round_trip_patch(id, remote_id, patch).await
    }

    /// Sets the submitted flag on an order.
    ///
    /// The owner may flag their own orders; the host may flag anyone's.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Unauthorized` if the actor is neither owner
    /// nor host, `CoreError::NotFound` for an unknown or unconfirmed id,
    /// or a conflict or repository error from the round trip.
    pub async fn toggle_submitted(
        &mut self,
        id: OrderId,
        submitted: bool,
    ) -> Result<OrderItem, CoreError> {
        let current: OrderItem = self.board.find(id).ok_or(CoreError::NotFound(id))?;
        if !current.is_owned_by(&self.actor.token) && !self.is_host() {
            return Err(CoreError::Unauthorized {
                action: "toggle submission",
            });
        }
        let OrderId::Remote(remote_id) = id else {
            return Err(CoreError::NotFound(id));
        };
        let mut patch: OrderPatch = OrderPatch::new(current.version);
        patch.submitted = Some(submitted);
        self.round_trip_patch(id, remote_id, patch).await
    }

    /// Withdraws an order the actor owns.
    ///
    /// An order that was never confirmed is retracted locally without a
    /// repository call. An order the repository no longer holds is
    /// dropped locally and reported as not found.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Unauthorized` for another participant's order,
    /// `CoreError::NotFound` for an unknown or already-deleted id, or a
    /// repository error if the delete fails.
    pub async fn remove(&mut self, id: OrderId) -> Result<(), CoreError> {
        let current: OrderItem = self.board.find(id).ok_or(CoreError::NotFound(id))?;
        if !current.is_owned_by(&self.actor.token) {
            return Err(CoreError::Unauthorized {
                action: "remove order",
            });
        }
        let OrderId::Remote(remote_id) = id else {
            self.board.retract_insert(id);
            debug!(order = %id, "unconfirmed order retracted locally");
            return Ok(());
        };
        self.board.stage_remove(id);
        match self.repository.delete(remote_id).await {
            Ok(()) => {
                debug!(order = %id, "order delete confirmed");
                self.board.commit_remove(id);
                Ok(())
            }
            Err(RepositoryError::NotFound(_)) => {
                // Already gone server-side; drop it locally all the same.
                self.board.commit_remove(id);
                Err(CoreError::NotFound(id))
            }
            Err(err) => {
                warn!(order = %id, error = %err, "order delete failed, reverting");
                self.board.revert_remove(id);
                Err(Self::repository_error(err, id))
            }
        }
    }

    /// Submits every unsubmitted, confirmed order the actor owns.
    ///
    /// Best effort: each order is flagged independently and failures do
    /// not stop the batch. Orders still awaiting create confirmation are
    /// skipped.
    pub async fn finalize_all(&mut self) -> FinalizeReport {
        let targets: Vec<(OrderId, i64, u64)> = self
            .board
            .view()
            .iter()
            .filter(|order| order.is_owned_by(&self.actor.token) && !order.submitted)
            .filter_map(|order| match order.id {
                OrderId::Remote(remote_id) => Some((order.id, remote_id, order.version)),
                OrderId::Local(_) => None,
            })
            .collect();

        let mut report = FinalizeReport::default();
        for (id, remote_id, version) in targets {
            let mut patch: OrderPatch = OrderPatch::new(version);
            patch.submitted = Some(true);
            match self.round_trip_patch(id, remote_id, patch).await {
                Ok(_) => report.submitted.push(id),
                Err(err) => {
                    warn!(order = %id, error = %err, "order left unsubmitted");
                    report.failed.push((id, err));
                }
            }
        }
        report
    }

    /// Applies a command to the form.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying operation returns.
    pub async fn apply(&mut self, command: Command) -> Result<Outcome, CoreError> {
        match command {
            Command::Add {
                menu_item,
                spice_level,
                indian_hot,
                special_instructions,
            } => Ok(Outcome::Created(
                self.add(menu_item, spice_level, indian_hot, special_instructions)
                    .await?,
            )),
            Command::Duplicate { id } => Ok(Outcome::Created(self.duplicate(id).await?)),
            Command::Edit { id, updates } => {
                Ok(Outcome::Updated(self.edit(id, &updates).await?))
            }
            Command::Remove { id } => {
                self.remove(id).await?;
                Ok(Outcome::Removed(id))
            }
            Command::ToggleSubmitted { id, submitted } => Ok(Outcome::Updated(
                self.toggle_submitted(id, submitted).await?,
            )),
            Command::FinalizeAll => Ok(Outcome::Finalized(self.finalize_all().await)),
        }
    }

    fn validated_patch(
        current: &OrderItem,
        updates: &OrderUpdates,
    ) -> Result<OrderPatch, CoreError> {
        let mut patch: OrderPatch = OrderPatch::new(current.version);
        if updates.spice_level.is_some() || updates.indian_hot.is_some() {
            let spice_level: SpiceLevel = updates.spice_level.unwrap_or(current.spice_level);
            let indian_hot: bool = updates.indian_hot.unwrap_or(current.indian_hot);
            let customization: Customization =
                Customization::resolve(&current.menu_item, spice_level, indian_hot)?;
            patch.spice_level = Some(customization.spice_level);
            patch.indian_hot = Some(customization.indian_hot);
        }
        if let Some(instructions) = &updates.special_instructions {
            if let Some(text) = instructions {
                validate_special_instructions(text)?;
            }
            patch.special_instructions = Some(instructions.clone());
        }
        Ok(patch)
    }

    async fn round_trip_patch(
        &mut self,
        id: OrderId,
        remote_id: i64,
        patch: OrderPatch,
    ) -> Result<OrderItem, CoreError> {
        self.board.stage_patch(id, patch.clone());
        match self.repository.update(remote_id, patch).await {
            Ok(confirmed) => {
                debug!(order = %id, version = confirmed.version, "order update confirmed");
                self.board.commit_patch(id, confirmed.clone());
                Ok(confirmed)
            }
            Err(err) => {
                warn!(order = %id, error = %err, "order update failed, reverting");
                self.board.revert_patch(id);
                Err(Self::repository_error(err, id))
            }
        }
    }

    fn repository_error(err: RepositoryError, id: OrderId) -> CoreError {
        match err {
            RepositoryError::NotFound(_) => CoreError::NotFound(id),
            RepositoryError::VersionConflict {
                expected, actual, ..
            } => CoreError::Conflict {
                id,
                expected,
                actual,
            },
            RepositoryError::Unavailable { message } => {
                CoreError::Repository(RepositoryError::Unavailable { message })
            }
        }
    }
}
