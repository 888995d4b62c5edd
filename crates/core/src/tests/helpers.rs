// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::repository::{OrderPatch, OrderRepository, RepositoryError};
use async_trait::async_trait;
use ifn_catalog::{CatalogError, MenuSource};
use ifn_domain::{
    Event, EventId, MenuItem, MenuItemId, NewOrder, OrderId, OrderItem, Participant,
    ParticipantToken, SpiceLevel,
};
use std::sync::Mutex;
use time::macros::{date, datetime, time};

pub fn vindaloo() -> MenuItem {
    MenuItem::new(
        MenuItemId(1),
        "Chicken Vindaloo",
        "Fiery Goan curry",
        13.99,
        SpiceLevel::new(8).unwrap(),
        false,
        false,
    )
    .unwrap()
}

pub fn lassi() -> MenuItem {
    MenuItem::new(
        MenuItemId(2),
        "Mango Lassi",
        "Sweet yogurt drink",
        4.99,
        SpiceLevel::NONE,
        true,
        false,
    )
    .unwrap()
}

pub fn participant(token: &str, name: &str) -> Participant {
    Participant::new(ParticipantToken::new(token), name.into())
}

pub fn sample_event(host: &Participant) -> Event {
    Event {
        id: EventId(1),
        date: date!(2026 - 03 - 06),
        start_time: time!(18:30),
        location: "Office kitchen".into(),
        restaurant: "Coriander India Grill".into(),
        host: host.clone(),
        created_at: datetime!(2026-02-20 09:00 UTC),
    }
}

pub fn confirmed_order(
    id: i64,
    menu_item: MenuItem,
    owner: &Participant,
    spice_level: u8,
    indian_hot: bool,
    submitted: bool,
) -> OrderItem {
    OrderItem {
        id: OrderId::Remote(id),
        event_id: EventId(1),
        menu_item,
        participant: owner.token.clone(),
        participant_name: owner.display_name.clone(),
        spice_level: SpiceLevel::new(spice_level).unwrap(),
        indian_hot,
        special_instructions: None,
        submitted,
        created_at: datetime!(2026-03-01 12:00 UTC),
        version: 1,
    }
}

/// Fixed two-dish menu source.
pub struct StaticMenu;

#[async_trait]
impl MenuSource for StaticMenu {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, CatalogError> {
        Ok(vec![vindaloo(), lassi()])
    }
}

/// Menu source that always fails.
pub struct UnreachableMenu;

#[async_trait]
impl MenuSource for UnreachableMenu {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, CatalogError> {
        Err(CatalogError::Unavailable {
            message: String::from("connection refused"),
        })
    }
}

/// In-memory repository recording every call so tests can assert on the
/// traffic, with injectable failures.
pub struct MockOrderRepository {
    orders: Mutex<Vec<OrderItem>>,
    next_id: Mutex<i64>,
    creates: Mutex<usize>,
    updates: Mutex<usize>,
    deletes: Mutex<Vec<i64>>,
    fail_all: Mutex<Option<RepositoryError>>,
    fail_update_ids: Mutex<Vec<i64>>,
}

impl MockOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            creates: Mutex::new(0),
            updates: Mutex::new(0),
            deletes: Mutex::new(Vec::new()),
            fail_all: Mutex::new(None),
            fail_update_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn seed(&self, order: OrderItem) {
        let OrderId::Remote(id) = order.id else {
            panic!("seeded orders must carry remote ids");
        };
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(id + 1);
        self.orders.lock().unwrap().push(order);
    }

    pub fn fail_everything(&self, err: RepositoryError) {
        *self.fail_all.lock().unwrap() = Some(err);
    }

    pub fn fail_updates_for(&self, id: i64) {
        self.fail_update_ids.lock().unwrap().push(id);
    }

    /// Simulates a concurrent write by another participant.
    pub fn set_version(&self, id: i64, version: u64) {
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|order| order.id == OrderId::Remote(id))
            .expect("order to bump");
        order.version = version;
    }

    pub fn stored(&self, id: i64) -> Option<OrderItem> {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .find(|order| order.id == OrderId::Remote(id))
            .cloned()
    }

    pub fn create_count(&self) -> usize {
        *self.creates.lock().unwrap()
    }

    pub fn update_count(&self) -> usize {
        *self.updates.lock().unwrap()
    }

    pub fn delete_calls(&self) -> Vec<i64> {
        self.deletes.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), RepositoryError> {
        match self.fail_all.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    async fn list(&self, event_id: EventId) -> Result<Vec<OrderItem>, RepositoryError> {
        self.check_failure()?;
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|order| order.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn create(&self, draft: NewOrder) -> Result<OrderItem, RepositoryError> {
        *self.creates.lock().unwrap() += 1;
        self.check_failure()?;
        let mut next_id = self.next_id.lock().unwrap();
        let id: i64 = *next_id;
        *next_id += 1;
        let order = OrderItem {
            id: OrderId::Remote(id),
            event_id: draft.event_id,
            menu_item: draft.menu_item,
            participant: draft.participant.token.clone(),
            participant_name: draft.participant.display_name,
            spice_level: draft.customization.spice_level,
            indian_hot: draft.customization.indian_hot,
            special_instructions: draft.special_instructions,
            submitted: false,
            created_at: datetime!(2026-03-01 12:00 UTC),
            version: 1,
        };
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }

    async fn update(&self, id: i64, patch: OrderPatch) -> Result<OrderItem, RepositoryError> {
        *self.updates.lock().unwrap() += 1;
        self.check_failure()?;
        if self.fail_update_ids.lock().unwrap().contains(&id) {
            return Err(RepositoryError::Unavailable {
                message: String::from("injected update failure"),
            });
        }
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|order| order.id == OrderId::Remote(id))
            .ok_or(RepositoryError::NotFound(id))?;
        if order.version != patch.expected_version {
            return Err(RepositoryError::VersionConflict {
                id,
                expected: patch.expected_version,
                actual: order.version,
            });
        }
        patch.apply_to(order);
        order.version += 1;
        Ok(order.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.deletes.lock().unwrap().push(id);
        self.check_failure()?;
        let mut orders = self.orders.lock().unwrap();
        let before: usize = orders.len();
        orders.retain(|order| order.id != OrderId::Remote(id));
        if orders.len() == before {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }
}
