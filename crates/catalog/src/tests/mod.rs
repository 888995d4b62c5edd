// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::{CatalogError, DEFAULT_FRESHNESS_WINDOW, MenuCatalog, MenuSource};
use async_trait::async_trait;
use ifn_domain::{MenuItem, MenuItemId, SpiceLevel};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn sample_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(
            MenuItemId(1),
            "Chicken Vindaloo",
            "Fiery Goan curry",
            13.99,
            SpiceLevel::new(8).unwrap(),
            false,
            false,
        )
        .unwrap(),
        MenuItem::new(
            MenuItemId(2),
            "Mango Lassi",
            "Sweet yogurt drink",
            4.99,
            SpiceLevel::NONE,
            true,
            false,
        )
        .unwrap(),
    ]
}

struct CountingSource {
    fetches: AtomicUsize,
    fail: bool,
}

impl CountingSource {
    fn new() -> Self {
        Self {
            fetches: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fetches: AtomicUsize::new(0),
            fail: true,
        }
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MenuSource for &CountingSource {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, CatalogError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CatalogError::Unavailable {
                message: String::from("connection refused"),
            });
        }
        Ok(sample_menu())
    }
}

struct EmptySource;

#[async_trait]
impl MenuSource for EmptySource {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, CatalogError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_reads_within_window_hit_cache() {
    let source = CountingSource::new();
    let catalog = MenuCatalog::new(&source);

    let first = catalog.items().await.expect("first read");
    let second = catalog.items().await.expect("second read");
    assert_eq!(first, second);
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn test_expired_window_refetches() {
    let source = CountingSource::new();
    let catalog = MenuCatalog::with_freshness_window(&source, Duration::ZERO);

    catalog.items().await.expect("first read");
    catalog.items().await.expect("second read");
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn test_refresh_bypasses_fresh_cache() {
    let source = CountingSource::new();
    let catalog = MenuCatalog::new(&source);

    catalog.items().await.expect("warm the cache");
    catalog.refresh().await.expect("refresh");
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn test_invalidate_forces_refetch() {
    let source = CountingSource::new();
    let catalog = MenuCatalog::new(&source);

    catalog.items().await.expect("warm the cache");
    catalog.invalidate().await;
    catalog.items().await.expect("read after invalidate");
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn test_unavailable_source_surfaces_error() {
    let source = CountingSource::failing();
    let catalog = MenuCatalog::new(&source);

    let result = catalog.items().await;
    assert_eq!(
        result,
        Err(CatalogError::Unavailable {
            message: String::from("connection refused"),
        })
    );
}

#[tokio::test]
async fn test_empty_menu_is_an_error() {
    let catalog = MenuCatalog::new(EmptySource);
    assert_eq!(catalog.items().await, Err(CatalogError::Empty));
}

#[tokio::test]
async fn test_item_by_name_is_case_insensitive() {
    let source = CountingSource::new();
    let catalog = MenuCatalog::new(&source);

    let item = catalog
        .item_by_name("mango lassi")
        .await
        .expect("lookup")
        .expect("found");
    assert_eq!(item.name, "Mango Lassi");

    let missing = catalog.item_by_name("Pad Thai").await.expect("lookup");
    assert!(missing.is_none());
}

#[test]
fn test_default_window_is_five_minutes() {
    assert_eq!(DEFAULT_FRESHNESS_WINDOW, Duration::from_secs(300));
}
