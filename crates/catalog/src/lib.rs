// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Menu catalog collaborator contract and read-through cache.
//!
//! The catalog itself is owned by an external collaborator; this crate
//! defines the [`MenuSource`] contract the embedding application
//! implements, plus a [`MenuCatalog`] cache that bounds repeated fetches
//! of the slowly-changing menu with a time-based freshness window.

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

use async_trait::async_trait;
use ifn_domain::MenuItem;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

#[cfg(test)]
mod tests;

/// How long a fetched menu stays fresh before the next read refetches.
pub const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Errors surfaced by the menu catalog collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The menu source could not be reached.
    #[error("Menu source unavailable: {message}")]
    Unavailable {
        /// Description of the transport failure.
        message: String,
    },

    /// The menu source returned no items.
    #[error("Menu source returned no items")]
    Empty,
}

/// The external menu source contract.
///
/// Implemented by the embedding application (e.g. over its data store);
/// never implemented by this workspace.
#[async_trait]
pub trait MenuSource: Send + Sync {
    /// Fetches the full menu.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Unavailable` on transport failure.
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, CatalogError>;
}

struct CacheEntry {
    items: Vec<MenuItem>,
    fetched_at: Instant,
}

/// Read-through cache over a [`MenuSource`].
///
/// Holds the last fetched menu together with its fetch instant; reads
/// within the freshness window are served from the cache, later reads
/// refetch. `refresh` bypasses the window explicitly.
pub struct MenuCatalog<S> {
    source: S,
    freshness_window: Duration,
    cache: Mutex<Option<CacheEntry>>,
}

impl<S: MenuSource> MenuCatalog<S> {
    /// Creates a catalog with the default 5-minute freshness window.
    pub fn new(source: S) -> Self {
        Self::with_freshness_window(source, DEFAULT_FRESHNESS_WINDOW)
    }

    /// Creates a catalog with an explicit freshness window.
    pub fn with_freshness_window(source: S, freshness_window: Duration) -> Self {
        Self {
            source,
            freshness_window,
            cache: Mutex::new(None),
        }
    }

    /// Returns the menu, fetching from the source if the cache is stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache is stale and the source fetch fails
    /// or yields an empty menu. A failed refetch does not evict a stale
    /// cache entry; the next read tries again.
    pub async fn items(&self) -> Result<Vec<MenuItem>, CatalogError> {
        let mut cache = self.cache.lock().await;
        if let Some(entry) = cache.as_ref() {
            if entry.fetched_at.elapsed() < self.freshness_window {
                return Ok(entry.items.clone());
            }
        }

        debug!("menu cache stale, fetching from source");
        let items: Vec<MenuItem> = self.fetch_validated().await?;
        *cache = Some(CacheEntry {
            items: items.clone(),
            fetched_at: Instant::now(),
        });
        Ok(items)
    }

    /// Fetches the menu from the source unconditionally and replaces the
    /// cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fetch fails or yields an empty menu.
    pub async fn refresh(&self) -> Result<Vec<MenuItem>, CatalogError> {
        debug!("explicit menu refresh requested");
        let items: Vec<MenuItem> = self.fetch_validated().await?;
        let mut cache = self.cache.lock().await;
        *cache = Some(CacheEntry {
            items: items.clone(),
            fetched_at: Instant::now(),
        });
        Ok(items)
    }

    /// Drops any cached menu so the next read refetches.
    pub async fn invalidate(&self) {
        let mut cache = self.cache.lock().await;
        *cache = None;
    }

    /// Looks up a dish by name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu needed fetching and the fetch failed.
    pub async fn item_by_name(&self, name: &str) -> Result<Option<MenuItem>, CatalogError> {
        let items: Vec<MenuItem> = self.items().await?;
        Ok(items
            .into_iter()
            .find(|item| item.name.eq_ignore_ascii_case(name)))
    }

    async fn fetch_validated(&self) -> Result<Vec<MenuItem>, CatalogError> {
        let items: Vec<MenuItem> = self.source.fetch_menu().await?;
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        debug!(count = items.len(), "menu loaded from source");
        Ok(items)
    }
}
