// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::repository::RepositoryError;
use ifn_catalog::CatalogError;
use ifn_domain::{DomainError, OrderId};

/// Errors surfaced by order lifecycle operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule rejected the input.
    Validation(DomainError),
    /// The actor does not own the order targeted by the operation.
    Unauthorized {
        /// The operation that was refused.
        action: &'static str,
    },
    /// No visible order carries the given id.
    NotFound(OrderId),
    /// Another participant's write landed first.
    Conflict {
        /// The contested order.
        id: OrderId,
        /// The version this actor's edit was based on.
        expected: u64,
        /// The version the repository actually holds.
        actual: u64,
    },
    /// The order repository failed.
    Repository(RepositoryError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "Validation failed: {err}"),
            Self::Unauthorized { action } => {
                write!(f, "Not authorized to {action} on another participant's order")
            }
            Self::NotFound(id) => write!(f, "Order {id} not found"),
            Self::Conflict {
                id,
                expected,
                actual,
            } => write!(
                f,
                "Order {id} changed concurrently (expected version {expected}, found {actual})"
            ),
            Self::Repository(err) => write!(f, "Repository error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repository(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err)
    }
}

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Unavailable { message } => {
                Self::Repository(RepositoryError::Unavailable { message })
            }
            CatalogError::Empty => Self::Repository(RepositoryError::Unavailable {
                message: String::from("menu source returned no items"),
            }),
        }
    }
}
