//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the contact message store behind a trait object so startup decides
//! between the in-memory and Postgres implementations.

use std::sync::Arc;

use crate::services::contact::{ContactStore, MemoryContactStore};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactStore>,
}

impl AppState {
    #[must_use]
    pub fn new(contacts: Arc<dyn ContactStore>) -> Self {
        Self { contacts }
    }

    /// State backed by a fresh [`MemoryContactStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryContactStore::new()))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;
