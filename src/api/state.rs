//! Application state for the API server

use crate::Config;
use crate::storage::MaterialRepository;
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// Cloned for each request (cheap Arc clones). The store is created once at
/// process start and reaches handlers only through this state.
#[derive(Clone)]
pub struct AppState {
    /// The material store
    pub store: Arc<dyn MaterialRepository>,

    /// Configuration (read-only at runtime)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(store: Arc<dyn MaterialRepository>, config: Arc<Config>) -> Self {
        Self { store, config }
    }
}
