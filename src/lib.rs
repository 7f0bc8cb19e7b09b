//! # study-catalog
//!
//! Catalog browser backend for BSc study materials: books, lecture notes,
//! past examination papers and research papers.
//!
//! ## Design Philosophy
//!
//! - **One store, explicitly passed** - A [`MaterialRepository`] is created
//!   at startup and handed to the API; there is no global state
//! - **Pure queries** - Filtering, search and sorting in [`query`] never
//!   mutate their input, so server and client passes share one engine
//! - **Typed boundary** - Raw input is parsed in [`validation`]; everything
//!   past it works on closed enums
//!
//! ## Quick Start
//!
//! ```no_run
//! use study_catalog::{Config, MemoryStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(Config::default());
//!     let store = Arc::new(MemoryStore::with_sample_data());
//!
//!     // Serve until SIGINT/SIGTERM
//!     study_catalog::api::start_api_server(store, config).await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Filtering, search and sorting
pub mod query;
/// Material storage
pub mod storage;
/// Core domain types
pub mod types;
/// Input validation at the API boundary
pub mod validation;

// Re-export commonly used types
pub use config::{ApiConfig, CatalogConfig, Config};
pub use error::{ApiError, Error, ErrorDetail, FieldError, Result, ToHttpStatus};
pub use query::{BrowseRequest, FilterState, SortOption, SubjectFilter};
pub use storage::{MaterialRepository, MemoryStore};
pub use types::{Category, Material, MaterialDraft, MaterialId, Subject, Taxonomy, YearLevel};

/// Resolves when the process is asked to stop.
///
/// SIGTERM or SIGINT on Unix, Ctrl+C elsewhere. [`api::start_api_server`]
/// uses it to begin graceful shutdown.
#[cfg(unix)]
pub async fn shutdown_signal() {
    use tokio::signal::unix::SignalKind;

    tokio::select! {
        () = unix_signal(SignalKind::terminate(), "SIGTERM") => {}
        () = unix_signal(SignalKind::interrupt(), "SIGINT") => {}
    }
}

#[cfg(unix)]
async fn unix_signal(kind: tokio::signal::unix::SignalKind, name: &'static str) {
    match tokio::signal::unix::signal(kind) {
        Ok(mut stream) => {
            stream.recv().await;
            tracing::info!(signal = name, "Shutdown requested");
        }
        Err(e) => {
            // Sandboxes may refuse signal handlers; Ctrl+C is the last resort
            tracing::warn!(signal = name, error = %e, "Cannot listen for signal");
            ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
pub async fn shutdown_signal() {
    ctrl_c().await;
}

/// Ctrl+C, or never if it cannot be listened for
async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!(signal = "ctrl_c", "Shutdown requested"),
        Err(e) => {
            tracing::error!(error = %e, "Cannot listen for Ctrl+C, shutdown only by kill");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    #[tokio::test]
    async fn test_shutdown_signal_waits_without_a_signal() {
        let waited = tokio::time::timeout(Duration::from_millis(50), super::shutdown_signal()).await;
        assert!(waited.is_err(), "shutdown_signal resolved with no signal sent");
    }
}
