//! Material storage
//!
//! The catalog reaches its materials through the [`MaterialRepository`]
//! trait. [`MemoryStore`] is the only implementation: an in-memory map
//! guarded by a single lock, created at process start and handed to the
//! API layer by reference.

mod memory;
pub mod seed;
mod traits;

pub use memory::MemoryStore;
pub use traits::MaterialRepository;
