//! Storage trait for the material catalog

use async_trait::async_trait;

use crate::types::{Material, MaterialDraft, MaterialId};

/// Authoritative collection of materials
///
/// Implementations own identity assignment: ids are sequential, never
/// reused, and immutable once assigned. Every method returns
/// [`crate::Result`] so a backend failure can surface as an internal error;
/// unknown ids are reported as `Ok(None)`, not as errors.
///
/// # Examples
///
/// ```
/// use study_catalog::storage::{MaterialRepository, MemoryStore};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryStore::with_sample_data();
///
/// let all = store.get_all().await?;
/// let first = store.increment_downloads(all[0].id).await?;
/// assert_eq!(first.map(|m| m.downloads), Some(all[0].downloads + 1));
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    /// Persist a new material
    ///
    /// Assigns the next id, sets `downloads` to 0 and `created_at` to now.
    /// Empty optional text fields are stored as `None`.
    async fn insert(&self, draft: MaterialDraft) -> crate::Result<Material>;

    /// Look up a single material
    async fn get_by_id(&self, id: MaterialId) -> crate::Result<Option<Material>>;

    /// Snapshot of every material, in insertion order
    async fn get_all(&self) -> crate::Result<Vec<Material>>;

    /// Add exactly one to a material's download counter
    ///
    /// The read-modify-write is atomic with respect to other callers, so N
    /// concurrent calls on one id raise the counter by exactly N. Returns the
    /// updated record, or `None` if the id is unknown.
    async fn increment_downloads(&self, id: MaterialId) -> crate::Result<Option<Material>>;

    /// Number of stored materials
    async fn len(&self) -> crate::Result<usize>;

    /// Whether the store holds no materials
    async fn is_empty(&self) -> crate::Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Human-readable backend name for logging
    fn name(&self) -> &'static str;
}
