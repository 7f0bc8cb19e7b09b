//! In-memory material store

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::seed;
use super::traits::MaterialRepository;
use crate::types::{Material, MaterialDraft, MaterialId};

/// Map plus id counter, guarded together so id assignment and insertion
/// happen under one write lock.
#[derive(Debug)]
struct Inner {
    /// Keyed by id; ids only grow, so key order is insertion order
    materials: BTreeMap<MaterialId, Material>,
    /// Next id to hand out
    next_id: i64,
}

impl Inner {
    fn new() -> Self {
        Self {
            materials: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn insert(&mut self, draft: MaterialDraft) -> Material {
        let id = MaterialId(self.next_id);
        self.next_id += 1;

        let material = Material {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            subject: draft.subject,
            year_level: draft.year_level,
            author: normalize_optional(draft.author),
            institution: normalize_optional(draft.institution),
            file_path: draft.file_path,
            cover_image: draft.cover_image,
            downloads: 0,
            featured: draft.featured,
            created_at: Utc::now(),
        };

        self.materials.insert(id, material.clone());
        material
    }
}

/// Treat blank optional text the same as an absent value
fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// In-memory [`MaterialRepository`]
///
/// All mutations take the write half of a single `RwLock`; reads take the
/// read half just long enough to clone a snapshot.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::new()),
        }
    }

    /// Create a store pre-populated with `drafts`, inserted in order
    pub fn with_materials(drafts: impl IntoIterator<Item = MaterialDraft>) -> Self {
        let mut inner = Inner::new();
        for draft in drafts {
            inner.insert(draft);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Create a store holding the bundled sample catalog
    pub fn with_sample_data() -> Self {
        Self::with_materials(seed::sample_materials())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MaterialRepository for MemoryStore {
    async fn insert(&self, draft: MaterialDraft) -> crate::Result<Material> {
        let material = self.inner.write().await.insert(draft);
        tracing::debug!(material_id = %material.id, title = %material.title, "Material inserted");
        Ok(material)
    }

    async fn get_by_id(&self, id: MaterialId) -> crate::Result<Option<Material>> {
        Ok(self.inner.read().await.materials.get(&id).cloned())
    }

    async fn get_all(&self) -> crate::Result<Vec<Material>> {
        Ok(self.inner.read().await.materials.values().cloned().collect())
    }

    async fn increment_downloads(&self, id: MaterialId) -> crate::Result<Option<Material>> {
        let mut inner = self.inner.write().await;
        let Some(material) = inner.materials.get_mut(&id) else {
            return Ok(None);
        };

        material.downloads += 1;
        tracing::debug!(material_id = %id, downloads = material.downloads, "Download recorded");
        Ok(Some(material.clone()))
    }

    async fn len(&self) -> crate::Result<usize> {
        Ok(self.inner.read().await.materials.len())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
