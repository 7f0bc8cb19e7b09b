//! Query engine: filtering, search and sorting over material snapshots
//!
//! Every function here is pure. It takes a slice, leaves it untouched, and
//! returns a new `Vec`, so the same code serves the request handlers and any
//! client that re-filters a list it already holds.
//!
//! # Year-level filtering
//!
//! Category and subject filters treat "no selection" as a wildcard. Year
//! levels differ: a material without a year level never matches a specific
//! year, neither in [`by_year_level`] nor in a non-empty
//! [`FilterState::year_levels`]. Only an empty year-level selection keeps it.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::types::{Category, Material, Subject, YearLevel};

/// Subject clause of a [`FilterState`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubjectFilter {
    /// No restriction
    #[default]
    All,
    /// Only materials with this subject
    Only(Subject),
}

impl SubjectFilter {
    fn matches(&self, subject: Subject) -> bool {
        match self {
            SubjectFilter::All => true,
            SubjectFilter::Only(wanted) => *wanted == subject,
        }
    }
}

/// Transient multi-field filter selection
///
/// The default state selects every category, all subjects and no year
/// levels, which keeps every material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// Allowed categories; empty means no restriction
    pub categories: BTreeSet<Category>,
    /// Allowed subject
    pub subject: SubjectFilter,
    /// Allowed year levels; empty means no restriction
    pub year_levels: BTreeSet<YearLevel>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            categories: Category::ALL.into_iter().collect(),
            subject: SubjectFilter::All,
            year_levels: BTreeSet::new(),
        }
    }
}

impl FilterState {
    /// Whether a single material passes all three clauses
    pub fn matches(&self, material: &Material) -> bool {
        let category_ok =
            self.categories.is_empty() || self.categories.contains(&material.category);
        let subject_ok = self.subject.matches(material.subject);
        let year_ok = self.year_levels.is_empty()
            || material
                .year_level
                .is_some_and(|y| self.year_levels.contains(&y));

        category_ok && subject_ok && year_ok
    }
}

/// Ordering applied by [`sort`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortOption {
    /// Most downloaded first
    Popular,
    /// Most recently created first
    Newest,
    /// Title A-Z
    TitleAsc,
    /// Title Z-A
    TitleDesc,
    /// Title matches for `query` first, then most downloaded
    Relevance {
        /// The search text titles are matched against
        query: String,
    },
    /// Keep input order
    Unsorted,
}

impl SortOption {
    /// Parse a sort option name (`popular`, `newest`, `az`, `za`,
    /// `relevance`).
    ///
    /// Unrecognized names fall back to [`SortOption::Unsorted`]. `relevance`
    /// ranks against `query`; without one it degenerates to popularity.
    pub fn parse(name: &str, query: Option<&str>) -> Self {
        match name {
            "popular" => SortOption::Popular,
            "newest" => SortOption::Newest,
            "az" => SortOption::TitleAsc,
            "za" => SortOption::TitleDesc,
            "relevance" => SortOption::Relevance {
                query: query.unwrap_or_default().to_string(),
            },
            _ => SortOption::Unsorted,
        }
    }
}

/// Materials whose category equals `category`
pub fn by_category(materials: &[Material], category: Category) -> Vec<Material> {
    materials
        .iter()
        .filter(|m| m.category == category)
        .cloned()
        .collect()
}

/// Materials whose subject equals `subject`
pub fn by_subject(materials: &[Material], subject: Subject) -> Vec<Material> {
    materials
        .iter()
        .filter(|m| m.subject == subject)
        .cloned()
        .collect()
}

/// Materials whose year level equals `year_level`; materials without a year
/// level are excluded.
pub fn by_year_level(materials: &[Material], year_level: YearLevel) -> Vec<Material> {
    materials
        .iter()
        .filter(|m| m.year_level == Some(year_level))
        .cloned()
        .collect()
}

/// Case-insensitive substring search over title, description, author and
/// institution
///
/// Any string is accepted; the empty query matches everything. Minimum
/// query length is the caller's policy.
pub fn search(materials: &[Material], query: &str) -> Vec<Material> {
    let needle = query.to_lowercase();
    materials
        .iter()
        .filter(|m| matches_text(m, &needle))
        .cloned()
        .collect()
}

fn matches_text(material: &Material, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(material.title.as_str())
        || contains(material.description.as_str())
        || material.author.as_deref().is_some_and(contains)
        || material.institution.as_deref().is_some_and(contains)
}

/// Materials passing every clause of `filters`, in input order
pub fn apply_filter_state(materials: &[Material], filters: &FilterState) -> Vec<Material> {
    materials
        .iter()
        .filter(|m| filters.matches(m))
        .cloned()
        .collect()
}

/// Stable sort into a new vector
pub fn sort(materials: &[Material], option: &SortOption) -> Vec<Material> {
    let mut sorted = materials.to_vec();

    match option {
        SortOption::Popular => sorted.sort_by(|a, b| b.downloads.cmp(&a.downloads)),
        SortOption::Newest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::TitleAsc => sorted.sort_by_cached_key(|m| collation_key(&m.title)),
        SortOption::TitleDesc => {
            sorted.sort_by_cached_key(|m| std::cmp::Reverse(collation_key(&m.title)))
        }
        SortOption::Relevance { query } => {
            let needle = query.to_lowercase();
            sorted.sort_by_cached_key(|m| {
                let title_hit = m.title.to_lowercase().contains(&needle);
                (!title_hit, std::cmp::Reverse(m.downloads))
            });
        }
        SortOption::Unsorted => {}
    }

    sorted
}

/// Locale-style title comparison
///
/// Three levels, each consulted only when the previous one ties:
/// 1. base letters, with case and diacritics folded away, so "Étude" sorts
///    among the e's and "algebra" next to "Algebra"
/// 2. diacritics: unaccented before accented
/// 3. case: lowercase before uppercase
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

type CollationKey = (String, String, Vec<bool>);

fn collation_key(text: &str) -> CollationKey {
    let decomposed: String = text.nfd().collect();

    let base = decomposed
        .chars()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();
    let accents = decomposed.chars().flat_map(char::to_lowercase).collect();
    let case = decomposed.chars().map(char::is_uppercase).collect();

    (base, accents, case)
}

/// Count per category; every category is present, zero counts included
pub fn category_counts(materials: &[Material]) -> BTreeMap<Category, usize> {
    let mut counts: BTreeMap<Category, usize> =
        Category::ALL.into_iter().map(|c| (c, 0)).collect();

    for material in materials {
        *counts.entry(material.category).or_default() += 1;
    }

    counts
}

/// First `limit` featured materials, in input order
pub fn featured(materials: &[Material], limit: usize) -> Vec<Material> {
    materials
        .iter()
        .filter(|m| m.featured)
        .take(limit)
        .cloned()
        .collect()
}

/// Filter, search and sort selection for one browse request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowseRequest {
    /// Field filters
    pub filters: FilterState,
    /// Optional search text, applied before the filters
    pub query: Option<String>,
    /// Result ordering
    pub sort: SortOption,
}

impl Default for BrowseRequest {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            query: None,
            sort: SortOption::Popular,
        }
    }
}

/// Run a [`BrowseRequest`]: search (if any), then filters, then sort
pub fn browse(materials: &[Material], request: &BrowseRequest) -> Vec<Material> {
    let searched;
    let pool = match request.query.as_deref() {
        Some(query) => {
            searched = search(materials, query);
            searched.as_slice()
        }
        None => materials,
    };

    let filtered = apply_filter_state(pool, &request.filters);
    sort(&filtered, &request.sort)
}
