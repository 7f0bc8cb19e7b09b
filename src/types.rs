//! Core types for study-catalog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::Error;

/// Unique identifier for a material
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct MaterialId(pub i64);

impl MaterialId {
    /// Create a new MaterialId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for MaterialId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<MaterialId> for i64 {
    fn from(id: MaterialId) -> Self {
        id.0
    }
}

impl PartialEq<i64> for MaterialId {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MaterialId {
    type Err = Error;

    /// Parses a path segment into an id. Anything that is not a plain
    /// integer is a [`Error::MalformedId`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| Error::MalformedId(s.to_string()))
    }
}

/// Top-level material kind
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Textbooks
    Book,
    /// Lecture notes
    Notes,
    /// Previous years' examination papers
    PastPaper,
    /// Research articles
    Research,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 4] = [
        Category::Book,
        Category::Notes,
        Category::PastPaper,
        Category::Research,
    ];

    /// Wire value, as used in URLs and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Book => "book",
            Category::Notes => "notes",
            Category::PastPaper => "past_paper",
            Category::Research => "research",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Category::Book => "Book",
            Category::Notes => "Notes",
            Category::PastPaper => "Past Paper",
            Category::Research => "Research",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::InvalidEnum {
                kind: EnumKind::Category,
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Academic subject offered in the BSc program
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    /// Mathematics
    Mathematics,
    /// Physics
    Physics,
    /// Chemistry
    Chemistry,
}

impl Subject {
    /// Every subject, in display order
    pub const ALL: [Subject; 3] = [Subject::Mathematics, Subject::Physics, Subject::Chemistry];

    /// Wire value, as used in URLs and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Mathematics => "mathematics",
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
        }
    }
}

impl FromStr for Subject {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.as_str() == s)
            .ok_or_else(|| Error::InvalidEnum {
                kind: EnumKind::Subject,
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Year of the BSc program a material targets
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum YearLevel {
    /// B.Sc. 1st Year
    BscFirstYear,
    /// B.Sc. 2nd Year
    BscSecondYear,
    /// B.Sc. 3rd Year
    BscThirdYear,
}

impl YearLevel {
    /// Every year level, in program order
    pub const ALL: [YearLevel; 3] = [
        YearLevel::BscFirstYear,
        YearLevel::BscSecondYear,
        YearLevel::BscThirdYear,
    ];

    /// Wire value, as used in URLs and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            YearLevel::BscFirstYear => "bsc_first_year",
            YearLevel::BscSecondYear => "bsc_second_year",
            YearLevel::BscThirdYear => "bsc_third_year",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            YearLevel::BscFirstYear => "B.Sc. 1st Year",
            YearLevel::BscSecondYear => "B.Sc. 2nd Year",
            YearLevel::BscThirdYear => "B.Sc. 3rd Year",
        }
    }

    /// Label for an optional year level; a material without one applies to
    /// every year.
    pub fn label_or_all(year_level: Option<YearLevel>) -> &'static str {
        year_level.map_or("All Years", |y| y.label())
    }
}

impl FromStr for YearLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        YearLevel::ALL
            .into_iter()
            .find(|y| y.as_str() == s)
            .ok_or_else(|| Error::InvalidEnum {
                kind: EnumKind::YearLevel,
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for YearLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which fixed enumeration a rejected value was checked against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EnumKind {
    /// [`Category`]
    Category,
    /// [`Subject`]
    Subject,
    /// [`YearLevel`]
    YearLevel,
}

impl EnumKind {
    /// Wire name of the enumeration
    pub fn as_str(&self) -> &'static str {
        match self {
            EnumKind::Category => "category",
            EnumKind::Subject => "subject",
            EnumKind::YearLevel => "year level",
        }
    }

    /// Every accepted wire value for this enumeration
    pub fn allowed_values(&self) -> Vec<&'static str> {
        match self {
            EnumKind::Category => Category::ALL.iter().map(|c| c.as_str()).collect(),
            EnumKind::Subject => Subject::ALL.iter().map(|s| s.as_str()).collect(),
            EnumKind::YearLevel => YearLevel::ALL.iter().map(|y| y.as_str()).collect(),
        }
    }
}

impl std::fmt::Display for EnumKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Store-assigned identifier, never reused
    pub id: MaterialId,
    /// Title shown in listings
    pub title: String,
    /// Longer description
    pub description: String,
    /// Material kind
    pub category: Category,
    /// Academic subject
    pub subject: Subject,
    /// Target year; `None` applies to all years
    pub year_level: Option<YearLevel>,
    /// Author, if known
    pub author: Option<String>,
    /// Publishing institution, if known
    pub institution: Option<String>,
    /// Reference to the downloadable file (not checked for existence)
    pub file_path: String,
    /// Reference to the cover image
    pub cover_image: String,
    /// Number of recorded downloads
    pub downloads: u64,
    /// Shown on the homepage
    pub featured: bool,
    /// When the material was added to the store
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

/// A material as submitted for creation: everything except the
/// store-assigned `id`, `downloads` and `createdAt`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDraft {
    /// Title shown in listings
    pub title: String,
    /// Longer description
    pub description: String,
    /// Material kind
    pub category: Category,
    /// Academic subject
    pub subject: Subject,
    /// Target year; omit for all years
    #[serde(default)]
    pub year_level: Option<YearLevel>,
    /// Author, if known
    #[serde(default)]
    pub author: Option<String>,
    /// Publishing institution, if known
    #[serde(default)]
    pub institution: Option<String>,
    /// Reference to the downloadable file
    pub file_path: String,
    /// Reference to the cover image
    pub cover_image: String,
    /// Shown on the homepage (default: false)
    #[serde(default)]
    pub featured: bool,
}

/// One entry of the taxonomy listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TaxonomyEntry {
    /// Wire value
    pub value: String,
    /// Human-readable name
    pub label: String,
}

/// The fixed enumerations with their display labels
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomy {
    /// All categories
    pub categories: Vec<TaxonomyEntry>,
    /// All subjects
    pub subjects: Vec<TaxonomyEntry>,
    /// All year levels
    pub year_levels: Vec<TaxonomyEntry>,
}

impl Taxonomy {
    /// Build the taxonomy from the enum definitions
    pub fn current() -> Self {
        fn entry(value: &str, label: &str) -> TaxonomyEntry {
            TaxonomyEntry {
                value: value.to_string(),
                label: label.to_string(),
            }
        }

        Self {
            categories: Category::ALL
                .iter()
                .map(|c| entry(c.as_str(), c.label()))
                .collect(),
            subjects: Subject::ALL
                .iter()
                .map(|s| entry(s.as_str(), s.label()))
                .collect(),
            year_levels: YearLevel::ALL
                .iter()
                .map(|y| entry(y.as_str(), y.label()))
                .collect(),
        }
    }
}
