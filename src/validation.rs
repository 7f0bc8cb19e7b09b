//! Boundary-layer parsing of untrusted input
//!
//! Everything here turns raw request data (JSON bodies, comma-separated
//! query parameters) into typed values. Rejections happen here, so the
//! store and the query engine only ever see well-typed input.

use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::{Error, FieldError, Result};
use crate::query::{FilterState, SubjectFilter};
use crate::types::{Category, EnumKind, MaterialDraft, Subject, YearLevel};

/// Validate a creation payload
///
/// Every field is checked before returning, so a single
/// [`Error::Validation`] lists all offending fields at once. Fields the
/// store assigns (`id`, `downloads`, `createdAt`) and unknown fields are
/// ignored.
pub fn validate_draft(payload: &Value) -> Result<MaterialDraft> {
    let Some(object) = payload.as_object() else {
        return Err(Error::Validation(vec![FieldError::new(
            "body",
            "expected a JSON object",
        )]));
    };

    let mut errors = Vec::new();

    let title = required_text(object, "title", true, &mut errors);
    let description = required_text(object, "description", true, &mut errors);
    let file_path = required_text(object, "filePath", false, &mut errors);
    let cover_image = required_text(object, "coverImage", false, &mut errors);
    let category = required_enum::<Category>(object, "category", EnumKind::Category, &mut errors);
    let subject = required_enum::<Subject>(object, "subject", EnumKind::Subject, &mut errors);
    let year_level =
        optional_enum::<YearLevel>(object, "yearLevel", EnumKind::YearLevel, &mut errors);
    let author = optional_text(object, "author", &mut errors);
    let institution = optional_text(object, "institution", &mut errors);
    let featured = optional_bool(object, "featured", &mut errors);

    match (title, description, file_path, cover_image, category, subject) {
        (
            Some(title),
            Some(description),
            Some(file_path),
            Some(cover_image),
            Some(category),
            Some(subject),
        ) if errors.is_empty() => Ok(MaterialDraft {
            title,
            description,
            category,
            subject,
            year_level,
            author,
            institution,
            file_path,
            cover_image,
            featured,
        }),
        _ => Err(Error::Validation(errors)),
    }
}

fn required_text(
    object: &Map<String, Value>,
    field: &str,
    non_empty: bool,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match object.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "required"));
            None
        }
        Some(Value::String(s)) if non_empty && s.trim().is_empty() => {
            errors.push(FieldError::new(field, "must not be empty"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(field, "expected a string"));
            None
        }
    }
}

fn optional_text(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match object.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(field, "expected a string or null"));
            None
        }
    }
}

fn optional_bool(object: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> bool {
    match object.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            errors.push(FieldError::new(field, "expected a boolean"));
            false
        }
    }
}

fn required_enum<T: FromStr<Err = Error>>(
    object: &Map<String, Value>,
    field: &str,
    kind: EnumKind,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match object.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "required"));
            None
        }
        Some(value) => parse_enum_value(value, field, kind, errors),
    }
}

fn optional_enum<T: FromStr<Err = Error>>(
    object: &Map<String, Value>,
    field: &str,
    kind: EnumKind,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match object.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => parse_enum_value(value, field, kind, errors),
    }
}

fn parse_enum_value<T: FromStr<Err = Error>>(
    value: &Value,
    field: &str,
    kind: EnumKind,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let allowed = kind.allowed_values().join(", ");
    match value.as_str() {
        Some(raw) => match raw.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                errors.push(FieldError::new(
                    field,
                    format!("unknown {kind} '{raw}', expected one of: {allowed}"),
                ));
                None
            }
        },
        None => {
            errors.push(FieldError::new(
                field,
                format!("expected a string, one of: {allowed}"),
            ));
            None
        }
    }
}

/// Parse a comma-separated list of enum values (`book,notes`)
///
/// Blank entries are skipped; `None` and the empty string yield an empty
/// set. The first unknown value is returned as [`Error::InvalidEnum`].
pub fn parse_enum_list<T>(raw: Option<&str>) -> Result<BTreeSet<T>>
where
    T: FromStr<Err = Error> + Ord,
{
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse::<T>)
        .collect()
}

/// Parse the subject clause: `all` (or absent) means no restriction
pub fn parse_subject_filter(raw: Option<&str>) -> Result<SubjectFilter> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(SubjectFilter::All),
        Some(value) => value.parse().map(SubjectFilter::Only),
    }
}

/// Build a [`FilterState`] from raw query parameters
///
/// An absent `categories` parameter selects every category, matching the
/// default filter state.
pub fn parse_filter_state(
    categories: Option<&str>,
    subject: Option<&str>,
    year_levels: Option<&str>,
) -> Result<FilterState> {
    let categories = match categories {
        None => FilterState::default().categories,
        Some(raw) => parse_enum_list(Some(raw))?,
    };

    Ok(FilterState {
        categories,
        subject: parse_subject_filter(subject)?,
        year_levels: parse_enum_list(year_levels)?,
    })
}
