//! Plan-request intake: payload normalization and validation.
//!
//! Turns a JSON payload of unknown shape into a validated [`PlanRequest`]
//! and derives the per-child descriptor strings used by every summary
//! variant. This module contains pure logic (no I/O).

pub mod form;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Placeholder substituted for a missing or blank scalar field.
pub const NOT_SPECIFIED: &str = "Not specified";

/// One structured entry describing a single child's name/age/grade.
///
/// All three text fields are free text; `age` is conceptually numeric but
/// never parsed. `id` exists only for list-key stability in clients and is
/// never interpreted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub grade: String,
}

impl ChildRecord {
    /// An empty record with the given id, as created when a form row is
    /// added.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: String::new(),
            age: String::new(),
            grade: String::new(),
        }
    }

    /// A record is filled if at least one of the three text fields is
    /// non-empty after trimming.
    pub fn is_filled(&self) -> bool {
        !self.name.trim().is_empty()
            || !self.age.trim().is_empty()
            || !self.grade.trim().is_empty()
    }
}

/// A normalized plan request.
///
/// `children` holds only filled records, in input order, with their
/// original field text; the scalar fields are already defaulted and never
/// blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub children: Vec<ChildRecord>,
    pub philosophy: String,
    pub location: String,
    pub goals: String,
}

/// The only checked precondition in the system: a request must carry at
/// least one filled child record. The display text is the user-visible
/// rejection message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("At least one child is required.")]
pub struct ValidationError;

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a raw payload of unknown shape into a [`PlanRequest`].
///
/// - A missing or non-array `children` field is treated as an empty list
///   (no shape error is raised).
/// - Non-string child fields coerce to the empty string.
/// - Records with all three text fields blank are dropped; input order and
///   surviving field text are preserved verbatim.
/// - Blank scalar fields become [`NOT_SPECIFIED`], so scalars never cause
///   validation failure.
pub fn normalize(payload: &Value) -> Result<PlanRequest, ValidationError> {
    let children: Vec<ChildRecord> = payload
        .get("children")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(child_from_value)
                .filter(ChildRecord::is_filled)
                .collect()
        })
        .unwrap_or_default();

    if children.is_empty() {
        return Err(ValidationError);
    }

    Ok(PlanRequest {
        children,
        philosophy: scalar_or_default(payload, "philosophy"),
        location: scalar_or_default(payload, "location"),
        goals: scalar_or_default(payload, "goals"),
    })
}

fn child_from_value(entry: &Value) -> ChildRecord {
    ChildRecord {
        id: entry.get("id").and_then(Value::as_i64).unwrap_or(0),
        name: text_field(entry, "name"),
        age: text_field(entry, "age"),
        grade: text_field(entry, "grade"),
    }
}

fn text_field(entry: &Value, key: &str) -> String {
    entry
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn scalar_or_default(payload: &Value, key: &str) -> String {
    match payload.get(key).and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => NOT_SPECIFIED.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

/// Produce one descriptor per child, in input order:
/// `"<name> (age <age>, grade <grade>)"`.
///
/// A blank name falls back to `Child N` where `N` is the 1-based position
/// among the filled records; a blank age or grade falls back to `?`. The
/// fallback tokens are part of the user-visible output and must not change.
pub fn descriptors(request: &PlanRequest) -> Vec<String> {
    request
        .children
        .iter()
        .enumerate()
        .map(|(index, child)| {
            let name = match child.name.trim() {
                "" => format!("Child {}", index + 1),
                trimmed => trimmed.to_string(),
            };
            let age = match child.age.trim() {
                "" => "?",
                trimmed => trimmed,
            };
            let grade = match child.grade.trim() {
                "" => "?",
                trimmed => trimmed,
            };
            format!("{name} (age {age}, grade {grade})")
        })
        .collect()
}

/// Descriptors joined with `", "`, preserving input order.
pub fn joined_descriptors(request: &PlanRequest) -> String {
    descriptors(request).join(", ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(children: Vec<ChildRecord>) -> PlanRequest {
        PlanRequest {
            children,
            philosophy: NOT_SPECIFIED.to_string(),
            location: NOT_SPECIFIED.to_string(),
            goals: NOT_SPECIFIED.to_string(),
        }
    }

    fn child(name: &str, age: &str, grade: &str) -> ChildRecord {
        ChildRecord {
            id: 0,
            name: name.to_string(),
            age: age.to_string(),
            grade: grade.to_string(),
        }
    }

    // -- is_filled --

    #[test]
    fn empty_record_is_not_filled() {
        assert!(!ChildRecord::new(1).is_filled());
    }

    #[test]
    fn whitespace_only_record_is_not_filled() {
        assert!(!child("  ", "\t", " \n").is_filled());
    }

    #[test]
    fn any_single_field_makes_record_filled() {
        assert!(child("Emma", "", "").is_filled());
        assert!(child("", "7", "").is_filled());
        assert!(child("", "", "2").is_filled());
    }

    // -- normalize: children shape --

    #[test]
    fn missing_children_fails_validation() {
        let result = normalize(&json!({ "philosophy": "Montessori" }));
        assert_eq!(result, Err(ValidationError));
    }

    #[test]
    fn empty_children_fails_validation() {
        let result = normalize(&json!({ "children": [] }));
        assert_eq!(result, Err(ValidationError));
    }

    #[test]
    fn non_array_children_is_treated_as_empty() {
        let result = normalize(&json!({ "children": "not a list" }));
        assert_eq!(result, Err(ValidationError));

        let result = normalize(&json!({ "children": { "name": "Emma" } }));
        assert_eq!(result, Err(ValidationError));
    }

    #[test]
    fn all_blank_children_fail_validation() {
        let result = normalize(&json!({
            "children": [
                { "name": "", "age": "", "grade": "" },
                { "name": "  ", "age": " ", "grade": "" },
            ]
        }));
        assert_eq!(result, Err(ValidationError));
    }

    #[test]
    fn validation_error_has_fixed_message() {
        assert_eq!(
            ValidationError.to_string(),
            "At least one child is required."
        );
    }

    // -- normalize: filtering --

    #[test]
    fn blank_records_are_filtered_preserving_order() {
        let normalized = normalize(&json!({
            "children": [
                { "id": 1, "name": "Emma", "age": "10", "grade": "4" },
                { "id": 2, "name": "", "age": "", "grade": "" },
                { "id": 3, "name": "Noah", "age": "7", "grade": "1" },
            ]
        }))
        .unwrap();

        assert_eq!(normalized.children.len(), 2);
        assert_eq!(normalized.children[0].name, "Emma");
        assert_eq!(normalized.children[1].name, "Noah");
        assert_eq!(normalized.children[0].id, 1);
        assert_eq!(normalized.children[1].id, 3);
    }

    #[test]
    fn surviving_field_text_is_kept_verbatim() {
        let normalized = normalize(&json!({
            "children": [{ "name": "  Emma  ", "age": "", "grade": "" }]
        }))
        .unwrap();

        assert_eq!(normalized.children[0].name, "  Emma  ");
    }

    #[test]
    fn missing_id_defaults_to_zero() {
        let normalized = normalize(&json!({
            "children": [{ "name": "Emma" }]
        }))
        .unwrap();

        assert_eq!(normalized.children[0].id, 0);
    }

    #[test]
    fn non_string_child_fields_coerce_to_empty() {
        // Age as a number still leaves name to carry the record.
        let normalized = normalize(&json!({
            "children": [{ "name": "Emma", "age": 10, "grade": null }]
        }))
        .unwrap();

        assert_eq!(normalized.children[0].age, "");
        assert_eq!(normalized.children[0].grade, "");
    }

    // -- normalize: scalar defaulting --

    #[test]
    fn missing_and_blank_scalars_are_defaulted() {
        let normalized = normalize(&json!({
            "children": [{ "name": "Emma" }],
            "location": "",
        }))
        .unwrap();

        assert_eq!(normalized.philosophy, NOT_SPECIFIED);
        assert_eq!(normalized.location, NOT_SPECIFIED);
        assert_eq!(normalized.goals, NOT_SPECIFIED);
    }

    #[test]
    fn provided_scalars_are_kept_verbatim() {
        let normalized = normalize(&json!({
            "children": [{ "name": "Emma" }],
            "philosophy": "Charlotte Mason",
            "location": "Vermont",
            "goals": "Strong readers",
        }))
        .unwrap();

        assert_eq!(normalized.philosophy, "Charlotte Mason");
        assert_eq!(normalized.location, "Vermont");
        assert_eq!(normalized.goals, "Strong readers");
    }

    #[test]
    fn non_string_scalar_is_defaulted() {
        let normalized = normalize(&json!({
            "children": [{ "name": "Emma" }],
            "philosophy": 42,
        }))
        .unwrap();

        assert_eq!(normalized.philosophy, NOT_SPECIFIED);
    }

    // -- descriptors --

    #[test]
    fn full_record_descriptor() {
        let req = request(vec![child("Emma", "10", "4")]);
        assert_eq!(descriptors(&req), vec!["Emma (age 10, grade 4)"]);
    }

    #[test]
    fn blank_name_falls_back_to_positional_label() {
        let req = request(vec![child("", "7", "")]);
        assert_eq!(descriptors(&req), vec!["Child 1 (age 7, grade ?)"]);
    }

    #[test]
    fn positional_label_counts_filled_records() {
        // Both records are filled; the second blank name is "Child 2".
        let req = request(vec![child("Emma", "10", "4"), child("", "", "2")]);
        assert_eq!(
            descriptors(&req),
            vec!["Emma (age 10, grade 4)", "Child 2 (age ?, grade 2)"]
        );
    }

    #[test]
    fn descriptor_fields_are_trimmed_for_display() {
        let req = request(vec![child(" Emma ", " 10 ", " 4 ")]);
        assert_eq!(descriptors(&req), vec!["Emma (age 10, grade 4)"]);
    }

    #[test]
    fn descriptors_join_with_comma_space() {
        let req = request(vec![child("Emma", "10", "4"), child("Noah", "7", "1")]);
        assert_eq!(
            joined_descriptors(&req),
            "Emma (age 10, grade 4), Noah (age 7, grade 1)"
        );
    }
}
