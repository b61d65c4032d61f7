//! The form collector: in-memory state backing the draft-plan form.
//!
//! Holds the ordered child rows and scalar fields between edits, assembles
//! the submit payload, and renders the deterministic local preview. Nothing
//! here is persisted; a reset discards everything.

use serde_json::{Value, json};

use super::{ChildRecord, ValidationError, normalize};
use crate::summary::local;

/// Ordered child rows plus scalar fields.
///
/// Row ids come from a monotonic counter and are never reused, so clients
/// can use them as stable list keys across edits and removals.
#[derive(Debug)]
pub struct FormState {
    children: Vec<ChildRecord>,
    next_id: i64,
    pub philosophy: String,
    pub location: String,
    pub goals: String,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            next_id: 1,
            philosophy: String::new(),
            location: String::new(),
            goals: String::new(),
        }
    }

    /// Append an empty child row and return its id.
    pub fn add_child(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.children.push(ChildRecord::new(id));
        id
    }

    /// The current rows, in insertion order.
    pub fn children(&self) -> &[ChildRecord] {
        &self.children
    }

    /// Set the name of the row with the given id. Returns `false` when no
    /// such row exists.
    pub fn set_name(&mut self, id: i64, value: &str) -> bool {
        self.edit(id, |child| child.name = value.to_string())
    }

    /// Set the age of the row with the given id.
    pub fn set_age(&mut self, id: i64, value: &str) -> bool {
        self.edit(id, |child| child.age = value.to_string())
    }

    /// Set the grade of the row with the given id.
    pub fn set_grade(&mut self, id: i64, value: &str) -> bool {
        self.edit(id, |child| child.grade = value.to_string())
    }

    fn edit(&mut self, id: i64, apply: impl FnOnce(&mut ChildRecord)) -> bool {
        match self.children.iter_mut().find(|child| child.id == id) {
            Some(child) => {
                apply(child);
                true
            }
            None => false,
        }
    }

    /// Remove the row with the given id. Returns `false` when no such row
    /// exists.
    pub fn remove_child(&mut self, id: i64) -> bool {
        let before = self.children.len();
        self.children.retain(|child| child.id != id);
        self.children.len() != before
    }

    /// Discard every row and scalar field. The id counter keeps running so
    /// ids stay unique for the lifetime of the form.
    pub fn reset(&mut self) {
        self.children.clear();
        self.philosophy.clear();
        self.location.clear();
        self.goals.clear();
    }

    /// Assemble the submit payload in the wire shape of
    /// `POST /api/draft-plan`.
    pub fn payload(&self) -> Value {
        json!({
            "children": self.children,
            "philosophy": self.philosophy,
            "location": self.location,
            "goals": self.goals,
        })
    }

    /// Normalize the current state and render the offline template.
    ///
    /// The preview never performs network I/O, regardless of how the
    /// server side is configured.
    pub fn preview(&self) -> Result<String, ValidationError> {
        let request = normalize(&self.payload())?;
        Ok(local::render(&request))
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
