//! Data Model
//!
//! Core types: persisted items and lists, plus the transient pending entry
//! used while a new item's name is being typed.

use serde::{Deserialize, Serialize};

/// A single trackable entry within a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub name: String,
    /// Epoch milliseconds of the most recent completion
    #[serde(rename = "lastChecked", default, skip_serializing_if = "Option::is_none")]
    pub last_checked: Option<i64>,
}

impl TodoItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            last_checked: None,
        }
    }
}

/// A named, ordered collection of items. The title is the identity key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    pub title: String,
    pub items: Vec<TodoItem>,
}

impl TodoList {
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }
}

/// One slot in a list's working sequence.
///
/// `Pending` is the unsaved placeholder shown while the user types a new
/// item's name. It is never persisted and at most one exists per list,
/// always at index 0.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemEntry {
    Pending { id: String },
    Existing(TodoItem),
}

impl ItemEntry {
    pub fn id(&self) -> &str {
        match self {
            ItemEntry::Pending { id } => id,
            ItemEntry::Existing(item) => &item.id,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ItemEntry::Pending { .. })
    }
}
