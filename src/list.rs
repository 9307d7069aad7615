//! List State Machine
//!
//! One list's working item sequence plus the single-pending-item editing
//! protocol. A pending entry, when present, always sits at index 0 and is
//! excluded from every durable snapshot.
//!
//! Item lifecycle: pending -> existing -> completed-stamped (repeatable)
//! -> deleted. A pending entry may only be confirmed or discarded.

use crate::collection::array_move;
use crate::models::{ItemEntry, TodoItem, TodoList};

/// Errors raised on out-of-protocol use of the list API. These indicate
/// a caller bug, not a user-input problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Confirm was called with no pending entry at index 0
    NoPending,
    /// The id names the pending placeholder, which cannot be deleted,
    /// completed, or reordered
    PendingEntry(String),
    /// No entry with this id exists in the list
    NotFound(String),
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::NoPending => write!(f, "no pending entry to confirm"),
            ListError::PendingEntry(id) => write!(f, "entry {} is the pending placeholder", id),
            ListError::NotFound(id) => write!(f, "no entry with id {}", id),
        }
    }
}

impl std::error::Error for ListError {}

/// How a confirm resolved: `Added` materialized a durable item,
/// `Discarded` dropped the placeholder without touching durable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Added,
    Discarded,
}

/// One list's title and working sequence
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub title: String,
    pub entries: Vec<ItemEntry>,
}

impl ListState {
    pub fn from_list(list: TodoList) -> Self {
        Self {
            title: list.title,
            entries: list.items.into_iter().map(ItemEntry::Existing).collect(),
        }
    }

    /// True while a pending entry occupies index 0
    pub fn is_adding(&self) -> bool {
        self.entries.first().is_some_and(|e| e.is_pending())
    }

    /// Insert a pending placeholder at index 0. Returns false (and changes
    /// nothing) if one already exists.
    pub fn begin_add(&mut self, id: String) -> bool {
        if self.is_adding() {
            return false;
        }
        self.entries.insert(0, ItemEntry::Pending { id });
        true
    }

    /// Resolve the pending entry: empty text discards it, anything else
    /// materializes it into a durable item keeping the pending id.
    pub fn confirm_add(&mut self, text: &str) -> Result<ConfirmOutcome, ListError> {
        if !self.is_adding() {
            return Err(ListError::NoPending);
        }
        if text.is_empty() {
            self.entries.remove(0);
            return Ok(ConfirmOutcome::Discarded);
        }
        let id = self.entries[0].id().to_string();
        self.entries[0] = ItemEntry::Existing(TodoItem::new(id, text));
        Ok(ConfirmOutcome::Added)
    }

    /// Remove the existing item with this id, wherever it sits
    pub fn delete_item(&mut self, id: &str) -> Result<(), ListError> {
        let index = self.position_of(id)?;
        self.entries.remove(index);
        Ok(())
    }

    /// Move the item to the end of the sequence and stamp it with the
    /// current time. Only existing items may be completed.
    pub fn complete_item(&mut self, id: &str, now_ms: i64) -> Result<(), ListError> {
        let index = self.position_of(id)?;
        let entry = self.entries.remove(index);
        match entry {
            ItemEntry::Existing(mut item) => {
                item.last_checked = Some(now_ms);
                self.entries.push(ItemEntry::Existing(item));
                Ok(())
            }
            // position_of already rejected the pending entry
            ItemEntry::Pending { id } => Err(ListError::PendingEntry(id)),
        }
    }

    /// Relocate `from_id` to `to_id`'s position, shifting entries in
    /// between. The pending entry stays pinned at index 0.
    pub fn move_item(&mut self, from_id: &str, to_id: &str) -> Result<(), ListError> {
        let from = self.position_of(from_id)?;
        let to = self.position_of(to_id)?;
        array_move(&mut self.entries, from, to);
        Ok(())
    }

    /// Relocate the item one position earlier, clamped so it never
    /// displaces the pending entry from index 0. Touch fallback for drag.
    pub fn bump_item_up(&mut self, id: &str) -> Result<(), ListError> {
        let index = self.position_of(id)?;
        let floor = if self.is_adding() { 1 } else { 0 };
        if index > floor {
            array_move(&mut self.entries, index, index - 1);
        }
        Ok(())
    }

    /// The durable item sequence, pending entry excluded
    pub fn durable_items(&self) -> Vec<TodoItem> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                ItemEntry::Existing(item) => Some(item.clone()),
                ItemEntry::Pending { .. } => None,
            })
            .collect()
    }

    /// Snapshot for propagation to the collection store
    pub fn to_list(&self) -> TodoList {
        TodoList {
            title: self.title.clone(),
            items: self.durable_items(),
        }
    }

    /// Index of the existing item with this id; rejects the pending entry
    fn position_of(&self, id: &str) -> Result<usize, ListError> {
        match self.entries.iter().position(|e| e.id() == id) {
            Some(index) if self.entries[index].is_pending() => {
                Err(ListError::PendingEntry(id.to_string()))
            }
            Some(index) => Ok(index),
            None => Err(ListError::NotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_state(names: &[&str]) -> ListState {
        ListState {
            title: "Game Night".to_string(),
            entries: names
                .iter()
                .map(|n| ItemEntry::Existing(TodoItem::new(n.to_lowercase(), *n)))
                .collect(),
        }
    }

    fn ids(state: &ListState) -> Vec<&str> {
        state.entries.iter().map(|e| e.id()).collect()
    }

    #[test]
    fn test_begin_add_inserts_pending_at_front() {
        let mut state = make_state(&["A", "B"]);
        assert!(state.begin_add("p1".to_string()));
        assert!(state.is_adding());
        assert_eq!(ids(&state), vec!["p1", "a", "b"]);
    }

    #[test]
    fn test_begin_add_rejects_second_pending() {
        let mut state = make_state(&[]);
        assert!(state.begin_add("p1".to_string()));
        assert!(!state.begin_add("p2".to_string()));
        assert_eq!(ids(&state), vec!["p1"]);
    }

    #[test]
    fn test_confirm_with_text_materializes_item() {
        let mut state = make_state(&["A", "B"]);
        state.begin_add("p1".to_string());
        assert_eq!(state.confirm_add("Tacos"), Ok(ConfirmOutcome::Added));
        assert_eq!(ids(&state), vec!["p1", "a", "b"]);
        match &state.entries[0] {
            ItemEntry::Existing(item) => {
                assert_eq!(item.name, "Tacos");
                assert_eq!(item.last_checked, None);
            }
            other => panic!("expected existing item, got {:?}", other),
        }
        assert!(!state.is_adding());
    }

    #[test]
    fn test_confirm_with_empty_text_discards_pending() {
        let mut state = make_state(&["A", "B"]);
        let before = state.durable_items();
        state.begin_add("p1".to_string());
        assert_eq!(state.confirm_add(""), Ok(ConfirmOutcome::Discarded));
        assert_eq!(state.durable_items(), before);
        assert_eq!(ids(&state), vec!["a", "b"]);
    }

    #[test]
    fn test_confirm_without_pending_fails() {
        let mut state = make_state(&["A"]);
        assert_eq!(state.confirm_add("Tacos"), Err(ListError::NoPending));
    }

    #[test]
    fn test_delete_item() {
        let mut state = make_state(&["A", "B", "C"]);
        assert_eq!(state.delete_item("b"), Ok(()));
        assert_eq!(ids(&state), vec!["a", "c"]);
        assert_eq!(
            state.delete_item("z"),
            Err(ListError::NotFound("z".to_string()))
        );
    }

    #[test]
    fn test_delete_pending_is_rejected() {
        let mut state = make_state(&["A"]);
        state.begin_add("p1".to_string());
        assert_eq!(
            state.delete_item("p1"),
            Err(ListError::PendingEntry("p1".to_string()))
        );
    }

    #[test]
    fn test_complete_moves_to_end_and_stamps() {
        let mut state = make_state(&["X", "Y", "Z"]);
        assert_eq!(state.complete_item("x", 1_000), Ok(()));
        assert_eq!(ids(&state), vec!["y", "z", "x"]);
        match &state.entries[2] {
            ItemEntry::Existing(item) => assert_eq!(item.last_checked, Some(1_000)),
            other => panic!("expected existing item, got {:?}", other),
        }
    }

    #[test]
    fn test_recomplete_refreshes_timestamp() {
        let mut state = make_state(&["X", "Y"]);
        state.complete_item("x", 1_000).unwrap();
        state.complete_item("x", 2_000).unwrap();
        match &state.entries[1] {
            ItemEntry::Existing(item) => assert_eq!(item.last_checked, Some(2_000)),
            other => panic!("expected existing item, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_pending_is_rejected() {
        let mut state = make_state(&["A"]);
        state.begin_add("p1".to_string());
        assert_eq!(
            state.complete_item("p1", 1_000),
            Err(ListError::PendingEntry("p1".to_string()))
        );
    }

    #[test]
    fn test_move_item_relocation_semantics() {
        let mut state = make_state(&["A", "B", "C"]);
        state.move_item("a", "c").unwrap();
        assert_eq!(ids(&state), vec!["b", "c", "a"]);

        let mut state = make_state(&["A", "B", "C"]);
        state.move_item("c", "a").unwrap();
        assert_eq!(ids(&state), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_move_item_refuses_pending() {
        let mut state = make_state(&["A", "B"]);
        state.begin_add("p1".to_string());
        assert_eq!(
            state.move_item("a", "p1"),
            Err(ListError::PendingEntry("p1".to_string()))
        );
        assert_eq!(ids(&state), vec!["p1", "a", "b"]);
    }

    #[test]
    fn test_bump_item_up() {
        let mut state = make_state(&["A", "B", "C"]);
        state.bump_item_up("b").unwrap();
        assert_eq!(ids(&state), vec!["b", "a", "c"]);

        // Already first: no-op
        state.bump_item_up("b").unwrap();
        assert_eq!(ids(&state), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_bump_never_displaces_pending() {
        let mut state = make_state(&["A", "B"]);
        state.begin_add("p1".to_string());
        state.bump_item_up("a").unwrap();
        assert_eq!(ids(&state), vec!["p1", "a", "b"]);
    }

    #[test]
    fn test_to_list_excludes_pending() {
        let mut state = make_state(&["A", "B"]);
        state.begin_add("p1".to_string());
        let list = state.to_list();
        assert_eq!(list.title, "Game Night");
        assert_eq!(
            list.items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_confirm_then_to_list_snapshot() {
        let mut state = make_state(&["A", "B"]);
        state.begin_add("p1".to_string());
        state.confirm_add("Tacos").unwrap();
        let list = state.to_list();
        assert_eq!(list.items[0].name, "Tacos");
        assert_eq!(list.items[0].id, "p1");
        assert_eq!(list.items.len(), 3);
    }
}
