//! Collection Operations
//!
//! Pure mutations over the ordered list-of-lists. Titles act as identity
//! keys, so every operation here is keyed by title. Persistence happens a
//! layer above (see `store`).

use crate::models::TodoList;

/// Result of an add-list request. `Denied` is a normal rejected outcome
/// (empty or duplicate title), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddListOutcome {
    Accepted,
    Denied,
}

/// Relocate the element at `from` to position `to`, shifting everything
/// in between (remove-then-insert semantics).
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
}

/// Prepend a new empty list. Denied when the title is empty or already
/// present; the collection is left unchanged in that case.
pub fn add_list(lists: &mut Vec<TodoList>, title: &str) -> AddListOutcome {
    if title.is_empty() {
        return AddListOutcome::Denied;
    }
    if lists.iter().any(|l| l.title == title) {
        return AddListOutcome::Denied;
    }
    lists.insert(0, TodoList::empty(title));
    AddListOutcome::Accepted
}

/// Remove the list with the given title. Returns false (and leaves the
/// collection unchanged) when no such list exists.
pub fn delete_list(lists: &mut Vec<TodoList>, title: &str) -> bool {
    let before = lists.len();
    lists.retain(|l| l.title != title);
    lists.len() != before
}

/// Relocate the list titled `from_title` to the position of the list
/// titled `to_title`. No-op if either title is unknown.
pub fn move_list(lists: &mut Vec<TodoList>, from_title: &str, to_title: &str) {
    let old_index = lists.iter().position(|l| l.title == from_title);
    let new_index = lists.iter().position(|l| l.title == to_title);
    if let (Some(from), Some(to)) = (old_index, new_index) {
        array_move(lists, from, to);
    }
}

/// Overwrite the stored list whose title matches `list.title` with the
/// given contents. Returns false when the title is unknown.
pub fn update_list(lists: &mut Vec<TodoList>, list: TodoList) -> bool {
    match lists.iter_mut().find(|l| l.title == list.title) {
        Some(slot) => {
            *slot = list;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoItem;

    fn make_lists(titles: &[&str]) -> Vec<TodoList> {
        titles.iter().map(|t| TodoList::empty(*t)).collect()
    }

    #[test]
    fn test_add_list_prepends() {
        let mut lists = make_lists(&["Dinners"]);
        assert_eq!(add_list(&mut lists, "Games"), AddListOutcome::Accepted);
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].title, "Games");
        assert!(lists[0].items.is_empty());
    }

    #[test]
    fn test_add_list_denies_empty_title() {
        let mut lists = make_lists(&["Dinners"]);
        assert_eq!(add_list(&mut lists, ""), AddListOutcome::Denied);
        assert_eq!(lists, make_lists(&["Dinners"]));
    }

    #[test]
    fn test_add_list_denies_duplicate_title() {
        let mut lists = make_lists(&["Dinners", "Games"]);
        assert_eq!(add_list(&mut lists, "Games"), AddListOutcome::Denied);
        assert_eq!(lists, make_lists(&["Dinners", "Games"]));
    }

    #[test]
    fn test_delete_list() {
        let mut lists = make_lists(&["A", "B", "C"]);
        assert!(delete_list(&mut lists, "B"));
        assert_eq!(lists, make_lists(&["A", "C"]));
    }

    #[test]
    fn test_delete_unknown_list_is_noop() {
        // Deleting an unknown title must leave everything alone, in
        // particular it must never touch the last list.
        let mut lists = make_lists(&["A", "B"]);
        assert!(!delete_list(&mut lists, "Z"));
        assert_eq!(lists, make_lists(&["A", "B"]));
    }

    #[test]
    fn test_move_list() {
        let mut lists = make_lists(&["A", "B", "C"]);
        move_list(&mut lists, "A", "C");
        assert_eq!(lists, make_lists(&["B", "C", "A"]));

        move_list(&mut lists, "A", "B");
        assert_eq!(lists, make_lists(&["A", "B", "C"]));
    }

    #[test]
    fn test_move_list_unknown_title_is_noop() {
        let mut lists = make_lists(&["A", "B"]);
        move_list(&mut lists, "A", "Z");
        assert_eq!(lists, make_lists(&["A", "B"]));
    }

    #[test]
    fn test_update_list_overwrites_by_title() {
        let mut lists = make_lists(&["A", "B"]);
        let replacement = TodoList {
            title: "B".to_string(),
            items: vec![TodoItem::new("1", "Catan")],
        };
        assert!(update_list(&mut lists, replacement.clone()));
        assert_eq!(lists[1], replacement);
        assert_eq!(lists[0], TodoList::empty("A"));
    }

    #[test]
    fn test_update_unknown_list_is_noop() {
        let mut lists = make_lists(&["A"]);
        assert!(!update_list(&mut lists, TodoList::empty("Z")));
        assert_eq!(lists, make_lists(&["A"]));
    }

    #[test]
    fn test_array_move_relocation() {
        let mut v = vec!["a", "b", "c"];
        array_move(&mut v, 0, 2);
        assert_eq!(v, vec!["b", "c", "a"]);

        let mut v = vec!["a", "b", "c"];
        array_move(&mut v, 2, 0);
        assert_eq!(v, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_array_move_out_of_bounds_is_noop() {
        let mut v = vec!["a", "b"];
        array_move(&mut v, 5, 0);
        array_move(&mut v, 0, 5);
        assert_eq!(v, vec!["a", "b"]);
    }
}
