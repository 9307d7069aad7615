//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The app store
//! owns the ordered collection of lists and is the only writer of the
//! persisted storage slot; per-list state lives in a `ListHandle`, which
//! pushes every durable mutation back up through `store_update_list`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::collection::{self, AddListOutcome};
use crate::ids;
use crate::list::{ConfirmOutcome, ListState};
use crate::models::TodoList;
use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All lists in display order (the unit of persistence)
    pub lists: Vec<TodoList>,
    /// True when the storage slot was absent on load (first visit)
    pub first_time: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Read the storage slot into the store, seeding on first visit
pub fn store_load(store: &AppStore) {
    let first_time = storage::read_raw().is_none();
    let lists = storage::load_lists();
    *store.first_time().write() = first_time;
    *store.lists().write() = lists;
}

/// Persist the current collection
pub fn store_save(store: &AppStore) {
    let lists = store.lists().get_untracked();
    storage::save_lists(&lists);
}

/// Prepend a new empty list; persists only on an accepted outcome
pub fn store_add_list(store: &AppStore, title: &str) -> AddListOutcome {
    let outcome = collection::add_list(&mut *store.lists().write(), title);
    if outcome == AddListOutcome::Accepted {
        store_save(store);
    }
    outcome
}

/// Remove a list by title; unknown titles are a logged no-op
pub fn store_delete_list(store: &AppStore, title: &str) {
    let removed = collection::delete_list(&mut *store.lists().write(), title);
    if removed {
        store_save(store);
    } else {
        web_sys::console::warn_1(
            &format!("[STORE] delete of unknown list '{}' ignored", title).into(),
        );
    }
}

/// Relocate a list to another list's position
pub fn store_move_list(store: &AppStore, from_title: &str, to_title: &str) {
    collection::move_list(&mut *store.lists().write(), from_title, to_title);
    store_save(store);
}

/// Overwrite a list's stored contents, keyed by title. This is the single
/// propagation entry point for list handles.
pub fn store_update_list(store: &AppStore, list: TodoList) {
    let title = list.title.clone();
    let known = collection::update_list(&mut *store.lists().write(), list);
    if known {
        store_save(store);
    } else {
        web_sys::console::warn_1(
            &format!("[STORE] update for unknown list '{}' dropped", title).into(),
        );
    }
}

// ========================
// Per-List Handle
// ========================

/// Reactive handle for one list's working sequence. The handle is the
/// sole writer of its list's items; the app store copy only exists for
/// persistence and list-level operations.
///
/// Protocol misuse (confirming with no pending entry, completing or
/// reordering the pending placeholder) is a caller bug and fails fast.
#[derive(Clone, Copy)]
pub struct ListHandle {
    pub state: RwSignal<ListState>,
    app: AppStore,
}

impl ListHandle {
    pub fn new(app: AppStore, list: TodoList) -> Self {
        Self {
            state: RwSignal::new(ListState::from_list(list)),
            app,
        }
    }

    pub fn title(&self) -> String {
        self.state.with_untracked(|s| s.title.clone())
    }

    /// True while the underlying state signal is alive. A handle whose
    /// list row was removed reports false.
    pub fn is_live(&self) -> bool {
        self.state.try_with_untracked(|_| ()).is_some()
    }

    /// True when the live sequence holds an entry with this id; false for
    /// unknown ids and for disposed handles. Safe to call from document
    /// listeners that may outlive the list row.
    pub fn contains(&self, id: &str) -> bool {
        self.state
            .try_with_untracked(|s| s.entries.iter().any(|e| e.id() == id))
            .unwrap_or(false)
    }

    /// Insert the pending placeholder. No-op while one already exists.
    pub fn add_item(&self) {
        let id = ids::fresh_id();
        self.state.update(|s| {
            s.begin_add(id);
        });
    }

    /// Resolve the pending placeholder with the typed text
    pub fn confirm_add(&self, text: &str) {
        let outcome = self
            .state
            .try_update(|s| s.confirm_add(text))
            .expect("list state disposed")
            .expect("confirm called without a pending entry");
        if outcome == ConfirmOutcome::Added {
            self.propagate();
        }
    }

    pub fn delete_item(&self, id: &str) {
        self.state
            .try_update(|s| s.delete_item(id))
            .expect("list state disposed")
            .expect("delete targeted an unknown or pending entry");
        self.propagate();
    }

    pub fn complete_item(&self, id: &str) {
        let now_ms = js_sys::Date::now() as i64;
        self.state
            .try_update(|s| s.complete_item(id, now_ms))
            .expect("list state disposed")
            .expect("only existing items may be completed");
        self.propagate();
    }

    pub fn move_item(&self, from_id: &str, to_id: &str) {
        self.state
            .try_update(|s| s.move_item(from_id, to_id))
            .expect("list state disposed")
            .expect("drag reorder targeted an unknown or pending entry");
        self.propagate();
    }

    pub fn bump_item_up(&self, id: &str) {
        self.state
            .try_update(|s| s.bump_item_up(id))
            .expect("list state disposed")
            .expect("bump targeted an unknown or pending entry");
        self.propagate();
    }

    /// Push the durable snapshot up into the app store, which persists
    /// the whole collection
    fn propagate(&self) {
        let snapshot = self.state.with_untracked(|s| s.to_list());
        store_update_list(&self.app, snapshot);
    }
}
