//! Cycle Lists Component
//!
//! The grid of all lists plus the app-lifetime drag wiring: one listener
//! set for list reordering and one for item reordering, shared by every
//! row ever rendered. Item drops are routed to the owning list's handle
//! through a registry, so deleting a list never leaves a document
//! listener reading disposed state.

use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::components::CycleList;
use crate::store::{store_move_list, use_app_store, AppStateStoreFields, ListHandle};

#[component]
pub fn CycleLists() -> impl IntoView {
    let store = use_app_store();

    // List-level DnD shared by every list header
    let lists_dnd = create_dnd_signals();
    bind_global_mouseup(lists_dnd, move |dragged, target| {
        store_move_list(&store, &dragged, &target);
    });

    // Item-level DnD: one signal scope for the whole grid. Rows accept
    // drops only from their own list, so both ids of a drop resolve
    // inside one handle.
    let items_dnd = create_dnd_signals();
    let registry: RwSignal<Vec<ListHandle>> = RwSignal::new(Vec::new());
    bind_global_mouseup(items_dnd, move |dragged, target| {
        let handle = registry.with_untracked(|handles| {
            handles.iter().copied().find(|h| h.contains(&dragged))
        });
        if let Some(handle) = handle {
            handle.move_item(&dragged, &target);
        }
    });

    view! {
        <For
            each=move || store.lists().get()
            key=|list| list.title.clone()
            children=move |list| {
                view! {
                    <CycleList
                        list=list
                        lists_dnd=lists_dnd
                        items_dnd=items_dnd
                        registry=registry
                    />
                }
            }
        />
    }
}
