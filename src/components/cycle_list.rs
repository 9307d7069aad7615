//! Cycle List Component
//!
//! One list: header (title, add-item trigger, delete with confirmation,
//! drag handle for list reordering) and the item rows. Drag listeners
//! live at the grid level; this component only registers its handle and
//! wires row-local handlers.

use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::components::{DeleteConfirmButton, ItemRow};
use crate::models::{ItemEntry, TodoList};
use crate::store::{store_delete_list, use_app_store, ListHandle};

#[component]
pub fn CycleList(
    list: TodoList,
    lists_dnd: DndSignals,
    items_dnd: DndSignals,
    registry: RwSignal<Vec<ListHandle>>,
) -> impl IntoView {
    let store = use_app_store();
    let handle = ListHandle::new(store, list);
    let title = handle.title();

    // Make this list reachable from the grid's drop router. Handles of
    // deleted lists go dead rather than dangling, so prune them here.
    registry.update(|handles| {
        handles.retain(|h| h.is_live());
        handles.push(handle);
    });

    let entries = move || handle.state.with(|s| s.entries.clone());
    let is_adding = move || handle.state.with(|s| s.is_adding());

    // List-level drag wiring: the header handle starts a drag, the whole
    // list is a drop target for other lists
    let on_handle_mousedown = make_on_mousedown(lists_dnd, title.clone());
    let on_list_mouseenter = make_on_entry_mouseenter(lists_dnd, title.clone());
    let on_list_mouseleave = make_on_mouseleave(lists_dnd);

    let dragging_title = title.clone();
    let is_dragging = move || lists_dnd.dragging_id_read.get().as_deref() == Some(dragging_title.as_str());
    let target_title = title.clone();
    let is_drop_target = move || lists_dnd.target_id_read.get().as_deref() == Some(target_title.as_str());

    let list_class = move || {
        let mut c = String::from("cycle-list");
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    let delete_title = title.clone();

    view! {
        <div
            class=list_class
            on:mouseenter=on_list_mouseenter
            on:mouseleave=on_list_mouseleave
        >
            <div class="list-header">
                <h2 class="list-title">{title.clone()}</h2>

                // Hidden while the pending entry exists
                <Show when=move || !is_adding()>
                    <button class="add-item-btn" on:click=move |_| handle.add_item()>
                        "+"
                    </button>
                </Show>

                <DeleteConfirmButton
                    button_class="list-delete-btn"
                    on_confirm=Callback::new(move |_| store_delete_list(&store, &delete_title))
                />

                <span class="list-drag-handle" on:mousedown=on_handle_mousedown>"⠿"</span>
            </div>

            <div class="item-list">
                <For
                    each=entries
                    // Key on the mutable fields so completes and renames re-render
                    key=|entry| match entry {
                        ItemEntry::Existing(item) => {
                            (item.id.clone(), item.name.clone(), item.last_checked)
                        }
                        ItemEntry::Pending { id } => (id.clone(), String::new(), None),
                    }
                    children=move |entry| {
                        view! { <ItemRow entry=entry handle=handle dnd=items_dnd /> }
                    }
                />
            </div>
        </div>
    }
}
