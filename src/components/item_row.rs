//! Item Row Component
//!
//! One entry of a list: either an existing item (complete on click,
//! delete, drag handle, bump-up touch fallback) or the pending new-item
//! input, which resolves on blur.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use leptos_dragdrop::*;

use crate::format::format_epoch;
use crate::models::{ItemEntry, TodoItem};
use crate::store::ListHandle;

#[component]
pub fn ItemRow(entry: ItemEntry, handle: ListHandle, dnd: DndSignals) -> impl IntoView {
    match entry {
        ItemEntry::Existing(item) => view! { <ExistingRow item=item handle=handle dnd=dnd /> }.into_any(),
        ItemEntry::Pending { .. } => view! { <PendingRow handle=handle /> }.into_any(),
    }
}

#[component]
fn ExistingRow(item: TodoItem, handle: ListHandle, dnd: DndSignals) -> impl IntoView {
    let id = item.id.clone();

    // DnD handlers - whole row is draggable, buttons are ignored. The
    // signal scope is shared across lists, so only accept drags that
    // started in this row's own list.
    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_mouseenter =
        make_on_entry_mouseenter_when(dnd, id.clone(), move |dragging| handle.contains(dragging));
    let on_mouseleave = make_on_mouseleave(dnd);

    // Visual state
    let dragging_id = id.clone();
    let is_dragging = move || dnd.dragging_id_read.get().as_deref() == Some(dragging_id.as_str());
    let target_id = id.clone();
    let is_drop_target = move || dnd.target_id_read.get().as_deref() == Some(target_id.as_str());

    let row_class = move || {
        let mut c = String::from("item-row");
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    let complete_id = id.clone();
    let on_complete = move |_: web_sys::MouseEvent| {
        // A drop that just ended also fires a click on the row; ignore it
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        handle.complete_item(&complete_id);
    };

    let delete_id = id.clone();
    let bump_id = id.clone();

    view! {
        <div
            class=row_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <button class="item-main" on:click=on_complete>
                <div class="item-name">{item.name.clone()}</div>
                {item.last_checked.map(|ts| view! {
                    <div class="item-last-checked">"Last checked: " {format_epoch(ts)}</div>
                })}
            </button>

            <button class="item-delete-btn" on:click=move |_| handle.delete_item(&delete_id)>
                "×"
            </button>

            // Pointer devices: drag to reorder
            <span class="item-drag-handle">"⠿"</span>

            // Touch fallback: nudge one position up
            <button class="item-bump-btn" on:click=move |_| handle.bump_item_up(&bump_id)>
                "▲"
            </button>
        </div>
    }
}

#[component]
fn PendingRow(handle: ListHandle) -> impl IntoView {
    let input_ref: NodeRef<leptos::html::Input> = NodeRef::new();

    // Focus the input as soon as it mounts
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_blur = move |ev: web_sys::FocusEvent| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        handle.confirm_add(&input.value());
    };

    // Enter just blurs the input so blur stays the single confirm path
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            if let Some(target) = ev.target() {
                if let Some(el) = target.dyn_ref::<web_sys::HtmlElement>() {
                    let _ = el.blur();
                }
            }
        }
    };

    view! {
        <div class="item-row pending">
            <input
                node_ref=input_ref
                type="text"
                class="item-new-input"
                placeholder="New item..."
                on:blur=on_blur
                on:keydown=on_keydown
            />
            <button class="item-confirm-btn">
                // Blur from the click performs the confirm
                "✓"
            </button>
        </div>
    }
}
