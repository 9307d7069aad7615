//! New List Input Component
//!
//! Input for creating a new list. Submits on Enter, blur, or the add
//! button; clears only when the store accepts the title.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::collection::AddListOutcome;
use crate::store::{store_add_list, use_app_store};

#[component]
pub fn NewListInput() -> impl IntoView {
    let store = use_app_store();

    let (title, set_title) = signal(String::new());

    let submit = move || {
        let value = title.get_untracked();
        if value.is_empty() {
            return;
        }
        let outcome = store_add_list(&store, &value);
        web_sys::console::log_1(&format!("[LISTS] add '{}': {:?}", value, outcome).into());
        if outcome == AddListOutcome::Accepted {
            set_title.set(String::new());
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    view! {
        <form class="new-list-form" on:submit=on_submit>
            <input
                type="text"
                class="new-list-input"
                placeholder="Add a new list"
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
                on:blur=move |_| submit()
            />
            <button type="submit" class="new-list-submit">"+"</button>
        </form>
    }
}
