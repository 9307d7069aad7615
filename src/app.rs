//! CycleList App
//!
//! Page shell: heading, first-visit hints, new-list input, and the grid
//! of lists. Loads the persisted collection once on startup.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CycleLists, NewListInput};
use crate::store::{store_load, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());

    // Provide the store to all children
    provide_context(store);

    // Single load on startup; every later write goes through the store
    // helpers, which persist as they go
    store_load(&store);

    let first_time = move || store.first_time().get();

    view! {
        <main class="app-layout">
            <div class="intro-panel">
                <div class="title-row">
                    <h1 class="app-title">"Cycle • List"</h1>
                    <a
                        class="github-link"
                        href="https://github.com/nickbabcock/cycle-list"
                        aria-label="CycleList Github Repo"
                    >
                        "GitHub"
                    </a>
                </div>
                <p class="tagline">"Keeping track of life's cyclical activities"</p>

                <Show when=first_time>
                    <p class="hint">
                        "Try selecting an item to cause it to fall to the bottom of the list!"
                    </p>
                    <p class="hint">"Your lists are stored locally in the browser"</p>
                </Show>

                <NewListInput />
            </div>

            <CycleLists />
        </main>
    }
}
