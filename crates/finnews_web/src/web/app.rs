use leptos::prelude::*;

/// Top-level component. Takes no props.
#[component]
pub(super) fn App() -> impl IntoView {
    view! {
        <main class="app">
            <header class="app-header">
                <h1 class="brand">"FinNews"</h1>
            </header>
            <p class="subtle">"Loading headlines…"</p>
        </main>
    }
}
