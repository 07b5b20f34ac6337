//! Search box, reset button and result counter above each list.

use leptos::prelude::*;

#[component]
pub fn FilterPanel(children: Children) -> impl IntoView {
    view! {
        <section class="filter-panel">
            <h3 class="filter-panel__title">"Filtres et Recherche"</h3>
            <div class="filter-panel__row">{children()}</div>
        </section>
    }
}

#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="search-box">
            <span class="search-box__icon" aria-hidden="true">"⌕"</span>
            <input
                class="search-box__input"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// "Réinitialiser" button, shown only while a filter is set.
#[component]
pub fn ResetFiltersButton(#[prop(into)] active: Signal<bool>, on_reset: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || active.get()>
            <button type="button" class="btn filter-panel__reset" on:click=move |_| on_reset.run(())>
                "Réinitialiser"
            </button>
        </Show>
    }
}

#[component]
pub fn ResultSummary(#[prop(into)] summary: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || summary.get().is_some()>
            <p class="filter-panel__summary">{move || summary.get().unwrap_or_default()}</p>
        </Show>
    }
}
