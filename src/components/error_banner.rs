//! Inline error message shown near the failing list or form.

use leptos::prelude::*;

/// Alert box rendered only while `message` is set.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert">
                <span class="error-banner__icon" aria-hidden="true">"!"</span>
                <p class="error-banner__text">{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
