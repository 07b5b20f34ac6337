//! Read-only generated credential with copy and regenerate actions.

#![cfg_attr(not(feature = "hydrate"), allow(unused_variables))]

use leptos::prelude::*;

use crate::util::clipboard::copy_label;

#[component]
pub fn CredentialField(#[prop(into)] value: Signal<String>, on_regenerate: Callback<()>) -> impl IntoView {
    let copied = RwSignal::new(false);

    // "Copié" only once the browser has accepted the write.
    let on_copy = move |_| {
        copied.set(false);
        #[cfg(feature = "hydrate")]
        {
            let text = value.get_untracked();
            leptos::task::spawn_local(async move {
                let ok = crate::util::clipboard::copy_text(&text).await;
                if !ok {
                    log::warn!("clipboard unavailable");
                }
                copied.set(ok);
            });
        }
    };
    let on_regen = move |_| {
        copied.set(false);
        on_regenerate.run(());
    };

    view! {
        <div class="field">
            <span class="field__label">"Mot de passe généré"</span>
            <div class="credential">
                <input
                    class="field__input credential__value"
                    type="text"
                    readonly=true
                    prop:value=move || value.get()
                />
                <button type="button" class="btn" on:click=on_copy>
                    {move || copy_label(copied.get())}
                </button>
                <button type="button" class="btn" on:click=on_regen>
                    "Regénérer"
                </button>
            </div>
            <p class="field__hint">"Communiquez ce mot de passe à l'utilisateur avant d'enregistrer."</p>
        </div>
    }
}
