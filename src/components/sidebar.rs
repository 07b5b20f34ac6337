//! Left navigation sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by the app shell inside the router. The highlighted entry is
//! derived from the current path, so deep links and back/forward navigation
//! keep it in sync without extra state.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::nav::{MenuItem, NavState};

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let location = use_location();

    let active = Memo::new(move |_| MenuItem::from_path(&location.pathname.get()));
    let open = move || nav.get().sidebar_open;
    let toggle = move |_| nav.update(NavState::toggle_sidebar);

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || !open()>
            <div class="sidebar__brand">
                <span class="sidebar__logo" aria-hidden="true">"🎓"</span>
                <Show when=open>
                    <div class="sidebar__title">
                        <h2>"Gestion Académique"</h2>
                        <p>"Plateforme de gestion"</p>
                    </div>
                </Show>
                <button
                    class="btn sidebar__toggle"
                    on:click=toggle
                    aria-label=move || if open() { "Fermer le menu" } else { "Ouvrir le menu" }
                >
                    {move || if open() { "✕" } else { "☰" }}
                </button>
            </div>
            <nav class="sidebar__nav">
                <ul>
                    {MenuItem::ALL
                        .into_iter()
                        .map(|item| {
                            let is_active = move || active.get() == item;
                            view! {
                                <li>
                                    <A href=item.path() attr:class="sidebar__item" attr:title=item.label()>
                                        <span
                                            class="sidebar__item-inner"
                                            class:sidebar__item--active=is_active
                                        >
                                            <span class="sidebar__icon" aria-hidden="true">{item.icon()}</span>
                                            <Show when=open>
                                                <span class="sidebar__label">{item.label()}</span>
                                            </Show>
                                        </span>
                                    </A>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>
            <div class="sidebar__footer">
                <span class="sidebar__avatar">"A"</span>
                <Show when=open>
                    <div>
                        <p class="sidebar__user">"Administrateur"</p>
                        <p class="sidebar__email">"admin@academy.fr"</p>
                    </div>
                </Show>
            </div>
        </aside>
    }
}
