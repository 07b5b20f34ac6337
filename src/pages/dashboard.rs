//! Dashboard: live entity counts, backend status and shortcuts.
//!
//! Each counter is fetched with its own list call so one failing endpoint
//! only blanks its own card.

#![cfg_attr(not(feature = "hydrate"), allow(unused_variables))]

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::ApiClient;
use crate::state::dashboard::{ApiStatus, DashboardState, Stat};
use crate::state::nav::MenuItem;

/// Shortcut cards: label and target path.
pub(crate) fn quick_actions() -> [(&'static str, &'static str); 4] {
    [
        ("Ajouter un formateur", MenuItem::Instructors.path()),
        ("Créer une promotion", MenuItem::Cohorts.path()),
        ("Gérer les étudiants", MenuItem::Students.path()),
        ("Créer un espace pédagogique", "/espace/nouveau"),
    ]
}

pub(crate) fn status_class(status: ApiStatus) -> &'static str {
    match status {
        ApiStatus::Checking => "badge",
        ApiStatus::Online => "badge badge--success",
        ApiStatus::Offline => "badge badge--danger",
    }
}

fn icon(stat: Stat) -> &'static str {
    match stat {
        Stat::Instructors => MenuItem::Instructors.icon(),
        Stat::Cohorts => MenuItem::Cohorts.icon(),
        Stat::Students => MenuItem::Students.icon(),
        Stat::TeachingSpaces => MenuItem::TeachingSpaces.icon(),
    }
}

fn load_counts(api: &ApiClient, state: RwSignal<DashboardState>) {
    #[cfg(feature = "hydrate")]
    {
        for stat in Stat::ALL {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = api.list::<serde_json::Value>(stat.resource()).await;
                if let Err(err) = &result {
                    log::warn!("dashboard count failed: {} {err}", stat.label());
                }
                state.update(|s| s.record(stat, result.map(|items| items.len()).map_err(|_| ())));
            });
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let state = RwSignal::new(DashboardState::default());
    Effect::new(move || load_counts(&api, state));

    let status = Memo::new(move |_| state.with(DashboardState::api_status));

    view! {
        <div class="page">
            <header class="page__header">
                <div>
                    <h1>"Tableau de bord"</h1>
                    <p class="page__subtitle">"Bienvenue sur la plateforme de gestion académique"</p>
                </div>
            </header>

            <div class="stats">
                {Stat::ALL
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class="stats__card">
                                <span class="stats__icon" aria-hidden="true">{icon(stat)}</span>
                                <h3>{move || state.with(|s| s.display(stat))}</h3>
                                <p>{stat.label()}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="dashboard__grid">
                <section class="card card--welcome">
                    <h2>"Bienvenue Administrateur 👋"</h2>
                    <p>"Gérez les formateurs, les promotions, les étudiants et les espaces pédagogiques depuis ce panneau."</p>
                </section>

                <section class="card">
                    <h3>"Actions rapides"</h3>
                    <div class="quick-actions">
                        {quick_actions()
                            .into_iter()
                            .map(|(label, path)| {
                                view! {
                                    <A href=path attr:class="quick-actions__item">
                                        {label}
                                    </A>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <section class="card">
                    <h3>"État du système"</h3>
                    <div class="system-status">
                        <span>"API Serveur"</span>
                        <span class=move || status_class(status.get())>{move || status.get().label()}</span>
                    </div>
                </section>
            </div>
        </div>
    }
}
