//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::net::api::ApiClient;
use crate::net::types::TeachingSpace;
use crate::pages::{
    cohorts::CohortsPage, dashboard::DashboardPage, instructors::InstructorsPage,
    space_confirmation::SpaceConfirmationPage, space_new::SpaceNewPage, students::StudentsPage,
    teaching_spaces::TeachingSpacesPage,
};
use crate::state::nav::NavState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API client, the sidebar state and the slot through which the
/// creation form hands the created space to the confirmation page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The server may inject a client built from its environment.
    let api = use_context::<ApiClient>().unwrap_or_default();
    let nav = RwSignal::new(NavState::default());
    let created_space = RwSignal::new(None::<TeachingSpace>);

    provide_context(api);
    provide_context(nav);
    provide_context(created_space);

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-admin.css"/>
        <Title text="Gestion Académique"/>

        <Router>
            <div class="layout">
                <Sidebar/>
                <main class="layout__main">
                    <Routes fallback=|| "Page introuvable.".into_view()>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=StaticSegment("formateur") view=InstructorsPage/>
                        <Route path=StaticSegment("promotion") view=CohortsPage/>
                        <Route path=StaticSegment("etudiant") view=StudentsPage/>
                        <Route path=StaticSegment("espace") view=TeachingSpacesPage/>
                        <Route path=(StaticSegment("espace"), StaticSegment("nouveau")) view=SpaceNewPage/>
                        <Route
                            path=(StaticSegment("espace"), StaticSegment("confirmation"))
                            view=SpaceConfirmationPage
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
