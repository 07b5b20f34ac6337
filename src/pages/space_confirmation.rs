//! Confirmation shown after a teaching space is created.
//!
//! Reads the space left in context by the creation form. Reaching the route
//! directly (or after a reload) finds nothing and shows a notice instead.

#[cfg(test)]
#[path = "space_confirmation_test.rs"]
mod space_confirmation_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::TeachingSpace;
use crate::state::teaching_spaces::subject_label;
use crate::util::dates::format_timestamp;

pub(crate) fn status_text(space: &TeachingSpace) -> &'static str {
    if space.is_actif { "✅ Actif et opérationnel" } else { "⏸️ En attente" }
}

pub(crate) fn assigned_cohort(space: &TeachingSpace) -> &str {
    space.promotion_nom.as_deref().filter(|n| !n.is_empty()).unwrap_or("Aucune promotion assignée")
}

pub(crate) fn assigned_instructor(space: &TeachingSpace) -> &str {
    space.formateur_principal_nom.as_deref().filter(|n| !n.is_empty()).unwrap_or("Aucun formateur assigné")
}

pub(crate) fn timestamp_or_dash(raw: Option<&str>) -> String {
    raw.map_or_else(|| "-".to_owned(), format_timestamp)
}

#[component]
pub fn SpaceConfirmationPage() -> impl IntoView {
    let created = expect_context::<RwSignal<Option<TeachingSpace>>>();

    move || match created.get() {
        Some(space) => view! { <SpaceCreated space=space/> }.into_any(),
        None => view! {
            <div class="page page--narrow">
                <section class="card card__empty">
                    <h1>"Aucun espace trouvé"</h1>
                    <p>"Vous êtes arrivé sur cette page sans avoir créé d'espace."</p>
                    <A href="/espace/nouveau" attr:class="btn btn--primary">
                        "Retour à la création"
                    </A>
                    <A href="/" attr:class="btn">
                        "Accueil"
                    </A>
                </section>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn SpaceCreated(space: TeachingSpace) -> impl IntoView {
    let status = status_text(&space);
    let status_class = if space.is_actif { "badge badge--success" } else { "badge badge--danger" };
    let subject = subject_label(&space);
    let cohort = assigned_cohort(&space).to_owned();
    let instructor = assigned_instructor(&space).to_owned();
    let created_at = timestamp_or_dash(space.created_at.as_deref());
    let updated_at = timestamp_or_dash(space.updated_at.as_deref());
    let instructors = format!("{} formateur(s)", space.formateurs_count);
    let students = format!("{} étudiant(s)", space.etudiants_count);
    let description = (!space.description.trim().is_empty()).then(|| space.description.clone());

    view! {
        <div class="page page--narrow">
            <header class="page__header">
                <div>
                    <h1>"Confirmation de création"</h1>
                    <p class="page__subtitle">"Votre espace pédagogique a été créé avec succès"</p>
                </div>
                <A href="/espace" attr:class="btn">
                    "Retour"
                </A>
            </header>

            <section class="card card--form">
                <h2>"✅ Création réussie !"</h2>
                <p class="page__subtitle">"Votre espace pédagogique est maintenant disponible"</p>

                <h3>"Informations principales"</h3>
                <dl class="details">
                    <dt>"Nom de l'espace"</dt>
                    <dd>{space.nom}</dd>
                    <dt>"Matière"</dt>
                    <dd>{subject}</dd>
                    <dt>"Statut"</dt>
                    <dd>
                        <span class=status_class>{status}</span>
                    </dd>
                </dl>

                <h3>"Assignations"</h3>
                <dl class="details">
                    <dt>"Promotion"</dt>
                    <dd>{cohort}</dd>
                    <dt>"Formateur responsable"</dt>
                    <dd>{instructor}</dd>
                    <dt>"Date de création"</dt>
                    <dd>{created_at}</dd>
                </dl>

                {description.map(|text| view! {
                    <h4>"Description"</h4>
                    <p>{text}</p>
                })}

                <h4>"Informations techniques"</h4>
                <dl class="details">
                    <dt>"ID de l'espace :"</dt>
                    <dd><code>{space.id}</code></dd>
                    <dt>"Date de dernière mise à jour :"</dt>
                    <dd>{updated_at}</dd>
                    <dt>"Nombre de formateurs :"</dt>
                    <dd>{instructors}</dd>
                    <dt>"Nombre d'étudiants :"</dt>
                    <dd>{students}</dd>
                </dl>

                <div class="dialog__actions">
                    <A href="/espace/nouveau" attr:class="btn btn--primary">
                        "Créer un autre espace"
                    </A>
                    <A href="/" attr:class="btn">
                        "Tableau de bord"
                    </A>
                </div>
            </section>
        </div>
    }
}
