//! Student (étudiant) management page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Same cycle as the instructor page over `/etudiants/`, plus a secondary
//! cohort lookup (`/promotions/`) that feeds the cohort filter, the form
//! selector and the cohort column. A failed lookup is logged and the page
//! carries on with no cohorts.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use leptos::prelude::*;

use super::actions::{confirm_delete, load_list, submit_editor};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::credential_field::CredentialField;
use crate::components::error_banner::ErrorBanner;
use crate::components::filter_bar::{FilterPanel, ResetFiltersButton, ResultSummary, SearchBox};
use crate::components::form_field::{SelectField, TextAreaField, TextField};
use crate::net::api::{ApiClient, Resource};
use crate::net::types::{CohortRef, Student};
use crate::state::deletion::DeleteState;
use crate::state::editor::{EditorMode, EditorState};
use crate::state::identity::{IdentityDraft, initials, phone_or_dash, sex_label, sex_options};
use crate::state::SAVE_ERROR;
use crate::state::list::{AfterDelete, ListState};
use crate::state::students::{DELETE_PROMPT, LOAD_ERROR, StudentDraft, StudentFilters, cohort_name};
use crate::util::dates::format_date;
use crate::util::filter::{FilterSet, apply, result_summary};

pub(crate) fn cohort_options(cohorts: &[CohortRef]) -> Vec<(String, String)> {
    cohorts.iter().map(|c| (c.id.clone(), c.nom.clone())).collect()
}

pub(crate) fn editor_title(mode: Option<&EditorMode>) -> &'static str {
    match mode {
        Some(EditorMode::Edit { .. }) => "Modifier l'étudiant",
        _ => "Nouvel étudiant",
    }
}

pub(crate) fn submit_label(mode: Option<&EditorMode>, submitting: bool) -> &'static str {
    match (submitting, mode) {
        (true, _) => "Enregistrement...",
        (false, Some(EditorMode::Edit { .. })) => "Mettre à jour",
        (false, _) => "Créer l'étudiant",
    }
}

fn load_cohorts(api: &ApiClient, cohorts: RwSignal<Vec<CohortRef>>) {
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.list::<CohortRef>(Resource::CohortLookup).await {
                Ok(items) => cohorts.set(items),
                Err(err) => log::warn!("cohort lookup failed, continuing without cohorts: {err}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, cohorts);
}

#[component]
pub fn StudentsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let list = RwSignal::new(ListState::<Student>::default());
    let cohorts = RwSignal::new(Vec::<CohortRef>::new());
    let filters = RwSignal::new(StudentFilters::default());
    let editor = RwSignal::new(EditorState::<StudentDraft>::default());
    let deletion = RwSignal::new(DeleteState::default());

    let reload = {
        let api = api.clone();
        Callback::new(move |()| load_list(&api, Resource::Students, list, LOAD_ERROR))
    };
    {
        let api = api.clone();
        Effect::new(move || {
            reload.run(());
            load_cohorts(&api, cohorts);
        });
    }

    let visible = Memo::new(move |_| list.with(|s| filters.with(|f| apply(&s.items, f))));
    let summary = Signal::derive(move || {
        result_summary(visible.with(Vec::len), list.with(|s| s.items.len()), "étudiants")
    });
    let cohort_choices = Signal::derive(move || cohorts.with(|c| cohort_options(c)));

    let on_new = move |_| editor.update(|e| e.open_create(StudentDraft::blank()));
    let on_edit = Callback::new(move |record: Student| {
        editor.update(|e| e.open_edit(record.id.clone(), StudentDraft::from_record(&record)));
    });
    let on_delete_request = Callback::new(move |record: Student| {
        deletion.update(|d| d.request(record.id.clone(), record.user.full_name()));
    });

    let on_submit = {
        let api = api.clone();
        Callback::new(move |()| {
            submit_editor(&api, Resource::Students, editor, StudentDraft::to_payload, SAVE_ERROR, reload);
        })
    };
    let on_confirm_delete = {
        let api = api.clone();
        Callback::new(move |()| {
            confirm_delete(&api, Resource::Students, deletion, list, AfterDelete::Refetch, reload);
        })
    };

    view! {
        <div class="page">
            <header class="page__header">
                <div>
                    <h1>"Gestion des Étudiants"</h1>
                    <p class="page__subtitle">"Gérez vos étudiants et leurs informations"</p>
                </div>
                <button class="btn btn--primary" on:click=on_new>
                    "+ Nouvel Étudiant"
                </button>
            </header>

            <FilterPanel>
                <SearchBox
                    value=Signal::derive(move || filters.with(|f| f.search.clone()))
                    on_input=Callback::new(move |v| filters.update(|f| f.search = v))
                    placeholder="Rechercher par nom, prénom ou email..."
                />
                <SelectField
                    value=Signal::derive(move || filters.with(|f| f.sexe.clone()))
                    on_change=Callback::new(move |v| filters.update(|f| f.sexe = v))
                    options=sex_options()
                    empty_label="Tous les sexes"
                />
                <SelectField
                    value=Signal::derive(move || filters.with(|f| f.promotion.clone()))
                    on_change=Callback::new(move |v| filters.update(|f| f.promotion = v))
                    options=cohort_choices
                    empty_label="Toutes les promotions"
                />
                <ResetFiltersButton
                    active=Signal::derive(move || filters.with(FilterSet::is_active))
                    on_reset=Callback::new(move |()| filters.update(FilterSet::reset))
                />
            </FilterPanel>
            <ResultSummary summary=summary/>

            <ErrorBanner message=Signal::derive(move || list.with(|s| s.error.clone()))/>

            <section class="card">
                <Show
                    when=move || !list.with(|s| s.loading)
                    fallback=|| view! { <p class="card__loading">"Chargement des étudiants..."</p> }
                >
                    <Show
                        when=move || !visible.with(Vec::is_empty)
                        fallback=move || {
                            view! {
                                <div class="card__empty">
                                    <h3>"Aucun étudiant trouvé"</h3>
                                    <p>
                                        {move || {
                                            if filters.with(FilterSet::is_active) {
                                                "Essayez de modifier vos critères de recherche"
                                            } else {
                                                "Commencez par ajouter votre premier étudiant"
                                            }
                                        }}
                                    </p>
                                </div>
                            }
                        }
                    >
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Étudiant"</th>
                                    <th>"Email"</th>
                                    <th>"Téléphone"</th>
                                    <th>"Promotion"</th>
                                    <th>"Date de naissance"</th>
                                    <th class="table__actions">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || visible.get()
                                    key=|s| s.id.clone()
                                    children=move |record| {
                                        view! {
                                            <StudentRow
                                                record=record
                                                cohorts=cohorts
                                                on_edit=on_edit
                                                on_delete=on_delete_request
                                            />
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </section>

            <Show when=move || editor.with(EditorState::is_open)>
                <StudentEditor editor=editor cohort_choices=cohort_choices on_submit=on_submit/>
            </Show>
            <Show when=move || deletion.with(DeleteState::is_open)>
                <ConfirmDialog
                    title="Supprimer l'étudiant"
                    message=Signal::derive(move || {
                        let label = deletion.with(|d| d.pending.as_ref().map(|p| p.label.clone()));
                        format!("{DELETE_PROMPT}\n{}", label.unwrap_or_default())
                    })
                    busy=Signal::derive(move || deletion.with(|d| d.in_flight))
                    on_cancel=Callback::new(move |()| deletion.update(DeleteState::cancel))
                    on_confirm=on_confirm_delete
                />
            </Show>
        </div>
    }
}

#[component]
fn StudentRow(
    record: Student,
    cohorts: RwSignal<Vec<CohortRef>>,
    on_edit: Callback<Student>,
    on_delete: Callback<Student>,
) -> impl IntoView {
    let avatar = initials(&record.user);
    let name = record.user.full_name();
    let sex = sex_label(&record.user.sexe).to_owned();
    let email = record.user.email.clone();
    let phone = phone_or_dash(&record.user);
    let birth = record.date_naissance.as_deref().map_or_else(|| "-".to_owned(), format_date);
    let promotion_id = record.promotion_id.clone();
    let cohort = move || cohorts.with(|c| cohort_name(c, promotion_id.as_deref()).to_owned());
    let for_edit = record.clone();

    view! {
        <tr>
            <td>
                <div class="person">
                    <span class="person__avatar">{avatar}</span>
                    <div>
                        <p class="person__name">{name}</p>
                        <span class="badge">{sex}</span>
                    </div>
                </div>
            </td>
            <td>{email}</td>
            <td>{phone}</td>
            <td>
                <span class="badge badge--cohort">{cohort}</span>
            </td>
            <td>{birth}</td>
            <td class="table__actions">
                <button class="btn btn--icon" title="Modifier" on:click=move |_| on_edit.run(for_edit.clone())>
                    "✎"
                </button>
                <button class="btn btn--icon btn--danger" title="Supprimer" on:click=move |_| on_delete.run(record.clone())>
                    "🗑"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn StudentEditor(
    editor: RwSignal<EditorState<StudentDraft>>,
    cohort_choices: Signal<Vec<(String, String)>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let identity = move |get: fn(&IdentityDraft) -> String| {
        Signal::derive(move || editor.with(|e| e.draft().map(|d| get(&d.identity)).unwrap_or_default()))
    };
    let set_identity = move |apply: fn(&mut IdentityDraft, String)| {
        Callback::new(move |value: String| editor.update(|e| e.update(|d| apply(&mut d.identity, value))))
    };
    let field = move |get: fn(&StudentDraft) -> String| {
        Signal::derive(move || editor.with(|e| e.draft().map(get).unwrap_or_default()))
    };
    let set = move |apply: fn(&mut StudentDraft, String)| {
        Callback::new(move |value: String| editor.update(|e| e.update(|d| apply(d, value))))
    };
    let submitting = Signal::derive(move || editor.with(EditorState::is_submitting));
    let is_create = move || editor.with(|e| e.mode().is_some_and(EditorMode::is_create));
    let close = move |_| editor.update(EditorState::close);

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || editor.with(|e| editor_title(e.mode()))}</h2>
                <ErrorBanner message=Signal::derive(move || editor.with(|e| e.error().map(str::to_owned)))/>
                <div class="dialog__grid">
                    <TextField
                        label="Prénom"
                        required=true
                        placeholder="Jean"
                        value=identity(|d| d.prenom.clone())
                        on_input=set_identity(|d, v| d.prenom = v)
                        disabled=submitting
                    />
                    <TextField
                        label="Nom"
                        required=true
                        placeholder="Dupont"
                        value=identity(|d| d.nom.clone())
                        on_input=set_identity(|d, v| d.nom = v)
                        disabled=submitting
                    />
                </div>
                <TextField
                    label="Email"
                    required=true
                    input_type="email"
                    placeholder="jean.dupont@etudiant.fr"
                    value=identity(|d| d.email.clone())
                    on_input=set_identity(|d, v| d.email = v)
                    disabled=submitting
                />
                <div class="dialog__grid">
                    <TextField
                        label="Téléphone"
                        input_type="tel"
                        placeholder="01 23 45 67 89"
                        value=identity(|d| d.telephone.clone())
                        on_input=set_identity(|d, v| d.telephone = v)
                        disabled=submitting
                    />
                    <SelectField
                        label="Sexe"
                        required=true
                        value=identity(|d| d.sexe.clone())
                        on_change=set_identity(|d, v| d.sexe = v)
                        options=sex_options()
                        empty_label="Sélectionnez le sexe"
                        disabled=submitting
                    />
                </div>
                <div class="dialog__grid">
                    <TextField
                        label="Date de naissance"
                        input_type="date"
                        value=field(|d| d.date_naissance.clone())
                        on_input=set(|d, v| d.date_naissance = v)
                        disabled=submitting
                    />
                    <TextField
                        label="Lieu de naissance"
                        placeholder="Paris, France"
                        value=field(|d| d.lieu_naissance.clone())
                        on_input=set(|d, v| d.lieu_naissance = v)
                        disabled=submitting
                    />
                </div>
                <TextAreaField
                    label="Adresse"
                    placeholder="123 Rue de l'Université, 75000 Paris"
                    value=field(|d| d.adresse.clone())
                    on_input=set(|d, v| d.adresse = v)
                    disabled=submitting
                />
                <SelectField
                    label="Promotion"
                    value=field(|d| d.promotion_id.clone())
                    on_change=set(|d, v| d.promotion_id = v)
                    options=cohort_choices
                    empty_label="Sélectionnez une promotion"
                    disabled=submitting
                />
                <Show when=is_create>
                    <CredentialField
                        value=Signal::derive(move || editor.with(|e| e.draft().map(|d| d.password.clone()).unwrap_or_default()))
                        on_regenerate=Callback::new(move |()| editor.update(|e| e.update(StudentDraft::regenerate_password)))
                    />
                </Show>
                <div class="dialog__actions">
                    <button class="btn" disabled=move || submitting.get() on:click=close>
                        "Annuler"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || submitting.get()
                        on:click=move |_| on_submit.run(())
                    >
                        {move || editor.with(|e| submit_label(e.mode(), e.is_submitting()))}
                    </button>
                </div>
            </div>
        </div>
    }
}
