//! Teaching-space consultation page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `/espace-pedagogique/espaces/` and renders a filterable table with
//! view, edit and delete dialogs plus totals over the visible rows. Edits are
//! sent as `PATCH` and followed by a refetch; deletes drop the row locally.

#[cfg(test)]
#[path = "teaching_spaces_test.rs"]
mod teaching_spaces_test;

use leptos::prelude::*;
use leptos_router::components::A;

use super::actions::{confirm_delete, load_list, submit_editor};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error_banner::ErrorBanner;
use crate::components::filter_bar::{FilterPanel, ResetFiltersButton, ResultSummary, SearchBox};
use crate::components::form_field::{CheckboxField, SelectField, TextAreaField, TextField};
use crate::net::api::{ApiClient, Resource};
use crate::net::types::TeachingSpace;
use crate::state::SAVE_ERROR;
use crate::state::deletion::DeleteState;
use crate::state::editor::EditorState;
use crate::state::list::{AfterDelete, ListState};
use crate::state::teaching_spaces::{
    LOAD_ERROR, SpaceStats, TeachingSpaceDraft, TeachingSpaceFilters, cohort_label, cohort_options,
    instructor_name, subject_label, subject_name, subject_options,
};
use crate::util::filter::{FilterSet, apply, result_summary};

pub(crate) fn same_value_choices(values: Vec<String>) -> Vec<(String, String)> {
    values.into_iter().map(|v| (v.clone(), v)).collect()
}

pub(crate) fn delete_message(label: &str) -> String {
    format!("Voulez-vous vraiment supprimer l'espace {label} ? Cette action est irréversible.")
}

pub(crate) fn status_label(space: &TeachingSpace) -> &'static str {
    if space.is_actif { "Actif" } else { "Inactif" }
}

#[component]
pub fn TeachingSpacesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let list = RwSignal::new(ListState::<TeachingSpace>::default());
    let filters = RwSignal::new(TeachingSpaceFilters::default());
    let editor = RwSignal::new(EditorState::<TeachingSpaceDraft>::default());
    let deletion = RwSignal::new(DeleteState::default());
    let viewing = RwSignal::new(None::<TeachingSpace>);

    let reload = {
        let api = api.clone();
        Callback::new(move |()| load_list(&api, Resource::TeachingSpaces, list, LOAD_ERROR))
    };
    Effect::new(move || reload.run(()));

    let visible = Memo::new(move |_| list.with(|s| filters.with(|f| apply(&s.items, f))));
    let stats = Memo::new(move |_| visible.with(|v| SpaceStats::from_spaces(v)));
    let summary = Signal::derive(move || {
        result_summary(visible.with(Vec::len), list.with(|s| s.items.len()), "espaces")
    });
    let subjects = Signal::derive(move || list.with(|s| same_value_choices(subject_options(&s.items))));
    let cohorts = Signal::derive(move || list.with(|s| same_value_choices(cohort_options(&s.items))));

    let on_view = Callback::new(move |record: TeachingSpace| viewing.set(Some(record)));
    let on_edit = Callback::new(move |record: TeachingSpace| {
        viewing.set(None);
        editor.update(|e| e.open_edit(record.id.clone(), TeachingSpaceDraft::from_record(&record)));
    });
    let on_delete_request = Callback::new(move |record: TeachingSpace| {
        deletion.update(|d| d.request(record.id.clone(), record.nom.clone()));
    });

    let on_submit = {
        let api = api.clone();
        Callback::new(move |()| {
            submit_editor(
                &api,
                Resource::TeachingSpaces,
                editor,
                |d: &TeachingSpaceDraft, _| d.to_update(),
                SAVE_ERROR,
                reload,
            );
        })
    };
    let on_confirm_delete = {
        let api = api.clone();
        Callback::new(move |()| {
            confirm_delete(&api, Resource::TeachingSpaces, deletion, list, AfterDelete::RemoveLocally, reload);
        })
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Consultation des espaces pédagogiques"</h1>
                <A href="/espace/nouveau" attr:class="btn btn--primary">
                    "+ Nouvel espace"
                </A>
            </header>

            <FilterPanel>
                <SearchBox
                    value=Signal::derive(move || filters.with(|f| f.search.clone()))
                    on_input=Callback::new(move |v| filters.update(|f| f.search = v))
                    placeholder="Rechercher un espace, formateur ou promotion..."
                />
                <SelectField
                    label="Matière"
                    value=Signal::derive(move || filters.with(|f| f.matiere.clone()))
                    on_change=Callback::new(move |v| filters.update(|f| f.matiere = v))
                    options=subjects
                    empty_label="Toutes les matières"
                />
                <SelectField
                    label="Promotion"
                    value=Signal::derive(move || filters.with(|f| f.promotion.clone()))
                    on_change=Callback::new(move |v| filters.update(|f| f.promotion = v))
                    options=cohorts
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
                    fallback=|| view! { <p class="card__loading">"Chargement des espaces..."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Nom de l'espace"</th>
                                <th>"Matière"</th>
                                <th>"Formateur"</th>
                                <th>"Promotion(s)"</th>
                                <th>"Étudiants"</th>
                                <th class="table__actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show
                                when=move || !visible.with(Vec::is_empty)
                                fallback=|| view! {
                                    <tr>
                                        <td colspan="6" class="table__empty">"Aucun espace trouvé"</td>
                                    </tr>
                                }
                            >
                                <For
                                    each=move || visible.get()
                                    key=|s| s.id.clone()
                                    children=move |record| {
                                        view! {
                                            <SpaceRow
                                                record=record
                                                on_view=on_view
                                                on_edit=on_edit
                                                on_delete=on_delete_request
                                            />
                                        }
                                    }
                                />
                            </Show>
                        </tbody>
                    </table>
                </Show>
            </section>

            <div class="stats">
                <div class="stats__card stats__card--blue">
                    <h2>{move || stats.get().spaces}</h2>
                    <p>"Total d'espaces"</p>
                </div>
                <div class="stats__card stats__card--green">
                    <h2>{move || stats.get().students}</h2>
                    <p>"Total d'étudiants"</p>
                </div>
                <div class="stats__card stats__card--purple">
                    <h2>{move || stats.get().instructors}</h2>
                    <p>"Formateurs actifs"</p>
                </div>
            </div>

            {move || {
                viewing.get().map(|space| view! { <SpaceDetail space=space viewing=viewing on_edit=on_edit/> })
            }}
            <Show when=move || editor.with(EditorState::is_open)>
                <SpaceEditor editor=editor on_submit=on_submit/>
            </Show>
            <Show when=move || deletion.with(DeleteState::is_open)>
                <ConfirmDialog
                    title="Confirmer la suppression"
                    message=Signal::derive(move || {
                        deletion.with(|d| d.pending.as_ref().map(|p| delete_message(&p.label)).unwrap_or_default())
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
fn SpaceRow(
    record: TeachingSpace,
    on_view: Callback<TeachingSpace>,
    on_edit: Callback<TeachingSpace>,
    on_delete: Callback<TeachingSpace>,
) -> impl IntoView {
    let nom = record.nom.clone();
    let subject = subject_name(&record).to_owned();
    let instructor = instructor_name(&record).to_owned();
    let cohort = cohort_label(&record).to_owned();
    let students = record.etudiants_count;
    let for_view = record.clone();
    let for_edit = record.clone();

    view! {
        <tr>
            <td class="table__strong">{nom}</td>
            <td>{subject}</td>
            <td>{instructor}</td>
            <td>
                <span class="badge">{cohort}</span>
            </td>
            <td>{students}</td>
            <td class="table__actions">
                <button class="btn btn--icon" title="Voir les détails" on:click=move |_| on_view.run(for_view.clone())>
                    "👁"
                </button>
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
fn SpaceDetail(
    space: TeachingSpace,
    viewing: RwSignal<Option<TeachingSpace>>,
    on_edit: Callback<TeachingSpace>,
) -> impl IntoView {
    let close = move |_| viewing.set(None);
    let subject = subject_label(&space);
    let instructor = instructor_name(&space).to_owned();
    let cohort = cohort_label(&space).to_owned();
    let status = status_label(&space);
    let students = space.etudiants_count;
    let nom = space.nom.clone();

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Détails de l'espace"</h2>
                <dl class="details">
                    <dt>"Nom"</dt>
                    <dd>{nom}</dd>
                    <dt>"Matière"</dt>
                    <dd>{subject}</dd>
                    <dt>"Formateur"</dt>
                    <dd>{instructor}</dd>
                    <dt>"Promotion"</dt>
                    <dd>{cohort}</dd>
                    <dt>"Étudiants"</dt>
                    <dd>{students}</dd>
                    <dt>"Statut"</dt>
                    <dd>{status}</dd>
                </dl>
                <div class="dialog__actions">
                    <button class="btn" on:click=close>
                        "Fermer"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_edit.run(space.clone())>
                        "Modifier"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SpaceEditor(editor: RwSignal<EditorState<TeachingSpaceDraft>>, on_submit: Callback<()>) -> impl IntoView {
    let field = move |get: fn(&TeachingSpaceDraft) -> String| {
        Signal::derive(move || editor.with(|e| e.draft().map(get).unwrap_or_default()))
    };
    let set = move |apply: fn(&mut TeachingSpaceDraft, String)| {
        Callback::new(move |value: String| editor.update(|e| e.update(|d| apply(d, value))))
    };
    let submitting = Signal::derive(move || editor.with(EditorState::is_submitting));
    let close = move |_| editor.update(EditorState::close);

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Modifier l'espace"</h2>
                <ErrorBanner message=Signal::derive(move || editor.with(|e| e.error().map(str::to_owned)))/>
                <TextField
                    label="Nom"
                    required=true
                    value=field(|d| d.nom.clone())
                    on_input=set(|d, v| d.nom = v)
                    disabled=submitting
                />
                <TextAreaField
                    label="Description"
                    value=field(|d| d.description.clone())
                    on_input=set(|d, v| d.description = v)
                    disabled=submitting
                />
                <CheckboxField
                    label="Espace actif"
                    checked=Signal::derive(move || editor.with(|e| e.draft().is_some_and(|d| d.is_actif)))
                    on_change=Callback::new(move |checked| editor.update(|e| e.update(|d| d.is_actif = checked)))
                />
                <div class="dialog__actions">
                    <button class="btn" disabled=move || submitting.get() on:click=close>
                        "Annuler"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || submitting.get()
                        on:click=move |_| on_submit.run(())
                    >
                        {move || if submitting.get() { "Enregistrement..." } else { "Enregistrer" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
