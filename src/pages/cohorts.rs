//! Cohort (promotion) management page.
//!
//! Lists `/promotion/`, filters by name and filière, and offers a read-only
//! detail card next to the create/edit modal. Updates are sent as `PUT`; a
//! confirmed delete drops the row locally instead of refetching.

#[cfg(test)]
#[path = "cohorts_test.rs"]
mod cohorts_test;

use leptos::prelude::*;

use super::actions::{confirm_delete, load_list, submit_editor};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error_banner::ErrorBanner;
use crate::components::filter_bar::{FilterPanel, ResetFiltersButton, ResultSummary, SearchBox};
use crate::components::form_field::{SelectField, TextAreaField, TextField};
use crate::net::api::{ApiClient, Resource};
use crate::net::types::Cohort;
use crate::state::cohorts::{
    CohortDraft, CohortFilters, DELETE_PROMPT, LOAD_ERROR, SAVE_ERROR, description_or_placeholder, filiere_options,
};
use crate::state::deletion::DeleteState;
use crate::state::editor::{EditorMode, EditorState};
use crate::state::list::{AfterDelete, ListState};
use crate::util::filter::{FilterSet, apply, result_summary};

pub(crate) fn editor_title(mode: Option<&EditorMode>) -> &'static str {
    match mode {
        Some(EditorMode::Edit { .. }) => "Modifier Promotion",
        _ => "Ajouter Promotion",
    }
}

pub(crate) fn submit_label(mode: Option<&EditorMode>, submitting: bool) -> &'static str {
    match (submitting, mode) {
        (true, _) => "Enregistrement...",
        (false, Some(EditorMode::Edit { .. })) => "Mettre à jour",
        (false, _) => "Enregistrer",
    }
}

/// Filière selector entries; the value and the label are the same string.
pub(crate) fn filiere_choices(cohorts: &[Cohort]) -> Vec<(String, String)> {
    filiere_options(cohorts).into_iter().map(|f| (f.clone(), f)).collect()
}

#[component]
pub fn CohortsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let list = RwSignal::new(ListState::<Cohort>::default());
    let filters = RwSignal::new(CohortFilters::default());
    let editor = RwSignal::new(EditorState::<CohortDraft>::default());
    let deletion = RwSignal::new(DeleteState::default());
    let viewing = RwSignal::new(None::<Cohort>);

    let reload = {
        let api = api.clone();
        Callback::new(move |()| load_list(&api, Resource::Cohorts, list, LOAD_ERROR))
    };
    Effect::new(move || reload.run(()));

    let visible = Memo::new(move |_| list.with(|s| filters.with(|f| apply(&s.items, f))));
    let summary = Signal::derive(move || {
        result_summary(visible.with(Vec::len), list.with(|s| s.items.len()), "promotions")
    });
    let filieres = Signal::derive(move || list.with(|s| filiere_choices(&s.items)));

    let on_new = move |_| editor.update(|e| e.open_create(CohortDraft::default()));
    let on_view = Callback::new(move |record: Cohort| viewing.set(Some(record)));
    let on_edit = Callback::new(move |record: Cohort| {
        editor.update(|e| e.open_edit(record.id.clone(), CohortDraft::from_record(&record)));
    });
    let on_delete_request = Callback::new(move |record: Cohort| {
        deletion.update(|d| d.request(record.id.clone(), record.nom.clone()));
    });

    let on_submit = {
        let api = api.clone();
        Callback::new(move |()| {
            submit_editor(&api, Resource::Cohorts, editor, |d: &CohortDraft, _| d.to_payload(), SAVE_ERROR, reload);
        })
    };
    let on_confirm_delete = {
        let api = api.clone();
        Callback::new(move |()| {
            confirm_delete(&api, Resource::Cohorts, deletion, list, AfterDelete::RemoveLocally, reload);
        })
    };

    view! {
        <div class="page">
            <header class="page__header">
                <div>
                    <h1>"Gestion Promotions"</h1>
                    <p class="page__subtitle">"Ajoutez et modifiez vos cohortes"</p>
                </div>
                <button class="btn btn--primary" on:click=on_new>
                    "+ Nouveau"
                </button>
            </header>

            <FilterPanel>
                <SearchBox
                    value=Signal::derive(move || filters.with(|f| f.search.clone()))
                    on_input=Callback::new(move |v| filters.update(|f| f.search = v))
                    placeholder="Rechercher..."
                />
                <SelectField
                    value=Signal::derive(move || filters.with(|f| f.filiere.clone()))
                    on_change=Callback::new(move |v| filters.update(|f| f.filiere = v))
                    options=filieres
                    empty_label="Toutes les filières"
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
                    fallback=|| view! { <p class="card__loading">"Chargement des promotions..."</p> }
                >
                    <Show
                        when=move || !visible.with(Vec::is_empty)
                        fallback=|| view! { <div class="card__empty"><h3>"Aucune promotion trouvée"</h3></div> }
                    >
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Promotion"</th>
                                    <th>"Filière"</th>
                                    <th>"Période"</th>
                                    <th class="table__actions">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || visible.get()
                                    key=|c| c.id.clone()
                                    children=move |record| {
                                        view! {
                                            <CohortRow
                                                record=record
                                                on_view=on_view
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
                <CohortEditor editor=editor on_submit=on_submit/>
            </Show>
            {move || viewing.get().map(|cohort| view! { <CohortDetail cohort=cohort viewing=viewing/> })}
            <Show when=move || deletion.with(DeleteState::is_open)>
                <ConfirmDialog
                    title="Supprimer la promotion"
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
fn CohortRow(
    record: Cohort,
    on_view: Callback<Cohort>,
    on_edit: Callback<Cohort>,
    on_delete: Callback<Cohort>,
) -> impl IntoView {
    let nom = record.nom.clone();
    let filiere = record.filiere.clone();
    let periode = record.periode.clone();
    let for_view = record.clone();
    let for_edit = record.clone();

    view! {
        <tr>
            <td class="table__strong">{nom}</td>
            <td class="table__accent">{filiere}</td>
            <td>{periode}</td>
            <td class="table__actions">
                <button class="btn btn--icon" title="Voir" on:click=move |_| on_view.run(for_view.clone())>
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
fn CohortDetail(cohort: Cohort, viewing: RwSignal<Option<Cohort>>) -> impl IntoView {
    let description = format!("\u{201c}{}\u{201d}", description_or_placeholder(&cohort));
    let close = move |_| viewing.set(None);

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog dialog--narrow dialog--centered" on:click=move |ev| ev.stop_propagation()>
                <h3>{cohort.nom}</h3>
                <p class="dialog__accent">{cohort.filiere}</p>
                <p class="dialog__muted">{cohort.periode}</p>
                <p class="dialog__quote">{description}</p>
                <button class="btn btn--dark btn--block" on:click=close>
                    "Fermer"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CohortEditor(editor: RwSignal<EditorState<CohortDraft>>, on_submit: Callback<()>) -> impl IntoView {
    let field = move |get: fn(&CohortDraft) -> String| {
        Signal::derive(move || editor.with(|e| e.draft().map(get).unwrap_or_default()))
    };
    let set = move |apply: fn(&mut CohortDraft, String)| {
        Callback::new(move |value: String| editor.update(|e| e.update(|d| apply(d, value))))
    };
    let submitting = Signal::derive(move || editor.with(EditorState::is_submitting));
    let close = move |_| editor.update(EditorState::close);

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || editor.with(|e| editor_title(e.mode()))}</h2>
                <ErrorBanner message=Signal::derive(move || editor.with(|e| e.error().map(str::to_owned)))/>
                <TextField
                    label="Nom"
                    required=true
                    placeholder="Nom (ex: Master 1)"
                    value=field(|d| d.nom.clone())
                    on_input=set(|d, v| d.nom = v)
                    disabled=submitting
                />
                <TextField
                    label="Filière"
                    required=true
                    placeholder="Filière (ex: Informatique)"
                    value=field(|d| d.filiere.clone())
                    on_input=set(|d, v| d.filiere = v)
                    disabled=submitting
                />
                <TextField
                    label="Période"
                    required=true
                    placeholder="Période (ex: 2024-2025)"
                    value=field(|d| d.periode.clone())
                    on_input=set(|d, v| d.periode = v)
                    disabled=submitting
                />
                <TextAreaField
                    label="Description"
                    placeholder="Description"
                    value=field(|d| d.description.clone())
                    on_input=set(|d, v| d.description = v)
                    disabled=submitting
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
                        {move || editor.with(|e| submit_label(e.mode(), e.is_submitting()))}
                    </button>
                </div>
            </div>
        </div>
    }
}
