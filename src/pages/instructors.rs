//! Instructor (formateur) management page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists instructors from `/formateurs/`, narrows them with the search box and
//! sex selector, and drives the create/edit modal and delete confirmation.
//! Every successful mutation refetches the list.

#[cfg(test)]
#[path = "instructors_test.rs"]
mod instructors_test;

use leptos::prelude::*;

use super::actions::{confirm_delete, load_list, submit_editor};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::credential_field::CredentialField;
use crate::components::error_banner::ErrorBanner;
use crate::components::filter_bar::{FilterPanel, ResetFiltersButton, ResultSummary, SearchBox};
use crate::components::form_field::{SelectField, TextField};
use crate::net::api::{ApiClient, Resource};
use crate::net::types::Instructor;
use crate::state::deletion::DeleteState;
use crate::state::editor::{EditorMode, EditorState};
use crate::state::identity::{IdentityDraft, initials, phone_or_dash, sex_label, sex_options};
use crate::state::instructors::{DELETE_PROMPT, InstructorDraft, InstructorFilters, LOAD_ERROR};
use crate::state::SAVE_ERROR;
use crate::state::list::{AfterDelete, ListState};
use crate::util::filter::{FilterSet, apply, result_summary};

pub(crate) fn editor_title(mode: Option<&EditorMode>) -> &'static str {
    match mode {
        Some(EditorMode::Edit { .. }) => "Modifier le formateur",
        _ => "Nouveau formateur",
    }
}

pub(crate) fn submit_label(mode: Option<&EditorMode>, submitting: bool) -> &'static str {
    match (submitting, mode) {
        (true, _) => "Enregistrement...",
        (false, Some(EditorMode::Edit { .. })) => "Mettre à jour",
        (false, _) => "Créer le formateur",
    }
}

#[component]
pub fn InstructorsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let list = RwSignal::new(ListState::<Instructor>::default());
    let filters = RwSignal::new(InstructorFilters::default());
    let editor = RwSignal::new(EditorState::<InstructorDraft>::default());
    let deletion = RwSignal::new(DeleteState::default());

    let reload = {
        let api = api.clone();
        Callback::new(move |()| load_list(&api, Resource::Instructors, list, LOAD_ERROR))
    };
    Effect::new(move || reload.run(()));

    let visible = Memo::new(move |_| list.with(|s| filters.with(|f| apply(&s.items, f))));
    let summary = Signal::derive(move || {
        result_summary(visible.with(Vec::len), list.with(|s| s.items.len()), "formateurs")
    });

    let on_new = move |_| editor.update(|e| e.open_create(InstructorDraft::blank()));
    let on_edit = Callback::new(move |record: Instructor| {
        editor.update(|e| e.open_edit(record.id.clone(), InstructorDraft::from_record(&record)));
    });
    let on_delete_request = Callback::new(move |record: Instructor| {
        deletion.update(|d| d.request(record.id.clone(), record.user.full_name()));
    });

    let on_submit = {
        let api = api.clone();
        Callback::new(move |()| {
            submit_editor(&api, Resource::Instructors, editor, InstructorDraft::to_payload, SAVE_ERROR, reload);
        })
    };
    let on_confirm_delete = {
        let api = api.clone();
        Callback::new(move |()| {
            confirm_delete(&api, Resource::Instructors, deletion, list, AfterDelete::Refetch, reload);
        })
    };

    view! {
        <div class="page">
            <header class="page__header">
                <div>
                    <h1>"Gestion des Formateurs"</h1>
                    <p class="page__subtitle">"Gérez vos formateurs et leurs informations"</p>
                </div>
                <button class="btn btn--primary" on:click=on_new>
                    "+ Nouveau Formateur"
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
                    fallback=|| view! { <p class="card__loading">"Chargement des formateurs..."</p> }
                >
                    <Show
                        when=move || !visible.with(Vec::is_empty)
                        fallback=move || {
                            view! {
                                <div class="card__empty">
                                    <h3>"Aucun formateur trouvé"</h3>
                                    <p>
                                        {move || {
                                            if filters.with(FilterSet::is_active) {
                                                "Essayez de modifier vos critères de recherche"
                                            } else {
                                                "Commencez par ajouter votre premier formateur"
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
                                    <th>"Formateur"</th>
                                    <th>"Email"</th>
                                    <th>"Téléphone"</th>
                                    <th class="table__actions">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || visible.get()
                                    key=|i| i.id.clone()
                                    children=move |record| {
                                        view! {
                                            <InstructorRow
                                                record=record
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
                <InstructorEditor editor=editor on_submit=on_submit/>
            </Show>
            <Show when=move || deletion.with(DeleteState::is_open)>
                <ConfirmDialog
                    title="Supprimer le formateur"
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
fn InstructorRow(record: Instructor, on_edit: Callback<Instructor>, on_delete: Callback<Instructor>) -> impl IntoView {
    let avatar = initials(&record.user);
    let name = record.user.full_name();
    let sex = sex_label(&record.user.sexe).to_owned();
    let email = record.user.email.clone();
    let phone = phone_or_dash(&record.user);
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
fn InstructorEditor(editor: RwSignal<EditorState<InstructorDraft>>, on_submit: Callback<()>) -> impl IntoView {
    let field = move |get: fn(&IdentityDraft) -> String| {
        Signal::derive(move || editor.with(|e| e.draft().map(|d| get(&d.identity)).unwrap_or_default()))
    };
    let set = move |apply: fn(&mut IdentityDraft, String)| {
        Callback::new(move |value: String| editor.update(|e| e.update(|d| apply(&mut d.identity, value))))
    };
    let submitting = Signal::derive(move || editor.with(EditorState::is_submitting));
    let is_create = move || editor.with(|e| e.mode().is_some_and(EditorMode::is_create));
    let close = move |_| editor.update(EditorState::close);

    view! {
        <div class="dialog-backdrop" on:click=close>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || editor.with(|e| editor_title(e.mode()))}</h2>
                <p class="dialog__subtitle">
                    {move || {
                        if is_create() {
                            "Remplissez les informations du nouveau formateur"
                        } else {
                            "Modifiez les informations du formateur"
                        }
                    }}
                </p>
                <ErrorBanner message=Signal::derive(move || editor.with(|e| e.error().map(str::to_owned)))/>
                <div class="dialog__grid">
                    <TextField
                        label="Prénom"
                        required=true
                        placeholder="Jean"
                        value=field(|d| d.prenom.clone())
                        on_input=set(|d, v| d.prenom = v)
                        disabled=submitting
                    />
                    <TextField
                        label="Nom"
                        required=true
                        placeholder="Dupont"
                        value=field(|d| d.nom.clone())
                        on_input=set(|d, v| d.nom = v)
                        disabled=submitting
                    />
                </div>
                <TextField
                    label="Email"
                    required=true
                    input_type="email"
                    placeholder="jean.dupont@universite.fr"
                    value=field(|d| d.email.clone())
                    on_input=set(|d, v| d.email = v)
                    disabled=submitting
                />
                <div class="dialog__grid">
                    <TextField
                        label="Téléphone"
                        input_type="tel"
                        placeholder="01 23 45 67 89"
                        value=field(|d| d.telephone.clone())
                        on_input=set(|d, v| d.telephone = v)
                        disabled=submitting
                    />
                    <SelectField
                        label="Sexe"
                        required=true
                        value=field(|d| d.sexe.clone())
                        on_change=set(|d, v| d.sexe = v)
                        options=sex_options()
                        empty_label="Sélectionnez le sexe"
                        disabled=submitting
                    />
                </div>
                <Show when=is_create>
                    <CredentialField
                        value=Signal::derive(move || editor.with(|e| e.draft().map(|d| d.password.clone()).unwrap_or_default()))
                        on_regenerate=Callback::new(move |()| editor.update(|e| e.update(InstructorDraft::regenerate_password)))
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
