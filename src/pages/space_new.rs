//! Teaching-space creation form.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the cohort list and the existing spaces are fetched together;
//! the subject catalogue is derived from the spaces. Subjects typed in the
//! form only live in this page until the space is created. A successful
//! `POST` stores the created space in context and routes to the
//! confirmation view.

#![cfg_attr(not(feature = "hydrate"), allow(unused_variables))]

#[cfg(test)]
#[path = "space_new_test.rs"]
mod space_new_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::form_field::{SelectField, TextAreaField, TextField};
use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::api::Resource;
use crate::net::types::{Cohort, Subject, TeachingSpace};
#[cfg(feature = "hydrate")]
use crate::state::space_form::{CREATE_ERROR, LOAD_ERROR};
use crate::state::space_form::{SpaceForm, SubjectMode};

pub(crate) fn subject_choices(subjects: &[Subject]) -> Vec<(String, String)> {
    subjects.iter().map(|s| (s.id.clone(), s.label())).collect()
}

pub(crate) fn cohort_choices(cohorts: &[Cohort]) -> Vec<(String, String)> {
    cohorts.iter().map(|c| (c.id.clone(), c.nom.clone())).collect()
}

fn load_catalogues(api: &ApiClient, form: RwSignal<SpaceForm>) {
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let (cohorts, spaces) = futures::join!(
                api.list::<Cohort>(Resource::Cohorts),
                api.list::<TeachingSpace>(Resource::TeachingSpaces)
            );
            let result = cohorts.and_then(|c| spaces.map(|s| (c, s))).map_err(|e| {
                log::warn!("space form catalogue load failed: {e}");
                e.user_message(LOAD_ERROR)
            });
            form.update(|f| f.finish_load(result));
        });
    }
}

#[component]
pub fn SpaceNewPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let created = expect_context::<RwSignal<Option<TeachingSpace>>>();
    let form = RwSignal::new(SpaceForm::default());

    {
        let api = api.clone();
        Effect::new(move || load_catalogues(&api, form));
    }

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let mut payload = None;
        form.update(|f| payload = f.submit());
        let Some(payload) = payload else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.create::<_, TeachingSpace>(Resource::TeachingSpaces, &payload).await {
                    Ok(space) => {
                        log::info!("teaching space created: id={}", space.id);
                        created.set(Some(space));
                        form.update(SpaceForm::reset);
                        navigate("/espace/confirmation", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("teaching space create failed: {err}");
                        form.update(|f| f.submit_failed(err.user_message(CREATE_ERROR)));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &api, created);
        }
    });

    let text = move |get: fn(&SpaceForm) -> String| Signal::derive(move || form.with(get));
    let set = move |apply: fn(&mut SpaceForm, String)| {
        Callback::new(move |value: String| form.update(|f| apply(f, value)))
    };
    let submitting = Signal::derive(move || form.with(|f| f.submitting));
    let subjects = Signal::derive(move || form.with(|f| subject_choices(&f.subjects)));
    let cohorts = Signal::derive(move || form.with(|f| cohort_choices(&f.cohorts)));
    let selecting = move || form.with(|f| f.mode == SubjectMode::Select);

    view! {
        <div class="page page--narrow">
            <header class="page__header">
                <div>
                    <h1>"Création d'Espaces Pédagogiques"</h1>
                    <p class="page__subtitle">"Créez vos espaces pédagogiques en temps réel"</p>
                </div>
            </header>

            <Show
                when=move || !form.with(|f| f.loading)
                fallback=|| view! { <p class="card__loading">"Chargement des données..."</p> }
            >
                {move || form.with(|f| f.notice.clone()).map(|notice| view! { <div class="notice">{notice}</div> })}
                <ErrorBanner message=Signal::derive(move || form.with(|f| f.error.clone()))/>

                <section class="card card--form">
                    <TextField
                        label="Nom de l'espace"
                        required=true
                        placeholder="Ex: Algorithmique Avancée - Groupe A"
                        value=text(|f| f.nom.clone())
                        on_input=set(|f, v| f.nom = v)
                        disabled=submitting
                    />

                    <Show
                        when=selecting
                        fallback=move || {
                            view! {
                                <div class="subject-input">
                                    <div class="subject-input__header">
                                        <h4>"Saisir une nouvelle matière"</h4>
                                        <button
                                            class="btn btn--link"
                                            on:click=move |_| form.update(|f| f.set_mode(SubjectMode::Select))
                                        >
                                            "Choisir dans la liste"
                                        </button>
                                    </div>
                                    <div class="dialog__grid">
                                        <TextField
                                            label="Nom de la matière"
                                            required=true
                                            placeholder="Ex: Intelligence Artificielle"
                                            value=text(|f| f.new_subject_nom.clone())
                                            on_input=set(|f, v| f.new_subject_nom = v)
                                        />
                                        <TextField
                                            label="Code"
                                            required=true
                                            placeholder="Ex: IA, WEB, BD..."
                                            value=text(|f| f.new_subject_code.clone())
                                            on_input=set(|f, v| f.new_subject_code = v)
                                        />
                                    </div>
                                    <button
                                        class="btn btn--primary"
                                        on:click=move |_| {
                                            form.update(|f| {
                                                let _ = f.add_local_subject();
                                            });
                                        }
                                    >
                                        "Ajouter la matière"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <div class="subject-select">
                            <SelectField
                                label="Matière"
                                required=true
                                value=text(|f| f.subject_id.clone())
                                on_change=set(|f, v| f.subject_id = v)
                                options=subjects
                                empty_label="Sélectionnez une matière"
                                disabled=submitting
                            />
                            <button
                                class="btn btn--link"
                                on:click=move |_| form.update(|f| f.set_mode(SubjectMode::Input))
                            >
                                "+ Autre matière"
                            </button>
                        </div>
                    </Show>

                    <div class="field-row">
                        <SelectField
                            label="Promotion assignée (optionnel)"
                            value=text(|f| f.promotion_id.clone())
                            on_change=set(|f, v| f.promotion_id = v)
                            options=cohorts
                            empty_label="Aucune promotion (créer un espace vide)"
                            disabled=submitting
                        />
                        <Show when=move || form.with(|f| !f.promotion_id.is_empty())>
                            <button class="btn btn--icon" title="Retirer" on:click=move |_| form.update(|f| f.promotion_id.clear())>
                                "✕"
                            </button>
                        </Show>
                    </div>

                    <TextAreaField
                        label="Description (optionnel)"
                        placeholder="Description de l'espace pédagogique..."
                        rows=4
                        value=text(|f| f.description.clone())
                        on_input=set(|f, v| f.description = v)
                        disabled=submitting
                    />

                    <div class="summary">
                        <h4>"Récapitulatif de la création"</h4>
                        <dl class="details">
                            <dt>"Espace :"</dt>
                            <dd>{move || form.with(SpaceForm::summary_space)}</dd>
                            <dt>"Matière :"</dt>
                            <dd>{move || form.with(SpaceForm::summary_subject)}</dd>
                            <dt>"Promotion :"</dt>
                            <dd>{move || form.with(SpaceForm::summary_cohort)}</dd>
                        </dl>
                    </div>

                    <div class="dialog__actions">
                        <button class="btn" disabled=move || submitting.get() on:click=move |_| form.update(SpaceForm::reset)>
                            "Réinitialiser"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || !form.with(SpaceForm::can_submit)
                            on:click=move |_| submit.run(())
                        >
                            {move || if submitting.get() { "Création en cours..." } else { "Créer l'espace" }}
                        </button>
                    </div>
                </section>
            </Show>
        </div>
    }
}
