//! Fetch, save and delete flows shared by the list pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list page runs the same cycle: fetch the collection on mount, submit
//! the editor payload, confirm and issue deletes, then refetch or patch the
//! cached list. These helpers wire the state reducers to [`ApiClient`] calls.
//! Requests only leave the browser; under SSR the state is left loading and
//! the hydrated client performs the fetch.
//!
//! ERROR HANDLING
//! ==============
//! API failures become user-facing strings via [`ApiError::user_message`] and
//! land in the list or editor state. Nothing here retries.

#![cfg_attr(not(feature = "hydrate"), allow(unused_variables))]

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::api::{ApiClient, Resource};
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
use crate::state::editor::{EditorMode, EditorState};
use crate::state::deletion::DeleteState;
use crate::state::list::{AfterDelete, Keyed, ListState};
use crate::state::DELETE_ERROR;

/// Fetch `resource` into `list`, replacing the cached rows on success.
pub(crate) fn load_list<T>(api: &ApiClient, resource: Resource, list: RwSignal<ListState<T>>, context: &'static str)
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    list.update(ListState::begin_load);
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.list::<T>(resource).await.map_err(|e| e.user_message(context));
            if let Err(message) = &result {
                log::warn!("{} load failed: {message}", resource.path());
            }
            list.update(|s| s.finish_load(result));
        });
    }
}

/// Validate the open editor and, when valid, create or update the record.
///
/// On success the editor closes and `on_saved` runs (usually a refetch). On
/// rejection the editor stays open with `context` and the server message.
pub(crate) fn submit_editor<D, P, F>(
    api: &ApiClient,
    resource: Resource,
    editor: RwSignal<EditorState<D>>,
    validate: F,
    context: &'static str,
    on_saved: Callback<()>,
) where
    D: Send + Sync + 'static,
    P: Serialize + 'static,
    F: FnOnce(&D, &EditorMode) -> Result<P, String>,
{
    let mut submission = None;
    editor.update(|state| submission = state.submit(validate));
    let Some((mode, payload)) = submission else {
        return;
    };
    log::debug!("{} submit {mode:?}", resource.path());
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.save(resource, mode.id(), &payload).await {
                Ok(()) => {
                    editor.update(EditorState::submit_succeeded);
                    on_saved.run(());
                }
                Err(err) => {
                    log::warn!("{} save failed: {err}", resource.path());
                    editor.update(|s| s.submit_failed(err.user_message(context)));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (payload, on_saved);
        editor.update(|s| s.submit_failed(context.to_owned()));
    }
}

/// Issue the confirmed delete, if any.
///
/// A failure leaves the list untouched and shows `DELETE_ERROR` with the
/// server detail.
pub(crate) fn confirm_delete<T>(
    api: &ApiClient,
    resource: Resource,
    deletion: RwSignal<DeleteState>,
    list: RwSignal<ListState<T>>,
    after: AfterDelete,
    refetch: Callback<()>,
) where
    T: Keyed + Send + Sync + 'static,
{
    let mut target = None;
    deletion.update(|state| target = state.confirm());
    let Some(id) = target else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.delete(resource, &id).await;
            deletion.update(DeleteState::finish);
            apply_delete_result(result, &id, list, after, refetch);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = refetch;
        deletion.update(DeleteState::finish);
        list.update(|s| {
            s.apply_delete(Err(DELETE_ERROR.to_owned()), &id, after);
        });
    }
}

#[cfg(feature = "hydrate")]
fn apply_delete_result<T: Keyed + Send + Sync + 'static>(
    result: Result<(), ApiError>,
    id: &str,
    list: RwSignal<ListState<T>>,
    after: AfterDelete,
    refetch: Callback<()>,
) {
    let result = result.map_err(|err| {
        log::warn!("delete {id} failed: {err}");
        err.user_message(DELETE_ERROR)
    });
    let mut reload = false;
    list.update(|s| reload = s.apply_delete(result, id, after));
    if reload {
        refetch.run(());
    }
}
