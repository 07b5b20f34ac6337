//! Cached collection behind every list view.
//!
//! DESIGN
//! ======
//! The cache is only ever replaced by a fresh fetch or patched after a
//! confirmed delete. A failed fetch keeps the previous rows on screen and
//! records the error instead.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

/// Records that carry a server-assigned identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// What the list does after a confirmed delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterDelete {
    Refetch,
    RemoveLocally,
}

/// Loaded collection plus fetch status and the view's inline error.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl<T> ListState<T> {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<T>, String>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.error = Some(message),
        }
    }

    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Keyed> ListState<T> {
    /// Drop the record with `id`; returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.key() != id);
        self.items.len() != before
    }

    /// Apply the outcome of deleting `id`; returns whether the caller should
    /// refetch. A failure keeps every row and records `message`.
    pub fn apply_delete(&mut self, result: Result<(), String>, id: &str, after: AfterDelete) -> bool {
        match (result, after) {
            (Ok(()), AfterDelete::Refetch) => true,
            (Ok(()), AfterDelete::RemoveLocally) => {
                self.remove(id);
                false
            }
            (Err(message), _) => {
                self.fail(message);
                false
            }
        }
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }
}

macro_rules! keyed_by_id {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Keyed for $ty {
                fn key(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

keyed_by_id!(
    crate::net::types::Instructor,
    crate::net::types::Student,
    crate::net::types::Cohort,
    crate::net::types::CohortRef,
    crate::net::types::TeachingSpace,
    crate::net::types::Subject,
);
