//! Delete confirmation flow shared by every list view.
//!
//! `request` opens the confirm dialog, `confirm` hands back the id to delete
//! and marks the call in flight, `finish` closes the dialog whatever the
//! outcome. Cancelling never touches the collection.

#[cfg(test)]
#[path = "deletion_test.rs"]
mod deletion_test;

/// Record awaiting the user's confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteState {
    pub pending: Option<PendingDelete>,
    pub in_flight: bool,
}

impl DeleteState {
    pub fn request(&mut self, id: impl Into<String>, label: impl Into<String>) {
        if self.in_flight {
            return;
        }
        self.pending = Some(PendingDelete { id: id.into(), label: label.into() });
    }

    pub fn cancel(&mut self) {
        if !self.in_flight {
            self.pending = None;
        }
    }

    /// Id to delete, or `None` when nothing is pending or a delete is already running.
    pub fn confirm(&mut self) -> Option<String> {
        if self.in_flight {
            return None;
        }
        let id = self.pending.as_ref()?.id.clone();
        self.in_flight = true;
        Some(id)
    }

    pub fn finish(&mut self) {
        self.pending = None;
        self.in_flight = false;
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }
}
