//! Create/edit modal state machine.
//!
//! DESIGN
//! ======
//! `Closed -> Open(Create | Edit) -> Submitting -> Closed` on success, or back
//! to `Open` with an error on validation or API failure. Editing works on a
//! cloned draft, so the listed record is untouched until the backend accepts
//! the change and the list is refetched.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// Whether the modal creates a record or edits the record with `id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit { id: String },
}

impl EditorMode {
    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create)
    }

    /// Record id for updates, `None` for creation.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Edit { id } => Some(id),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorPhase {
    #[default]
    Editing,
    Submitting,
}

/// An open modal.
#[derive(Clone, Debug, PartialEq)]
pub struct Editor<D> {
    pub mode: EditorMode,
    pub draft: D,
    pub phase: EditorPhase,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditorState<D> {
    #[default]
    Closed,
    Open(Editor<D>),
}

impl<D> EditorState<D> {
    pub fn open_create(&mut self, draft: D) {
        *self = Self::Open(Editor { mode: EditorMode::Create, draft, phase: EditorPhase::Editing, error: None });
    }

    pub fn open_edit(&mut self, id: impl Into<String>, draft: D) {
        *self = Self::Open(Editor {
            mode: EditorMode::Edit { id: id.into() },
            draft,
            phase: EditorPhase::Editing,
            error: None,
        });
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Open(Editor { phase: EditorPhase::Submitting, .. }))
    }

    pub fn editor(&self) -> Option<&Editor<D>> {
        match self {
            Self::Open(editor) => Some(editor),
            Self::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&D> {
        self.editor().map(|e| &e.draft)
    }

    pub fn mode(&self) -> Option<&EditorMode> {
        self.editor().map(|e| &e.mode)
    }

    pub fn error(&self) -> Option<&str> {
        self.editor().and_then(|e| e.error.as_deref())
    }

    /// Apply a field edit to the draft. Ignored while closed or submitting.
    pub fn update(&mut self, edit: impl FnOnce(&mut D)) {
        if let Self::Open(editor) = self
            && editor.phase == EditorPhase::Editing
        {
            edit(&mut editor.draft);
        }
    }

    /// Validate the draft and move to `Submitting`.
    ///
    /// Returns the mode and payload to send, or `None` when the modal is
    /// closed, a submission is already in flight, or validation failed (the
    /// message is then shown in the modal and nothing is sent).
    pub fn submit<P, F>(&mut self, validate: F) -> Option<(EditorMode, P)>
    where
        F: FnOnce(&D, &EditorMode) -> Result<P, String>,
    {
        let Self::Open(editor) = self else {
            return None;
        };
        if editor.phase == EditorPhase::Submitting {
            return None;
        }
        match validate(&editor.draft, &editor.mode) {
            Ok(payload) => {
                editor.phase = EditorPhase::Submitting;
                editor.error = None;
                Some((editor.mode.clone(), payload))
            }
            Err(message) => {
                editor.error = Some(message);
                None
            }
        }
    }

    /// The backend rejected the submission; stay open with its message.
    pub fn submit_failed(&mut self, message: String) {
        if let Self::Open(editor) = self {
            editor.phase = EditorPhase::Editing;
            editor.error = Some(message);
        }
    }

    /// The backend accepted the submission.
    pub fn submit_succeeded(&mut self) {
        self.close();
    }
}
