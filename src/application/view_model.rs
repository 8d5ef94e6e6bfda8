// src/application/view_model.rs
use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::application::{LiveNotes, NoteRepository, NoteStore};
use crate::domain::{DomainError, Note, NoteColor};
use crate::util::text::is_valid_web_url;

/// Whether saving the draft creates a new note or updates an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingMode {
    #[default]
    Create,
    Update,
}

/// Editing state behind the note screen
pub struct NoteViewModel<S: NoteStore> {
    repository: NoteRepository<S>,
    draft: Option<Note>,
    mode: EditingMode,
    initial_title: String,
}

impl<S: NoteStore> NoteViewModel<S> {
    pub fn new(repository: NoteRepository<S>) -> Self {
        Self {
            repository,
            draft: None,
            mode: EditingMode::Create,
            initial_title: String::new(),
        }
    }

    pub fn repository(&mut self) -> &mut NoteRepository<S> {
        &mut self.repository
    }

    pub fn mode(&self) -> EditingMode {
        self.mode
    }

    pub fn draft(&self) -> Option<&Note> {
        self.draft.as_ref()
    }

    /// Delete is only offered for notes that already exist
    pub fn can_delete(&self) -> bool {
        self.mode == EditingMode::Update && self.draft.is_some()
    }

    pub fn new_note(&mut self) -> &Note {
        debug!("Starting new note");
        self.mode = EditingMode::Create;
        self.initial_title.clear();
        self.draft.insert(Note::draft())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn edit_note(&mut self, id: i64) -> Result<&Note, DomainError> {
        let note = self.repository.get_note(id)?;
        self.mode = EditingMode::Update;
        self.initial_title = note.title.clone();
        Ok(self.draft.insert(note))
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), DomainError> {
        self.draft_mut()?.title = title.to_string();
        Ok(())
    }

    pub fn set_body(&mut self, body: &str) -> Result<(), DomainError> {
        self.draft_mut()?.body = body.to_string();
        Ok(())
    }

    pub fn set_color(&mut self, color: NoteColor) -> Result<(), DomainError> {
        self.draft_mut()?.color = color;
        Ok(())
    }

    /// Store an image reference as handed over by the picker
    pub fn attach_image(&mut self, reference: &str) -> Result<(), DomainError> {
        let draft = self.draft_mut()?;
        if reference.trim().is_empty() {
            return Err(DomainError::ImageLoad("Image reference is empty".to_string()));
        }
        draft.image = Some(reference.to_string());
        Ok(())
    }

    pub fn remove_image(&mut self) -> Result<(), DomainError> {
        self.draft_mut()?.image = None;
        Ok(())
    }

    pub fn attach_link(&mut self, url: &str) -> Result<(), DomainError> {
        let draft = self.draft_mut()?;
        let url = url.trim();
        if url.is_empty() {
            return Err(DomainError::EmptyUrl);
        }
        if !is_valid_web_url(url) {
            return Err(DomainError::InvalidUrl(url.to_string()));
        }
        draft.web_link = Some(url.to_string());
        Ok(())
    }

    pub fn remove_link(&mut self) -> Result<(), DomainError> {
        self.draft_mut()?.web_link = None;
        Ok(())
    }

    /// Validate and persist the draft, then leave the note screen.
    ///
    /// On failure the draft is kept so the user can correct it.
    #[instrument(level = "debug", skip(self))]
    pub fn save(&mut self) -> Result<Note, DomainError> {
        let mut note = self.draft.clone().ok_or(DomainError::NoDraft)?;

        self.check_title(&note)?;
        note.timestamp = Utc::now();

        match self.mode {
            EditingMode::Create => {
                note.id = self.repository.insert_note(&note)?;
                info!(note_id = note.id, "Created note");
            }
            EditingMode::Update => {
                self.repository.update_note(&note)?;
                info!(note_id = note.id, "Updated note");
            }
        }

        self.discard();
        Ok(note)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self) -> Result<i64, DomainError> {
        if !self.can_delete() {
            return Err(DomainError::DeleteUnavailable);
        }
        let id = self.draft.as_ref().map(|n| n.id).ok_or(DomainError::NoDraft)?;
        self.repository.delete_note(id)?;
        info!(note_id = id, "Deleted note");
        self.discard();
        Ok(id)
    }

    /// Drop the draft without saving
    pub fn discard(&mut self) {
        self.draft = None;
        self.mode = EditingMode::Create;
        self.initial_title.clear();
    }

    pub fn all_notes(&mut self) -> Result<LiveNotes, DomainError> {
        self.repository.all_notes()
    }

    pub fn search(&mut self, pattern: &str) -> Result<LiveNotes, DomainError> {
        self.repository.search(pattern)
    }

    fn draft_mut(&mut self) -> Result<&mut Note, DomainError> {
        self.draft.as_mut().ok_or(DomainError::NoDraft)
    }

    fn check_title(&mut self, note: &Note) -> Result<(), DomainError> {
        if note.title.is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        if self.mode == EditingMode::Update && note.title == self.initial_title {
            return Ok(());
        }

        let clash = self
            .repository
            .find_by_title(&note.title)?
            .into_iter()
            .any(|other| other.id != note.id);
        if clash {
            debug!(title = %note.title, "Title already taken");
            return Err(DomainError::DuplicateTitle(note.title.clone()));
        }
        Ok(())
    }
}
