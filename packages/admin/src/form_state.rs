use common::{Attachment, Draft, FieldValue, Payload, Record, RecordId, ResourceDescriptor};

use crate::error::{AdminError, FormError};

/// Whether a submit creates a new record or updates an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update(RecordId),
}

/// A validated submit, ready to hand to the client.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    pub mode: SubmitMode,
    pub payload: Payload,
    pub file: Option<Attachment>,
}

/// The create/edit form of one resource view.
#[derive(Debug, Clone)]
pub struct FormState {
    draft: Draft,
    file: Option<Attachment>,
    editing: Option<RecordId>,
}

impl FormState {
    pub fn new(descriptor: &'static ResourceDescriptor) -> Self {
        Self {
            draft: Draft::new(descriptor),
            file: None,
            editing: None,
        }
    }

    pub fn descriptor(&self) -> &'static ResourceDescriptor {
        self.draft.descriptor()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn file(&self) -> Option<&Attachment> {
        self.file.as_ref()
    }

    pub fn editing(&self) -> Option<&RecordId> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        Ok(self.draft.set_text(name, value)?)
    }

    /// Append to a list field. Returns `false` when the trimmed input is blank.
    pub fn add_list_item(&mut self, name: &str, value: &str) -> Result<bool, FormError> {
        Ok(self.draft.push_item(name, value)?)
    }

    pub fn remove_list_item(&mut self, name: &str, index: usize) -> Result<(), FormError> {
        Ok(self.draft.remove_item(name, index)?)
    }

    /// Set the pending file, returning the one it replaces.
    pub fn attach(&mut self, file: Attachment) -> Option<Attachment> {
        self.file.replace(file)
    }

    /// Fill the draft from an existing record and switch to update mode.
    pub fn load_for_edit<R: Record>(&mut self, record: &R) -> Result<(), FormError> {
        let descriptor = self.descriptor();
        if !descriptor.has_edit {
            return Err(FormError::NotEditable {
                resource: descriptor.kind,
            });
        }

        let mut draft = Draft::new(descriptor);
        for spec in descriptor.fields {
            if let Some(value) = record.field(spec.name) {
                draft.set(spec.name, value)?;
            }
        }
        self.draft = draft;
        self.file = None;
        self.editing = Some(record.id().clone());
        Ok(())
    }

    /// Clear the draft, the file and the edit target.
    pub fn reset(&mut self) {
        *self = Self::new(self.descriptor());
    }

    /// Check required fields and build the request. The image is required
    /// only when creating.
    pub fn validate(&self) -> Result<SubmitRequest, AdminError> {
        let descriptor = self.descriptor();

        let missing = self.draft.missing_required();
        if !missing.is_empty() {
            return Err(AdminError::Validation(format!(
                "Please fill in: {}",
                missing.join(", ")
            )));
        }

        let mode = match &self.editing {
            Some(id) => SubmitMode::Update(id.clone()),
            None => SubmitMode::Create,
        };
        if mode == SubmitMode::Create && self.file.is_none() {
            return Err(AdminError::Validation(
                descriptor.messages.image_missing.to_string(),
            ));
        }

        Ok(SubmitRequest {
            mode,
            payload: self.draft.to_payload(),
            file: self.file.clone(),
        })
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.draft.get(name)
    }
}
