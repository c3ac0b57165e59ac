//! The admin view of one resource.
//!
//! [`ViewState`] is changed only through [`ViewState::apply`], which returns
//! the side effects to perform as [`Command`]s. [`AdminView`] runs those
//! commands against a [`ResourceApi`] and feeds each completion back in as
//! another [`Action`]. A mutation therefore always completes before the
//! refresh it triggers is issued.

use std::collections::VecDeque;
use std::sync::Arc;

use client::ResourceApi;
use common::{Attachment, Payload, Record, RecordId, ResourceDescriptor};
use tracing::{debug, info, warn};

use crate::capability::{Confirm, ObjectUrls};
use crate::error::AdminError;
use crate::form_state::{FormState, SubmitMode, SubmitRequest};
use crate::list_state::ListState;
use crate::notice::Notice;
use crate::row::{self, Row};

/// Re-entrancy guard of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A create or update is in flight.
    Submitting,
    /// A delete or toggle is awaiting confirmation or in flight.
    Mutating,
}

/// Input to the view: user intents and completions of earlier commands.
#[derive(Debug, Clone)]
pub enum Action<R> {
    Mount,
    Refresh,
    SetField { name: String, value: String },
    AddListItem { name: String, value: String },
    RemoveListItem { name: String, index: usize },
    Attach(Attachment),
    BeginEdit(RecordId),
    Cancel,
    Submit,
    Delete(RecordId),
    Toggle(RecordId),
    DismissNotice,

    Loaded(Result<Vec<R>, AdminError>),
    PreviewReady(String),
    DeleteConfirmed(RecordId),
    DeleteDeclined(RecordId),
    Submitted {
        mode: SubmitMode,
        /// `Ok(None)`: accepted, but the server did not echo the record.
        result: Result<Option<R>, AdminError>,
    },
    Deleted {
        id: RecordId,
        result: Result<(), AdminError>,
    },
    Toggled {
        id: RecordId,
        result: Result<(), AdminError>,
    },
}

impl<R> Action<R> {
    pub fn set_field(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SetField {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn add_list_item(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::AddListItem {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn remove_list_item(name: impl Into<String>, index: usize) -> Self {
        Self::RemoveListItem {
            name: name.into(),
            index,
        }
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone)]
pub enum Command<R> {
    Load,
    Create {
        payload: Payload,
        file: Option<Attachment>,
    },
    Update {
        id: RecordId,
        payload: Payload,
        file: Option<Attachment>,
    },
    ConfirmDelete {
        id: RecordId,
        prompt: &'static str,
    },
    Delete(RecordId),
    Toggle(R),
    /// Create a preview URL for the file currently attached to the form.
    CreatePreview,
    RevokePreview(String),
}

/// Everything one resource view shows.
#[derive(Debug, Clone)]
pub struct ViewState<R> {
    phase: Phase,
    list: ListState<R>,
    form: FormState,
    notice: Option<Notice>,
    preview: Option<String>,
}

impl<R: Record> Default for ViewState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> ViewState<R> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            list: ListState::new(),
            form: FormState::new(R::descriptor()),
            notice: None,
            preview: None,
        }
    }

    pub fn descriptor(&self) -> &'static ResourceDescriptor {
        R::descriptor()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn list(&self) -> &ListState<R> {
        &self.list
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn rows(&self) -> Vec<Row> {
        self.list.records().iter().map(row::render).collect()
    }

    /// Counter line, e.g. "Total Banners: 3".
    pub fn summary(&self) -> String {
        format!("{}: {}", self.descriptor().total_label, self.list.len())
    }

    /// Apply one action and return the commands it requires, in order.
    pub fn apply(&mut self, action: Action<R>) -> Vec<Command<R>> {
        let descriptor = self.descriptor();
        let idle = self.phase == Phase::Idle;

        match action {
            Action::Mount | Action::Refresh => vec![Command::Load],

            Action::DismissNotice => {
                self.notice = None;
                vec![]
            }

            Action::SetField { .. }
            | Action::AddListItem { .. }
            | Action::RemoveListItem { .. }
            | Action::Attach(_)
            | Action::BeginEdit(_)
            | Action::Cancel
            | Action::Submit
            | Action::Delete(_)
            | Action::Toggle(_)
                if !idle =>
            {
                debug!(resource = %descriptor.kind, phase = ?self.phase, "Ignoring action while busy");
                vec![]
            }

            Action::SetField { name, value } => {
                if let Err(e) = self.form.set_field(&name, value) {
                    self.notice = Some(Notice::error(e.to_string()));
                }
                vec![]
            }

            Action::AddListItem { name, value } => {
                if let Err(e) = self.form.add_list_item(&name, &value) {
                    self.notice = Some(Notice::error(e.to_string()));
                }
                vec![]
            }

            Action::RemoveListItem { name, index } => {
                if let Err(e) = self.form.remove_list_item(&name, index) {
                    self.notice = Some(Notice::error(e.to_string()));
                }
                vec![]
            }

            Action::Attach(file) => {
                self.form.attach(file);
                let mut commands = self.revoke_preview();
                commands.push(Command::CreatePreview);
                commands
            }

            Action::BeginEdit(id) => {
                let Some(record) = self.list.get(&id).cloned() else {
                    self.notice = Some(self.not_found(&id));
                    return vec![];
                };
                match self.form.load_for_edit(&record) {
                    Ok(()) => self.revoke_preview(),
                    Err(e) => {
                        self.notice = Some(Notice::error(e.to_string()));
                        vec![]
                    }
                }
            }

            Action::Cancel => {
                self.form.reset();
                self.revoke_preview()
            }

            Action::Submit => match self.form.validate() {
                Ok(SubmitRequest {
                    mode,
                    payload,
                    file,
                }) => {
                    self.phase = Phase::Submitting;
                    self.notice = None;
                    vec![match mode {
                        SubmitMode::Create => Command::Create { payload, file },
                        SubmitMode::Update(id) => Command::Update { id, payload, file },
                    }]
                }
                Err(e) => {
                    self.notice = Some(Notice::error(e.to_string()));
                    vec![]
                }
            },

            Action::Delete(id) => {
                self.phase = Phase::Mutating;
                self.notice = None;
                vec![Command::ConfirmDelete {
                    id,
                    prompt: descriptor.messages.confirm_delete,
                }]
            }

            Action::Toggle(id) => {
                if !descriptor.has_toggle() {
                    self.notice = Some(Notice::error(format!(
                        "{} records cannot be toggled",
                        descriptor.kind
                    )));
                    return vec![];
                }
                let Some(record) = self.list.get(&id).cloned() else {
                    self.notice = Some(self.not_found(&id));
                    return vec![];
                };
                self.phase = Phase::Mutating;
                self.notice = None;
                vec![Command::Toggle(record)]
            }

            Action::Loaded(Ok(records)) => {
                self.list.replace(records);
                vec![]
            }

            Action::Loaded(Err(e)) => {
                warn!(
                    resource = %descriptor.kind,
                    error = %e,
                    "Refresh failed, keeping stale list"
                );
                let prefix = format!("Failed to load {}", descriptor.kind);
                self.notice = Some(Notice::failure(&prefix, e));
                vec![]
            }

            Action::PreviewReady(url) => match self.preview.replace(url) {
                Some(stale) => vec![Command::RevokePreview(stale)],
                None => vec![],
            },

            Action::DeleteConfirmed(id) => vec![Command::Delete(id)],

            Action::DeleteDeclined(_) => {
                self.phase = Phase::Idle;
                vec![]
            }

            Action::Submitted { mode, result } => {
                self.phase = Phase::Idle;
                let messages = &descriptor.messages;
                match result {
                    Ok(_) => {
                        self.notice = Some(Notice::success(match mode {
                            SubmitMode::Create => messages.created,
                            SubmitMode::Update(_) => messages.updated,
                        }));
                        self.form.reset();
                        let mut commands = self.revoke_preview();
                        commands.push(Command::Load);
                        commands
                    }
                    Err(e) => {
                        let prefix = match mode {
                            SubmitMode::Create => messages.create_failed,
                            SubmitMode::Update(_) => messages.update_failed,
                        };
                        self.notice = Some(Notice::failure(prefix, e));
                        vec![]
                    }
                }
            }

            Action::Deleted { result, .. } => {
                self.phase = Phase::Idle;
                self.notice = Some(match result {
                    Ok(()) => Notice::success(descriptor.messages.deleted),
                    Err(e) => Notice::failure(descriptor.messages.delete_failed, e),
                });
                vec![Command::Load]
            }

            Action::Toggled { result, .. } => {
                self.phase = Phase::Idle;
                if let Err(e) = result {
                    self.notice = Some(Notice::failure(descriptor.messages.toggle_failed, e));
                }
                vec![Command::Load]
            }
        }
    }

    fn revoke_preview(&mut self) -> Vec<Command<R>> {
        self.preview
            .take()
            .map(Command::RevokePreview)
            .into_iter()
            .collect()
    }

    fn not_found(&self, id: &RecordId) -> Notice {
        Notice::error(format!("No {} with id {id}", self.descriptor().singular))
    }
}

/// Drives a [`ViewState`] against the backend.
pub struct AdminView<R, A> {
    api: A,
    state: ViewState<R>,
    confirm: Arc<dyn Confirm>,
    urls: Arc<dyn ObjectUrls>,
}

impl<R, A> AdminView<R, A>
where
    R: Record,
    A: ResourceApi<R>,
{
    pub fn new(api: A, confirm: Arc<dyn Confirm>, urls: Arc<dyn ObjectUrls>) -> Self {
        Self {
            api,
            state: ViewState::new(),
            confirm,
            urls,
        }
    }

    pub fn state(&self) -> &ViewState<R> {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn mount(&mut self) {
        self.dispatch(Action::Mount).await;
    }

    /// Apply an action and run everything it leads to.
    pub async fn dispatch(&mut self, action: Action<R>) {
        let commands = self.apply(action);
        self.run(commands).await;
    }

    /// Apply an action without running its commands.
    pub fn apply(&mut self, action: Action<R>) -> Vec<Command<R>> {
        self.state.apply(action)
    }

    /// Run commands in order, applying each completion before moving on.
    pub async fn run(&mut self, commands: Vec<Command<R>>) {
        let mut queue = VecDeque::from(commands);
        while let Some(command) = queue.pop_front() {
            if let Some(done) = self.execute(command).await {
                queue.extend(self.state.apply(done));
            }
        }
    }

    async fn execute(&mut self, command: Command<R>) -> Option<Action<R>> {
        let kind = R::descriptor().kind;

        match command {
            Command::Load => Some(Action::Loaded(
                self.api.list().await.map_err(AdminError::from),
            )),

            Command::Create { payload, file } => {
                let result = self
                    .api
                    .create(&payload, file.as_ref())
                    .await
                    .map_err(AdminError::from);
                match &result {
                    Ok(Some(record)) => info!(resource = %kind, id = %record.id(), "Record created"),
                    Ok(None) => info!(resource = %kind, "Record created"),
                    Err(_) => {}
                }
                Some(Action::Submitted {
                    mode: SubmitMode::Create,
                    result,
                })
            }

            Command::Update { id, payload, file } => {
                let result = self
                    .api
                    .update(&id, &payload, file.as_ref())
                    .await
                    .map_err(AdminError::from);
                if result.is_ok() {
                    info!(resource = %kind, id = %id, "Record updated");
                }
                Some(Action::Submitted {
                    mode: SubmitMode::Update(id),
                    result,
                })
            }

            Command::ConfirmDelete { id, prompt } => {
                if self.confirm.confirm(prompt) {
                    Some(Action::DeleteConfirmed(id))
                } else {
                    debug!(resource = %kind, id = %id, "Delete declined");
                    Some(Action::DeleteDeclined(id))
                }
            }

            Command::Delete(id) => {
                let result = self.api.delete(&id).await.map_err(AdminError::from);
                if result.is_ok() {
                    info!(resource = %kind, id = %id, "Record deleted");
                }
                Some(Action::Deleted { id, result })
            }

            Command::Toggle(record) => {
                let id = record.id().clone();
                let result = self.api.toggle(&record).await.map_err(AdminError::from);
                if result.is_ok() {
                    info!(resource = %kind, id = %id, "Visibility toggled");
                }
                Some(Action::Toggled { id, result })
            }

            Command::CreatePreview => {
                let file = self.state.form().file()?;
                Some(Action::PreviewReady(self.urls.create(file)))
            }

            Command::RevokePreview(url) => {
                self.urls.revoke(&url);
                None
            }
        }
    }
}
