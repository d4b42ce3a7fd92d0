use api_types::RecordId;
use chrono_tz::Tz;

use crate::{
    client::RecordApi,
    coerce,
    dialogs::{Dialogs, Notification},
    entity::Entity,
    error::EditError,
    page::{Form, SubmitButton},
    render::{HistoryTable, ResultRenderer},
    store::RecordStore,
};

const SUBMIT_NETWORK_ERROR: &str = "Fallo de red";
const SEARCH_NETWORK_ERROR: &str = "Error de red";
const DELETE_NETWORK_ERROR: &str = "Error de red al intentar eliminar";
const EDIT_LOAD_ERROR: &str = "No se pudo cargar el registro para editar.";

const BUSY_CREATE_LABEL: &str = "Guardando...";
const BUSY_EDIT_LABEL: &str = "Guardando cambios...";

/// Whether the form creates a new record or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Creating,
    Editing(RecordId),
}

/// Edit-state holder of one form. Transitions are logged.
#[derive(Debug, Default)]
pub struct EditMode {
    state: EditState,
}

impl EditMode {
    pub fn current(&self) -> EditState {
        self.state
    }

    pub fn transition(&mut self, next: EditState) {
        if self.state != next {
            tracing::info!(from = ?self.state, to = ?next, "edit state");
        }
        self.state = next;
    }
}

/// Controller of one record form: fields, edit state, result panel and
/// history view, driving the create/update/list/delete cycle of `E`.
#[derive(Debug)]
pub struct FormController<E: Entity> {
    api: RecordApi,
    form: Form,
    submit_button: SubmitButton,
    edit: EditMode,
    result: ResultRenderer,
    history: HistoryTable,
    records: RecordStore<E::Record>,
    active_search: Option<String>,
}

impl<E: Entity> FormController<E> {
    pub fn new(api: RecordApi, tz: Tz) -> Self {
        Self {
            api,
            form: Form::new(E::FIELDS),
            submit_button: SubmitButton::new(E::CREATE_LABEL),
            edit: EditMode::default(),
            result: ResultRenderer::default(),
            history: HistoryTable::new(tz),
            records: RecordStore::default(),
            active_search: None,
        }
    }

    pub fn current_state(&self) -> EditState {
        self.edit.current()
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// User input into a named field. Returns `false` for unknown fields.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.form.set(name, value)
    }

    pub fn submit_button(&self) -> &SubmitButton {
        &self.submit_button
    }

    pub fn result(&self) -> &ResultRenderer {
        &self.result
    }

    pub fn history(&self) -> &HistoryTable {
        &self.history
    }

    /// Records listed by the last search, in display order.
    pub fn records(&self) -> impl Iterator<Item = &E::Record> {
        self.records.records()
    }

    pub fn active_search(&self) -> Option<&str> {
        self.active_search.as_deref()
    }

    fn idle_label(&self) -> &'static str {
        match self.edit.current() {
            EditState::Creating => E::CREATE_LABEL,
            EditState::Editing(_) => E::EDIT_LABEL,
        }
    }

    /// Serializes the form and creates or updates depending on the edit
    /// state. A second submit while one is in flight is ignored.
    pub async fn submit(&mut self, dialogs: &mut dyn Dialogs) {
        if self.submit_button.is_disabled() {
            return;
        }

        let state = self.edit.current();
        self.submit_button.disable(match state {
            EditState::Creating => BUSY_CREATE_LABEL,
            EditState::Editing(_) => BUSY_EDIT_LABEL,
        });
        self.result.begin();

        let body = coerce::serialize(&self.form);
        let outcome = match state {
            EditState::Creating => self.api.create::<E>(&body).await,
            EditState::Editing(id) => self.api.update::<E>(id, &body).await,
        };

        match outcome {
            Ok(record) => {
                self.result.success(
                    E::detail_html(&record),
                    Notification::success(E::SAVED_TITLE, E::SAVED_TEXT),
                    dialogs,
                );
                self.form.reset();
                self.edit.transition(EditState::Creating);
                self.form.focus_first();
            }
            Err(err) => {
                tracing::warn!(entity = E::PATH, "submit failed: {err}");
                let message = err.user_message(E::SUBMIT_ERROR, SUBMIT_NETWORK_ERROR);
                self.result.error(&message, dialogs);
            }
        }

        self.result.settle();
        self.submit_button.enable(self.idle_label());
    }

    /// Loads `record` into the form and binds the form to its identity.
    pub fn enter_edit_mode(&mut self, record: &E::Record) {
        for spec in E::FIELDS {
            let value = E::field_value(record, spec.name).unwrap_or_default();
            self.form.set(spec.name, value);
        }
        self.edit.transition(EditState::Editing(E::id(record)));
        self.submit_button.set_label(E::EDIT_LABEL);
        self.form.focus_first();
    }

    /// Edit trigger of a history row.
    pub fn edit(&mut self, id: RecordId, dialogs: &mut dyn Dialogs) {
        match self.lookup(id).cloned() {
            Ok(record) => self.enter_edit_mode(&record),
            Err(err) => {
                tracing::error!(entity = E::PATH, "cannot load record for editing: {err}");
                dialogs.notify(Notification::error(EDIT_LOAD_ERROR));
            }
        }
    }

    fn lookup(&self, id: RecordId) -> Result<&E::Record, EditError> {
        self.records.get(id).ok_or(EditError::UnknownRecord(id))
    }

    /// Leaves edit mode without saving.
    pub fn cancel_edit(&mut self) {
        self.form.reset();
        self.edit.transition(EditState::Creating);
        if !self.submit_button.is_disabled() {
            self.submit_button.set_label(E::CREATE_LABEL);
        }
        self.form.focus_first();
    }

    /// Lists the records filed under `filter_key`. Blank keys are ignored.
    pub async fn search(&mut self, filter_key: &str) {
        let key = filter_key.trim();
        if key.is_empty() {
            return;
        }
        self.active_search = Some(key.to_string());
        self.history.loading();

        match self.api.list::<E>(key).await {
            Ok(records) => {
                self.history.render::<E>(key, &records);
                self.records
                    .replace(records.into_iter().map(|record| (E::id(&record), record)));
            }
            Err(err) => {
                tracing::warn!(entity = E::PATH, "search failed: {err}");
                self.records.clear();
                self.history
                    .render_error(&err.user_message(E::SEARCH_ERROR, SEARCH_NETWORK_ERROR));
            }
        }
    }

    /// Delete trigger of a history row. Asks for confirmation first and
    /// refreshes the active search on success.
    pub async fn delete(&mut self, id: RecordId, dialogs: &mut dyn Dialogs) {
        if !dialogs.confirm(E::DELETE_CONFIRM) {
            return;
        }

        match self.api.delete::<E>(id).await {
            Ok(_) => {
                dialogs.notify(Notification::success(E::DELETE_DONE, ""));
                if self.edit.current() == EditState::Editing(id) {
                    self.cancel_edit();
                }
                if let Some(key) = self.active_search.clone() {
                    self.search(&key).await;
                }
            }
            Err(err) => {
                tracing::warn!(entity = E::PATH, id, "delete failed: {err}");
                dialogs.notify(Notification::error(
                    &err.user_message(E::DELETE_ERROR, DELETE_NETWORK_ERROR),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_mode_starts_in_creating() {
        assert_eq!(EditMode::default().current(), EditState::Creating);
    }

    #[test]
    fn edit_mode_holds_one_identity() {
        let mut mode = EditMode::default();
        mode.transition(EditState::Editing(3));
        mode.transition(EditState::Editing(5));
        assert_eq!(mode.current(), EditState::Editing(5));
        mode.transition(EditState::Creating);
        assert_eq!(mode.current(), EditState::Creating);
    }
}
