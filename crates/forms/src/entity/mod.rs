use std::fmt;

use api_types::RecordId;
use chrono_tz::Tz;
use serde::de::DeserializeOwned;

use crate::page::FieldSpec;

pub use credito::Credito;
pub use planilla::Planilla;

mod credito;
mod planilla;

/// A record type with history and edit support.
///
/// Everything the generic submit/search/edit/delete cycle needs to know about
/// one entity: its endpoint, its form fields, its markup and its messages.
pub trait Entity {
    type Record: DeserializeOwned + Clone + fmt::Debug;

    /// Path segment under `/api/`.
    const PATH: &'static str;
    /// Form fields, first one receives focus.
    const FIELDS: &'static [FieldSpec];

    const CREATE_LABEL: &'static str;
    const EDIT_LABEL: &'static str = "Guardar cambios";

    const SAVED_TITLE: &'static str;
    const SAVED_TEXT: &'static str;
    const SUBMIT_ERROR: &'static str;
    const SEARCH_ERROR: &'static str;

    const DELETE_CONFIRM: &'static str;
    const DELETE_DONE: &'static str;
    const DELETE_ERROR: &'static str = "Error al eliminar";

    /// Column headers of the history table, actions column excluded.
    const HISTORY_HEADERS: &'static [&'static str];

    fn id(record: &Self::Record) -> RecordId;

    /// Value of form field `name` for `record`, `None` when absent.
    fn field_value(record: &Self::Record, name: &str) -> Option<String>;

    /// Inner markup of the detail panel after a successful save.
    fn detail_html(record: &Self::Record) -> String;

    /// Cells of one history row, matching [`Entity::HISTORY_HEADERS`].
    fn history_cells(record: &Self::Record, tz: Tz) -> Vec<String>;
}

/// Absent server values render as empty text.
fn or_empty(value: Option<&impl fmt::Display>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}
