//! Form controllers for the credit simulator, the financial worksheet
//! (planilla) and the contact form.
//!
//! The crate is a thin client: every record lives behind the REST API, the
//! controllers only serialize fields, call the API and turn the outcome into
//! markup and notifications on a headless page model.

pub use client::RecordApi;
pub use contact::ContactController;
pub use controller::{EditMode, EditState, FormController};
pub use dialogs::{Dialogs, Notification, NotificationLevel};
pub use entity::{Credito, Entity, Planilla};
pub use error::{ClientError, EditError};
pub use page::{Field, FieldKind, FieldSpec, Form, SubmitButton};
pub use render::{HistoryTable, RenderPhase, ResultRenderer};

pub mod coerce;
pub mod dates;

mod client;
mod contact;
mod controller;
mod dialogs;
mod entity;
mod error;
mod page;
mod render;
mod store;
