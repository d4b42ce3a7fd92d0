use api_types::RecordId;
use chrono_tz::Tz;

use crate::{
    dialogs::{Dialogs, Notification},
    entity::Entity,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Idle,
    Submitting,
    Success,
    Error,
}

/// Inline error alert. The message is interpolated as received.
pub(crate) fn alert_html(message: &str) -> String {
    format!("<div class=\"alert alert-error\">{message}</div>")
}

/// Outcome presentation for a form: the inline detail panel plus the modal
/// channel.
#[derive(Debug)]
pub struct ResultRenderer {
    detail: String,
    visible: bool,
    phase: RenderPhase,
}

impl Default for ResultRenderer {
    fn default() -> Self {
        Self {
            detail: String::new(),
            visible: false,
            phase: RenderPhase::Idle,
        }
    }
}

impl ResultRenderer {
    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    pub(crate) fn begin(&mut self) {
        self.phase = RenderPhase::Submitting;
        self.detail.clear();
        self.visible = false;
    }

    pub(crate) fn success(
        &mut self,
        detail: String,
        notification: Notification,
        dialogs: &mut dyn Dialogs,
    ) {
        self.phase = RenderPhase::Success;
        self.detail = detail;
        self.visible = true;
        dialogs.notify(notification);
    }

    pub(crate) fn error(&mut self, message: &str, dialogs: &mut dyn Dialogs) {
        self.phase = RenderPhase::Error;
        self.detail = alert_html(message);
        self.visible = true;
        dialogs.notify(Notification::error(message));
    }

    pub(crate) fn settle(&mut self) {
        self.phase = RenderPhase::Idle;
    }
}

/// The history container of a form.
#[derive(Debug)]
pub struct HistoryTable {
    tz: Tz,
    html: String,
}

impl HistoryTable {
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            html: String::new(),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub(crate) fn loading(&mut self) {
        self.html = "Cargando...".to_string();
    }

    pub(crate) fn render_error(&mut self, message: &str) {
        self.html = alert_html(message);
    }

    /// Renders `records` in the order given. An empty list renders a notice
    /// instead of an empty table.
    pub(crate) fn render<E: Entity>(&mut self, filter_key: &str, records: &[E::Record]) {
        if records.is_empty() {
            self.html = format!("<div class=\"small\">No hay registros para {filter_key}</div>");
            return;
        }

        let mut html = String::from("<table class=\"table\"><thead><tr>");
        for header in E::HISTORY_HEADERS {
            html.push_str(&format!("<th>{header}</th>"));
        }
        html.push_str("<th>Acciones</th></tr></thead><tbody>");

        for record in records {
            html.push_str("<tr>");
            for cell in E::history_cells(record, self.tz) {
                html.push_str(&format!("<td>{cell}</td>"));
            }
            html.push_str(&format!("<td>{}</td></tr>", actions_html(E::id(record))));
        }

        html.push_str("</tbody></table>");
        self.html = html;
    }
}

/// Edit and delete triggers of one row. Both carry the identity only; the
/// edit handler looks the record up in the controller's store.
fn actions_html(id: RecordId) -> String {
    format!(
        "<button class=\"button\" data-action=\"edit\" data-id=\"{id}\">Editar</button>\
         <button class=\"button button-danger\" data-action=\"delete\" data-id=\"{id}\">Eliminar</button>"
    )
}
