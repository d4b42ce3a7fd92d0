use api_types::{RecordId, planilla::Planilla as PlanillaRecord};
use chrono_tz::Tz;

use super::{Entity, or_empty};
use crate::{coerce::Coercion, dates, page::FieldSpec};

/// Financial worksheets (`/api/planilla`).
#[derive(Debug, Clone, Copy)]
pub struct Planilla;

impl Entity for Planilla {
    type Record = PlanillaRecord;

    const PATH: &'static str = "planilla";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("cedula"),
        FieldSpec::numeric("ingresos", Coercion::Decimal),
        FieldSpec::numeric("gastos", Coercion::Decimal),
        FieldSpec::numeric("inversiones", Coercion::Decimal),
        FieldSpec::text_area("observaciones"),
    ];

    const CREATE_LABEL: &'static str = "Guardar registro";

    const SAVED_TITLE: &'static str = "¡Registro guardado!";
    const SAVED_TEXT: &'static str = "La planilla se ha guardado correctamente.";
    const SUBMIT_ERROR: &'static str = "Error creando/actualizando planilla";
    const SEARCH_ERROR: &'static str = "Error";

    const DELETE_CONFIRM: &'static str = "¿Seguro que quieres eliminar esta planilla?";
    const DELETE_DONE: &'static str = "Planilla eliminada correctamente";

    const HISTORY_HEADERS: &'static [&'static str] =
        &["Fecha", "Ingresos", "Gastos", "Inversiones", "Utilidad"];

    fn id(record: &PlanillaRecord) -> RecordId {
        record.id
    }

    fn field_value(record: &PlanillaRecord, name: &str) -> Option<String> {
        match name {
            "cedula" => record.cedula.clone(),
            "ingresos" => record.ingresos.as_ref().map(ToString::to_string),
            "gastos" => record.gastos.as_ref().map(ToString::to_string),
            "inversiones" => record.inversiones.as_ref().map(ToString::to_string),
            "observaciones" => record.observaciones.clone(),
            _ => None,
        }
    }

    // Server values are interpolated as received, without escaping.
    fn detail_html(record: &PlanillaRecord) -> String {
        format!(
            "<p><strong>Cédula:</strong> {}</p>\
             <p><strong>Ingresos:</strong> {}</p>\
             <p><strong>Gastos:</strong> {}</p>\
             <p><strong>Inversiones:</strong> {}</p>\
             <p><strong>Utilidad:</strong> {}</p>\
             <p><strong>Observaciones:</strong> {}</p>",
            or_empty(record.cedula.as_ref()),
            or_empty(record.ingresos.as_ref()),
            or_empty(record.gastos.as_ref()),
            or_empty(record.inversiones.as_ref()),
            or_empty(record.utilidad.as_ref()),
            or_empty(record.observaciones.as_ref()),
        )
    }

    fn history_cells(record: &PlanillaRecord, tz: Tz) -> Vec<String> {
        vec![
            record
                .fecha
                .as_deref()
                .map(|raw| dates::display_date(raw, tz))
                .unwrap_or_default(),
            or_empty(record.ingresos.as_ref()),
            or_empty(record.gastos.as_ref()),
            or_empty(record.inversiones.as_ref()),
            or_empty(record.utilidad.as_ref()),
        ]
    }
}
