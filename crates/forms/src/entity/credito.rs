use api_types::{RecordId, credito::CreditSimulation};
use chrono_tz::Tz;

use super::{Entity, or_empty};
use crate::{coerce::Coercion, dates, page::FieldSpec};

/// Credit simulation requests (`/api/credito`).
#[derive(Debug, Clone, Copy)]
pub struct Credito;

/// Shown in place of a missing approved value.
const NOT_APPROVED: &str = "N/A";

impl Entity for Credito {
    type Record = CreditSimulation;

    const PATH: &'static str = "credito";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("nombres"),
        FieldSpec::text("apellidos"),
        FieldSpec::text("documento_identidad"),
        FieldSpec::numeric("edad", Coercion::Integer),
        FieldSpec::text("fecha_nacimiento"),
        FieldSpec::numeric("ingresos_mensuales", Coercion::Decimal),
        FieldSpec::numeric("gastos_mensuales", Coercion::Decimal),
        FieldSpec::numeric("valor_patrimonio", Coercion::Decimal),
        FieldSpec::text("dimension_terreno"),
        FieldSpec::text("destinacion_credito"),
        FieldSpec::numeric("numero_empleados", Coercion::IntegerOrZero),
    ];

    const CREATE_LABEL: &'static str = "Calcular crédito";

    const SAVED_TITLE: &'static str = "¡Simulación de crédito registrada!";
    const SAVED_TEXT: &'static str =
        "La simulación de solicitud de crédito se ha guardado exitosamente.";
    const SUBMIT_ERROR: &'static str = "Error en la simulación";
    const SEARCH_ERROR: &'static str = "Error al buscar";

    const DELETE_CONFIRM: &'static str = "¿Seguro que quieres eliminar este crédito?";
    const DELETE_DONE: &'static str = "Crédito eliminado correctamente";

    const HISTORY_HEADERS: &'static [&'static str] = &["Fecha", "Documento", "Valor aprobado"];

    fn id(record: &CreditSimulation) -> RecordId {
        record.id
    }

    fn field_value(record: &CreditSimulation, name: &str) -> Option<String> {
        match name {
            "nombres" => record.nombres.clone(),
            "apellidos" => record.apellidos.clone(),
            "documento_identidad" => record.documento_identidad.clone(),
            "edad" => record.edad.as_ref().map(ToString::to_string),
            "fecha_nacimiento" => record.fecha_nacimiento.as_deref().map(dates::input_date),
            "ingresos_mensuales" => record.ingresos_mensuales.as_ref().map(ToString::to_string),
            "gastos_mensuales" => record.gastos_mensuales.as_ref().map(ToString::to_string),
            "valor_patrimonio" => record.valor_patrimonio.as_ref().map(ToString::to_string),
            "dimension_terreno" => record.dimension_terreno.clone(),
            "destinacion_credito" => record.destinacion_credito.clone(),
            "numero_empleados" => record.numero_empleados.as_ref().map(ToString::to_string),
            _ => None,
        }
    }

    fn detail_html(record: &CreditSimulation) -> String {
        let approved = record
            .valor_aprobado
            .as_ref()
            .map_or_else(|| NOT_APPROVED.to_string(), ToString::to_string);
        format!(
            "<p>Señor/a {} {}, su registro se ha guardado con éxito.</p>\
             <p>Su valor aprobado de crédito es aproximadamente: {approved}</p>",
            or_empty(record.nombres.as_ref()),
            or_empty(record.apellidos.as_ref()),
        )
    }

    fn history_cells(record: &CreditSimulation, tz: Tz) -> Vec<String> {
        vec![
            record
                .created_at
                .as_deref()
                .map(|raw| dates::display_date(raw, tz))
                .unwrap_or_default(),
            or_empty(record.documento_identidad.as_ref()),
            or_empty(record.valor_aprobado.as_ref()),
        ]
    }
}
