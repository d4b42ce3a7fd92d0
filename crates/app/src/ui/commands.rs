use api_types::RecordId;

use crate::app::Section;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Switch(Section),
    Set { field: String, value: String },
    Submit,
    Search(String),
    Edit(RecordId),
    Delete(RecordId),
    Cancel,
    Show,
    Help,
    Quit,
    Invalid(String),
    None,
}

pub fn parse(line: &str) -> AppAction {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => AppAction::None,
        "credito" => AppAction::Switch(Section::Credito),
        "planilla" => AppAction::Switch(Section::Planilla),
        "contacto" => AppAction::Switch(Section::Contacto),
        "campo" => match rest.split_once(char::is_whitespace) {
            Some((field, value)) => AppAction::Set {
                field: field.to_string(),
                value: value.trim().to_string(),
            },
            None if !rest.is_empty() => AppAction::Set {
                field: rest.to_string(),
                value: String::new(),
            },
            None => AppAction::Invalid("Uso: campo <nombre> [valor]".to_string()),
        },
        "enviar" => AppAction::Submit,
        "buscar" => AppAction::Search(rest.to_string()),
        "editar" => parse_id(rest).map_or_else(invalid_id, AppAction::Edit),
        "eliminar" => parse_id(rest).map_or_else(invalid_id, AppAction::Delete),
        "cancelar" => AppAction::Cancel,
        "ver" => AppAction::Show,
        "ayuda" => AppAction::Help,
        "salir" => AppAction::Quit,
        other => AppAction::Invalid(format!("Comando desconocido: {other}")),
    }
}

fn parse_id(raw: &str) -> Option<RecordId> {
    raw.trim_start_matches('#').parse().ok()
}

fn invalid_id() -> AppAction {
    AppAction::Invalid("Identificador no válido.".to_string())
}
