#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use forms::{Dialogs, Notification, RecordApi};
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// A request as seen by the fake API.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: Method,
    pub uri: String,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
struct Tables {
    seen: Vec<Seen>,
    rows: Vec<(String, Value)>,
    next_id: i64,
    next_answer: Option<Canned>,
}

/// Answer given to the next request instead of handling it.
#[derive(Debug)]
enum Canned {
    Reject(StatusCode, Option<String>),
    /// A 200 whose body is not JSON: the call cannot complete.
    Garbled,
}

/// In-process stand-in for the REST API, with the server-side computations
/// of the real one.
#[derive(Debug, Clone, Default)]
pub struct FakeApi {
    tables: Arc<Mutex<Tables>>,
}

impl FakeApi {
    pub async fn spawn() -> (Self, String) {
        let api = Self::default();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(api.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (api, format!("http://{addr}"))
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.tables().seen.clone()
    }

    /// The next request is answered with `status`. Without a message the
    /// body is not JSON.
    pub fn reject_next(&self, status: StatusCode, message: Option<&str>) {
        self.tables().next_answer = Some(Canned::Reject(status, message.map(str::to_string)));
    }

    /// The next request gets an answer the client cannot decode.
    pub fn garble_next(&self) {
        self.tables().next_answer = Some(Canned::Garbled);
    }

    /// Stores a row without going through HTTP. Returns its identity.
    pub fn seed(&self, entity: &str, fields: Value) -> i64 {
        let mut tables = self.tables();
        tables.next_id += 1;
        let id = tables.next_id;
        let mut row = fields.as_object().cloned().unwrap_or_default();
        row.insert("id".to_string(), json!(id));
        complete(entity, &mut row);
        tables.rows.push((entity.to_string(), Value::Object(row)));
        id
    }
}

/// Base URL of a port nobody listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn record_api(base_url: &str) -> RecordApi {
    RecordApi::new(base_url).unwrap()
}

/// Dialogs that answer every confirmation with `answer` and keep everything
/// shown to the user.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    pub answer: bool,
    pub confirmations: Vec<String>,
    pub notifications: Vec<Notification>,
}

impl ScriptedDialogs {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            ..Self::default()
        }
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl Dialogs for ScriptedDialogs {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answer
    }
}

fn router(api: FakeApi) -> Router {
    Router::new()
        .route("/api/{entity}", get(list).post(create))
        .route("/api/{entity}/{id}", put(update).delete(remove))
        .with_state(api)
}

const CREDITO_REQUIRED: &[&str] = &[
    "nombres",
    "apellidos",
    "documento_identidad",
    "edad",
    "fecha_nacimiento",
    "ingresos_mensuales",
    "gastos_mensuales",
    "valor_patrimonio",
    "dimension_terreno",
    "destinacion_credito",
    "numero_empleados",
];
const PLANILLA_REQUIRED: &[&str] = &["cedula", "ingresos", "gastos", "inversiones"];
const CONTACTO_REQUIRED: &[&str] = &["nombres", "correo", "mensaje"];

fn number(row: &Map<String, Value>, key: &str) -> f64 {
    match row.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Server-side fields: approved value, utility and timestamps.
fn complete(entity: &str, row: &mut Map<String, Value>) {
    match entity {
        "credito" => {
            let capacity =
                (number(row, "ingresos_mensuales") - number(row, "gastos_mensuales")).max(0.0);
            let approved = capacity * 6.0 + number(row, "valor_patrimonio") * 0.10;
            let approved = (approved * 100.0).round() / 100.0;
            row.insert("valor_aprobado".to_string(), json!(approved));
            row.entry("created_at")
                .or_insert_with(|| json!("2024-05-10T12:00:00"));
        }
        "planilla" => {
            let utility =
                number(row, "ingresos") - number(row, "gastos") - number(row, "inversiones");
            row.insert("utilidad".to_string(), json!(utility));
            row.entry("fecha")
                .or_insert_with(|| json!("Fri, 10 May 2024 00:00:00 GMT"));
        }
        _ => {}
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Logs the request and gives the canned answer, if any.
fn intake(tables: &mut Tables, method: Method, uri: &Uri, body: Option<&Value>) -> Option<Response> {
    tables.seen.push(Seen {
        method,
        uri: uri.to_string(),
        body: body.cloned(),
    });
    tables.next_answer.take().map(|canned| match canned {
        Canned::Reject(status, Some(message)) => error(status, &message),
        Canned::Reject(status, None) => (status, "internal failure").into_response(),
        Canned::Garbled => (StatusCode::OK, "<html>").into_response(),
    })
}

fn filter_key(entity: &str) -> &'static str {
    if entity == "credito" {
        "documento_identidad"
    } else {
        "cedula"
    }
}

#[derive(Deserialize)]
struct ListQuery {
    cedula: Option<String>,
}

async fn list(
    State(api): State<FakeApi>,
    Path(entity): Path<String>,
    Query(query): Query<ListQuery>,
    uri: Uri,
) -> Response {
    let mut tables = api.tables();
    if let Some(res) = intake(&mut tables, Method::GET, &uri, None) {
        return res;
    }
    let Some(cedula) = query.cedula.filter(|c| !c.is_empty()) else {
        return error(StatusCode::BAD_REQUEST, "Se requiere parámetro 'cedula'");
    };

    let key = filter_key(&entity);
    let mut rows: Vec<Value> = tables
        .rows
        .iter()
        .filter(|(kind, row)| *kind == entity && row[key] == json!(cedula))
        .map(|(_, row)| row.clone())
        .collect();
    rows.sort_by_key(|row| std::cmp::Reverse(row["id"].as_i64().unwrap_or_default()));
    Json(Value::Array(rows)).into_response()
}

async fn create(
    State(api): State<FakeApi>,
    Path(entity): Path<String>,
    uri: Uri,
    Json(body): Json<Value>,
) -> Response {
    let mut tables = api.tables();
    if let Some(res) = intake(&mut tables, Method::POST, &uri, Some(&body)) {
        return res;
    }

    let required = match entity.as_str() {
        "credito" => CREDITO_REQUIRED,
        "planilla" => PLANILLA_REQUIRED,
        "contacto" => CONTACTO_REQUIRED,
        _ => return error(StatusCode::NOT_FOUND, "Not found"),
    };
    let mut row = body.as_object().cloned().unwrap_or_default();
    if let Some(missing) = required.iter().find(|field| !row.contains_key(**field)) {
        return error(StatusCode::BAD_REQUEST, &format!("Falta campo {missing}"));
    }

    tables.next_id += 1;
    row.insert("id".to_string(), json!(tables.next_id));
    complete(&entity, &mut row);
    let row = Value::Object(row);
    tables.rows.push((entity, row.clone()));
    (StatusCode::CREATED, Json(row)).into_response()
}

async fn update(
    State(api): State<FakeApi>,
    Path((entity, id)): Path<(String, i64)>,
    uri: Uri,
    Json(body): Json<Value>,
) -> Response {
    let mut tables = api.tables();
    if let Some(res) = intake(&mut tables, Method::PUT, &uri, Some(&body)) {
        return res;
    }

    let Some((_, row)) = tables
        .rows
        .iter_mut()
        .find(|(kind, row)| *kind == entity && row["id"] == json!(id))
    else {
        return error(StatusCode::NOT_FOUND, "No encontrada");
    };
    let mut merged = row.as_object().cloned().unwrap_or_default();
    if let Some(fields) = body.as_object() {
        for (key, value) in fields {
            merged.insert(key.clone(), value.clone());
        }
    }
    complete(&entity, &mut merged);
    *row = Value::Object(merged);
    Json(row.clone()).into_response()
}

async fn remove(
    State(api): State<FakeApi>,
    Path((entity, id)): Path<(String, i64)>,
    uri: Uri,
) -> Response {
    let mut tables = api.tables();
    if let Some(res) = intake(&mut tables, Method::DELETE, &uri, None) {
        return res;
    }

    let before = tables.rows.len();
    tables
        .rows
        .retain(|(kind, row)| !(*kind == entity && row["id"] == json!(id)));
    if tables.rows.len() == before {
        return error(StatusCode::NOT_FOUND, "No se encontró la simulación");
    }
    Json(json!({ "mensaje": "Eliminado" })).into_response()
}
