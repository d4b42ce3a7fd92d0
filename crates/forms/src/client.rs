use api_types::{DeleteAck, ErrorBody, RecordId, contacto::Contacto};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{entity::Entity, error::ClientError};

type Body = Map<String, Value>;

/// HTTP binding of the record API.
///
/// Every entity exposes the same four operations under `/api/<entity>`.
#[derive(Debug, Clone)]
pub struct RecordApi {
    base_url: Url,
    http: reqwest::Client,
}

impl RecordApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|err| ClientError::Endpoint(format!("invalid base_url: {err}")))?;
        // Without a trailing slash `join` would replace the last path segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Endpoint(format!("invalid path {path}: {err}")))
    }

    /// `POST /api/<entity>`
    pub async fn create<E: Entity>(&self, body: &Body) -> Result<E::Record, ClientError> {
        let endpoint = self.endpoint(&format!("api/{}", E::PATH))?;
        tracing::debug!(entity = E::PATH, "create");
        self.send(self.http.post(endpoint).json(body)).await
    }

    /// `PUT /api/<entity>/<id>`
    pub async fn update<E: Entity>(
        &self,
        id: RecordId,
        body: &Body,
    ) -> Result<E::Record, ClientError> {
        let endpoint = self.endpoint(&format!("api/{}/{id}", E::PATH))?;
        tracing::debug!(entity = E::PATH, id, "update");
        self.send(self.http.put(endpoint).json(body)).await
    }

    /// `GET /api/<entity>?cedula=<value>`
    pub async fn list<E: Entity>(&self, cedula: &str) -> Result<Vec<E::Record>, ClientError> {
        let endpoint = self.endpoint(&format!("api/{}", E::PATH))?;
        tracing::debug!(entity = E::PATH, cedula, "list");
        self.send(self.http.get(endpoint).query(&[("cedula", cedula)]))
            .await
    }

    /// `DELETE /api/<entity>/<id>`
    pub async fn delete<E: Entity>(&self, id: RecordId) -> Result<DeleteAck, ClientError> {
        let endpoint = self.endpoint(&format!("api/{}/{id}", E::PATH))?;
        tracing::debug!(entity = E::PATH, id, "delete");
        self.send(self.http.delete(endpoint)).await
    }

    /// `POST /api/contacto`
    pub async fn send_contact(&self, body: &Body) -> Result<Contacto, ClientError> {
        let endpoint = self.endpoint("api/contacto")?;
        tracing::debug!("contact");
        self.send(self.http.post(endpoint).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ClientError> {
        let res = req.send().await?;

        let status = res.status();
        if status.is_success() {
            return Ok(res.json::<T>().await?);
        }

        let message = res.json::<ErrorBody>().await.map(|body| body.error).ok();
        tracing::warn!(%status, message = message.as_deref(), "request rejected");
        Err(ClientError::Rejected { status, message })
    }
}
