use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use common::config::ApiConfig;
use common::{Attachment, Endpoints, Payload, Record, RecordId, ResourceDescriptor, ToggleStyle};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::ResourceApi;
use crate::error::ClientError;

/// HTTP client for one resource.
///
/// Endpoint paths come from the record type's descriptor; the base URL is the
/// resource root, e.g. `https://host/api/banners`.
pub struct ResourceClient<R> {
    http: reqwest::Client,
    base_url: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> ResourceClient<R> {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] so all resources share one
    /// connection pool.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            _record: PhantomData,
        }
    }

    /// Build a client from config, applying the optional timeout.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = build_http_client(config)?;
        Ok(Self::with_client(
            http,
            config.resource_url(R::descriptor().kind),
        ))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn descriptor() -> &'static ResourceDescriptor {
        R::descriptor()
    }

    fn url(&self, template: &str, id: Option<&RecordId>) -> String {
        let path = match id {
            Some(id) => Endpoints::expand(template, id.as_str()),
            None => template.to_string(),
        };
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        debug!(
            resource = %Self::descriptor().kind,
            method = %method,
            url = %url,
            "Sending request"
        );
        self.http.request(method, url)
    }

    fn unsupported(operation: &'static str) -> ClientError {
        ClientError::Unsupported {
            resource: Self::descriptor().kind,
            operation,
        }
    }

    /// Attach the payload: multipart when a file is present, JSON otherwise.
    fn with_body(
        builder: RequestBuilder,
        payload: &Payload,
        file: Option<&Attachment>,
    ) -> Result<RequestBuilder, ClientError> {
        let Some(file) = file else {
            return Ok(builder.json(&payload.to_json()));
        };

        let mut form = reqwest::multipart::Form::new();
        for (name, text) in payload.form_parts() {
            form = form.text(name.to_string(), text);
        }
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime)
            .map_err(|e| ClientError::InvalidAttachment(e.to_string()))?;
        form = form.part(Self::descriptor().file_field, part);

        Ok(builder.multipart(form))
    }

    /// Send a request, returning the body text on 2xx and a
    /// [`ClientError::RequestFailed`] otherwise.
    async fn send(&self, builder: RequestBuilder) -> Result<String, ClientError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = rejection_message(status, &body);
            warn!(
                resource = %Self::descriptor().kind,
                status = status.as_u16(),
                %message,
                "Request rejected"
            );
            return Err(ClientError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Record> ResourceApi<R> for ResourceClient<R> {
    async fn list(&self) -> Result<Vec<R>, ClientError> {
        let url = self.url(Self::descriptor().endpoints.list, None);
        let body = self.send(self.request(Method::GET, url)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn create(
        &self,
        payload: &Payload,
        file: Option<&Attachment>,
    ) -> Result<Option<R>, ClientError> {
        let url = self.url(Self::descriptor().endpoints.create, None);
        let builder = Self::with_body(self.request(Method::POST, url), payload, file)?;
        let body = self.send(builder).await?;
        Ok(acknowledged_record(&body))
    }

    async fn update(
        &self,
        id: &RecordId,
        payload: &Payload,
        file: Option<&Attachment>,
    ) -> Result<Option<R>, ClientError> {
        let template = Self::descriptor()
            .endpoints
            .update
            .ok_or_else(|| Self::unsupported("update"))?;
        let url = self.url(template, Some(id));
        let builder = Self::with_body(self.request(Method::PUT, url), payload, file)?;
        let body = self.send(builder).await?;
        Ok(acknowledged_record(&body))
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ClientError> {
        let url = self.url(Self::descriptor().endpoints.delete, Some(id));
        self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    async fn toggle(&self, record: &R) -> Result<(), ClientError> {
        let descriptor = Self::descriptor();
        let id = record.id();

        match descriptor.toggle {
            Some(ToggleStyle::Patch) => {
                let template = descriptor
                    .endpoints
                    .toggle
                    .ok_or_else(|| Self::unsupported("toggle"))?;
                let url = self.url(template, Some(id));
                self.send(self.request(Method::PATCH, url)).await?;
            }
            Some(ToggleStyle::UpdateFlag) => {
                let template = descriptor
                    .endpoints
                    .update
                    .ok_or_else(|| Self::unsupported("toggle"))?;
                let active = record
                    .is_active()
                    .ok_or_else(|| Self::unsupported("toggle"))?;
                let payload = Payload::new()
                    .with("image_url", record.image_url().unwrap_or_default())
                    .with("is_active", !active);
                let url = self.url(template, Some(id));
                let builder = self.request(Method::PUT, url).json(&payload.to_json());
                self.send(builder).await?;
            }
            None => return Err(Self::unsupported("toggle")),
        }

        Ok(())
    }
}

/// Build the shared HTTP client for all resources.
pub fn build_http_client(config: &ApiConfig) -> Result<reqwest::Client, ClientError> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Extract the `error` field of a rejection body, falling back to a generic
/// description of the status.
fn rejection_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| match value.get("error") {
            Some(Value::String(message)) => Some(message.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

/// Decode a created/updated record, either bare or wrapped in an envelope
/// object such as `{"data": {...}}`.
fn decode_record<R: Record>(body: &str) -> Result<R, ClientError> {
    let value: Value = serde_json::from_str(body)?;
    let direct = serde_json::from_value::<R>(value.clone());

    match (direct, &value) {
        (Ok(record), _) => Ok(record),
        (Err(err), Value::Object(map)) => map
            .values()
            .filter(|v| v.is_object())
            .find_map(|v| serde_json::from_value::<R>(v.clone()).ok())
            .ok_or(ClientError::Decode(err)),
        (Err(err), _) => Err(ClientError::Decode(err)),
    }
}

/// A write the server accepted. The body is only a bonus: some deployments
/// answer with a bare `{"message": ...}`, which still means success.
fn acknowledged_record<R: Record>(body: &str) -> Option<R> {
    match decode_record(body) {
        Ok(record) => Some(record),
        Err(e) => {
            debug!(error = %e, "Write accepted without a record in the response");
            None
        }
    }
}
