use axum::Json;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use serde_json::{Map, Value};

use crate::error::FakeError;

pub(crate) struct UploadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Request body accepted as either multipart form data or a JSON object.
#[derive(Default)]
pub(crate) struct FormInput {
    fields: Map<String, Value>,
    files: Vec<(String, UploadedFile)>,
}

impl FormInput {
    pub fn text(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.fields.get(name)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// List field sent either as a JSON array or as a JSON-encoded string.
    pub fn list(&self, name: &str) -> Option<Vec<String>> {
        let items = match self.fields.get(name)? {
            Value::Array(items) => items.clone(),
            Value::String(encoded) => serde_json::from_str::<Vec<Value>>(encoded).ok()?,
            _ => return None,
        };
        Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
        )
    }

    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, file)| file)
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

impl<S> FromRequest<S> for FormInput
where
    S: Send + Sync,
{
    type Rejection = FakeError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(&req) {
            let Json(value) = Json::<Value>::from_request(req, state)
                .await
                .map_err(|e| FakeError::BadRequest(e.body_text()))?;
            return match value {
                Value::Object(fields) => Ok(Self {
                    fields,
                    files: Vec::new(),
                }),
                _ => Err(FakeError::BadRequest("Expected a JSON object".into())),
            };
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| FakeError::BadRequest(format!("Multipart error: {e}")))?;
        let mut input = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| FakeError::BadRequest(format!("Multipart error: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| FakeError::BadRequest(format!("Failed to read file: {e}")))?;
                    input.files.push((
                        name,
                        UploadedFile {
                            file_name,
                            bytes: bytes.to_vec(),
                        },
                    ));
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| FakeError::BadRequest(format!("Failed to read {name}: {e}")))?;
                    input.fields.insert(name, Value::String(text));
                }
            }
        }

        Ok(input)
    }
}
