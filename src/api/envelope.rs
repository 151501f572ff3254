use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Local;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};

use super::format::TIMESTAMP_FORMAT;

/// Uniform response wrapper.
///
/// Field declaration order is the wire order: `status`, `tanggal`,
/// `notification_response`, then `data` and/or `error`. The body `status` is
/// independent of the HTTP status the envelope is sent with.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T = Vec<Value>> {
    pub status: u16,
    pub tanggal: String,
    pub notification_response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    pub http_status: StatusCode,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: status.as_u16(),
            tanggal: now(),
            notification_response: message.into(),
            data,
            error: None,
            http_status: status,
        }
    }

    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, message, Some(data))
    }

    /// Send with a different HTTP status while keeping the body `status`.
    pub fn with_http_status(mut self, status: StatusCode) -> Self {
        self.http_status = status;
        self
    }

    /// Pretty-printed with a four space indent; non-ASCII is written literally.
    pub fn render(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::with_capacity(256);
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;
        Ok(buf)
    }
}

impl Envelope<Vec<Value>> {
    /// Failure carrying `data: []`, as used for rejected credentials and validation.
    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, message, Some(Vec::new()))
    }

    /// Failure carrying the raw diagnostic under `error` and no `data`.
    pub fn failed(message: impl Into<String>, error: impl Into<String>) -> Self {
        let mut envelope = Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, None);
        envelope.error = Some(error.into());
        envelope
    }

    /// Success without a payload, used by mutating endpoints.
    pub fn done(message: impl Into<String>) -> Self {
        Self::success(message, Vec::new())
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(body) => (
                self.http_status,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response envelope: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to serialize response").into_response()
            }
        }
    }
}

fn now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
