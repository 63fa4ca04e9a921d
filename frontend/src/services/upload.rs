//! HTTP service uploading the datasheet to the pulling backend.
//!
//! `POST {base}/process/` with a multipart body holding one `file` part.
//! A 2xx answer carries `{"program": [...]}`; anything else may carry
//! `{"detail": ...}` which becomes the user-facing error.

use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::{api_base_url, process_url};
use crate::error::TransportError;
use crate::types::{ManeuverRecord, UploadFile};

/// Sends a datasheet to the processing endpoint.
///
/// One call, one resolution. No retries and no timeout beyond what the
/// underlying client does.
#[allow(async_fn_in_trait)]
pub trait ProgramTransport: 'static {
    type File: UploadFile;

    async fn submit(&self, file: &Self::File) -> Result<Vec<ManeuverRecord>, TransportError>;
}

/// Success body of `/process/`.
#[derive(Debug, Default, Deserialize)]
struct ProcessResponse {
    #[serde(default)]
    program: Vec<ManeuverRecord>,
}

/// Error body, as FastAPI-style backends send it.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    /// 422 request validation errors
    Issues(Vec<ValidationIssue>),
    Other(Value),
}

#[derive(Debug, Deserialize)]
struct ValidationIssue {
    msg: String,
}

impl ErrorDetail {
    fn into_message(self) -> Option<String> {
        let message = match self {
            ErrorDetail::Message(msg) => msg,
            ErrorDetail::Issues(issues) => issues
                .into_iter()
                .map(|issue| issue.msg)
                .filter(|msg| !msg.trim().is_empty())
                .collect::<Vec<_>>()
                .join("; "),
            ErrorDetail::Other(_) => return None,
        };
        let message = message.trim();
        (!message.is_empty()).then(|| message.to_string())
    }
}

/// Extract the program from a 2xx body.
///
/// A missing or unreadable `program` gives an empty program, not an error.
pub fn decode_program(body: &str) -> Vec<ManeuverRecord> {
    match serde_json::from_str::<ProcessResponse>(body) {
        Ok(response) => response.program,
        Err(e) => {
            log::warn!("⚠️ Unusable /process/ response, showing an empty program: {}", e);
            Vec::new()
        }
    }
}

/// Build the error for a non-2xx response.
pub fn decode_error(status: u16, body: &str) -> TransportError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
        .and_then(ErrorDetail::into_message);

    TransportError::Rejected { status, detail }
}

/// [`ProgramTransport`] backed by the browser's fetch API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: process_url(base_url),
        }
    }

    /// Transport pointed at the build-time configured backend.
    pub fn from_config() -> Self {
        Self::new(api_base_url())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ProgramTransport for HttpTransport {
    type File = File;

    async fn submit(&self, file: &File) -> Result<Vec<ManeuverRecord>, TransportError> {
        let form_data = FormData::new()
            .map_err(|e: JsValue| TransportError::Request(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob("file", file)
            .map_err(|e: JsValue| TransportError::Request(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| TransportError::Request(format!("Failed to build request: {}", e)))?;

        log::info!("📤 POST {} ({})", self.endpoint, file.display_name());

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(format!("HTTP request failed: {}", e)))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(decode_error(response.status(), &body));
        }

        match response.text().await {
            Ok(body) => Ok(decode_program(&body)),
            Err(e) => {
                log::warn!("⚠️ Could not read /process/ response body: {}", e);
                Ok(Vec::new())
            }
        }
    }
}
