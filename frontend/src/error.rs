//! Error types for the upload workflow.
//!
//! - [`TransportError`] - the `/process/` call failed
//! - [`SubmitError`] - anything that ends a submission attempt
//!
//! Both render as the message shown to the user, so `to_string()` is
//! what ends up in the controller's error state.

use thiserror::Error;

/// Shown when the backend gives no usable `detail`.
pub const FALLBACK_ERROR_MESSAGE: &str = "Error al generar el programa. Intenta de nuevo.";

/// Shown when the user submits before choosing a file.
pub const NO_FILE_MESSAGE: &str = "Por favor selecciona un archivo Excel.";

/// Failure of the HTTP call to the processing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Non-2xx response, with the backend's `detail` if it sent one.
    #[error("{}", .detail.as_deref().unwrap_or(FALLBACK_ERROR_MESSAGE))]
    Rejected { status: u16, detail: Option<String> },

    /// Request never produced a response (offline, CORS, DNS...).
    #[error("{}", FALLBACK_ERROR_MESSAGE)]
    Network(String),

    /// Multipart body or request could not be built.
    #[error("{}", FALLBACK_ERROR_MESSAGE)]
    Request(String),
}

impl TransportError {
    /// Underlying cause, for the console log.
    pub fn diagnostic(&self) -> String {
        match self {
            TransportError::Rejected { status, detail } => {
                format!("HTTP {} ({})", status, detail.as_deref().unwrap_or("no detail"))
            }
            TransportError::Network(cause) | TransportError::Request(cause) => cause.clone(),
        }
    }
}

/// Why a submission attempt ended without a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{}", NO_FILE_MESSAGE)]
    NoFileSelected,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_prefers_server_detail() {
        let err = TransportError::Rejected {
            status: 400,
            detail: Some("invalid file format".to_string()),
        };
        assert_eq!(err.to_string(), "invalid file format");

        let err = TransportError::Rejected { status: 500, detail: None };
        assert_eq!(err.to_string(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(err.diagnostic(), "HTTP 500 (no detail)");
    }

    #[test]
    fn test_network_errors_hide_cause() {
        let err = TransportError::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(err.to_string(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(err.diagnostic(), "TypeError: Failed to fetch");
    }

    #[test]
    fn test_submit_error_messages() {
        assert_eq!(SubmitError::NoFileSelected.to_string(), NO_FILE_MESSAGE);
        let err: SubmitError = TransportError::Rejected {
            status: 422,
            detail: Some("Faltan columnas".to_string()),
        }
        .into();
        assert_eq!(err.to_string(), "Faltan columnas");
    }
}
