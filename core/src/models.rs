// Core data models for the TeX compiler client

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// PDF identifier issued by the compile service
///
/// Opaque: it is only ever interpolated into preview/download URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PdfId(pub String);

impl PdfId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when every character is an RFC 3986 unreserved character.
    ///
    /// Advisory only. URL builders never reject or encode an id.
    pub fn is_url_safe(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~'))
    }
}

impl std::fmt::Display for PdfId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PdfId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PdfId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// API Request: POST /compile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileRequest {
    /// TeX source, sent as-is
    pub tex_code: String,
}

impl CompileRequest {
    pub fn new(tex_code: impl Into<String>) -> Self {
        Self {
            tex_code: tex_code.into(),
        }
    }
}

/// API Response: POST /compile
///
/// The service's response shape is not fixed, so the body is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileResult {
    /// HTTP status code returned by the service
    pub status: u16,

    /// Response body (non-JSON bodies are stored as a JSON string)
    pub data: Value,

    /// Receipt timestamp (Unix timestamp)
    pub received_at: i64,
}

impl CompileResult {
    /// Keys checked, in order, when looking for the PDF identifier
    pub const PDF_ID_KEYS: [&'static str; 3] = ["pdf_id", "pdfId", "id"];

    pub fn new(status: u16, data: Value) -> Self {
        Self {
            status,
            data,
            received_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Build from a raw response body
    pub fn from_body(status: u16, body: &str) -> Self {
        let data = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
        };
        Self::new(status, data)
    }

    /// PDF identifier carried by the body, if any
    pub fn pdf_id(&self) -> Option<PdfId> {
        let object = self.data.as_object()?;
        Self::PDF_ID_KEYS.iter().find_map(|key| match object.get(*key)? {
            Value::String(s) if !s.is_empty() => Some(PdfId::new(s.as_str())),
            Value::Number(n) => Some(PdfId::new(n.to_string())),
            _ => None,
        })
    }
}

/// PDF fetched from GET /download/:id
#[derive(Debug, Clone)]
pub struct PdfDocument {
    /// Identifier the PDF was fetched by
    pub pdf_id: PdfId,

    /// Raw PDF bytes
    pub data: Vec<u8>,

    /// Fetch timestamp (Unix timestamp)
    pub fetched_at: i64,
}

impl PdfDocument {
    pub fn new(pdf_id: PdfId, data: Vec<u8>) -> Self {
        Self {
            pdf_id,
            data,
            fetched_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Check the data looks like a PDF
    pub fn validate(&self) -> Result<(), PdfError> {
        if self.data.is_empty() {
            return Err(PdfError::EmptyData);
        }

        // %PDF-
        const PDF_HEADER: &[u8] = b"%PDF-";
        if !self.data.starts_with(PDF_HEADER) {
            return Err(PdfError::InvalidPdfHeader);
        }

        Ok(())
    }

    /// Convert to Data URL format (for iframe/embed src attribute)
    pub fn to_data_url(&self) -> String {
        use base64::Engine;
        let base64_data = base64::engine::general_purpose::STANDARD.encode(&self.data);
        format!("data:application/pdf;base64,{}", base64_data)
    }
}

/// PDF-related errors
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("PDFデータが空です")]
    EmptyData,

    #[error("無効なPDFヘッダーです")]
    InvalidPdfHeader,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compile_request_field_name() {
        let request = CompileRequest::new("\\documentclass{article}");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "tex_code": "\\documentclass{article}" }));
    }

    #[test]
    fn test_pdf_id_serializes_as_plain_string() {
        let id = PdfId::from("abc123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
    }
}
