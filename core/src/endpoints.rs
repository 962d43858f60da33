// Endpoint URLs of the TeX compile service

use crate::models::PdfId;

/// Base URL of the compile service
pub const API_BASE_URL: &str = "http://localhost:5001/api";

/// URL builder for a compile service base URL
///
/// Pure string formatting: ids are neither validated nor percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base_url: String,
}

impl ApiEndpoints {
    /// Create endpoints for the given base URL
    ///
    /// A single trailing `/` is dropped so joined paths never contain `//`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST /compile
    pub fn compile(&self) -> String {
        format!("{}/compile", self.base_url)
    }

    /// GET /preview/:id
    pub fn preview(&self, pdf_id: &PdfId) -> String {
        format!("{}/preview/{}", self.base_url, pdf_id)
    }

    /// GET /download/:id
    pub fn download(&self, pdf_id: &PdfId) -> String {
        format!("{}/download/{}", self.base_url, pdf_id)
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

/// Preview URL for a PDF on the compiled-in service
pub fn pdf_preview_url(pdf_id: &str) -> String {
    format!("{}/preview/{}", API_BASE_URL, pdf_id)
}

/// Download URL for a PDF on the compiled-in service
pub fn pdf_download_url(pdf_id: &str) -> String {
    format!("{}/download/{}", API_BASE_URL, pdf_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_compiled_in_base() {
        assert_eq!(ApiEndpoints::default().base_url(), API_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let endpoints = ApiEndpoints::new("http://example.test/api/");
        assert_eq!(endpoints.compile(), "http://example.test/api/compile");
    }
}
