// HTTP client for the TeX compile service

use crate::errors::ApiError;
use tex_compiler_core::{
    ApiEndpoints, CompileRequest, CompileResult, PdfDocument, PdfId, API_BASE_URL,
};

/// Client for the TeX compile service
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    endpoints: ApiEndpoints,
}

impl ApiClient {
    /// Create a client for the compiled-in service URL
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client for another service URL
    ///
    /// # Arguments
    /// * `base_url` - Service prefix (e.g., "http://localhost:5001/api")
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(ApiError::Build)?;

        Ok(Self {
            client,
            endpoints: ApiEndpoints::new(base_url),
        })
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    /// Submit TeX source for compilation
    ///
    /// # Arguments
    /// * `tex_code` - TeX source code, sent verbatim as `tex_code`
    ///
    /// # Returns
    /// Whatever the service answered with on a 2xx status
    pub async fn compile_tex(&self, tex_code: &str) -> Result<CompileResult, ApiError> {
        let url = self.endpoints.compile();
        tracing::debug!(url = %url, bytes = tex_code.len(), "Submitting TeX source");

        let response = self
            .client
            .post(&url)
            .json(&CompileRequest::new(tex_code))
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "Compile request rejected");
            return Err(rejected(response).await);
        }

        let body = response.text().await.map_err(ApiError::Decode)?;

        tracing::debug!(%status, "Compile request finished");
        Ok(CompileResult::from_body(status.as_u16(), &body))
    }

    /// Fetch a compiled PDF
    ///
    /// # Arguments
    /// * `pdf_id` - Identifier returned by the compile call
    pub async fn download_pdf(&self, pdf_id: &PdfId) -> Result<PdfDocument, ApiError> {
        let url = self.endpoints.download(pdf_id);
        tracing::debug!(url = %url, "Fetching PDF");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, pdf_id = %pdf_id, "PDF download rejected");
            return Err(rejected(response).await);
        }

        let data = response.bytes().await.map_err(ApiError::Decode)?.to_vec();
        tracing::debug!(bytes = data.len(), "PDF fetched");

        Ok(PdfDocument::new(pdf_id.clone(), data))
    }

    /// Preview URL for a PDF (no request is made)
    pub fn pdf_preview_url(&self, pdf_id: &PdfId) -> String {
        self.endpoints.preview(pdf_id)
    }

    /// Download URL for a PDF (no request is made)
    pub fn pdf_download_url(&self, pdf_id: &PdfId) -> String {
        self.endpoints.download(pdf_id)
    }
}

/// Error for a non-2xx response
///
/// The status is kept even when the body cannot be read.
async fn rejected(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(%status, "Failed to read error response body: {}", e);
            String::new()
        }
    };
    ApiError::Status { status, body }
}

/// Compile TeX source on the compiled-in service
pub async fn compile_tex(tex_code: &str) -> Result<CompileResult, ApiError> {
    ApiClient::new()?.compile_tex(tex_code).await
}

/// Preview URL for a PDF on the compiled-in service
pub fn get_pdf_preview_url(pdf_id: &str) -> String {
    tex_compiler_core::pdf_preview_url(pdf_id)
}

/// Download URL for a PDF on the compiled-in service
pub fn get_pdf_download_url(pdf_id: &str) -> String {
    tex_compiler_core::pdf_download_url(pdf_id)
}
