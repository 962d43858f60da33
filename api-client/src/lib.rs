// API client library for the TeX compile service
//
// This crate provides HTTP client functionality for submitting TeX
// source to the compile service and locating the resulting PDFs.

pub mod errors;
pub mod http_client;

// Re-export commonly used items
pub use errors::ApiError;
pub use http_client::{compile_tex, get_pdf_download_url, get_pdf_preview_url, ApiClient};
