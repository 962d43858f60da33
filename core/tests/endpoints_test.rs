// Unit tests for endpoints module

use proptest::prelude::*;
use tex_compiler_core::*;

#[test]
fn test_preview_url_example() {
    assert_eq!(
        pdf_preview_url("abc123"),
        "http://localhost:5001/api/preview/abc123"
    );
}

#[test]
fn test_download_url_example() {
    assert_eq!(
        pdf_download_url("abc123"),
        "http://localhost:5001/api/download/abc123"
    );
}

#[test]
fn test_compile_url() {
    assert_eq!(
        ApiEndpoints::default().compile(),
        "http://localhost:5001/api/compile"
    );
}

#[test]
fn test_custom_base_url() {
    let endpoints = ApiEndpoints::new("http://127.0.0.1:9000/api");
    let id = PdfId::from("xyz");

    assert_eq!(endpoints.preview(&id), "http://127.0.0.1:9000/api/preview/xyz");
    assert_eq!(endpoints.download(&id), "http://127.0.0.1:9000/api/download/xyz");
}

#[test]
fn test_ids_are_not_encoded() {
    // Ids are interpolated verbatim
    assert_eq!(
        pdf_preview_url("a b/../c"),
        "http://localhost:5001/api/preview/a b/../c"
    );
    assert_eq!(pdf_download_url(""), "http://localhost:5001/api/download/");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn preview_url_is_prefix_plus_id(id in ".*") {
        prop_assert_eq!(
            pdf_preview_url(&id),
            format!("http://localhost:5001/api/preview/{}", id)
        );
    }

    #[test]
    fn download_url_is_prefix_plus_id(id in ".*") {
        prop_assert_eq!(
            pdf_download_url(&id),
            format!("http://localhost:5001/api/download/{}", id)
        );
    }

    #[test]
    fn default_endpoints_match_free_functions(id in ".*") {
        let endpoints = ApiEndpoints::default();
        let pdf_id = PdfId::new(id.clone());
        prop_assert_eq!(endpoints.preview(&pdf_id), pdf_preview_url(&id));
        prop_assert_eq!(endpoints.download(&pdf_id), pdf_download_url(&id));
    }
}
