// API client errors

use reqwest::StatusCode;

/// API client error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network communication error
    #[error("ネットワークエラー: {0}")]
    Network(#[source] reqwest::Error),

    /// Server returned a non-2xx response; status and body are unmodified
    #[error("サーバーエラー: HTTP {status}")]
    Status { status: StatusCode, body: String },

    /// Response body could not be read
    #[error("レスポンスの読み込みに失敗しました: {0}")]
    Decode(#[source] reqwest::Error),

    /// HTTP client could not be constructed
    #[error("HTTPクライアントの初期化に失敗しました: {0}")]
    Build(#[source] reqwest::Error),
}

impl ApiError {
    /// HTTP status associated with this error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) | ApiError::Decode(e) => e.status(),
            ApiError::Build(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // ApiError::Display トレイトのテスト
    // ========================================

    #[test]
    fn test_api_error_display_status_error() {
        // 期待される出力: "サーバーエラー: HTTP {ステータス}"
        let error = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "サーバーエラー: HTTP 500 Internal Server Error"
        );
    }

    #[test]
    fn test_api_error_status_accessor() {
        let error = ApiError::Status {
            status: StatusCode::BAD_REQUEST,
            body: String::new(),
        };

        assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    }
}
