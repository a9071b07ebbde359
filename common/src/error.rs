use thiserror::Error;

/// Failures talking to the idea store.
///
/// `Display` is the message shown to the user; `kind()` is the
/// classification used in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No base URL was configured for the store.
    #[error("API URLが設定されていません。IDEA_API_URL を設定してください。")]
    Configuration,

    /// The request could not be completed (DNS, refused connection, body read).
    #[error("サーバーに接続できませんでした。詳細: {0}")]
    Transport(String),

    /// The store answered with a non-success status.
    #[error("データの取得に失敗しました。ステータス: {status}, 詳細: {body}")]
    Http { status: u16, body: String },

    /// The store answered 2xx but not with JSON we understand.
    #[error("APIからJSONではないレスポンスが返されました。サーバーが正常に動作していることを確認してください。")]
    Format { detail: String },
}

impl StoreError {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Configuration => "configuration",
            StoreError::Transport(_) => "transport",
            StoreError::Http { .. } => "http",
            StoreError::Format { .. } => "format",
        }
    }

    /// HTTP status, if the store answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_message_includes_status_and_body() {
        let err = StoreError::Http {
            status: 503,
            body: "maintenance".into(),
        };
        assert_eq!(
            err.to_string(),
            "データの取得に失敗しました。ステータス: 503, 詳細: maintenance"
        );
        assert_eq!(err.kind(), "http");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_format_message_is_distinct() {
        let format = StoreError::Format {
            detail: "<html>".into(),
        };
        let transport = StoreError::Transport("connection refused".into());
        assert_ne!(format.to_string(), transport.to_string());
        assert_eq!(format.kind(), "format");
        assert_eq!(transport.status(), None);
    }
}
