//! HTTP rendering of [`AppError`]

#[cfg(feature = "axum")]
use super::app_error::AppError;

/// Rendered as `text/plain` with the error's status.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, self.message().to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_into_response_is_plain_text() {
        use super::*;
        use crate::error::kind::ErrorKind;
        use axum::http::{StatusCode, header};
        use axum::response::IntoResponse;

        let response = AppError::new(ErrorKind::NotFound, "Article not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Article not found");
    }
}
