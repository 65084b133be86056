//! Translation of HTTP failure statuses into readable errors.

use reqwest::StatusCode;

use crate::error::FvmError;

/// Builds a user-facing message for an unsuccessful HTTP status.
pub fn classify_status(status: StatusCode) -> FvmError {
    let msg = match status {
        StatusCode::UNAUTHORIZED => {
            "authentication failed (HTTP 401). Check your GITHUB_TOKEN.".to_string()
        }
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => format!(
            "access denied or rate limited (HTTP {}). Try again later or set GITHUB_TOKEN.",
            status.as_u16()
        ),
        StatusCode::NOT_FOUND => "the requested resource was not found (HTTP 404)".to_string(),
        s if s.is_server_error() => format!("server error (HTTP {})", s.as_u16()),
        s => format!("HTTP {} error", s.as_u16()),
    };
    FvmError::Http(msg)
}

/// Converts an error from `error_for_status()` into an `anyhow::Error`,
/// replacing status failures with a classified [`FvmError::Http`].
pub fn check_status(error: reqwest::Error) -> anyhow::Error {
    match error.status() {
        Some(status) => anyhow::Error::from(classify_status(status)),
        None => anyhow::Error::from(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        let msg = classify_status(StatusCode::NOT_FOUND).to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_classify_rate_limit() {
        let msg = classify_status(StatusCode::TOO_MANY_REQUESTS).to_string();
        assert!(msg.contains("GITHUB_TOKEN"));

        let msg = classify_status(StatusCode::FORBIDDEN).to_string();
        assert!(msg.contains("HTTP 403"));
    }

    #[test]
    fn test_classify_server_error() {
        let msg = classify_status(StatusCode::BAD_GATEWAY).to_string();
        assert!(msg.contains("server error (HTTP 502)"));
    }

    #[test]
    fn test_classify_other_client_error() {
        let msg = classify_status(StatusCode::BAD_REQUEST).to_string();
        assert!(msg.contains("HTTP 400 error"));
    }

    #[tokio::test]
    async fn test_check_status_from_response() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/")
            .with_status(404)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let response = client.get(server.url()).send().await.unwrap();
        let err = response.error_for_status().unwrap_err();

        let err = check_status(err);
        assert!(matches!(
            err.downcast_ref::<FvmError>(),
            Some(FvmError::Http(_))
        ));
    }
}
