use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing auth token")]
    MissingToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
}

impl AuthError {
    /// Message returned to the client; resolution failures are not told apart
    pub fn client_message(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "Missing auth token",
            AuthError::InvalidToken | AuthError::TokenExpired => "Unauthorized",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.client_message(),
        }));

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_messages() {
        assert_eq!(AuthError::MissingToken.client_message(), "Missing auth token");
        assert_eq!(AuthError::InvalidToken.client_message(), "Unauthorized");
        assert_eq!(AuthError::TokenExpired.client_message(), "Unauthorized");
    }

    #[test]
    fn test_status_is_unauthorized() {
        let response = AuthError::TokenExpired.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
