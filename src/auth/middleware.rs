use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::api::AppState;
use crate::auth::{extract_bearer_token, AuthError};

/// Bearer token authentication middleware.
///
/// On success the resolved [`UserSession`](crate::auth::UserSession) is added to the request
/// extensions; handlers behind this layer read the caller's identity from
/// there and never from request input.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    // Get authorization header and extract bearer token
    let token = {
        let auth_header = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        extract_bearer_token(auth_header)?.to_owned()
    };

    // Resolve the token to a user session
    let session = state.token_resolver.resolve(&token).await.map_err(|err| {
        debug!("Token resolution failed: {}", err);
        err
    })?;

    // Add user session to request extensions
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}
