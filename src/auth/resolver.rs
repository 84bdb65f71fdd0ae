use async_trait::async_trait;

use crate::auth::{AuthError, JwtService, UserSession};

/// Resolves an opaque bearer token to the identity it was issued for.
///
/// Request handling only sees this trait, so the identity provider behind it
/// can be swapped without touching the handlers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<UserSession, AuthError>;
}

/// Resolves self-issued HS256 JWTs whose `sub` claim is the user id
#[derive(Debug, Clone)]
pub struct JwtTokenResolver {
    jwt_service: JwtService,
}

impl JwtTokenResolver {
    pub fn new(jwt_secret: &str) -> Self {
        Self {
            jwt_service: JwtService::new(jwt_secret),
        }
    }
}

#[async_trait]
impl TokenResolver for JwtTokenResolver {
    async fn resolve(&self, token: &str) -> Result<UserSession, AuthError> {
        self.jwt_service.extract_user_session(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_jwt_resolver_resolves_subject() {
        let jwt_service = JwtService::new("resolver_secret");
        let user_id = Uuid::new_v4();
        let token = jwt_service.create_access_token(user_id).unwrap();

        let resolver = JwtTokenResolver::new("resolver_secret");
        let session = resolver.resolve(&token).await.unwrap();

        assert_eq!(session.user_id, user_id);
    }

    #[tokio::test]
    async fn test_jwt_resolver_rejects_garbage() {
        let resolver = JwtTokenResolver::new("resolver_secret");

        assert_eq!(
            resolver.resolve("definitely.not.ajwt").await.unwrap_err(),
            AuthError::InvalidToken
        );
    }
}
