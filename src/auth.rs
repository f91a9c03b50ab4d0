use crate::error::{OpencgaError, OpencgaResult};

/// Authentication trait for the OpenCGA REST API
#[async_trait::async_trait]
pub trait Authentication: Send + Sync {
    /// Apply authentication to the request headers
    async fn apply_auth(&self, headers: &mut reqwest::header::HeaderMap) -> OpencgaResult<()>;
}

/// Bearer token authentication.
///
/// The token is whatever the login flow handed out; it is sent as-is and
/// never validated or refreshed here.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

#[async_trait::async_trait]
impl Authentication for BearerAuth {
    async fn apply_auth(&self, headers: &mut reqwest::header::HeaderMap) -> OpencgaResult<()> {
        let auth_value = format!("Bearer {}", self.token);
        headers.insert(
            reqwest::header::AUTHORIZATION,
            auth_value.parse()
                .map_err(|e| OpencgaError::auth_error(format!("Invalid auth header: {}", e)))?
        );

        Ok(())
    }
}

/// No authentication (anonymous access to public studies)
#[derive(Debug, Clone)]
pub struct NoAuth;

#[async_trait::async_trait]
impl Authentication for NoAuth {
    async fn apply_auth(&self, _headers: &mut reqwest::header::HeaderMap) -> OpencgaResult<()> {
        Ok(())
    }
}
