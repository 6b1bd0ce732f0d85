use crate::core::TokenProvider;
use crate::utils::error::{CostError, Result};
use async_trait::async_trait;

pub const TOKEN_ENV_VAR: &str = "GRAPH_TOKEN";

#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn from_env() -> Result<Self> {
        std::env::var(TOKEN_ENV_VAR)
            .map(Self::new)
            .map_err(|_| CostError::MissingConfigError {
                field: TOKEN_ENV_VAR.to_string(),
            })
    }
}

impl std::fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String> {
        if self.token.trim().is_empty() {
            return Err(CostError::AuthError {
                message: "access token is empty".to_string(),
            });
        }
        Ok(self.token.clone())
    }
}
