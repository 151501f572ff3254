use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::auth::TokenError;
use crate::error::ApiError;

/// Why the gate turned a request away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    Required,
    Expired,
    Invalid,
}

impl TokenRejection {
    pub fn message(&self) -> &'static str {
        match self {
            TokenRejection::Required => "Token Required",
            TokenRejection::Expired => "Token Expired",
            TokenRejection::Invalid => "Token Invalid",
        }
    }
}

impl std::fmt::Display for TokenRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Gate for every protected route: requires a valid `Authorization` token,
/// then hands the request (with the decoded [`crate::auth::Claims`] in its
/// extensions) to the handler unchanged.
pub async fn require_token(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let header = match request.headers().get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return ApiError::Token(TokenRejection::Required).into_response(),
    };

    let Ok(raw) = header.to_str() else {
        return ApiError::Token(TokenRejection::Invalid).into_response();
    };

    match state.tokens.validate(raw) {
        Ok(claims) => {
            tracing::debug!("Token accepted for {}", claims.username);
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(TokenError::Expired) => ApiError::Token(TokenRejection::Expired).into_response(),
        Err(e) => {
            tracing::debug!("Token rejected: {}", e);
            ApiError::Token(TokenRejection::Invalid).into_response()
        }
    }
}
