/**
 * Error Response Conversion
 *
 * Turns an `AppError` that escapes a handler into an HTTP response.
 *
 * Handlers normally catch store failures themselves so they can flash a
 * notice into the session before redirecting. This conversion is the
 * fallback for errors that propagate out via `?`: auth failures become a
 * redirect to the login page, everything else becomes a plain status page
 * with a generic body.
 */
use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::error::types::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Unauthenticated
            | AppError::InvalidCredentials
            | AppError::MalformedStoredCredential => {
                tracing::warn!(error = %self, "request rejected");
                Redirect::to("/login").into_response()
            }
            AppError::StoreUnavailable(_) => {
                tracing::error!(error = %self, "record store failure");
                (StatusCode::SERVICE_UNAVAILABLE, self.notice()).into_response()
            }
            AppError::Hashing(_) | AppError::Render(_) => {
                tracing::error!(error = %self, "internal failure");
                (StatusCode::INTERNAL_SERVER_ERROR, self.notice()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_redirect_to_login() {
        let response = AppError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(axum::http::header::LOCATION).unwrap(),
            "/login"
        );
    }

    #[test]
    fn test_store_failure_is_service_unavailable() {
        let response = AppError::from(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
