/**
 * Application Error Types
 *
 * This module defines the error taxonomy used across handlers and the
 * data layer.
 *
 * # Error Categories
 *
 * - `Unauthenticated` - no (or invalid) session; the caller is sent to the
 *   login page with a notice
 * - `InvalidCredentials` - login verification failed; the same generic
 *   notice is produced for an unknown email and for a wrong password so
 *   that accounts cannot be enumerated
 * - `StoreUnavailable` - the credential/record store could not be reached
 *   or a statement failed; the user sees a generic notice, the detail goes
 *   to the server log only
 * - `MalformedStoredCredential` - a stored hash could not be parsed; it is
 *   handled exactly like `InvalidCredentials` and never surfaces as a
 *   server error
 * - `Hashing` / `Render` - internal failures (password hashing, template
 *   rendering)
 */
use axum::http::StatusCode;
use thiserror::Error;

/// Application error type
///
/// Each variant maps to a status code via [`AppError::status_code`] and to
/// a user-safe flash notice via [`AppError::notice`]. The `Display` output
/// is intended for logs; it never contains passwords or stored hashes.
#[derive(Debug, Error)]
pub enum AppError {
    /// No valid session for a protected operation
    #[error("authentication required")]
    Unauthenticated,

    /// Email/password verification failed
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Database connection or statement failure
    #[error("record store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    /// Stored credential could not be parsed as a known hash encoding
    #[error("stored credential is malformed")]
    MalformedStoredCredential,

    /// Password hashing failed
    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Template rendering failed
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    /// Get the HTTP status code for this error
    ///
    /// Auth-related variants use `303 See Other` because they answer with
    /// a redirect to the login page rather than an error body.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::SEE_OTHER,
            Self::InvalidCredentials | Self::MalformedStoredCredential => StatusCode::SEE_OTHER,
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Hashing(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-visible flash notice for this error
    ///
    /// Notices are deliberately generic. In particular, an unknown email
    /// and a wrong password produce the same text.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "Please log in first.",
            Self::InvalidCredentials | Self::MalformedStoredCredential => {
                "Invalid email or password."
            }
            Self::StoreUnavailable(_) => "Database error, please try again.",
            Self::Hashing(_) | Self::Render(_) => "An internal error occurred.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_redirects() {
        let error = AppError::Unauthenticated;
        assert_eq!(error.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(error.notice(), "Please log in first.");
    }

    #[test]
    fn test_invalid_and_malformed_share_a_notice() {
        // A malformed stored hash must be indistinguishable from a plain
        // failed login.
        assert_eq!(
            AppError::InvalidCredentials.notice(),
            AppError::MalformedStoredCredential.notice()
        );
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            AppError::MalformedStoredCredential.status_code()
        );
    }

    #[test]
    fn test_store_unavailable_from_sqlx() {
        let error = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(error.notice(), "Database error, please try again.");
    }

    #[test]
    fn test_display_never_mentions_secrets() {
        let error = AppError::InvalidCredentials;
        let rendered = error.to_string();
        assert_eq!(rendered, "invalid credentials");
    }
}
