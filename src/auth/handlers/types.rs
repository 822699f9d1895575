/**
 * Authentication Handler Types
 *
 * Form payloads for the login and credential-maintenance endpoints.
 */
use serde::Deserialize;

/// Login form data
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Admin email address
    pub email: String,
    /// Submitted password (verified against the stored credential)
    pub password: String,
}

/// Provisioning form data
///
/// Creates or replaces the credential for an email; the password is
/// hashed before storage.
#[derive(Debug, Deserialize)]
pub struct ProvisionForm {
    pub email: String,
    pub password: String,
}

/// Rehash form data
///
/// Names the credential to migrate from legacy plaintext to a hash.
#[derive(Debug, Deserialize)]
pub struct RehashForm {
    pub email: String,
}
