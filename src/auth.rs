//! Admin console authentication
//!
//! HTTP Basic credentials checked against the configured operator account.
//! Every protected handler calls [`require_admin`] before touching the store.

use crate::config::AdminConfig;
use crate::error::AppError;
use axum_extra::headers::authorization::Basic;
use axum_extra::headers::Authorization;
use sha2::{Digest, Sha256};

/// Verify Basic credentials against the configured operator account.
///
/// A missing header, wrong username, or wrong password all yield the same
/// Unauthorized outcome (the response carries a `WWW-Authenticate: Basic`
/// challenge, see `error.rs`).
pub fn require_admin(
    config: &AdminConfig,
    credentials: Option<&Authorization<Basic>>,
) -> Result<(), AppError> {
    let Some(creds) = credentials else {
        return Err(AppError::Unauthorized("Credentials required".to_string()));
    };

    let username_ok = constant_time_eq(creds.0.username(), &config.username);
    let password_ok = constant_time_eq(creds.0.password(), &config.password);

    if username_ok && password_ok {
        Ok(())
    } else {
        Err(AppError::Unauthorized("Invalid credentials".to_string()))
    }
}

/// Compare two secrets without leaking how many leading bytes match.
///
/// Both sides are hashed to fixed-length digests first, so neither the
/// comparison time nor the length of the configured secret is observable.
fn constant_time_eq(supplied: &str, expected: &str) -> bool {
    let supplied = Sha256::digest(supplied.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());
    supplied == expected
}
