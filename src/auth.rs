//! Credential checking for the login form.

use log::warn;
use serde::Deserialize;
use thiserror::Error;

/// What a credential backend may fail with (as opposed to saying "no").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("credential check unavailable: {0}")]
    Unavailable(String),
}

/// User-visible outcome of a rejected login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Por favor, ingrese usuario y contraseña")]
    MissingCredentials,
    #[error("Usuario o contraseña incorrectos")]
    InvalidCredentials,
    #[error("Error inesperado. Intenta más tarde.")]
    Unavailable,
}

impl From<CheckError> for LoginError {
    fn from(_: CheckError) -> Self {
        LoginError::Unavailable
    }
}

pub trait CredentialCheck {
    /// `Ok(true)` accepts the pair, `Ok(false)` rejects it.
    fn check(&self, username: &str, password: &str) -> Result<bool, CheckError>;
}

/// The single hardcoded username/password pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FixedCredentials {
    pub username: String,
    pub password: String,
}

impl Default for FixedCredentials {
    fn default() -> Self {
        Self {
            username: "admin".into(),
            password: "1234".into(),
        }
    }
}

impl CredentialCheck for FixedCredentials {
    fn check(&self, username: &str, password: &str) -> Result<bool, CheckError> {
        Ok(username == self.username && password == self.password)
    }
}

/// Field presence check that runs before anything is sent to a checker.
pub fn precheck(username: &str, password: &str) -> Result<(), LoginError> {
    if username.is_empty() || password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    Ok(())
}

pub fn verify(
    checker: &impl CredentialCheck,
    username: &str,
    password: &str,
) -> Result<(), LoginError> {
    match checker.check(username, password) {
        Ok(true) => Ok(()),
        Ok(false) => Err(LoginError::InvalidCredentials),
        Err(e) => {
            warn!("{e}");
            Err(e.into())
        }
    }
}

/// Busy flag and inline error of the login form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub busy: bool,
    pub error: Option<LoginError>,
}

impl LoginForm {
    /// Starts an attempt. Returns `true` when the caller should run the
    /// credential check and hand its outcome to [`LoginForm::finish`].
    ///
    /// Ignored while a check is pending. Empty fields set the error without
    /// going busy.
    pub fn begin(&mut self, username: &str, password: &str) -> bool {
        if self.busy {
            return false;
        }
        if let Err(err) = precheck(username, password) {
            self.error = Some(err);
            return false;
        }
        self.error = None;
        self.busy = true;
        true
    }

    /// Records the outcome of the check started by `begin`. Returns `true`
    /// when the pair was accepted.
    pub fn finish(&mut self, outcome: Result<(), LoginError>) -> bool {
        self.busy = false;
        self.error = outcome.err();
        self.error.is_none()
    }
}
