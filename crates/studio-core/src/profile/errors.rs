use crate::errors::StudioError;

/// Error returned by the authentication backend, carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
    /// Backend error code, e.g. `mfa_factor_not_found`.
    pub code: Option<String>,
    /// HTTP status when the backend supplied one.
    pub status: Option<u16>,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            status: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

impl StudioError for AuthError {
    fn error_code(&self) -> &'static str {
        "AUTH_ERROR"
    }

    /// 4xx responses are caused by the caller's session or input.
    fn is_user_error(&self) -> bool {
        self.status.is_some_and(|s| (400..500).contains(&s))
    }
}
