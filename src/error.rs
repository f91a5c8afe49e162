use thiserror::Error;

/// Input rejections surfaced to the user. None of them change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a username")]
    EmptyUsername,

    #[error("Please enter a password")]
    EmptyPassword,

    #[error("Password must be at least 6 characters with one uppercase letter and one special character")]
    WeakPassword,

    #[error("Please enter a name")]
    EmptyName,

    #[error("Please enter a score")]
    EmptyScore,

    #[error("Score must be a number between 0 and 100")]
    InvalidScore,
}

impl ValidationError {
    pub fn code(self) -> &'static str {
        match self {
            ValidationError::EmptyUsername => "empty_username",
            ValidationError::EmptyPassword => "empty_password",
            ValidationError::WeakPassword => "weak_password",
            ValidationError::EmptyName => "empty_name",
            ValidationError::EmptyScore => "empty_score",
            ValidationError::InvalidScore => "invalid_score",
        }
    }

    /// Which form the message belongs to.
    pub fn form(self) -> &'static str {
        match self {
            ValidationError::EmptyUsername
            | ValidationError::EmptyPassword
            | ValidationError::WeakPassword => "login",
            ValidationError::EmptyName
            | ValidationError::EmptyScore
            | ValidationError::InvalidScore => "addStudent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("log in first")]
    NotAuthenticated,

    #[error("a session is already active")]
    AlreadyAuthenticated,

    #[error("logout has not been requested")]
    LogoutNotRequested,
}

impl SessionError {
    pub fn code(self) -> &'static str {
        match self {
            SessionError::Validation(v) => v.code(),
            SessionError::NotAuthenticated => "not_authenticated",
            SessionError::AlreadyAuthenticated => "already_authenticated",
            SessionError::LogoutNotRequested => "logout_not_requested",
        }
    }
}
