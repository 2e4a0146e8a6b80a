use derive_more::Display;

/// Failure talking to the attendance service.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection, DNS or timeout trouble.
    #[display(fmt = "network error: {}", _0)]
    Transport(String),
    #[display(fmt = "session is not authorized")]
    Unauthorized,
    /// Refused locally; the session lacks the right for this action.
    #[display(fmt = "{} is not permitted for this account", _0)]
    Forbidden(&'static str),
    /// Refused locally before sending; the request would be malformed.
    #[display(fmt = "invalid request: {}", _0)]
    Invalid(&'static str),
    /// Non-success reply; carries the server's `message` when it sent one.
    #[display(fmt = "server replied {}: {}", status, message)]
    Status { status: u16, message: String },
    #[display(fmt = "unexpected response body: {}", _0)]
    Decode(String),
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Failures the marking sheet reports to the surrounding UI.
///
/// A missing record is not in here: it is the normal "not marked yet" outcome.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    /// The view cannot be shown; blocks the sheet.
    #[display(fmt = "could not load attendance: {}", _0)]
    LoadFailure(ApiError),
    /// Marks are kept so the user can retry.
    #[display(fmt = "could not save attendance: {}", _0)]
    SubmitFailure(ApiError),
}

impl std::error::Error for AttendanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AttendanceError::LoadFailure(e) | AttendanceError::SubmitFailure(e) => Some(e),
        }
    }
}
