//! Request-level entry points.
//!
//! Each command maps to one endpoint of the HTTP front end and returns
//! `CommandResult`; the transport turns errors into `{ "error": message }`
//! with the status from [`CommandError::status_code`].

pub mod hud_cmds;
pub mod preview_cmds;
pub mod validate_cmds;

use crate::types::errors::CommandError;
use serde::Serialize;

/// JSON body sent for a failed request. Carries the message only.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Status code and body for a failed command.
pub fn error_response(error: &CommandError) -> (u16, ErrorBody) {
    (
        error.status_code(),
        ErrorBody {
            error: error.to_string(),
        },
    )
}
