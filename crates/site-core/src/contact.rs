//! Contact-form logic shared between the web glue and host-side tests.
//!
//! The remote endpoint accepts `{name, email, message}` and answers
//! `{success, error}`. Everything here is pure: validation, the wire types,
//! and the mapping from a transport outcome to user-facing status text.

use serde::{Deserialize, Serialize};

pub const MSG_MISSING_FIELDS: &str = "Please fill out all fields.";
pub const MSG_SENDING: &str = "Sending...";
pub const MSG_SENT: &str = "Message sent!";
pub const MSG_SEND_FAILED: &str = "Error sending message.";
pub const MSG_CONNECTION: &str = "Connection error. Please try again later.";

/// Body POSTed to the contact endpoint.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Endpoint reply. Lenient on shape so a malformed body degrades to a
/// generic failure instead of a parse error surfacing to the user.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContactReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{}", MSG_MISSING_FIELDS)]
    MissingFields,
}

/// Trim all three fields and refuse the submission when any is empty.
/// No network traffic happens on the error path.
pub fn build_request(name: &str, email: &str, message: &str) -> Result<ContactRequest, ContactError> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ContactError::MissingFields);
    }
    Ok(ContactRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    })
}

/// Terminal state of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Sent,
    Rejected(String),
    ConnectionFailed,
}

impl SubmitStatus {
    pub fn text(&self) -> &str {
        match self {
            SubmitStatus::Sent => MSG_SENT,
            SubmitStatus::Rejected(msg) => msg,
            SubmitStatus::ConnectionFailed => MSG_CONNECTION,
        }
    }

    /// CSS class the status element carries while showing this state.
    pub fn css_class(&self) -> &'static str {
        match self {
            SubmitStatus::Sent => "success",
            _ => "error",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitStatus::Sent)
    }
}

/// Map an HTTP outcome to a status. Application-level rejection and a non-2xx
/// or unparseable body all read the same to the user; a server-supplied
/// `error` string wins over the generic text.
pub fn reply_status(http_ok: bool, reply: Option<ContactReply>) -> SubmitStatus {
    match reply {
        Some(r) if http_ok && r.success => SubmitStatus::Sent,
        Some(ContactReply {
            error: Some(msg), ..
        }) => SubmitStatus::Rejected(msg),
        _ => SubmitStatus::Rejected(MSG_SEND_FAILED.to_owned()),
    }
}
