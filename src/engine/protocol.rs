//! Transport-neutral request/response types for the request service.

use std::fmt;

/// Response status, mirroring the HTTP codes a transport would send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
    NotFound,
    MethodNotAllowed,
}

impl Status {
    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::MethodNotAllowed => 405,
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        self == Status::Ok
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::NotFound => "Not Found",
            Status::MethodNotAllowed => "Method Not Allowed",
        };
        write!(f, "{} {reason}", self.code())
    }
}

/// A response body paired with its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub body: String,
}

impl Response {
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Response {
            status: Status::Ok,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn error(status: Status, body: impl Into<String>) -> Self {
        Response {
            status,
            body: body.into(),
        }
    }
}
