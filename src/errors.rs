use serde_json::Value;
use thiserror::Error;

use crate::config::ConfigError;
use crate::rpc::protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};

/// Class of a protocol-level failure, keyed by its JSON-RPC error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    Internal(i64),
}

impl FaultKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            PARSE_ERROR => Self::ParseError,
            INVALID_REQUEST => Self::InvalidRequest,
            METHOD_NOT_FOUND => Self::MethodNotFound,
            INVALID_PARAMS => Self::InvalidParams,
            other => Self::Internal(other),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::ParseError => PARSE_ERROR,
            Self::InvalidRequest => INVALID_REQUEST,
            Self::MethodNotFound => METHOD_NOT_FOUND,
            Self::InvalidParams => INVALID_PARAMS,
            Self::Internal(code) => code,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::ParseError => "Parse error",
            Self::InvalidRequest => "Invalid Request",
            Self::MethodNotFound => "Method not found",
            Self::InvalidParams => "Invalid parameters",
            Self::Internal(_) => "Internal error",
        }
    }
}

/// A recoverable protocol or parameter failure.
///
/// Always turned into the `error` member of a response by the request handler; it never
/// crosses the handler boundary. `id` is the request id to echo, `None` serialises as `null`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", .kind.message())]
pub struct RpcFault {
    pub kind: FaultKind,
    pub id: Option<Value>,
}

impl RpcFault {
    pub fn new(code: i64, id: Option<Value>) -> Self {
        Self {
            kind: FaultKind::from_code(code),
            id,
        }
    }

    pub fn parse_error() -> Self {
        Self::new(PARSE_ERROR, None)
    }

    pub fn invalid_request() -> Self {
        Self::new(INVALID_REQUEST, None)
    }

    pub fn invalid_params(id: Option<Value>) -> Self {
        Self::new(INVALID_PARAMS, id)
    }

    pub fn internal(id: Option<Value>) -> Self {
        Self::new(INTERNAL_ERROR, id)
    }

    pub fn code(&self) -> i64 {
        self.kind.code()
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

/// Process-level failures that end the server, as opposed to per-request faults.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("transport i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
