//! JSON-RPC wire representations and formatting utilities
//!
//! Provides the response envelope, the standard error codes, and the mapping from
//! `RpcFault`s to error responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{FaultKind, RpcFault};

pub const JSONRPC_VERSION: &str = "2.0";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

/// Emitted verbatim if a response cannot be serialized.
const FALLBACK_LINE: &str =
    r#"{"jsonrpc":"2.0","id":null,"error":{"code":-32603,"message":"Internal error"}}"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
}

impl ErrorObject {
    pub fn from_code(code: i64) -> Self {
        Self {
            code,
            message: FaultKind::from_code(code).message().to_string(),
        }
    }
}

/// Exactly one of `result` or `error`, flattened into the response object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Result(Value),
    Error(ErrorObject),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }

    pub fn error_code(&self) -> Option<i64> {
        match &self.outcome {
            Outcome::Error(error) => Some(error.code),
            Outcome::Result(_) => None,
        }
    }
}

pub fn json_rpc_result(id: Value, result: Value) -> Response {
    Response {
        jsonrpc: JSONRPC_VERSION.to_string(),
        id,
        outcome: Outcome::Result(result),
    }
}

pub fn json_rpc_error(id: Value, code: i64) -> Response {
    Response {
        jsonrpc: JSONRPC_VERSION.to_string(),
        id,
        outcome: Outcome::Error(ErrorObject::from_code(code)),
    }
}

pub fn fault_to_json_rpc(fault: RpcFault) -> Response {
    let code = fault.code();
    json_rpc_error(fault.id.unwrap_or(Value::Null), code)
}

/// Serializes a response as a single JSON line without the trailing newline.
pub fn encode_response(response: &Response) -> String {
    match serde_json::to_string(response) {
        Ok(line) => line,
        Err(err) => {
            tracing::error!(error = %err, "response serialization failed");
            FALLBACK_LINE.to_string()
        }
    }
}
