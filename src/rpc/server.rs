//! The request handling pipeline
//!
//! Decodes one raw request, validates the JSON-RPC envelope, dispatches to the method table
//! and always produces a response. Faults never escape `handle_request`.

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::methods::lookup;
use crate::errors::RpcFault;
use crate::rpc::protocol::{
    encode_response, fault_to_json_rpc, json_rpc_error, json_rpc_result, Response,
    JSONRPC_VERSION, METHOD_NOT_FOUND,
};

/// A request whose envelope passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Value,
    pub params: Value,
    pub id: Value,
}

pub fn decode(raw: &str) -> Result<Value, RpcFault> {
    serde_json::from_str(raw.trim()).map_err(|err| {
        debug!(error = %err, "request is not well-formed json");
        RpcFault::parse_error()
    })
}

pub fn validate(payload: Value) -> Result<Request, RpcFault> {
    let Value::Object(mut envelope) = payload else {
        debug!("request is not a json object");
        return Err(RpcFault::invalid_request());
    };

    if envelope.get("jsonrpc").and_then(Value::as_str) != Some(JSONRPC_VERSION) {
        debug!("request jsonrpc member is missing or not \"2.0\"");
        return Err(RpcFault::invalid_request());
    }

    let (Some(method), Some(id)) = (envelope.remove("method"), envelope.remove("id")) else {
        debug!("request is missing method or id");
        return Err(RpcFault::invalid_request());
    };

    let params = envelope
        .remove("params")
        .unwrap_or_else(|| Value::Array(Vec::new()));

    Ok(Request { method, params, id })
}

/// Routes a validated request. An unknown method is answered directly with a
/// method-not-found error rather than through a fault.
pub fn dispatch(request: Request) -> Response {
    let Some(handler) = request.method.as_str().and_then(lookup) else {
        return json_rpc_error(request.id, METHOD_NOT_FOUND);
    };

    match handler(request.params, &request.id) {
        Ok(result) => json_rpc_result(request.id, result),
        Err(fault) => fault_to_json_rpc(fault),
    }
}

pub fn handle_request(raw: &str) -> Response {
    let request = match decode(raw).and_then(validate) {
        Ok(request) => request,
        Err(fault) => {
            let response = fault_to_json_rpc(fault);
            audit("-", &response);
            return response;
        }
    };

    let method = method_label(&request.method);
    let response = dispatch(request);
    audit(&method, &response);
    response
}

/// One request line in, one response line out (without the line terminator).
pub fn handle_line(raw: &str) -> String {
    encode_response(&handle_request(raw))
}

fn method_label(method: &Value) -> String {
    match method {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    }
}

fn audit(method: &str, response: &Response) {
    match response.error_code() {
        Some(code) => info!(method = %method, outcome = "failure", code, "rpc call audited"),
        None => info!(method = %method, outcome = "success", "rpc call audited"),
    }
}
