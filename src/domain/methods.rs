//! Arithmetic methods exposed over JSON-RPC
//!
//! Provides `add`, `sum` and `subtract` and the fixed table the dispatcher routes through.

use serde_json::Value;

use crate::domain::numeric::{leading_pair, total, Operand};
use crate::errors::RpcFault;

pub type MethodResult = Result<Value, RpcFault>;

/// Uniform method signature: params and the request id.
pub type MethodFn = fn(Value, &Value) -> MethodResult;

pub static METHODS: &[(&str, MethodFn)] = &[("add", add), ("sum", sum), ("subtract", subtract)];

/// Exact, case-sensitive lookup.
pub fn lookup(method: &str) -> Option<MethodFn> {
    METHODS
        .iter()
        .find(|(name, _)| *name == method)
        .map(|(_, handler)| *handler)
}

pub fn add(params: Value, id: &Value) -> MethodResult {
    let Value::Array(items) = params else {
        return Err(RpcFault::invalid_params(Some(id.clone())));
    };
    let (left, right) =
        leading_pair(&items).ok_or_else(|| RpcFault::invalid_params(Some(id.clone())))?;
    into_result(left.add(right), id)
}

/// Failures here echo a `null` id even when the request carried one.
pub fn sum(params: Value, _id: &Value) -> MethodResult {
    let Value::Array(items) = params else {
        return Err(RpcFault::invalid_params(None));
    };
    let amount = total(&items).ok_or_else(|| RpcFault::invalid_params(None))?;
    amount.into_value().ok_or_else(|| RpcFault::internal(None))
}

pub fn subtract(params: Value, id: &Value) -> MethodResult {
    let operands = match &params {
        Value::Object(named) => named
            .get("minuend")
            .and_then(Operand::from_value)
            .zip(named.get("subtrahend").and_then(Operand::from_value)),
        Value::Array(items) => leading_pair(items),
        _ => None,
    };
    let (minuend, subtrahend) =
        operands.ok_or_else(|| RpcFault::invalid_params(Some(id.clone())))?;
    into_result(minuend.sub(subtrahend), id)
}

fn into_result(operand: Operand, id: &Value) -> MethodResult {
    operand
        .into_value()
        .ok_or_else(|| RpcFault::internal(Some(id.clone())))
}
