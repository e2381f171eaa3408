//! JSON-RPC 2.0 request handling
//!
//! Provides the wire envelope and the decode, validate, dispatch pipeline that turns one
//! request line into one response line.

pub mod protocol;
pub mod server;
