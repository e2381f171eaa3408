pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod rpc;
pub mod transport;

pub use errors::{AppError, RpcFault};
pub use rpc::protocol::Response;
pub use rpc::server::{handle_line, handle_request};
pub use transport::stdio::{serve, serve_stdio, ServeSummary};
