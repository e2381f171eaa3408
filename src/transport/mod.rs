//! Transports that feed request lines to the handler

pub mod stdio;
