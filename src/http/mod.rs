//! HTTP Protocol.
mod status;

pub use status::{StatusCode, code_for, reason_for};
