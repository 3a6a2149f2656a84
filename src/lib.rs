//! HTTP/1.x Response Toolkit
//!
//! Parses a complete raw HTTP/1.x response into a [`Response`], decoding chunked transfer coding
//! and the body media type, and renders it back into wire bytes.
//!
//! - [`http`] status code registry
//! - [`headers`] ordered, case-insensitive header multimap
//! - [`body`] response payload and chunked decoding
//! - [`media`] `Content-Type` resolution and media codecs
//! - [`auth`] `WWW-Authenticate` challenge decoding
//! - [`h1`] response message parser
//! - [`response`] the response model and its serialization
#![warn(missing_debug_implementations)]

mod log;
mod matches;

pub mod http;
pub mod headers;
pub mod body;
pub mod media;
pub mod auth;
pub mod h1;
pub mod response;

pub use body::Body;
pub use http::StatusCode;
pub use response::{Config, Response, Status};
