//! HTTP/1.x Protocol.
//!
//! - [`parser`] contains the response message parser.

pub mod parser;

pub use parser::{Message, StatusLine, parse, parse_status_line};
