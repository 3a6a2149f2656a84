//! HTTP Header Multimap.
mod name;
mod value;
mod map;
mod iter;
pub mod error;

pub use name::{HeaderName, AsHeaderName, standard};
pub use value::HeaderValue;
pub use map::HeaderMap;
pub use iter::{GetAll, IntoIter, Iter};
pub use error::HeaderError;

#[cfg(test)]
mod test;
