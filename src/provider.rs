pub mod api;
pub mod error;

pub use error::{FetchError, ParseError, RequestError};
