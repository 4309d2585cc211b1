pub mod book;
pub mod cli;
pub mod config;
pub mod pagination;
pub mod provider;
pub mod session;

pub use book::{Book, SearchResult};
pub use pagination::{Cursor, PAGE_SIZE};
pub use provider::api::google::{fetch, parse};
pub use provider::error::{FetchError, ParseError};
