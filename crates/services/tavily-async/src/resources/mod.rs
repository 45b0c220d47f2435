//! Endpoint handles returned by [`crate::Client::search`] and
//! [`crate::Client::extract`].

pub mod extract;
pub mod search;

pub use extract::Extract;
pub use search::Search;
