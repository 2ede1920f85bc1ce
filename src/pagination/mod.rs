//! Pagination module
//!
//! The listing API paginates with a `next` URL in the response body's links
//! map. This module resolves that link into a continue/done decision for the
//! engine loop.

mod types;

pub use types::{resolve_next, NextPage};

#[cfg(test)]
mod tests;
