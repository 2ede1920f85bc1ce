// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Marquee
//!
//! Streaming client for a paginated upcoming-movies listing API.
//!
//! The crate models exactly one endpoint: the "upcoming movies" listing.
//! Results arrive page by page on a fixed polling cadence, delivered as a
//! lazy async stream that follows the server's `next` link until the chain
//! ends, an error occurs, or the caller cancels.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marquee::{Client, UpcomingQuery, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::from_env(&[])?;
//!     let query = UpcomingQuery::new().items_per_page(10).country("us");
//!
//!     let mut pages = client.upcoming_movies(Some(&query))?;
//!     while let Some(page) = pages.next_page().await {
//!         for movie in &page?.movies {
//!             println!("{} ({})", movie.title, movie.year);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Client                             │
//! │        upcoming_movies(query) → Stream<Result<Page>>        │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────┬───────────┬──────┴────────┬───────────┬──────────┐
//! │  Config  │   HTTP    │    Engine     │ Paginate  │  Decode  │
//! ├──────────┼───────────┼───────────────┼───────────┼──────────┤
//! │ API Key  │ GET       │ Cadence tick  │ next link │ Status   │
//! │ Version  │ Retry     │ Cancellation  │ in body   │ Body     │
//! │ Base URL │ Rate limit│ Backpressure  │           │ JSON     │
//! └──────────┴───────────┴───────────────┴───────────┴──────────┘
//! ```
//!
//! One fetch is in flight at a time; pages are emitted strictly in the order
//! of the server's `next` chain, with a bounded size-1 handoff to the
//! consumer. Steady-state failures arrive as the stream's final `Err` item
//! so callers can tell "exhausted" from "failed".

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Client configuration (API key, version, base URL)
pub mod config;

/// Wire types for the listing endpoint
pub mod model;

/// Query parameters and URL construction
pub mod query;

/// HTTP client with retry and rate limiting
pub mod http;

/// Response parsing
pub mod decode;

/// Next-link resolution
pub mod pagination;

/// The pagination engine and page stream
pub mod engine;

/// Top-level API client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Client;
pub use config::ClientConfig;
pub use engine::{EngineConfig, PageStream};
pub use error::{Error, Result};
pub use model::{LinksMap, Movie, MoviePage, PosterSize, Star};
pub use query::UpcomingQuery;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
