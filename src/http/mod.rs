//! HTTP transport module
//!
//! GET-only client with retry, rate limiting, and backoff strategies.
//! The pagination engine drives all requests through this client so a slow
//! or flaky listing API never turns into a request storm.

mod client;
mod rate_limit;

pub use client::{BackoffType, HttpClient, HttpClientConfig, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
