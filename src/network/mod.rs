//! HTTP networking module
//!
//! Provides the HTTP client used to reach the search provider.

mod client;

pub use client::{HttpClient, HttpResponse};
