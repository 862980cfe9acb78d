//! # foursquare - A typed client for the Foursquare venues API
//!
//! This crate wraps the Foursquare v2 venue endpoints behind typed request
//! parameters and typed results. Every call is a single authenticated GET;
//! the response envelope is unwrapped, checked for API errors and decoded
//! into the documented shape, while the raw body, headers and rate-limit
//! information stay available for debugging.
//!
//! ## Quick Start
//!
//! ```no_run
//! use foursquare::venues::{SearchIntent, SearchParams, TipsParams, TipSort};
//! use foursquare::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), foursquare::Error> {
//!     let client = Client::builder()
//!         .client_credentials("client-id", "client-secret")
//!         .build()?;
//!
//!     let venues = client
//!         .venues()
//!         .search(&SearchParams::at(40.7243, -74.0018).query("coffee").intent(SearchIntent::Checkin))
//!         .await?;
//!     println!("Found {} venues in {:?}", venues.data.len(), venues.latency);
//!
//!     if let Some(first) = venues.data.first() {
//!         let tips = client
//!             .venues()
//!             .tips(&TipsParams::new(&first.id).sort(TipSort::Popular).limit(3))
//!             .await?;
//!         for tip in tips.iter() {
//!             println!("{}: {}", tip.user.display_name(), tip.text);
//!         }
//!     }
//!
//!     let limits = venues.rate_limit();
//!     println!("{} of {} calls left", limits.remaining, limits.limit);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Failures are reported as [`Error`]. Transport failures, undecodable bodies
//! and API errors are distinct variants; API errors keep the status, the
//! `meta` code, error type and detail, the request id and the rate-limit
//! headers.
//!
//! ```no_run
//! use foursquare::{ApiErrorType, Client, Error};
//!
//! # async fn example(client: Client) {
//! match client.venues().details("no-such-venue").await {
//!     Ok(response) => println!("{}", response.data.name),
//!     Err(Error::Api { error_type: ApiErrorType::ParamError, error_detail, .. }) => {
//!         eprintln!("bad request: {}", error_detail);
//!     }
//!     Err(e) if e.rate_limit().map_or(false, |r| r.is_exhausted()) => {
//!         eprintln!("out of quota: {}", e);
//!     }
//!     Err(e) => eprintln!("request failed: {}", e),
//! }
//! # }
//! ```
//!
//! ## Concurrency
//!
//! [`Client`] is cheap to clone and safe to share between tasks. Use
//! [`ClientBuilder::max_concurrent_requests`] to bound how many requests are
//! in flight at once.

pub mod classify;
mod client;
pub mod config;
pub mod envelope;
mod error;
pub mod query;
pub mod rate_limit;
mod response;
pub mod transport;
pub mod types;
pub mod venues;

pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, Credentials};
pub use error::{ApiErrorType, Error, Result};
pub use rate_limit::RateLimit;
pub use response::Response;
pub use venues::VenueService;
