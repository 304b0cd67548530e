//! REST client for the Blockonomics API.
//!
//! Implements [`PaymentProvider`](super::PaymentProvider) using `reqwest`,
//! with a bounded per-request timeout, bearer authentication, and an optional
//! outbound rate limit.

mod client;
mod endpoints;
mod protocol;

pub use client::BlockonomicsClient;
