//! HTTP transport for the AfterShip API.

mod client;
mod transport;

pub use client::HttpClient;
#[cfg(test)]
pub use transport::MockTransport;
pub use transport::{ApiRequest, RawResponse, Transport};
