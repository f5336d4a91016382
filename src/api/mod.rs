//! Platform API boundary: wire schema, HTTP client, and the background
//! worker the UI talks to.

mod client;
mod error;
pub mod schema;
mod worker;

#[cfg(test)]
mod tests;

pub use client::VisionClient;
pub use error::ApiError;
pub use worker::{ApiEvent, ApiRequest, ApiWorker};
