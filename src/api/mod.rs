//! API client module for HTTP communication with the scheduling service

mod client;
mod traits;

pub use client::{ApiClient, ApiError, SessionUser};

#[cfg(test)]
pub use traits::{ApiClientTrait, MockApiClientTrait};
