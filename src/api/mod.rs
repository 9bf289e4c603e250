//! Remote API access
//!
//! `http` holds the transport capability and its reqwest implementation;
//! `client` knows the actual-http-api endpoints.

pub mod client;
pub mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{decode_data, ActualApi};
pub use http::{HttpClient, ReqwestHttpClient};
