//! HTTP transport

pub mod client;

pub use client::{ApiRequest, HttpClient, HttpClientBuilder, HttpMethod, RawResponse, Transport};
