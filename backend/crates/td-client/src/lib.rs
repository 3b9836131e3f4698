//! HTTP client for the ToneDown analysis backend.

pub(crate) mod client;


pub use client::{Client, ClientError, ClientResult, UploadRequest};
