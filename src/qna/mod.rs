//! Client for the hosted question answering service.

mod client;

pub use client::QnaClient;
