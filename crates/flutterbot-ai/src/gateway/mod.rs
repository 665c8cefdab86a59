//! OpenAI-compatible chat-completion gateway.
//!
//! Implements [`CompletionGateway`](crate::CompletionGateway) over
//! `POST {endpoint}` with bearer authentication, as served by Groq and
//! other OpenAI-style providers.

mod api;
mod client;
mod config;


pub use client::ChatCompletionClient;
pub use config::GatewayConfig;
