//! Core library components.
//!
//! This module contains the secret-retrieval protocol: request
//! validation, broker invocation, envelope decoding and batch resolution.

pub mod binding;
pub mod broker;
pub mod config;
pub mod constants;
pub mod request;
pub mod resolver;
pub mod response;
pub mod types;
