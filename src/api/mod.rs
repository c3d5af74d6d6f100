//! API Layer
//!
//! Typed client for the trading agent's REST backend.

pub mod client;

pub use client::*;
