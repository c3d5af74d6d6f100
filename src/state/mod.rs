//! State Management
//!
//! Per-page fetch-state handling. Each page owns its own data; there is no
//! cross-page shared state and no client-side cache.

pub mod fetch;

pub use fetch::{create_fetch_state, FetchHandle, FetchState};
