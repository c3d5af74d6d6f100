//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod allocation;
pub mod chart;
pub mod error_banner;
pub mod loading;
pub mod nav;

pub use allocation::AllocationList;
pub use chart::{AllocationPie, PerformanceBars};
pub use error_banner::ErrorBanner;
pub use loading::Loading;
pub use nav::Nav;
