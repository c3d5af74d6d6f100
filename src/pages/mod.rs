//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod judgments;
pub mod transactions;

pub use dashboard::Dashboard;
pub use judgments::Judgments;
pub use transactions::Transactions;
