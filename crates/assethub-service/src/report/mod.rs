//! Read-only reports.

pub mod dashboard;

pub use dashboard::{DashboardService, DashboardStats};
