//! Audit log: appending inside a unit of work and reading it back.

pub mod describe;
pub mod log;
pub mod service;

pub use log::AuditLog;
pub use service::AuditService;
