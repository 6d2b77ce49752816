//! User registry.

pub mod service;

pub use service::UserService;
