//! Request extraction helpers.

pub mod path;
