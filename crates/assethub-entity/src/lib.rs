//! # assethub-entity
//!
//! Domain entity models for AssetHub. Every struct in this crate represents
//! a database table row or a domain value object. Row types derive
//! `sqlx::FromRow` so the PostgreSQL repositories can map them directly.

pub mod asset;
pub mod audit;
pub mod catalog;
pub mod photo;
pub mod qr;
pub mod user;
