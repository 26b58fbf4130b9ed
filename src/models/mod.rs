//! Diesel row types mirroring `schema.rs`, converted into domain entities at
//! the repository boundary.

pub mod category;
pub mod changelog;
pub mod config;
pub mod contact;
pub mod integration;
pub mod post;
