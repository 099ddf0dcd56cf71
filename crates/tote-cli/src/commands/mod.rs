//! Command handlers

pub mod config;
pub mod entry;
pub mod schema;
pub mod tag;
