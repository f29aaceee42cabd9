//! Core module - records and the SQLite store

pub mod record;
pub mod store;
