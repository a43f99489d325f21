//! Client-record management over a SQLite store.
//!
//! `ClientStore` is the façade: schema initialization plus record-level
//! CRUD for clients and their phone numbers, every operation committing
//! before it returns.

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use db::ClientStore;
pub use error::StorageError;
