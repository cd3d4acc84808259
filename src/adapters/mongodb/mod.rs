//! MongoDB integration
//!
//! This module provides integration with MongoDB for storing JSON
//! documents with all-or-nothing batch writes.

pub mod client;
pub mod store;

pub use client::MongoDbClient;
pub use store::MongoStore;
