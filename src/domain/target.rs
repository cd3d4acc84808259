//! Backend selection and store namespace types
//!
//! This module provides the two types every stage of an ingestion request
//! shares: which backend handles the request, and which database/collection
//! pair it lands in.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::IngestError;
use crate::domain::result::Result;

/// The concrete document store handling a request
///
/// Decided exactly once per request from the `use_mongodb` deployment flag;
/// downstream code only ever sees the store abstraction, never the flag.
/// The two backends differ in atomicity: Cosmos DB inserts documents one at
/// a time with per-document failure isolation, MongoDB inserts the whole
/// batch in a single all-or-nothing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackendKind {
    /// Azure Cosmos DB (per-document inserts)
    CosmosDb,
    /// MongoDB (whole-batch insert)
    MongoDb,
}

impl BackendKind {
    /// Resolves the backend from the `use_mongodb` deployment flag
    ///
    /// The flag must parse as a boolean: `true` selects MongoDB, `false`
    /// selects Cosmos DB. Parsing trims whitespace and ignores case, so
    /// values like `"True"` or `" FALSE "` are accepted. Anything else is a
    /// configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use hopper::domain::BackendKind;
    ///
    /// assert_eq!(BackendKind::from_flag("true").unwrap(), BackendKind::MongoDb);
    /// assert_eq!(BackendKind::from_flag("false").unwrap(), BackendKind::CosmosDb);
    /// assert!(BackendKind::from_flag("maybe").is_err());
    /// ```
    pub fn from_flag(flag: &str) -> Result<Self> {
        match flag.trim().to_ascii_lowercase().parse::<bool>() {
            Ok(true) => Ok(BackendKind::MongoDb),
            Ok(false) => Ok(BackendKind::CosmosDb),
            Err(_) => Err(IngestError::Configuration(format!(
                "use_mongodb flag value {flag:?} is not a valid boolean"
            ))),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::CosmosDb => write!(f, "CosmosDB"),
            BackendKind::MongoDb => write!(f, "MongoDB"),
        }
    }
}

/// The database/collection pair a batch is provisioned into
///
/// Both names come from deployment configuration and are required non-empty.
/// Displayed as `{database}/{collection}` in report and error messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreTarget {
    /// Database (Cosmos DB database / MongoDB database) name
    pub database: String,
    /// Collection (Cosmos DB container / MongoDB collection) name
    pub collection: String,
}

impl StoreTarget {
    /// Creates a new target, rejecting empty names
    pub fn new(database: impl Into<String>, collection: impl Into<String>) -> Result<Self> {
        let database = database.into();
        let collection = collection.into();
        if database.trim().is_empty() {
            return Err(IngestError::Configuration(
                "store database name cannot be empty".to_string(),
            ));
        }
        if collection.trim().is_empty() {
            return Err(IngestError::Configuration(
                "store collection name cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            database,
            collection,
        })
    }
}

impl fmt::Display for StoreTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.database, self.collection)
    }
}
