//! Secure credential handling using the secrecy crate
//!
//! Hopper carries two credentials: the Cosmos DB access key and the MongoDB
//! connection string. Both live in memory as [`SecretString`], which zeroes
//! its memory on drop and redacts itself in `Debug` output, so a panic
//! message or a `{:?}` log line can never leak them. Reading the value
//! requires an explicit `expose_secret()` call.
//!
//! # Example
//!
//! ```rust
//! use hopper::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let key = secret_string("account-key".to_string());
//! assert_eq!(key.expose_secret(), "account-key");
//! assert!(!format!("{key:?}").contains("account-key"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// String newtype carrying the trait impls `Secret` requires
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl SecretValue {
    /// True when the credential is blank (validation treats that as missing)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scheme checks on connection strings without exposing the whole value
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl From<SecretValue> for String {
    fn from(mut s: SecretValue) -> Self {
        std::mem::take(&mut s.0)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// A string credential: zeroed on drop, redacted in Debug
pub type SecretString = Secret<SecretValue>;

/// Wraps a plain string in a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}
