//! Opaque extension payloads.
//!
//! Every schema object carries an `ext` field for vendor data the standard does
//! not cover. The payload is kept as the exact bytes seen on input so it
//! re-encodes unchanged, whitespace and key order included.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;

/// Raw, uninterpreted JSON carried in an `ext` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ext(Box<RawValue>);

impl Ext {
    /// Wrap a JSON text. Fails if `json` is not a single well-formed JSON value.
    pub fn from_json(json: impl Into<String>) -> Result<Self, serde_json::Error> {
        RawValue::from_string(json.into()).map(Ext)
    }

    /// Serialize `value` into a new extension payload.
    pub fn from_value<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::value::to_raw_value(value).map(Ext)
    }

    /// The payload exactly as it will be written.
    pub fn get(&self) -> &str {
        self.0.get()
    }

    /// Parse the payload into a caller-chosen type.
    pub fn parse<'a, T: Deserialize<'a>>(&'a self) -> Result<T, serde_json::Error> {
        serde_json::from_str(self.0.get())
    }

    /// Parse the payload into an untyped tree.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(self.0.get())
    }
}

/// Byte equality of the raw payload.
impl PartialEq for Ext {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Eq for Ext {}

impl std::fmt::Display for Ext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.get())
    }
}
