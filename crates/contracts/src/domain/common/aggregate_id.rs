use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait implemented by aggregate identifier newtypes.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id as its canonical string form.
    fn as_string(&self) -> String;

    /// Parse the id from its canonical string form.
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s).map_err(|e| format!("Invalid UUID: {}", e))
    }
}
