//! Descriptor loading and normalization
//!
//! A descriptor file is YAML holding either a single component mapping or a
//! list of them. [`load`] parses the file; [`normalize`] turns each
//! descriptor into a [`Component`](crate::component::Component).

pub mod error;
pub mod normalize;
pub mod raw;

pub use error::DescriptorError;
pub use normalize::{normalize, normalize_pins};
pub use raw::{ComponentDescriptor, Document, Label, RawOrderCode, RawPin, RawUnit};

use serde_yaml::Value;

use crate::error::LoadError;

/// Parse YAML source into a descriptor document
pub fn load(source: &str) -> Result<Document, LoadError> {
    let value: Value = serde_yaml::from_str(source)?;
    match value {
        Value::Mapping(_) => Ok(Document::Single(Box::new(serde_yaml::from_value(value)?))),
        Value::Sequence(_) => Ok(Document::Batch(serde_yaml::from_value(value)?)),
        other => Err(LoadError::UnexpectedDocument {
            found: kind_of(&other),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "an empty document",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
