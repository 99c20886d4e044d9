//! Serde types mirroring the YAML descriptor format

use std::fmt;

use serde::Deserialize;
use serde_yaml::Value;

/// Designator used when a descriptor does not name one
pub const DEFAULT_DESIGNATOR: &str = "IC";

/// A scalar that may be written as text or as an integer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Integer(i64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Integer(n) => write!(f, "{}", n),
            Label::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Text(s.to_string())
    }
}

impl From<i64> for Label {
    fn from(n: i64) -> Self {
        Label::Integer(n)
    }
}

/// `[name, number, type]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPin(pub Label, pub Label, pub String);

/// `[supplier, code]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawOrderCode(pub Label, pub Label);

/// A unit in the explicit form: each side is listed by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawUnit {
    #[serde(default)]
    pub left: Vec<Vec<RawPin>>,
    #[serde(default)]
    pub right: Vec<Vec<RawPin>>,
}

/// One component as written in a descriptor file
///
/// Required attributes are optional here so that their absence is reported
/// as a missing field of a named component rather than a YAML error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ComponentDescriptor {
    pub name: Option<Label>,
    pub designator: Option<Label>,
    pub footprint: Option<String>,
    pub datasheet: Option<String>,
    #[serde(default)]
    pub ordercodes: Vec<RawOrderCode>,
    pub description: Option<String>,
    /// Nested `[left, right]` lists, one unit or several
    pub pins: Option<Value>,
    /// Explicit `{left, right}` units
    pub units: Option<Vec<RawUnit>>,
}

impl ComponentDescriptor {
    /// Name used to identify this descriptor in error messages
    pub fn display_name(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.to_string(),
            None => format!("component #{}", index + 1),
        }
    }

    /// The reference designator, falling back to `IC`
    pub fn designator(&self) -> String {
        self.designator
            .as_ref()
            .map(Label::to_string)
            .unwrap_or_else(|| DEFAULT_DESIGNATOR.to_string())
    }
}

/// A loaded descriptor file: one component or an ordered batch
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Single(Box<ComponentDescriptor>),
    Batch(Vec<ComponentDescriptor>),
}

impl Document {
    /// All descriptors in file order
    pub fn descriptors(&self) -> &[ComponentDescriptor] {
        match self {
            Document::Single(d) => std::slice::from_ref(d.as_ref()),
            Document::Batch(ds) => ds,
        }
    }
}
