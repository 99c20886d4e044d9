//! Errors raised while turning descriptors into components

use thiserror::Error;

use crate::component::ElectricalType;

/// A descriptor that cannot be turned into a component
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// Pin lists that match none of the accepted unit shapes
    #[error("malformed pins in '{component}': {reason}")]
    MalformedPins { component: String, reason: String },

    /// A required attribute is absent
    #[error("component '{component}' is missing required field `{field}`")]
    MissingRequiredField {
        component: String,
        field: &'static str,
    },

    /// A pin type keyword outside the known set
    #[error(
        "unknown electrical type '{value}' on pin {pin} of '{component}' (expected one of: {})",
        expected_keywords()
    )]
    UnknownElectricalType {
        component: String,
        pin: String,
        value: String,
    },
}

impl DescriptorError {
    pub fn malformed(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPins {
            component: component.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(component: impl Into<String>, field: &'static str) -> Self {
        Self::MissingRequiredField {
            component: component.into(),
            field,
        }
    }

    pub fn unknown_type(
        component: impl Into<String>,
        pin: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::UnknownElectricalType {
            component: component.into(),
            pin: pin.into(),
            value: value.into(),
        }
    }
}

fn expected_keywords() -> String {
    ElectricalType::ALL
        .iter()
        .map(|t| t.keyword())
        .collect::<Vec<_>>()
        .join(", ")
}
