//! Pin normalization
//!
//! Descriptors may list pins in the compact nested form inherited from the
//! first generation of part files, or in the explicit `units:` form. Both
//! end up as a list of [`Unit`]s with resolved electrical types.
//!
//! The nested form is one of:
//!
//! ```yaml
//! pins: [left-groups]                  # one unit, left side only
//! pins: [left-groups, right-groups]    # one unit, both sides
//! pins: [~, right-groups]              # one unit, right side only
//! pins: [[left, right], [left, right]] # several units
//! ```
//!
//! Whether the outer list is a single unit or a list of units is decided
//! by looking at the first non-empty entry three levels down: a pin there
//! means a single unit.

use serde_yaml::Value;

use crate::component::{Component, ElectricalType, OrderCode, Pin, PinGroup, Unit};

use super::error::DescriptorError;
use super::raw::{ComponentDescriptor, RawPin, RawUnit};

/// Turn a descriptor into a normalized component
pub fn normalize(
    descriptor: &ComponentDescriptor,
    index: usize,
) -> Result<Component, DescriptorError> {
    let component = descriptor.display_name(index);
    let name = descriptor
        .name
        .as_ref()
        .ok_or_else(|| DescriptorError::missing(&component, "name"))?
        .to_string();

    let raw_units = match (&descriptor.pins, &descriptor.units) {
        (Some(_), Some(_)) => {
            return Err(DescriptorError::malformed(
                &component,
                "`pins` and `units` are mutually exclusive",
            ))
        }
        (Some(pins), None) => normalize_pins(&component, pins)?,
        (None, Some(units)) if units.is_empty() => {
            return Err(DescriptorError::malformed(
                &component,
                "`units` must list at least one unit",
            ))
        }
        (None, Some(units)) => units.clone(),
        (None, None) => return Err(DescriptorError::missing(&component, "pins")),
    };

    let units = raw_units
        .iter()
        .map(|unit| resolve_unit(&component, unit))
        .collect::<Result<Vec<_>, _>>()?;

    let order_codes = descriptor
        .ordercodes
        .iter()
        .map(|code| OrderCode {
            supplier: code.0.to_string(),
            code: code.1.to_string(),
        })
        .collect();

    Ok(Component {
        name,
        designator: descriptor.designator(),
        footprint: descriptor.footprint.clone(),
        datasheet: descriptor.datasheet.clone(),
        order_codes,
        units,
    })
}

/// Split the nested `pins:` form into explicit units
pub fn normalize_pins(component: &str, pins: &Value) -> Result<Vec<RawUnit>, DescriptorError> {
    let top = pins
        .as_sequence()
        .ok_or_else(|| DescriptorError::malformed(component, "`pins` must be a list"))?;

    let probe = first_entry(pins, 3)
        .ok_or_else(|| DescriptorError::malformed(component, "no pins found"))?;

    let units: Vec<&Value> = if is_pin(probe) {
        vec![pins]
    } else {
        top.iter().collect()
    };

    units
        .into_iter()
        .enumerate()
        .map(|(i, unit)| split_unit(component, i, unit))
        .collect()
}

fn split_unit(component: &str, i: usize, unit: &Value) -> Result<RawUnit, DescriptorError> {
    let sides = unit.as_sequence().ok_or_else(|| {
        DescriptorError::malformed(component, format!("unit {} is not a list", i + 1))
    })?;
    match sides.as_slice() {
        [left] => Ok(RawUnit {
            left: groups(component, left)?,
            right: vec![],
        }),
        [left, right] => Ok(RawUnit {
            left: groups(component, left)?,
            right: groups(component, right)?,
        }),
        other => Err(DescriptorError::malformed(
            component,
            format!(
                "unit {} has {} sides, expected [left] or [left, right]",
                i + 1,
                other.len()
            ),
        )),
    }
}

/// Resolve labels and electrical types of one unit
pub fn resolve_unit(component: &str, unit: &RawUnit) -> Result<Unit, DescriptorError> {
    Ok(Unit::new(
        resolve_groups(component, &unit.left)?,
        resolve_groups(component, &unit.right)?,
    ))
}

fn resolve_groups(
    component: &str,
    groups: &[Vec<RawPin>],
) -> Result<Vec<PinGroup>, DescriptorError> {
    groups
        .iter()
        .map(|group| group.iter().map(|pin| resolve_pin(component, pin)).collect())
        .collect()
}

fn resolve_pin(component: &str, pin: &RawPin) -> Result<Pin, DescriptorError> {
    let RawPin(name, number, kind) = pin;
    let electrical_type = kind
        .parse::<ElectricalType>()
        .map_err(|e| DescriptorError::unknown_type(component, number.to_string(), e.0))?;
    Ok(Pin::new(name.to_string(), number.to_string(), electrical_type))
}

/// Parse one side's groups, treating an empty marker as no groups
fn groups(component: &str, side: &Value) -> Result<Vec<Vec<RawPin>>, DescriptorError> {
    if is_empty_marker(side) {
        return Ok(vec![]);
    }
    serde_yaml::from_value(side.clone())
        .map_err(|e| DescriptorError::malformed(component, e.to_string()))
}

/// First entry `depth` levels down, skipping empty markers at every level
fn first_entry(value: &Value, depth: usize) -> Option<&Value> {
    if depth == 0 {
        return Some(value);
    }
    value
        .as_sequence()?
        .iter()
        .filter(|v| !is_empty_marker(v))
        .find_map(|v| first_entry(v, depth - 1))
}

/// A pin is a list whose first entry is a scalar name
fn is_pin(value: &Value) -> bool {
    matches!(
        value.as_sequence().and_then(|s| s.first()),
        Some(Value::String(_)) | Some(Value::Number(_))
    )
}

/// `~`, `[]`, `[~]`, `[[~]]` and so on
fn is_empty_marker(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Sequence(seq) => match seq.as_slice() {
            [] => true,
            [only] => is_empty_marker(only),
            _ => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::raw::Label;
    use pretty_assertions::assert_eq;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    fn pin(name: &str, number: i64, kind: &str) -> RawPin {
        RawPin(Label::from(name), Label::from(number), kind.to_string())
    }

    #[test]
    fn test_single_unit_left_only() {
        let units = normalize_pins("X", &yaml("[[[[A, 1, in], [B, 2, in]]]]")).unwrap();
        assert_eq!(
            units,
            vec![RawUnit {
                left: vec![vec![pin("A", 1, "in"), pin("B", 2, "in")]],
                right: vec![],
            }]
        );
    }

    #[test]
    fn test_single_unit_both_sides() {
        let units =
            normalize_pins("X", &yaml("[[[[A, 1, in]], [[B, 2, in]]], [[[Y, 3, out]]]]")).unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].left.len(), 2);
        assert_eq!(units[0].right, vec![vec![pin("Y", 3, "out")]]);
    }

    #[test]
    fn test_single_unit_right_only_null_marker() {
        let units = normalize_pins("X", &yaml("[[[~]], [[[Y, 3, out]]]]")).unwrap();
        assert_eq!(units.len(), 1);
        assert!(units[0].left.is_empty());
        assert_eq!(units[0].right, vec![vec![pin("Y", 3, "out")]]);
    }

    #[test]
    fn test_single_unit_right_only_bare_marker() {
        for src in ["[~, [[[Y, 3, out]]]]", "[[], [[[Y, 3, out]]]]"] {
            let units = normalize_pins("X", &yaml(src)).unwrap();
            assert_eq!(units.len(), 1, "{}", src);
            assert!(units[0].left.is_empty());
            assert_eq!(units[0].right.len(), 1);
        }
    }

    #[test]
    fn test_multi_unit() {
        let src = r#"
- [[[[A1, 1, in], [B1, 2, in]]], [[[Y1, 3, out]]]]
- [[[[A2, 5, in], [B2, 6, in]]], [[[Y2, 4, out]]]]
"#;
        let units = normalize_pins("X", &yaml(src)).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[1].right, vec![vec![pin("Y2", 4, "out")]]);
    }

    #[test]
    fn test_multi_unit_first_right_only() {
        let src = r#"
- [[[~]], [[[Y1, 3, out]]]]
- [[[[A2, 5, in]]], [[[Y2, 4, out]]]]
"#;
        let units = normalize_pins("X", &yaml(src)).unwrap();
        assert_eq!(units.len(), 2);
        assert!(units[0].left.is_empty());
        assert_eq!(units[1].left, vec![vec![pin("A2", 5, "in")]]);
    }

    #[test]
    fn test_multi_unit_all_right_only() {
        for src in [
            "[[~, [[[Y1, 1, out]]]], [~, [[[Y2, 2, out]]]]]",
            "[[[], [[[Y1, 1, out]]]], [[], [[[Y2, 2, out]]]]]",
        ] {
            let units = normalize_pins("X", &yaml(src)).unwrap();
            assert_eq!(units.len(), 2, "{}", src);
            assert!(units.iter().all(|u| u.left.is_empty()));
            assert_eq!(units[0].right, vec![vec![pin("Y1", 1, "out")]]);
            assert_eq!(units[1].right, vec![vec![pin("Y2", 2, "out")]]);
        }
    }

    #[test]
    fn test_empty_first_group_is_skipped() {
        let units = normalize_pins("X", &yaml("[[[], [[A, 1, in]]]]")).unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].left, vec![vec![], vec![pin("A", 1, "in")]]);
    }

    #[test]
    fn test_only_empty_markers_is_malformed() {
        let err = normalize_pins("X", &yaml("[~, [[~]]]")).unwrap_err();
        assert!(matches!(err, DescriptorError::MalformedPins { .. }));
    }

    #[test]
    fn test_integer_pin_name_is_still_a_single_unit() {
        let units = normalize_pins("X", &yaml("[[[[1, 1, passive], [2, 2, passive]]]]")).unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].left[0].len(), 2);
    }

    #[test]
    fn test_three_sides_is_malformed() {
        let err = normalize_pins("X", &yaml("[[[[A, 1, in]]], [[[B, 2, in]]], [[[C, 3, in]]]]"))
            .unwrap_err();
        assert!(matches!(err, DescriptorError::MalformedPins { .. }));
    }

    #[test]
    fn test_not_a_list_is_malformed() {
        let err = normalize_pins("X", &yaml("A")).unwrap_err();
        assert!(matches!(err, DescriptorError::MalformedPins { .. }));
    }

    #[test]
    fn test_empty_pins_is_malformed() {
        let err = normalize_pins("X", &yaml("[]")).unwrap_err();
        assert!(matches!(err, DescriptorError::MalformedPins { .. }));
    }

    #[test]
    fn test_short_pin_is_malformed() {
        let err = normalize_pins("X", &yaml("[[[[A, 1]]]]")).unwrap_err();
        assert!(matches!(err, DescriptorError::MalformedPins { .. }));
    }

    #[test]
    fn test_normalize_requires_name() {
        let d: ComponentDescriptor = serde_yaml::from_str("pins: [[[[A, 1, in]]]]").unwrap();
        assert_eq!(
            normalize(&d, 0).unwrap_err(),
            DescriptorError::missing("component #1", "name")
        );
    }

    #[test]
    fn test_normalize_requires_pins() {
        let d: ComponentDescriptor = serde_yaml::from_str("name: X").unwrap();
        assert_eq!(
            normalize(&d, 0).unwrap_err(),
            DescriptorError::missing("X", "pins")
        );
    }

    #[test]
    fn test_normalize_rejects_pins_and_units() {
        let d: ComponentDescriptor = serde_yaml::from_str(
            "name: X\npins: [[[[A, 1, in]]]]\nunits: [{left: [[[A, 1, in]]]}]",
        )
        .unwrap();
        assert!(matches!(
            normalize(&d, 0).unwrap_err(),
            DescriptorError::MalformedPins { .. }
        ));
    }

    #[test]
    fn test_normalize_unknown_type() {
        let d: ComponentDescriptor =
            serde_yaml::from_str("name: X\npins: [[[[A, 1, in], [B, 2, analog]]]]").unwrap();
        assert_eq!(
            normalize(&d, 0).unwrap_err(),
            DescriptorError::unknown_type("X", "2", "analog")
        );
    }

    #[test]
    fn test_normalize_explicit_units() {
        let d: ComponentDescriptor = serde_yaml::from_str(
            r#"
name: X
designator: U
units:
  - right: [[[Y, 3, out]]]
  - left: [[[A, 1, in]]]
"#,
        )
        .unwrap();
        let c = normalize(&d, 0).unwrap();
        assert_eq!(c.designator, "U");
        assert_eq!(c.units.len(), 2);
        assert!(c.units[0].left.is_empty());
        assert_eq!(
            c.units[0].right,
            vec![vec![Pin::new("Y", "3", ElectricalType::Output)]]
        );
        assert!(c.units[1].right.is_empty());
    }

    #[test]
    fn test_normalize_order_codes_keep_order() {
        let d: ComponentDescriptor = serde_yaml::from_str(
            "name: X\npins: [[[[A, 1, in]]]]\nordercodes: [[Farnell, 123], [Mouser, ab-1]]",
        )
        .unwrap();
        let c = normalize(&d, 0).unwrap();
        assert_eq!(
            c.order_codes,
            vec![
                OrderCode {
                    supplier: "Farnell".into(),
                    code: "123".into()
                },
                OrderCode {
                    supplier: "Mouser".into(),
                    code: "ab-1".into()
                },
            ]
        );
    }
}
