//! `.dcm` assembly
//!
//! Documentation is written straight from the descriptors; it needs no
//! geometry.

use crate::descriptor::{ComponentDescriptor, DescriptorError};

const DOCLIB_HEADER: &str = "EESchema-DOCLIB  Version 2.0";

/// Render documentation for descriptors, in the given order
pub fn render_documentation<'a>(
    descriptors: impl IntoIterator<Item = &'a ComponentDescriptor>,
) -> Result<String, DescriptorError> {
    let mut lines = vec![DOCLIB_HEADER.to_string()];
    for (index, descriptor) in descriptors.into_iter().enumerate() {
        lines.extend(entry(descriptor, index)?);
    }
    lines.push("#".to_string());
    lines.push("#End Doc Library".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

fn entry(descriptor: &ComponentDescriptor, index: usize) -> Result<Vec<String>, DescriptorError> {
    let component = descriptor.display_name(index);
    let name = descriptor
        .name
        .as_ref()
        .ok_or_else(|| DescriptorError::missing(&component, "name"))?;
    let description = descriptor
        .description
        .as_ref()
        .ok_or_else(|| DescriptorError::missing(&component, "description"))?;

    let mut lines = vec![format!("$CMP {}", name), format!("D {}", description)];
    if let Some(datasheet) = &descriptor.datasheet {
        lines.push(format!("F {}", datasheet));
    }
    lines.push("$ENDCMP".to_string());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn descriptor(yaml: &str) -> ComponentDescriptor {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_entry_with_datasheet() {
        let d = descriptor("name: NE555\ndescription: Timer\ndatasheet: ne555.pdf");
        assert_eq!(
            render_documentation([&d]).unwrap(),
            "EESchema-DOCLIB  Version 2.0\n$CMP NE555\nD Timer\nF ne555.pdf\n$ENDCMP\n#\n#End Doc Library\n"
        );
    }

    #[test]
    fn test_entry_without_datasheet() {
        let d = descriptor("name: NE555\ndescription: Timer");
        let out = render_documentation([&d]).unwrap();
        assert!(!out.contains("\nF "));
    }

    #[test]
    fn test_missing_description() {
        let d = descriptor("name: NE555");
        assert_eq!(
            render_documentation([&d]).unwrap_err(),
            DescriptorError::missing("NE555", "description")
        );
    }

    #[test]
    fn test_batch_order() {
        let ds = [
            descriptor("name: B\ndescription: second"),
            descriptor("name: A\ndescription: first"),
        ];
        let out = render_documentation(&ds).unwrap();
        assert!(out.find("$CMP B").unwrap() < out.find("$CMP A").unwrap());
    }
}
