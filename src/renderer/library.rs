//! `.lib` assembly

use crate::component::Component;
use crate::layout::SymbolLayout;

use super::drawing::draw;
use super::fields::fields;
use super::text::token;
use super::LibraryConfig;

const LIBRARY_HEADER: &str = "EESchema-LIBRARY Version 2.3";
const ENCODING: &str = "#encoding utf-8";

/// Build library text incrementally
pub struct LibraryBuilder {
    config: LibraryConfig,
    lines: Vec<String>,
}

impl LibraryBuilder {
    /// Create a new library builder
    pub fn new(config: LibraryConfig) -> Self {
        Self {
            config,
            lines: vec![LIBRARY_HEADER.to_string(), ENCODING.to_string()],
        }
    }

    /// Append one complete `DEF ... ENDDEF` block
    pub fn add_component(&mut self, component: &Component, layout: &SymbolLayout) {
        self.lines.push("#".to_string());
        self.lines.push(format!("# {}", token(&component.name)));
        self.lines.push("#".to_string());
        self.lines.push(self.def_line(component));
        self.lines.extend(
            fields(component, layout, &self.config)
                .iter()
                .map(ToString::to_string),
        );
        self.lines.extend(draw(layout, &self.config));
        self.lines.push("ENDDEF".to_string());
    }

    fn def_line(&self, component: &Component) -> String {
        format!(
            "DEF {} {} 0 {} {} {} {} {} N",
            token(&component.name),
            token(&component.designator),
            self.config.pin_name_offset,
            yes_no(self.config.show_pin_numbers),
            yes_no(self.config.show_pin_names),
            component.units.len(),
            if component.is_locked() { 'L' } else { 'F' }
        )
    }

    /// Build the final library string
    pub fn build(mut self) -> String {
        self.lines.push("#".to_string());
        self.lines.push("#End Library".to_string());
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

fn yes_no(flag: bool) -> char {
    if flag {
        'Y'
    } else {
        'N'
    }
}

/// Render laid-out components into one library, in the given order
pub fn render_library<'a>(
    parts: impl IntoIterator<Item = (&'a Component, &'a SymbolLayout)>,
    config: &LibraryConfig,
) -> String {
    let mut builder = LibraryBuilder::new(config.clone());
    for (component, layout) in parts {
        builder.add_component(component, layout);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ElectricalType, Pin, Unit};
    use crate::layout::{compute, LayoutConfig};

    fn component(name: &str, units: usize) -> Component {
        let unit = Unit::new(vec![vec![Pin::new("A", "1", ElectricalType::Input)]], vec![]);
        Component {
            name: name.into(),
            designator: "U".into(),
            footprint: None,
            datasheet: None,
            order_codes: vec![],
            units: vec![unit; units],
        }
    }

    fn render(components: &[Component], config: &LibraryConfig) -> String {
        let layouts: Vec<_> = components
            .iter()
            .map(|c| compute(c, &LayoutConfig::default()))
            .collect();
        render_library(components.iter().zip(layouts.iter()), config)
    }

    #[test]
    fn test_empty_library() {
        let out = render(&[], &LibraryConfig::default());
        assert_eq!(
            out,
            "EESchema-LIBRARY Version 2.3\n#encoding utf-8\n#\n#End Library\n"
        );
    }

    #[test]
    fn test_single_unit_is_free() {
        let out = render(&[component("ONE", 1)], &LibraryConfig::default());
        assert!(out.contains("\nDEF ONE U 0 40 Y Y 1 F N\n"));
        assert!(out.contains("\n#\n# ONE\n#\n"));
    }

    #[test]
    fn test_multi_unit_is_locked() {
        let out = render(&[component("DUAL", 2)], &LibraryConfig::default());
        assert!(out.contains("\nDEF DUAL U 0 40 Y Y 2 L N\n"));
    }

    #[test]
    fn test_batch_keeps_order() {
        let out = render(
            &[component("FIRST", 1), component("SECOND", 1)],
            &LibraryConfig::default(),
        );
        let first = out.find("DEF FIRST").unwrap();
        let second = out.find("DEF SECOND").unwrap();
        assert!(first < second);
        assert_eq!(out.matches("ENDDEF").count(), 2);
    }

    #[test]
    fn test_def_line_names_are_single_tokens() {
        let mut c = component("LM 358", 1);
        c.designator = String::new();
        let out = render(&[c], &LibraryConfig::default());
        assert!(out.contains("\n# LM_358\n"));
        assert!(out.contains("\nDEF LM_358 ~ 0 40 Y Y 1 F N\n"));
        assert!(out.contains("\nF1 \"LM 358\" "));
    }

    #[test]
    fn test_config_flags_in_def_line() {
        let config = LibraryConfig::new()
            .with_pin_numbers(false)
            .with_pin_name_offset(20);
        let out = render(&[component("X", 1)], &config);
        assert!(out.contains("\nDEF X U 0 20 N Y 1 F N\n"));
    }
}
