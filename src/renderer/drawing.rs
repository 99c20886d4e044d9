//! Drawing section: body rectangles and pins

use crate::layout::{PlacedPin, Rect, SymbolLayout};

use super::text::token;
use super::LibraryConfig;

/// Render the `DRAW ... ENDDRAW` block of a component
pub fn draw(layout: &SymbolLayout, config: &LibraryConfig) -> Vec<String> {
    let mut out = vec!["DRAW".to_string()];
    for unit in &layout.units {
        out.push(body_line(&unit.body, unit.index));
        out.extend(unit.pins.iter().map(|p| pin_line(p, unit.index, config)));
    }
    out.push("ENDDRAW".to_string());
    out
}

/// `S` line: rectangle, unit, convert 1, default thickness, background fill
pub fn body_line(body: &Rect, unit: u32) -> String {
    format!(
        "S {} {} {} {} {} 1 0 f",
        body.start.x, body.start.y, body.end.x, body.end.y, unit
    )
}

/// `X` line for one pin
///
/// Alternate body styles are not generated, so convert is always 0.
pub fn pin_line(placed: &PlacedPin, unit: u32, config: &LibraryConfig) -> String {
    format!(
        "X {} {} {} {} {} {} {} {} {} 0 {}",
        token(&placed.pin.name),
        token(&placed.pin.number),
        placed.position.x,
        placed.position.y,
        placed.length,
        placed.direction.code(),
        config.pin_name_size,
        config.pin_number_size,
        unit,
        placed.pin.electrical_type.code()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, ElectricalType, Pin, Unit};
    use crate::layout::{compute, LayoutConfig};
    use pretty_assertions::assert_eq;

    fn component(units: Vec<Unit>) -> Component {
        Component {
            name: "TEST".into(),
            designator: "IC".into(),
            footprint: None,
            datasheet: None,
            order_codes: vec![],
            units,
        }
    }

    fn render(c: &Component) -> Vec<String> {
        draw(&compute(c, &LayoutConfig::default()), &LibraryConfig::default())
    }

    #[test]
    fn test_left_only_unit() {
        let c = component(vec![Unit::new(
            vec![vec![
                Pin::new("A", "1", ElectricalType::Input),
                Pin::new("B", "2", ElectricalType::Input),
            ]],
            vec![],
        )]);
        assert_eq!(
            render(&c),
            vec![
                "DRAW",
                "S -100 150 100 -150 0 1 0 f",
                "X A 1 -200 100 100 R 50 50 0 0 I",
                "X B 2 -200 0 100 R 50 50 0 0 I",
                "ENDDRAW",
            ]
        );
    }

    #[test]
    fn test_right_only_unit() {
        let c = component(vec![Unit::new(
            vec![],
            vec![vec![Pin::new("Q", "3", ElectricalType::Output)]],
        )]);
        assert_eq!(
            render(&c),
            vec![
                "DRAW",
                "S -100 50 100 -50 0 1 0 f",
                "X Q 3 200 0 100 L 50 50 0 0 O",
                "ENDDRAW",
            ]
        );
    }

    #[test]
    fn test_multi_unit_pins_carry_unit_index() {
        let gate = |a: &str, y: &str| {
            Unit::new(
                vec![vec![Pin::new("A", a, ElectricalType::Input)]],
                vec![vec![Pin::new("Y", y, ElectricalType::Output)]],
            )
        };
        let lines = render(&component(vec![gate("1", "2"), gate("3", "4")]));
        assert!(lines.contains(&"X Y 2 200 0 100 L 50 50 1 0 O".to_string()));
        assert!(lines.contains(&"X A 3 -200 0 100 R 50 50 2 0 I".to_string()));
        assert_eq!(lines.iter().filter(|l| l.starts_with("S ")).count(), 2);
    }

    #[test]
    fn test_pin_names_are_single_tokens() {
        let c = component(vec![Unit::new(
            vec![vec![
                Pin::new("", "1", ElectricalType::Passive),
                Pin::new("RESET IN", "2", ElectricalType::Input),
            ]],
            vec![],
        )]);
        let lines = render(&c);
        assert_eq!(lines[2], "X ~ 1 -400 100 100 R 50 50 0 0 P");
        assert_eq!(lines[3], "X RESET_IN 2 -400 0 100 R 50 50 0 0 I");
        assert!(lines[2..4].iter().all(|l| l.split_whitespace().count() == 12));
    }

    #[test]
    fn test_open_types_render_identically() {
        let c = component(vec![Unit::new(
            vec![vec![
                Pin::new("OC", "1", ElectricalType::OpenCollector),
                Pin::new("OD", "2", ElectricalType::OpenDrain),
                Pin::new("OE", "3", ElectricalType::OpenEmitter),
                Pin::new("OS", "4", ElectricalType::OpenSource),
            ]],
            vec![],
        )]);
        let codes: Vec<_> = render(&c)
            .iter()
            .filter(|l| l.starts_with("X "))
            .map(|l| l.rsplit(' ').next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(codes, vec!["C", "C", "E", "E"]);
    }
}
