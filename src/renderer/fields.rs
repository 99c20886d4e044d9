//! Field lines (`F0`, `F1`, ...)
//!
//! Fields 0 to 3 are always written, empty when the descriptor leaves them
//! out, because KiCad assigns meaning by index. Order codes follow from
//! index 4 and are only written when present.

use std::fmt;

use crate::component::Component;
use crate::layout::{Point, SymbolLayout};

use super::text::quoted;
use super::LibraryConfig;

/// One field line of a library definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub index: usize,
    pub text: String,
    pub position: Point,
    pub size: i64,
    pub visible: bool,
    /// Field name, only written for user fields
    pub name: Option<String>,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "F{} \"{}\" {} {} {} H {} L CNN",
            self.index,
            quoted(&self.text),
            self.position.x,
            self.position.y,
            self.size,
            if self.visible { 'V' } else { 'I' }
        )?;
        if let Some(name) = &self.name {
            write!(f, " \"{}\"", quoted(name))?;
        }
        Ok(())
    }
}

/// Build the fields of a component, positioned around its layout
///
/// The designator goes above the body's top-left corner and the value
/// mirrors it below; everything else stacks one row at a time under the
/// value.
pub fn fields(component: &Component, layout: &SymbolLayout, config: &LibraryConfig) -> Vec<Field> {
    let Point { x, y } = layout.field_origin;
    let pitch = layout.field_pitch;
    let field = |index: usize, text: &str, y: i64, visible: bool| Field {
        index,
        text: text.to_string(),
        position: Point::new(x, y),
        size: config.field_text_size,
        visible,
        name: None,
    };

    let mut out = vec![
        field(0, &component.designator, y, true),
        field(1, &component.name, -y, true),
        field(2, component.footprint.as_deref().unwrap_or(""), -y - pitch, false),
        field(3, component.datasheet.as_deref().unwrap_or(""), -y - 2 * pitch, false),
    ];

    for (i, order_code) in component.order_codes.iter().enumerate() {
        let row = 3 + i as i64;
        out.push(Field {
            name: Some(order_code.supplier.clone()),
            ..field(4 + i, &order_code.code, -y - row * pitch, false)
        });
    }

    out
}
