//! Layout engine for computing symbol geometry
//!
//! This module takes a normalized component and computes body sizes and
//! pin positions, producing a [`SymbolLayout`] that the renderers turn into
//! library text.

pub mod config;
pub mod geometry;
pub mod types;

pub use config::LayoutConfig;
pub use geometry::{longest_name, longest_number};
pub use types::*;

use crate::component::{Component, PinGroup};

/// Compute the layout of every unit of a component
pub fn compute(component: &Component, config: &LayoutConfig) -> SymbolLayout {
    let number_len = longest_number(&component.units);
    let multi_unit = component.units.len() > 1;

    let units: Vec<UnitLayout> = component
        .units
        .iter()
        .enumerate()
        .map(|(i, unit)| {
            let index = if multi_unit { i as u32 + 1 } else { 0 };
            let geometry = UnitGeometry::compute(unit, number_len, config);
            log::debug!(
                "{} unit {}: {}x{} body, {} pin length",
                component.name,
                index,
                geometry.width,
                geometry.height,
                geometry.pin_length
            );

            let x = geometry.width / 2 + geometry.pin_length;
            let y = geometry.height / 2 - config.half_grid();
            let mut pins = place_side(
                &unit.left,
                Point::new(-x, y),
                PinDirection::Right,
                &geometry,
                config,
            );
            pins.extend(place_side(
                &unit.right,
                Point::new(x, y),
                PinDirection::Left,
                &geometry,
                config,
            ));

            UnitLayout {
                index,
                geometry,
                body: Rect::centered(geometry.width, geometry.height),
                pins,
            }
        })
        .collect();

    let width = units.iter().map(|u| u.geometry.width).max().unwrap_or(0);
    let height = units.iter().map(|u| u.geometry.height).max().unwrap_or(0);

    SymbolLayout {
        units,
        width,
        height,
        field_origin: Point::new(-width / 2, height / 2 + config.field_offset),
        field_pitch: config.grid,
    }
}

/// Stack one side's pins downwards from `origin`, leaving a row between groups
fn place_side(
    groups: &[PinGroup],
    origin: Point,
    direction: PinDirection,
    geometry: &UnitGeometry,
    config: &LayoutConfig,
) -> Vec<PlacedPin> {
    let mut placed = Vec::new();
    let mut y = origin.y;
    for group in groups {
        for pin in group {
            log::trace!("pin {} ({}) at {},{}", pin.number, pin.name, origin.x, y);
            placed.push(PlacedPin {
                pin: pin.clone(),
                position: Point::new(origin.x, y),
                length: geometry.pin_length,
                direction,
            });
            y -= config.grid;
        }
        y -= config.grid;
    }
    placed
}
