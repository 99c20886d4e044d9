//! Body and pin sizing
//!
//! Every unit of a part shares the same pin length, taken from the longest
//! pin number anywhere on the part, so that units line up when placed side
//! by side on a sheet.

use crate::component::{PinGroup, Unit};

use super::config::LayoutConfig;
use super::types::UnitGeometry;

/// Longest rendered pin number over every unit, 0 if there are no pins
pub fn longest_number(units: &[Unit]) -> usize {
    units
        .iter()
        .flat_map(Unit::pins)
        .map(|p| p.number.chars().count())
        .max()
        .unwrap_or(0)
}

/// Longest rendered pin name in one unit, 0 if it has no pins
pub fn longest_name(unit: &Unit) -> usize {
    unit.pins()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
}

/// Grid rows a side needs: one per pin plus one gap between groups
pub fn side_rows(groups: &[PinGroup]) -> usize {
    let pins: usize = groups.iter().map(Vec::len).sum();
    (pins + groups.len()).saturating_sub(1)
}

impl UnitGeometry {
    /// Size a unit's body and pins
    ///
    /// Width leaves room for the longest name (twice over when pins sit on
    /// both sides) and is then widened until the pin ends land on the grid.
    /// Height always spans an odd number of rows so the body is symmetric
    /// about the x axis with every pin on a grid line.
    pub fn compute(unit: &Unit, longest_number: usize, config: &LayoutConfig) -> Self {
        let grid = config.grid;
        let pin_length = config
            .min_pin_length
            .max(longest_number as i64 * config.char_width);

        let text = (longest_name(unit) as i64 + 1) * config.char_width;
        let mut width = round_up(text, grid);
        if unit.is_dual_sided() {
            width *= 2;
        }
        let overhang = (width / 2 + pin_length) % grid;
        if overhang != 0 {
            width += 2 * (grid - overhang);
        }

        let mut rows = side_rows(&unit.left).max(side_rows(&unit.right)) as i64;
        if rows % 2 == 0 {
            rows += 1;
        }

        Self {
            width,
            height: rows * grid,
            pin_length,
        }
    }
}

fn round_up(value: i64, step: i64) -> i64 {
    match value % step {
        0 => value,
        rem => value + step - rem,
    }
}
