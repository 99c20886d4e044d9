//! Core types for the layout engine

use crate::component::Pin;

/// A point in library units, y pointing up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle given by two opposite corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub start: Point,
    pub end: Point,
}

impl Rect {
    /// A `width` by `height` rectangle centred on the origin, top-left first
    pub fn centered(width: i64, height: i64) -> Self {
        Self {
            start: Point::new(-width / 2, height / 2),
            end: Point::new(width / 2, -height / 2),
        }
    }
}

/// Which way a pin points from its connection end towards the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinDirection {
    Right,
    Left,
}

impl PinDirection {
    pub fn code(self) -> char {
        match self {
            PinDirection::Right => 'R',
            PinDirection::Left => 'L',
        }
    }
}

/// Body size and pin length of one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitGeometry {
    pub width: i64,
    pub height: i64,
    pub pin_length: i64,
}

/// A pin with its connection point resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedPin {
    pub pin: Pin,
    pub position: Point,
    pub length: i64,
    pub direction: PinDirection,
}

/// Layout of one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitLayout {
    /// 0 when the part has a single unit, otherwise 1-based
    pub index: u32,
    pub geometry: UnitGeometry,
    pub body: Rect,
    /// Left pins top to bottom, then right pins top to bottom
    pub pins: Vec<PlacedPin>,
}

/// Layout of a whole component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolLayout {
    pub units: Vec<UnitLayout>,
    /// Largest body width over all units
    pub width: i64,
    /// Largest body height over all units
    pub height: i64,
    /// Where the designator field sits; the rest stack below the body
    pub field_origin: Point,
    /// Vertical distance between stacked fields
    pub field_pitch: i64,
}
