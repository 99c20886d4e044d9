//! Normalized component model
//!
//! These are the types produced by the pin normalizer and consumed by the
//! layout engine and renderers. Everything here is fully resolved: pin
//! labels are rendered to text and electrical types are checked.

use std::fmt;
use std::str::FromStr;

/// Electrical type of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElectricalType {
    Input,
    Output,
    Bidirectional,
    TriState,
    Passive,
    Unspecified,
    PowerInput,
    PowerOutput,
    OpenCollector,
    OpenDrain,
    OpenEmitter,
    OpenSource,
    NotConnected,
}

/// Returned when a type keyword is not one of the known short names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownElectricalType(pub String);

impl ElectricalType {
    /// All types, in the order they are documented
    pub const ALL: [ElectricalType; 13] = [
        ElectricalType::Input,
        ElectricalType::Output,
        ElectricalType::Bidirectional,
        ElectricalType::TriState,
        ElectricalType::Passive,
        ElectricalType::Unspecified,
        ElectricalType::PowerInput,
        ElectricalType::PowerOutput,
        ElectricalType::OpenCollector,
        ElectricalType::OpenDrain,
        ElectricalType::OpenEmitter,
        ElectricalType::OpenSource,
        ElectricalType::NotConnected,
    ];

    /// Short keyword used in descriptor files
    pub fn keyword(self) -> &'static str {
        match self {
            ElectricalType::Input => "in",
            ElectricalType::Output => "out",
            ElectricalType::Bidirectional => "bidi",
            ElectricalType::TriState => "tri",
            ElectricalType::Passive => "passive",
            ElectricalType::Unspecified => "unspec",
            ElectricalType::PowerInput => "pwrin",
            ElectricalType::PowerOutput => "pwrout",
            ElectricalType::OpenCollector => "oc",
            ElectricalType::OpenDrain => "od",
            ElectricalType::OpenEmitter => "oe",
            ElectricalType::OpenSource => "os",
            ElectricalType::NotConnected => "nc",
        }
    }

    /// Single-character code written into `X` pin lines
    ///
    /// The library format has no separate open-drain or open-source types,
    /// so those share the open-collector and open-emitter codes.
    pub fn code(self) -> char {
        match self {
            ElectricalType::Input => 'I',
            ElectricalType::Output => 'O',
            ElectricalType::Bidirectional => 'B',
            ElectricalType::TriState => 'T',
            ElectricalType::Passive => 'P',
            ElectricalType::Unspecified => 'U',
            ElectricalType::PowerInput => 'W',
            ElectricalType::PowerOutput => 'w',
            ElectricalType::OpenCollector | ElectricalType::OpenDrain => 'C',
            ElectricalType::OpenEmitter | ElectricalType::OpenSource => 'E',
            ElectricalType::NotConnected => 'N',
        }
    }
}

impl FromStr for ElectricalType {
    type Err = UnknownElectricalType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElectricalType::ALL
            .into_iter()
            .find(|t| t.keyword() == s)
            .ok_or_else(|| UnknownElectricalType(s.to_string()))
    }
}

impl fmt::Display for ElectricalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A single resolved pin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    pub name: String,
    pub number: String,
    pub electrical_type: ElectricalType,
}

impl Pin {
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        electrical_type: ElectricalType,
    ) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            electrical_type,
        }
    }
}

/// A contiguous run of pins; groups are drawn with a one-row gap between them
pub type PinGroup = Vec<Pin>;

/// One interchangeable section of a component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unit {
    pub left: Vec<PinGroup>,
    pub right: Vec<PinGroup>,
}

impl Unit {
    pub fn new(left: Vec<PinGroup>, right: Vec<PinGroup>) -> Self {
        Self { left, right }
    }

    /// Whether this unit has pins on both sides
    pub fn is_dual_sided(&self) -> bool {
        !self.left.is_empty() && !self.right.is_empty()
    }

    /// All pins, left side first, in drawing order
    pub fn pins(&self) -> impl Iterator<Item = &Pin> {
        self.left.iter().chain(self.right.iter()).flatten()
    }
}

/// A supplier order code attached to a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCode {
    pub supplier: String,
    pub code: String,
}

/// A fully normalized component ready for layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    pub designator: String,
    pub footprint: Option<String>,
    pub datasheet: Option<String>,
    pub order_codes: Vec<OrderCode>,
    pub units: Vec<Unit>,
}

impl Component {
    /// Multi-unit parts are locked: every unit shares one graphic
    pub fn is_locked(&self) -> bool {
        self.units.len() > 1
    }
}
