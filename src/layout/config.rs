//! Configuration for the layout engine

/// Configuration options for symbol geometry
///
/// All values are in library units (mils). The defaults match the 0.1"
/// schematic grid used by stock KiCad libraries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Pin pitch; pin endpoints land on multiples of this
    pub grid: i64,

    /// Width allowance per character of pin name or number text
    pub char_width: i64,

    /// Shortest pin stub
    pub min_pin_length: i64,

    /// Distance between the body and the designator and value fields
    pub field_offset: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid: 100,
            char_width: 50,
            min_pin_length: 100,
            field_offset: 50,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pin pitch
    pub fn with_grid(mut self, grid: i64) -> Self {
        self.grid = grid;
        self
    }

    /// Set the per-character text width
    pub fn with_char_width(mut self, width: i64) -> Self {
        self.char_width = width;
        self
    }

    /// Set the minimum pin stub length
    pub fn with_min_pin_length(mut self, length: i64) -> Self {
        self.min_pin_length = length;
        self
    }

    /// Set the field offset from the body
    pub fn with_field_offset(mut self, offset: i64) -> Self {
        self.field_offset = offset;
        self
    }

    /// Half the pin pitch; pins sit this far inside the body's top edge
    pub fn half_grid(&self) -> i64 {
        self.grid / 2
    }
}
