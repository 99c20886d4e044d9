//! Configuration for library text output

/// Text sizes and visibility flags written into the library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Size of the designator, value and hidden fields
    pub field_text_size: i64,

    /// Size of pin name text
    pub pin_name_size: i64,

    /// Size of pin number text
    pub pin_number_size: i64,

    /// Inset of pin names from the body edge
    pub pin_name_offset: i64,

    /// Whether pin numbers are drawn
    pub show_pin_numbers: bool,

    /// Whether pin names are drawn
    pub show_pin_names: bool,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            field_text_size: 50,
            pin_name_size: 50,
            pin_number_size: 50,
            pin_name_offset: 40,
            show_pin_numbers: true,
            show_pin_names: true,
        }
    }
}

impl LibraryConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field text size
    pub fn with_field_text_size(mut self, size: i64) -> Self {
        self.field_text_size = size;
        self
    }

    /// Set both pin text sizes
    pub fn with_pin_text_size(mut self, size: i64) -> Self {
        self.pin_name_size = size;
        self.pin_number_size = size;
        self
    }

    /// Set the pin name inset
    pub fn with_pin_name_offset(mut self, offset: i64) -> Self {
        self.pin_name_offset = offset;
        self
    }

    /// Set whether pin numbers are drawn
    pub fn with_pin_numbers(mut self, show: bool) -> Self {
        self.show_pin_numbers = show;
        self
    }

    /// Set whether pin names are drawn
    pub fn with_pin_names(mut self, show: bool) -> Self {
        self.show_pin_names = show;
        self
    }
}
