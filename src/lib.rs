//! KiCad Autogen - generate schematic symbols for black-box ICs
//!
//! This library turns a YAML description of a part (name, fields and pin
//! groups) into a legacy KiCad symbol library (`.lib`) and the matching
//! documentation library (`.dcm`).
//!
//! # Example
//!
//! ```rust
//! use kicad_autogen::render;
//!
//! let output = render(r#"
//! name: NE555
//! description: Precision timer
//! pins:
//!   - [[[TRIG, 2, in], [THR, 6, in]], [[GND, 1, pwrin]]]
//!   - [[[OUT, 3, out]]]
//! "#).unwrap();
//!
//! assert!(output.library.contains("DEF NE555 IC"));
//! assert!(output.documentation.contains("$CMP NE555"));
//! ```

pub mod component;
pub mod descriptor;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod style;

pub use component::{Component, ElectricalType, OrderCode, Pin, Unit};
pub use descriptor::{load, normalize, ComponentDescriptor, DescriptorError, Document};
pub use error::LoadError;
pub use layout::{LayoutConfig, SymbolLayout};
pub use renderer::LibraryConfig;
pub use style::{StyleError, SymbolStyle};

use thiserror::Error;

/// Errors that can occur during the build pipeline
#[derive(Debug, Error)]
pub enum BuildError {
    /// The descriptor file could not be read as YAML
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// A descriptor could not be turned into a component
    #[error("{0}")]
    Descriptor(#[from] DescriptorError),
}

/// Configuration for the complete build pipeline
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// Library output configuration
    pub library: LibraryConfig,
}

impl BuildConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the library output configuration
    pub fn with_library(mut self, config: LibraryConfig) -> Self {
        self.library = config;
        self
    }

    /// Apply a style file's overrides to the library configuration
    pub fn with_style(mut self, style: &SymbolStyle) -> Self {
        self.library = style.apply(self.library);
        self
    }
}

/// The two generated libraries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// `.lib` symbol library text
    pub library: String,
    /// `.dcm` documentation library text
    pub documentation: String,
}

/// Build the symbol library for a single descriptor
pub fn build_library(
    descriptor: &ComponentDescriptor,
    config: &BuildConfig,
) -> Result<String, BuildError> {
    build_library_batch(std::slice::from_ref(descriptor), config)
}

/// Build one symbol library holding every descriptor, in order
///
/// Fails without output if any descriptor is invalid.
pub fn build_library_batch(
    descriptors: &[ComponentDescriptor],
    config: &BuildConfig,
) -> Result<String, BuildError> {
    let components = descriptors
        .iter()
        .enumerate()
        .map(|(i, d)| normalize(d, i))
        .collect::<Result<Vec<_>, _>>()?;
    let layouts: Vec<SymbolLayout> = components
        .iter()
        .map(|c| layout::compute(c, &config.layout))
        .collect();

    Ok(renderer::render_library(
        components.iter().zip(layouts.iter()),
        &config.library,
    ))
}

/// Build the documentation library for a single descriptor
pub fn build_documentation(descriptor: &ComponentDescriptor) -> Result<String, BuildError> {
    build_documentation_batch(std::slice::from_ref(descriptor))
}

/// Build one documentation library holding every descriptor, in order
pub fn build_documentation_batch(descriptors: &[ComponentDescriptor]) -> Result<String, BuildError> {
    Ok(renderer::render_documentation(descriptors)?)
}

/// Render YAML source to both libraries with default configuration
pub fn render(source: &str) -> Result<Output, BuildError> {
    render_with_config(source, &BuildConfig::default())
}

/// Render YAML source to both libraries with custom configuration
///
/// # Example
///
/// ```rust
/// use kicad_autogen::{render_with_config, BuildConfig, LibraryConfig};
///
/// let config = BuildConfig::new().with_library(LibraryConfig::new().with_pin_text_size(40));
/// let output = render_with_config(
///     "name: R\ndescription: Resistor\npins: [[[[A, 1, passive], [B, 2, passive]]]]",
///     &config,
/// )
/// .unwrap();
/// assert!(output.library.contains("X A 1 -200 100 100 R 40 40 0 0 P"));
/// ```
pub fn render_with_config(source: &str, config: &BuildConfig) -> Result<Output, BuildError> {
    let document = load(source)?;
    let descriptors = document.descriptors();
    log::info!("loaded {} component(s)", descriptors.len());

    let library = match &document {
        Document::Single(d) => build_library(d, config)?,
        Document::Batch(ds) => build_library_batch(ds, config)?,
    };
    let documentation = match &document {
        Document::Single(d) => build_documentation(d)?,
        Document::Batch(ds) => build_documentation_batch(ds)?,
    };

    Ok(Output {
        library,
        documentation,
    })
}
