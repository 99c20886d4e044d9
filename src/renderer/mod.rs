//! Library text renderers
//!
//! This module takes laid-out components and produces the `.lib` symbol
//! library, and takes descriptors and produces the `.dcm` documentation
//! library.

pub mod config;
pub mod documentation;
pub mod drawing;
pub mod fields;
pub mod library;
mod text;

pub use config::LibraryConfig;
pub use documentation::render_documentation;
pub use fields::Field;
pub use library::{render_library, LibraryBuilder};
