//! # apisnap
//!
//! Extracts the public API surface of a Kotlin source tree and renders it as
//! a nested, indentation-based signature listing.
//!
//! The pipeline is pull-based end to end: [`discover`] walks the tree,
//! [`load_declarations`] reads and parses one file at a time through a
//! [`FrontEnd`], and [`SurfaceRenderer`] turns each public top-level
//! declaration into a text block.
//!
//! ```no_run
//! use apisnap::{load_declarations, KotlinParser, ScanConfig, SurfaceRenderer};
//! use std::path::Path;
//!
//! let parser = KotlinParser::new();
//! let config = ScanConfig::default();
//! let declarations = load_declarations(Path::new("src"), &parser, &config)?;
//! for block in SurfaceRenderer::default().render_all(declarations) {
//!     println!("{}", block?);
//! }
//! # Ok::<(), apisnap::Error>(())
//! ```

pub mod classifier;
pub mod config;
pub mod discovery;
pub mod error;
pub mod loader;
pub mod parser;
pub mod renderer;


pub use classifier::{classify, is_public, public_surface, DeclarationKind};
pub use config::{MissingTypePolicy, OutputFormat, ScanConfig};
pub use discovery::{discover, SourceFiles, DEFAULT_EXTENSION};
pub use error::{Error, Result, SyntaxError};
pub use loader::{load_declarations, DeclarationStream};
pub use parser::{
    Declaration, FrontEnd, KotlinParser, ParsedEnumEntry, ParsedFunction, ParsedParameter,
    ParsedProperty, ParsedType, TypeKind, Visibility,
};
pub use renderer::{Render, RenderContext, SurfaceRenderer, INDENT_UNIT};
