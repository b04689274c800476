//! # theme-tokens — declarative theme tokens to CSS custom properties
//!
//! `theme-tokens` compiles a declarative theme description (a mapping of
//! theme names to color definitions and an optional color-scheme directive)
//! into a stylesheet fragment: one CSS class rule per theme, each holding
//! `--custom-property` declarations for its colors.
//!
//! The crate is the pure compiler core of a stylesheet-processing pipeline.
//! It never touches the filesystem and never parses a host stylesheet: hosts
//! hand it an already-materialized [`ThemeSet`] plus [`CompileOptions`], and
//! it hands back a fragment string plus an ordered list of warnings. Splicing
//! the fragment into a document, resolving theme file paths, and caching are
//! all host concerns.
//!
//! ## Core Concepts
//!
//! - [`ThemeSet`]: insertion-ordered mapping of theme name to definition,
//!   materialized from JSON or built programmatically
//! - [`ColorEntry`]: a color token — a flat CSS color expression or a
//!   mapping of shade keys to expressions
//! - [`compile`]: the compiler itself, a pure function
//! - [`CompilerOutput`]: fragment text plus accumulated warnings
//! - [`CompileError`]: the single fatal channel (structural failures only)
//!
//! ## Quick Start
//!
//! ```rust
//! use theme_tokens::{compile, CompileOptions, ThemeSet};
//!
//! let themes = ThemeSet::from_json_str(r##"
//! {
//!   "themes": {
//!     "light": {
//!       "colorScheme": "light",
//!       "colors": {
//!         "surface": "#ffffff",
//!         "brand": { "DEFAULT": "#336699", "50": "#e8f0f8" }
//!       }
//!     }
//!   }
//! }
//! "##).unwrap();
//!
//! let output = compile(&themes, &CompileOptions::default());
//! assert_eq!(output.fragment, "\
//! .light {
//!   color-scheme: light;
//!   --surface: #ffffff;
//!   --brand: #336699;
//!   --brand-50: #e8f0f8;
//! }");
//! assert!(output.warnings.is_empty());
//! ```
//!
//! ## Output Formats
//!
//! Color values can be emitted in three encodings, selected by
//! [`CompileOptions::format`]:
//!
//! | Format | Example output | Notes |
//! |--------|----------------|-------|
//! | `hex` (default) | `#336699` | lowercase |
//! | `rgb` | `51, 102, 153` | bare components, no `rgb(...)` wrapper |
//! | `hsl` | `210.00 50.00% 40.00%` | two decimal digits, composes with `hsl(var(...))` |
//!
//! ## Warnings and Fatal Errors
//!
//! A color value that does not parse, or a `colorScheme` directive outside
//! the `light`/`dark` vocabulary, drops only the affected declaration and
//! pushes one warning; every sibling entry is still compiled. The single
//! fatal case is structural: theme data whose top-level shape is not
//! `{ "themes": { ... } }` fails materialization with [`CompileError`]
//! before any fragment is produced.
//!
//! Compilation is deterministic: identical inputs yield byte-identical
//! fragments and warnings, which keeps build pipelines cache-friendly.

mod color;
mod compiler;
mod error;
mod scheme;
mod theme;

pub use color::{ColorFormat, CssColor};
pub use compiler::{compile, CompileOptions, CompilerOutput};
pub use error::CompileError;
pub use scheme::{normalize_color_scheme, SchemeError, VALID_COLOR_SCHEMES};
pub use theme::{ColorEntry, ThemeDefinition, ThemeSet};
