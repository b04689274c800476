//! Theme data model.
//!
//! A [`ThemeSet`] is an insertion-ordered mapping from theme name to
//! [`ThemeDefinition`]. Order matters: the compiler emits one rule block per
//! theme in declaration order, so the model preserves the order of the
//! source data throughout.
//!
//! # JSON Schema
//!
//! ```json
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
//! ```
//!
//! Color tokens are either a single CSS color expression or a mapping of
//! shade keys to expressions (the `DEFAULT` shade maps to the unsuffixed
//! custom property). See [`ColorEntry`] for the permissive handling of other
//! value shapes.
//!
//! # Construction
//!
//! Theme sets can be materialized from JSON (the usual path for hosts that
//! loaded a theme file) or built programmatically:
//!
//! ```rust
//! use theme_tokens::{ThemeDefinition, ThemeSet};
//!
//! let themes = ThemeSet::new().add(
//!     "dark",
//!     ThemeDefinition::new()
//!         .with_color_scheme("dark")
//!         .color("surface", "#1e1e1e")
//!         .shaded("brand", [("DEFAULT", "#336699"), ("50", "#e8f0f8")]),
//! );
//! assert_eq!(themes.len(), 1);
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::CompileError;

/// An ordered set of named themes, the compiler's input.
///
/// Iteration order matches the declaration order of the source data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeSet {
    themes: IndexMap<String, ThemeDefinition>,
}

impl ThemeSet {
    /// Creates an empty theme set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named theme, returning an updated set for chaining.
    ///
    /// Re-adding an existing name replaces the definition but keeps the
    /// original position.
    #[must_use]
    pub fn add(mut self, name: impl Into<String>, theme: ThemeDefinition) -> Self {
        self.themes.insert(name.into(), theme);
        self
    }

    /// Materializes a theme set from raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Parse`] when the text is not valid JSON or a
    /// theme entry does not deserialize, and [`CompileError::InvalidStructure`]
    /// when the top-level shape is wrong (see
    /// [`from_json_value`](ThemeSet::from_json_value)).
    pub fn from_json_str(json: &str) -> Result<Self, CompileError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Materializes a theme set from an already-parsed JSON value.
    ///
    /// This is the one fatal validation point: all later problems (bad
    /// colors, bad scheme directives) are per-entry warnings.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::InvalidStructure`] when the value is not an
    /// object or its `themes` key is missing or not an object, and
    /// [`CompileError::Parse`] when a theme entry does not deserialize.
    pub fn from_json_value(value: Value) -> Result<Self, CompileError> {
        let has_themes_object = value.get("themes").map(Value::is_object).unwrap_or(false);
        if !has_themes_object {
            return Err(CompileError::InvalidStructure);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Iterates over themes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeDefinition)> {
        self.themes.iter().map(|(name, theme)| (name.as_str(), theme))
    }

    /// Looks up a theme by name.
    pub fn get(&self, name: &str) -> Option<&ThemeDefinition> {
        self.themes.get(name)
    }

    /// Returns the number of themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Returns true if no themes are defined.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

/// A single theme: an optional color-scheme directive plus ordered color
/// tokens.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeDefinition {
    /// Raw `colorScheme` directive, normalized at compile time.
    #[serde(default, rename = "colorScheme")]
    color_scheme: Option<String>,
    /// Color tokens in declaration order.
    colors: IndexMap<String, ColorEntry>,
}

impl ThemeDefinition {
    /// Creates an empty theme definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw color-scheme directive, returning `self` for chaining.
    #[must_use]
    pub fn with_color_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.color_scheme = Some(scheme.into());
        self
    }

    /// Adds a flat color token.
    #[must_use]
    pub fn color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(name.into(), ColorEntry::Flat(value.into()));
        self
    }

    /// Adds a shaded color token from `(shade key, value)` pairs.
    #[must_use]
    pub fn shaded<K, V>(
        mut self,
        name: impl Into<String>,
        shades: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let shades = shades
            .into_iter()
            .map(|(key, value)| (key.into(), Value::String(value.into())))
            .collect();
        self.colors.insert(name.into(), ColorEntry::Shaded(shades));
        self
    }

    /// Returns the raw color-scheme directive, if one was supplied.
    pub fn color_scheme(&self) -> Option<&str> {
        self.color_scheme.as_deref()
    }

    /// Iterates over color tokens in declaration order.
    pub fn colors(&self) -> impl Iterator<Item = (&str, &ColorEntry)> {
        self.colors.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}

/// The value of one color token.
///
/// Shapes outside the first two variants are tolerated on input and skipped
/// during compilation without a warning. Non-string shade values inside a
/// `Shaded` mapping are likewise skipped silently.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    /// A single CSS color expression.
    Flat(String),
    /// Named shades in declaration order; the `DEFAULT` key maps to the
    /// unsuffixed custom property.
    Shaded(IndexMap<String, Value>),
    /// Any other value shape. Produces neither a declaration nor a warning.
    Other(Value),
}
