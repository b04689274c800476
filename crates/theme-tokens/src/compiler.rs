//! The theme-to-stylesheet compiler.
//!
//! [`compile`] turns a [`ThemeSet`] into a stylesheet fragment: one CSS class
//! rule per theme, each holding an optional `color-scheme` declaration
//! followed by one custom-property declaration per resolvable color value.
//!
//! The compiler is a pure function of its inputs. Recoverable problems (a bad
//! color, a bad scheme directive) never abort the run: the offending
//! declaration is omitted and a human-readable warning is accumulated, in
//! discovery order, on [`CompilerOutput::warnings`].
//!
//! # Example
//!
//! ```rust
//! use theme_tokens::{compile, CompileOptions, ThemeDefinition, ThemeSet};
//!
//! let themes = ThemeSet::new().add(
//!     "light",
//!     ThemeDefinition::new()
//!         .with_color_scheme("light")
//!         .color("surface", "#ffffff"),
//! );
//!
//! let output = compile(&themes, &CompileOptions::default());
//! assert_eq!(
//!     output.fragment,
//!     ".light {\n  color-scheme: light;\n  --surface: #ffffff;\n}"
//! );
//! assert!(output.warnings.is_empty());
//! ```

use serde::Deserialize;

use crate::color::{ColorFormat, CssColor};
use crate::scheme::{normalize_color_scheme, SchemeError};
use crate::theme::{ColorEntry, ThemeDefinition, ThemeSet};

/// Output configuration for the compiler.
///
/// Deserializes from the host's option map; unrecognized keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Extra segment inserted after `--` in every custom-property name,
    /// hyphen-joined (`--tw-brand` for prefix `tw`). `None` or an empty
    /// string inserts nothing.
    pub prefix: Option<String>,
    /// Output encoding for color values. Defaults to [`ColorFormat::Hex`].
    pub format: ColorFormat,
}

/// Result of one compilation: the stylesheet fragment plus accumulated
/// warnings.
///
/// The fragment is plain rule blocks separated by blank lines, with no
/// surrounding at-rule syntax; it is meant to directly replace the host's
/// invocation site. Warnings are ordered by theme, then by property within
/// a theme, and should be forwarded one-per-call to the host's non-fatal
/// warning channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerOutput {
    /// Generated stylesheet text.
    pub fragment: String,
    /// Human-readable diagnostics for entries that were omitted.
    pub warnings: Vec<String>,
}

/// Compiles a theme set into a stylesheet fragment.
///
/// Identical inputs always yield byte-identical output; the compiler holds
/// no state across invocations and performs no I/O.
pub fn compile(themes: &ThemeSet, options: &CompileOptions) -> CompilerOutput {
    let mut warnings = Vec::new();
    let blocks: Vec<String> = themes
        .iter()
        .map(|(name, theme)| compile_theme(name, theme, options, &mut warnings))
        .collect();

    CompilerOutput {
        fragment: blocks.join("\n\n"),
        warnings,
    }
}

/// Builds the rule block for one theme.
fn compile_theme(
    name: &str,
    theme: &ThemeDefinition,
    options: &CompileOptions,
    warnings: &mut Vec<String>,
) -> String {
    let mut lines = vec![format!(".{} {{", name)];

    if let Some(raw) = theme.color_scheme() {
        match normalize_color_scheme(raw) {
            Ok(scheme) => lines.push(format!("  color-scheme: {};", scheme)),
            Err(SchemeError::Empty) => {
                warnings.push(format!("Empty colorScheme in theme \"{}\"", name));
            }
            Err(SchemeError::Invalid) => {
                warnings.push(format!(
                    "Invalid colorScheme \"{}\" in theme \"{}\". \
                     Allowed: light, dark (or combinations like \"light dark\")",
                    raw.trim(),
                    name
                ));
            }
        }
    }

    for (token, entry) in theme.colors() {
        match entry {
            ColorEntry::Flat(value) => match CssColor::parse(value) {
                Ok(color) => lines.push(declaration(options, token, None, &color)),
                Err(_) => {
                    warnings.push(format!("Invalid color: {} for {}.{}", value, name, token));
                }
            },
            ColorEntry::Shaded(shades) => {
                for (shade, shade_value) in shades {
                    // Non-string shade values are structurally absent:
                    // skipped without a warning.
                    if let Some(value) = shade_value.as_str() {
                        match CssColor::parse(value) {
                            Ok(color) => {
                                lines.push(declaration(options, token, Some(shade.as_str()), &color));
                            }
                            Err(_) => {
                                warnings.push(format!(
                                    "Invalid color: {} for {}.{}.{}",
                                    value, name, token, shade
                                ));
                            }
                        }
                    }
                }
            }
            // Neither a string nor a shade mapping: ignored without a warning.
            ColorEntry::Other(_) => {}
        }
    }

    lines.push("}".to_string());
    lines.join("\n")
}

/// Builds one custom-property declaration line.
fn declaration(
    options: &CompileOptions,
    token: &str,
    shade: Option<&str>,
    color: &CssColor,
) -> String {
    let prefix = options.prefix.as_deref().filter(|p| !p.is_empty());
    format!(
        "  {}: {};",
        property_name(prefix, token, shade),
        color.encode(options.format)
    )
}

/// Derives the custom-property name for a color token.
///
/// `--{prefix}-{token}` when a prefix is configured, `--{token}` otherwise.
/// Shaded tokens get a `-{shade}` suffix, except for the `DEFAULT` shade
/// which maps to the unsuffixed name.
fn property_name(prefix: Option<&str>, token: &str, shade: Option<&str>) -> String {
    let mut name = String::from("--");
    if let Some(prefix) = prefix {
        name.push_str(prefix);
        name.push('-');
    }
    name.push_str(token);
    if let Some(shade) = shade {
        if shade != "DEFAULT" {
            name.push('-');
            name.push_str(shade);
        }
    }
    name
}
