//! Color-scheme directive normalization.
//!
//! A theme may declare a `colorScheme` directive, a whitespace-separated list
//! of scheme tokens that becomes the theme's CSS `color-scheme` declaration.
//! The vocabulary is fixed to `light` and `dark` (in any combination), matched
//! case-insensitively. Validation is atomic: a single unknown token rejects
//! the whole directive, never a partial one.
//!
//! # Example
//!
//! ```rust
//! use theme_tokens::normalize_color_scheme;
//!
//! assert_eq!(normalize_color_scheme("Light Dark").unwrap(), "light dark");
//! assert_eq!(normalize_color_scheme("dark dark").unwrap(), "dark");
//! assert!(normalize_color_scheme("light blue").is_err());
//! ```

/// Scheme tokens accepted in a `colorScheme` directive.
pub const VALID_COLOR_SCHEMES: &[&str] = &["light", "dark"];

/// Why a color-scheme directive was rejected.
///
/// Both cases are recoverable: the compiler reports a warning and omits the
/// `color-scheme` declaration for that theme only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeError {
    /// The directive was empty (or whitespace-only) after trimming.
    Empty,
    /// At least one token is outside the `light`/`dark` vocabulary.
    Invalid,
}

/// Normalizes a raw `colorScheme` directive into a `color-scheme` value.
///
/// The raw string is trimmed and split on runs of whitespace. When every
/// token matches the vocabulary, tokens are deduplicated on first occurrence,
/// rejoined with single spaces, and lowercased.
///
/// Deduplication compares the original tokens before lowercasing, so
/// `"dark dark"` collapses to `"dark"` while `"Dark dark"` keeps both.
///
/// # Errors
///
/// Returns [`SchemeError::Empty`] for a whitespace-only directive and
/// [`SchemeError::Invalid`] when any token falls outside the vocabulary.
pub fn normalize_color_scheme(raw: &str) -> Result<String, SchemeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SchemeError::Empty);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let all_valid = tokens
        .iter()
        .all(|token| VALID_COLOR_SCHEMES.iter().any(|v| token.eq_ignore_ascii_case(v)));
    if !all_valid {
        return Err(SchemeError::Invalid);
    }

    let mut seen: Vec<&str> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !seen.contains(&token) {
            seen.push(token);
        }
    }

    Ok(seen.join(" ").to_ascii_lowercase())
}
