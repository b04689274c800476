//! CSS color value parsing and output encoding.
//!
//! Supports the textual color syntaxes a theme file is likely to carry:
//!
//! - **Hex**: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (alpha is discarded)
//! - **Functional RGB**: `rgb(51, 102, 153)`, `rgb(20% 40% 60%)`,
//!   `rgba(51, 102, 153, 0.5)` — legacy comma and modern space syntax
//! - **Functional HSL**: `hsl(210, 50%, 40%)`, `hsl(210deg 50% 40%)`
//! - **Named colors**: the CSS keyword set (`rebeccapurple`, `tomato`, ...)
//!   plus `transparent`
//!
//! A parsed color can be re-encoded in any of the three output formats used
//! for custom-property values; see [`ColorFormat`].
//!
//! # Example
//!
//! ```rust
//! use theme_tokens::{ColorFormat, CssColor};
//!
//! let color = CssColor::parse("#336699").unwrap();
//! assert_eq!(color.encode(ColorFormat::Hex), "#336699");
//! assert_eq!(color.encode(ColorFormat::Rgb), "51, 102, 153");
//! assert_eq!(color.encode(ColorFormat::Hsl), "210.00 50.00% 40.00%");
//! ```

use serde::Deserialize;

/// Output encoding for custom-property values.
///
/// - `Hex`: lowercase `#rrggbb`
/// - `Hsl`: `"<h> <s>% <l>%"` with exactly two decimal digits per component
///   and no `hsl(...)` wrapper, suitable for `hsl(var(...))` composition
/// - `Rgb`: `"<r>, <g>, <b>"` integer channels with no wrapper
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// Lowercase hex string, e.g. `#1a2b3c`. The default.
    #[default]
    Hex,
    /// Bare HSL components, e.g. `210.00 50.00% 40.00%`.
    Hsl,
    /// Bare RGB components, e.g. `26, 43, 60`.
    Rgb,
}

/// A parsed CSS color, held as sRGB channels in the 0–255 range.
///
/// Channels stay floating point so that `hsl()` inputs keep their precision
/// until output encoding decides how to round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssColor {
    r: f64,
    g: f64,
    b: f64,
}

impl CssColor {
    /// Parses a color from a CSS color expression.
    ///
    /// Accepts hex strings, `rgb()`/`rgba()` and `hsl()`/`hsla()` functional
    /// notation, and CSS color keywords. Alpha components are parsed and
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns a message describing the failure. Callers treat any failure
    /// as recoverable: the entry is skipped and a warning is reported.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if s.is_empty() {
            return Err("empty color value".to_string());
        }

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if let Some(open) = s.find('(') {
            if s.ends_with(')') {
                let name = s[..open].trim().to_ascii_lowercase();
                let args = &s[open + 1..s.len() - 1];
                return Self::parse_function(&name, args);
            }
        }

        Self::parse_named(s)
    }

    /// Encodes the color in the requested output format.
    pub fn encode(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => format!(
                "#{:02x}{:02x}{:02x}",
                self.r.round() as u8,
                self.g.round() as u8,
                self.b.round() as u8
            ),
            ColorFormat::Rgb => format!(
                "{}, {}, {}",
                self.r.round() as u8,
                self.g.round() as u8,
                self.b.round() as u8
            ),
            ColorFormat::Hsl => {
                let (h, s, l) = self.hsl_components();
                format!("{:.2} {:.2}% {:.2}%", h, s, l)
            }
        }
    }

    /// Parses a hex color code (without the `#` prefix).
    fn parse_hex(hex: &str) -> Result<Self, String> {
        // Byte-index slicing below requires ASCII.
        if !hex.is_ascii() {
            return Err(format!("invalid hex color: #{}", hex));
        }
        let nibble = |digit: &str| -> Result<f64, String> {
            u8::from_str_radix(digit, 16)
                .map(|v| f64::from(v * 17))
                .map_err(|_| format!("invalid hex color: #{}", hex))
        };
        let byte = |pair: &str| -> Result<f64, String> {
            u8::from_str_radix(pair, 16)
                .map(f64::from)
                .map_err(|_| format!("invalid hex color: #{}", hex))
        };

        match hex.len() {
            // #rgb / #rgba — each digit doubled, alpha ignored
            3 | 4 => Ok(Self {
                r: nibble(&hex[0..1])?,
                g: nibble(&hex[1..2])?,
                b: nibble(&hex[2..3])?,
            }),
            // #rrggbb / #rrggbbaa — alpha ignored
            6 | 8 => Ok(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
            }),
            _ => Err(format!(
                "invalid hex color: #{} (must be 3, 4, 6 or 8 digits)",
                hex
            )),
        }
    }

    /// Parses `rgb()`/`rgba()`/`hsl()`/`hsla()` functional notation.
    ///
    /// Both legacy comma syntax and modern space syntax are accepted; an
    /// alpha component after `/` or as a fourth argument is discarded.
    fn parse_function(name: &str, args: &str) -> Result<Self, String> {
        let parts: Vec<&str> = args
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        if parts.len() < 3 || parts.len() > 4 {
            return Err(format!(
                "{}() requires 3 or 4 components, got {}",
                name,
                parts.len()
            ));
        }

        match name {
            "rgb" | "rgba" => Self::parse_rgb_parts(&parts),
            "hsl" | "hsla" => Self::parse_hsl_parts(&parts),
            _ => Err(format!("unsupported color function: {}()", name)),
        }
    }

    /// Parses the components of `rgb()`/`rgba()`.
    fn parse_rgb_parts(parts: &[&str]) -> Result<Self, String> {
        let channel = |part: &str| -> Result<f64, String> {
            let (num, scale) = match part.strip_suffix('%') {
                Some(num) => (num, 255.0 / 100.0),
                None => (part, 1.0),
            };
            num.parse::<f64>()
                .map(|v| (v * scale).clamp(0.0, 255.0))
                .map_err(|_| format!("invalid rgb component '{}'", part))
        };

        Ok(Self {
            r: channel(parts[0])?,
            g: channel(parts[1])?,
            b: channel(parts[2])?,
        })
    }

    /// Parses the components of `hsl()`/`hsla()`.
    fn parse_hsl_parts(parts: &[&str]) -> Result<Self, String> {
        let hue_str = parts[0].strip_suffix("deg").unwrap_or(parts[0]);
        let hue = hue_str
            .parse::<f64>()
            .map_err(|_| format!("invalid hue '{}'", parts[0]))?;

        let fraction = |part: &str| -> Result<f64, String> {
            let num = part.strip_suffix('%').unwrap_or(part);
            num.parse::<f64>()
                .map(|v| (v / 100.0).clamp(0.0, 1.0))
                .map_err(|_| format!("invalid percentage '{}'", part))
        };

        Ok(Self::from_hsl(
            hue.rem_euclid(360.0),
            fraction(parts[1])?,
            fraction(parts[2])?,
        ))
    }

    /// Builds a color from HSL components (hue 0–360, s/l as 0–1 fractions).
    fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = h / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

        let (r1, g1, b1) = if hp < 1.0 {
            (c, x, 0.0)
        } else if hp < 2.0 {
            (x, c, 0.0)
        } else if hp < 3.0 {
            (0.0, c, x)
        } else if hp < 4.0 {
            (0.0, x, c)
        } else if hp < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        let m = l - c / 2.0;
        Self {
            r: (r1 + m) * 255.0,
            g: (g1 + m) * 255.0,
            b: (b1 + m) * 255.0,
        }
    }

    /// Returns (hue 0–360, saturation 0–100, lightness 0–100).
    ///
    /// Achromatic colors report a hue and saturation of zero.
    fn hsl_components(&self) -> (f64, f64, f64) {
        let r = self.r / 255.0;
        let g = self.g / 255.0;
        let b = self.b / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d < f64::EPSILON {
            return (0.0, 0.0, l * 100.0);
        }

        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if (max - r).abs() < f64::EPSILON {
            ((g - b) / d).rem_euclid(6.0)
        } else if (max - g).abs() < f64::EPSILON {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } * 60.0;

        (h, s * 100.0, l * 100.0)
    }

    /// Parses a CSS color keyword.
    fn parse_named(name: &str) -> Result<Self, String> {
        let lower = name.to_ascii_lowercase();
        NAMED_COLORS
            .binary_search_by_key(&lower.as_str(), |&(keyword, _)| keyword)
            .map(|idx| Self::from_rgb24(NAMED_COLORS[idx].1))
            .map_err(|_| format!("unknown color name: {}", name))
    }

    /// Builds a color from a packed 0xRRGGBB value.
    fn from_rgb24(rgb: u32) -> Self {
        Self {
            r: f64::from((rgb >> 16) & 0xff),
            g: f64::from((rgb >> 8) & 0xff),
            b: f64::from(rgb & 0xff),
        }
    }
}

/// CSS color keywords, sorted for binary search.
///
/// `transparent` is included as rgb(0, 0, 0) since alpha is discarded.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff), ("antiquewhite", 0xfaebd7), ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4), ("azure", 0xf0ffff), ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4), ("black", 0x000000), ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff), ("blueviolet", 0x8a2be2), ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887), ("cadetblue", 0x5f9ea0), ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e), ("coral", 0xff7f50), ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc), ("crimson", 0xdc143c), ("cyan", 0x00ffff),
    ("darkblue", 0x00008b), ("darkcyan", 0x008b8b), ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9), ("darkgreen", 0x006400), ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b), ("darkmagenta", 0x8b008b), ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00), ("darkorchid", 0x9932cc), ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a), ("darkseagreen", 0x8fbc8f), ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f), ("darkslategrey", 0x2f4f4f), ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3), ("deeppink", 0xff1493), ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969), ("dimgrey", 0x696969), ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222), ("floralwhite", 0xfffaf0), ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff), ("gainsboro", 0xdcdcdc), ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700), ("goldenrod", 0xdaa520), ("gray", 0x808080),
    ("green", 0x008000), ("greenyellow", 0xadff2f), ("grey", 0x808080),
    ("honeydew", 0xf0fff0), ("hotpink", 0xff69b4), ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082), ("ivory", 0xfffff0), ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa), ("lavenderblush", 0xfff0f5), ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd), ("lightblue", 0xadd8e6), ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff), ("lightgoldenrodyellow", 0xfafad2), ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90), ("lightgrey", 0xd3d3d3), ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a), ("lightseagreen", 0x20b2aa), ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899), ("lightslategrey", 0x778899), ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0), ("lime", 0x00ff00), ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6), ("magenta", 0xff00ff), ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa), ("mediumblue", 0x0000cd), ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db), ("mediumseagreen", 0x3cb371), ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a), ("mediumturquoise", 0x48d1cc), ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970), ("mintcream", 0xf5fffa), ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5), ("navajowhite", 0xffdead), ("navy", 0x000080),
    ("oldlace", 0xfdf5e6), ("olive", 0x808000), ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500), ("orangered", 0xff4500), ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa), ("palegreen", 0x98fb98), ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093), ("papayawhip", 0xffefd5), ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f), ("pink", 0xffc0cb), ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6), ("purple", 0x800080), ("rebeccapurple", 0x663399),
    ("red", 0xff0000), ("rosybrown", 0xbc8f8f), ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513), ("salmon", 0xfa8072), ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57), ("seashell", 0xfff5ee), ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0), ("skyblue", 0x87ceeb), ("slateblue", 0x6a5acd),
    ("slategray", 0x708090), ("slategrey", 0x708090), ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f), ("steelblue", 0x4682b4), ("tan", 0xd2b48c),
    ("teal", 0x008080), ("thistle", 0xd8bfd8), ("tomato", 0xff6347),
    ("transparent", 0x000000), ("turquoise", 0x40e0d0), ("violet", 0xee82ee),
    ("wheat", 0xf5deb3), ("white", 0xffffff), ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00), ("yellowgreen", 0x9acd32),
];
