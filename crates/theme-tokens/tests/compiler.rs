//! End-to-end tests for the theme compiler: JSON in, fragment + warnings out.

use theme_tokens::{compile, ColorFormat, CompileError, CompileOptions, ThemeSet};

fn compile_json(json: &str, options: &CompileOptions) -> theme_tokens::CompilerOutput {
    let themes = ThemeSet::from_json_str(json).expect("test input must materialize");
    compile(&themes, options)
}

// =========================================================================
// Full-pipeline scenarios
// =========================================================================

#[test]
fn test_two_theme_snapshot() {
    let output = compile_json(
        r##"{
            "themes": {
                "light": {
                    "colorScheme": "light",
                    "colors": {
                        "surface": "#fafafa",
                        "brand": { "DEFAULT": "#336699", "900": "#0a1420" }
                    }
                },
                "dark": {
                    "colorScheme": "dark",
                    "colors": {
                        "surface": "#1e1e1e",
                        "accent": "hsl(210, 50%, 40%)"
                    }
                }
            }
        }"##,
        &CompileOptions::default(),
    );

    assert!(output.warnings.is_empty());
    insta::assert_snapshot!(output.fragment, @r#"
.light {
  color-scheme: light;
  --surface: #fafafa;
  --brand: #336699;
  --brand-900: #0a1420;
}

.dark {
  color-scheme: dark;
  --surface: #1e1e1e;
  --accent: #336699;
}
"#);
}

#[test]
fn test_format_fidelity() {
    let json = r##"{ "themes": { "t": { "colors": { "brand": "#336699" } } } }"##;

    let hex = compile_json(json, &CompileOptions::default());
    assert!(hex.fragment.contains("--brand: #336699;"));

    let rgb = compile_json(
        json,
        &CompileOptions {
            prefix: None,
            format: ColorFormat::Rgb,
        },
    );
    assert!(rgb.fragment.contains("--brand: 51, 102, 153;"));

    let hsl = compile_json(
        json,
        &CompileOptions {
            prefix: None,
            format: ColorFormat::Hsl,
        },
    );
    assert!(hsl.fragment.contains("--brand: 210.00 50.00% 40.00%;"));
}

#[test]
fn test_scheme_round_trip() {
    let output = compile_json(
        r#"{ "themes": {
            "a": { "colorScheme": "Light  Dark", "colors": {} },
            "b": { "colorScheme": "dark dark", "colors": {} },
            "c": { "colorScheme": "light blue", "colors": {} }
        } }"#,
        &CompileOptions::default(),
    );

    assert_eq!(
        output.fragment,
        ".a {\n  color-scheme: light dark;\n}\n\n.b {\n  color-scheme: dark;\n}\n\n.c {\n}"
    );
    assert_eq!(output.warnings.len(), 1);
    assert!(output.warnings[0].contains("light blue"));
}

#[test]
fn test_omission_on_color_failure() {
    let output = compile_json(
        r###"{ "themes": { "t": { "colors": {
            "good": "#ffffff",
            "bad": "##nope",
            "shades": { "50": "#fafafa", "100": "bogus" }
        } } } }"###,
        &CompileOptions::default(),
    );

    assert!(!output.fragment.contains("--bad"));
    assert!(!output.fragment.contains("--shades-100"));
    assert!(output.fragment.contains("--good: #ffffff;"));
    assert!(output.fragment.contains("--shades-50: #fafafa;"));
    assert_eq!(
        output.warnings,
        vec![
            "Invalid color: ##nope for t.bad".to_string(),
            "Invalid color: bogus for t.shades.100".to_string(),
        ]
    );
}

#[test]
fn test_non_string_shade_values_skipped_silently() {
    let output = compile_json(
        r##"{ "themes": { "t": { "colors": {
            "brand": { "DEFAULT": "#336699", "weight": 500, "hover": null }
        } } } }"##,
        &CompileOptions::default(),
    );

    assert_eq!(output.fragment, ".t {\n  --brand: #336699;\n}");
    assert!(output.warnings.is_empty());
}

#[test]
fn test_malformed_token_values_ignored_silently() {
    let output = compile_json(
        r##"{ "themes": { "t": { "colors": {
            "number": 42,
            "flag": true,
            "list": ["#fff", "#000"],
            "real": "#abcdef"
        } } } }"##,
        &CompileOptions::default(),
    );

    assert_eq!(output.fragment, ".t {\n  --real: #abcdef;\n}");
    assert!(output.warnings.is_empty());
}

#[test]
fn test_named_and_functional_colors() {
    let output = compile_json(
        r#"{ "themes": { "t": { "colors": {
            "a": "tomato",
            "b": "rgb(255, 99, 71)",
            "c": "RebeccaPurple"
        } } } }"#,
        &CompileOptions::default(),
    );

    assert_eq!(
        output.fragment,
        ".t {\n  --a: #ff6347;\n  --b: #ff6347;\n  --c: #663399;\n}"
    );
}

#[test]
fn test_prefix_option_from_json() {
    let options: CompileOptions =
        serde_json::from_str(r#"{ "prefix": "app", "format": "rgb" }"#).unwrap();

    let output = compile_json(
        r##"{ "themes": { "t": { "colors": { "brand": "#336699" } } } }"##,
        &options,
    );

    assert_eq!(output.fragment, ".t {\n  --app-brand: 51, 102, 153;\n}");
}

// =========================================================================
// Fatal path
// =========================================================================

#[test]
fn test_fatal_on_missing_themes_key() {
    let err = ThemeSet::from_json_str("{}").unwrap_err();
    assert!(matches!(err, CompileError::InvalidStructure));
    assert_eq!(
        err.to_string(),
        "Invalid theme structure: expected { themes: { ... } }"
    );
}

#[test]
fn test_fatal_on_malformed_json_reports_path_when_attached() {
    let err = ThemeSet::from_json_str("not json")
        .unwrap_err()
        .with_path("tokens/themes.json");

    let msg = err.to_string();
    assert!(msg.starts_with("Failed to load or parse theme file tokens/themes.json:"));
}

// =========================================================================
// Properties: determinism and order preservation
// =========================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;
    use theme_tokens::ThemeDefinition;

    fn hex_color_strategy() -> impl Strategy<Value = String> {
        (0u32..=0xffffff).prop_map(|v| format!("#{:06x}", v))
    }

    fn theme_name_strategy() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,11}"
    }

    fn theme_set_strategy() -> impl Strategy<Value = (Vec<String>, ThemeSet)> {
        prop::collection::vec((theme_name_strategy(), hex_color_strategy()), 1..6).prop_map(
            |entries| {
                let mut names = Vec::new();
                let mut set = ThemeSet::new();
                for (name, color) in entries {
                    if names.contains(&name) {
                        continue;
                    }
                    set = set.add(name.as_str(), ThemeDefinition::new().color("primary", color));
                    names.push(name);
                }
                (names, set)
            },
        )
    }

    fn format_strategy() -> impl Strategy<Value = ColorFormat> {
        prop_oneof![
            Just(ColorFormat::Hex),
            Just(ColorFormat::Hsl),
            Just(ColorFormat::Rgb),
        ]
    }

    proptest! {
        #[test]
        fn test_compilation_is_deterministic(
            (_names, themes) in theme_set_strategy(),
            format in format_strategy()
        ) {
            let options = CompileOptions { prefix: None, format };
            let first = compile(&themes, &options);
            let second = compile(&themes, &options);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_theme_blocks_appear_in_input_order(
            (names, themes) in theme_set_strategy()
        ) {
            let output = compile(&themes, &CompileOptions::default());

            let mut last_position = None;
            for name in &names {
                let selector = format!(".{} {{", name);
                let position = output.fragment.find(&selector);
                prop_assert!(position.is_some(), "missing block for theme {}", name);
                prop_assert!(position > last_position);
                last_position = position;
            }
        }

        #[test]
        fn test_valid_hex_colors_never_warn(
            (_names, themes) in theme_set_strategy(),
            format in format_strategy()
        ) {
            let options = CompileOptions { prefix: None, format };
            let output = compile(&themes, &options);
            prop_assert!(output.warnings.is_empty());
        }
    }
}
