// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use crate::config::Settings;

/// Build the `<style>` block for the document: the gutter width rule, plus
/// any configured font overrides. Each `font-*` property is emitted only
/// when configured, applied verbatim; when none is configured the `body`
/// rule is omitted entirely.
#[must_use]
pub fn build_style_block(gutter_width: usize, settings: &Settings) -> String {
    let mut acc = String::new();
    acc.push_str("<style>\n");
    _ = writeln!(
        acc,
        ".gutter-{gutter_width}::before {{ width: {gutter_width}ch; }}"
    );

    let mut font_rules = String::new();
    if let Some(family) = &settings.font_family {
        _ = write!(font_rules, " font-family: {family};");
    }
    if let Some(size) = &settings.font_size {
        _ = write!(font_rules, " font-size: {size};");
    }
    if let Some(weight) = &settings.font_weight {
        _ = write!(font_rules, " font-weight: {weight};");
    }
    if !font_rules.is_empty() {
        _ = writeln!(acc, "body {{{font_rules} }}");
    }

    acc.push_str("</style>");
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_style_block_without_font_overrides() {
        let block = build_style_block(2, &Settings::default());
        assert_eq2!(
            block,
            "<style>\n.gutter-2::before { width: 2ch; }\n</style>"
        );
    }

    #[test]
    fn test_style_block_with_all_font_overrides() {
        let mut settings = Settings::default();
        settings.font_family = Some("Fira Code".into());
        settings.font_size = Some("14px".into());
        settings.font_weight = Some("500".into());
        let block = build_style_block(1, &settings);
        assert!(block.contains(
            "body { font-family: Fira Code; font-size: 14px; font-weight: 500; }"
        ));
    }

    #[test]
    fn test_style_block_with_partial_font_overrides() {
        let mut settings = Settings::default();
        settings.font_size = Some("12px".into());
        let block = build_style_block(1, &settings);
        assert!(block.contains("body { font-size: 12px; }"));
        assert!(!block.contains("font-family"));
        assert!(!block.contains("font-weight"));
    }
}
