use cooklang_parse::{ConvertResult, CookError, Format, RecipeConverter};
use std::fs;
use tempfile::TempDir;

const SOUP: &str = "---
title: Tomato Soup
---

Roast @tomatoes{1%kg} in the #oven{} for ~{40%minutes}.

== Finish ==

Blend with @basil{1%bunch} and @cream{100%ml}.
";

/// Text → Markdown with builder API
#[test]
fn test_builder_text_to_markdown() {
    let result = RecipeConverter::builder().text(SOUP).build().unwrap();

    match result {
        ConvertResult::Rendered(markdown) => {
            assert!(markdown.starts_with("# Tomato Soup"));
            assert!(markdown.contains("- 1 kg tomatoes"));
            assert!(markdown.contains("### Finish"));
        }
        ConvertResult::Recipe(_) => panic!("Expected rendered result"),
    }
}

/// Text → Recipe (parse only)
#[test]
fn test_builder_parse_only() {
    let result = RecipeConverter::builder()
        .text(SOUP)
        .parse_only()
        .build()
        .unwrap();

    match result {
        ConvertResult::Recipe(recipe) => {
            assert_eq!(recipe.title.as_deref(), Some("Tomato Soup"));
            assert_eq!(recipe.ingredients().len(), 3);
            assert_eq!(recipe.sections.len(), 1);
        }
        ConvertResult::Rendered(_) => panic!("Expected Recipe result"),
    }
}

#[test]
fn test_builder_keeps_section_depth() {
    let result = RecipeConverter::builder()
        .text(SOUP)
        .format(Format::Html)
        .ignore_section_depth(false)
        .build()
        .unwrap();

    match result {
        ConvertResult::Rendered(html) => assert!(html.contains("<h4>Finish</h4>")),
        ConvertResult::Recipe(_) => panic!("Expected rendered result"),
    }
}

#[test]
fn test_builder_html_image() {
    let result = RecipeConverter::builder()
        .text(SOUP)
        .format(Format::Html)
        .image("soup.png")
        .build()
        .unwrap();

    match result {
        ConvertResult::Rendered(html) => assert!(html.contains(r#"<img src="soup.png""#)),
        ConvertResult::Recipe(_) => panic!("Expected rendered result"),
    }
}

#[test]
fn test_builder_strict_units() {
    let result = RecipeConverter::builder().text(SOUP).strict_units().build();
    assert!(matches!(result, Err(CookError::UnknownUnit(ref unit)) if unit == "bunch"));
}

#[test]
fn test_builder_strict_timers() {
    let result = RecipeConverter::builder()
        .text("Let it rest ~{}.")
        .strict_timers()
        .build();
    assert!(matches!(result, Err(CookError::TimerWithoutDuration(_))));
}

#[test]
fn test_builder_file_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weeknight_chili.cook");
    fs::write(&path, "Brown @beef{500%g} in a #pot.").unwrap();

    let result = RecipeConverter::builder()
        .file(&path)
        .format(Format::Text)
        .build()
        .unwrap();

    match result {
        ConvertResult::Rendered(text) => {
            assert_eq!(text, "Weeknight Chili\n\nBrown 500 g beef in a pot.")
        }
        ConvertResult::Recipe(_) => panic!("Expected rendered result"),
    }
}

/// Test error handling: no source specified
#[test]
fn test_builder_no_source() {
    let result = RecipeConverter::builder().build();

    assert!(result.is_err());
    match result.unwrap_err() {
        CookError::BuilderError(msg) => {
            assert!(msg.contains("No input source specified"));
        }
        _ => panic!("Expected BuilderError"),
    }
}

#[test]
fn test_builder_empty_text() {
    let result = RecipeConverter::builder().text("   \n  ").build();
    assert!(matches!(result, Err(CookError::BuilderError(_))));
}

#[test]
fn test_builder_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = RecipeConverter::builder()
        .file(dir.path().join("nope.cook"))
        .build();
    assert!(matches!(result, Err(CookError::NotFound(_))));
}
