use std::path::PathBuf;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::error::CookError;
use crate::model::{scalar_to_string, Recipe, Step, TokenKind, IMAGE_KEY};

use super::{heading_level, layout, Block, Renderer};

/// HTML fragment renderer.
///
/// An explicit `image` takes precedence over the `image` metadata entry.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    pub image: Option<PathBuf>,
}

impl HtmlRenderer {
    pub fn with_image(image: impl Into<PathBuf>) -> Self {
        Self {
            image: Some(image.into()),
        }
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, recipe: &Recipe) -> Result<String, CookError> {
        let image = self
            .image
            .as_ref()
            .map(|path| path.display().to_string());
        Ok(render(recipe, image.as_deref()))
    }
}

pub fn render(recipe: &Recipe, image: Option<&str>) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(title) = &recipe.title {
        lines.push(format!("<h1>{}</h1>", encode_text(title)));
    }

    let image = image
        .map(str::to_string)
        .or_else(|| recipe.metadata.get(IMAGE_KEY).and_then(scalar_to_string));
    if let Some(src) = image {
        let alt = format!(
            "Recipe Image for {}",
            recipe.title.as_deref().unwrap_or("Recipe")
        );
        lines.push(format!(
            r#"<img src="{}" alt="{}"/>"#,
            encode_double_quoted_attribute(&src),
            encode_double_quoted_attribute(&alt)
        ));
    }

    let ingredients = recipe.ingredients();
    if !ingredients.is_empty() {
        lines.push("<h2>Ingredients</h2>".to_string());
        lines.push("<ul>".to_string());
        lines.extend(
            ingredients
                .iter()
                .map(|ingredient| format!("<li>{}</li>", encode_text(&ingredient.to_string()))),
        );
        lines.push("</ul>".to_string());
    }

    let cookware = recipe.cookware();
    if !cookware.is_empty() {
        lines.push("<h2>Equipment</h2>".to_string());
        lines.push("<ul>".to_string());
        lines.extend(
            cookware
                .iter()
                .map(|item| format!("<li>{}</li>", encode_text(&item.to_string()))),
        );
        lines.push("</ul>".to_string());
    }

    if !recipe.steps.is_empty() || !recipe.sections.is_empty() {
        lines.push("<h2>Instructions</h2>".to_string());
    }
    for block in layout(recipe) {
        match block {
            Block::Section(section) => {
                let level = heading_level(section, &recipe.settings, 3, 2, 6);
                lines.push(format!(
                    "<h{level}>{}</h{level}>",
                    encode_text(&section.title)
                ));
            }
            Block::Step(step) => lines.push(format!("<p>{}</p>", render_step(step))),
        }
    }

    lines.join("\n").trim().to_string()
}

/// Inline HTML for one step
pub fn render_step(step: &Step) -> String {
    let mut out = String::new();
    for token in &step.tokens {
        match &token.kind {
            TokenKind::Text => out.push_str(&encode_text(&token.text)),
            TokenKind::Ingredient(ingredient) => {
                out.push_str(&format!(
                    "<strong>{}</strong>",
                    encode_text(&ingredient.amount_and_name())
                ));
                if let Some(preparation) = &ingredient.preparation {
                    out.push_str(&format!(" <em>({})</em>", encode_text(preparation)));
                }
            }
            TokenKind::Cookware(cookware) => {
                out.push_str(&format!("<em>{}</em>", encode_text(&cookware.to_string())))
            }
            TokenKind::Timer(timer) => {
                let duration = timer.to_string();
                if !duration.is_empty() {
                    out.push_str(&format!("<em>{}</em>", encode_text(&duration)));
                }
            }
            TokenKind::Comment(comment) if comment.is_block => {
                out.push_str(&format!("<!-- {} -->", encode_text(&comment.text)))
            }
            TokenKind::Comment(comment) => {
                out.push_str(&format!("<em>({})</em>", encode_text(&comment.text)))
            }
            TokenKind::Note(note) => {
                out.push_str(&format!("<blockquote>{}</blockquote>", encode_text(&note.text)))
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_step_markup() {
        let recipe = parse("Fry @egg{2}(beaten) in a #pan{1} for ~{3%min}.").unwrap();
        assert_eq!(
            render_step(&recipe.steps[0]),
            "Fry <strong>2 egg</strong> <em>(beaten)</em> in a <em>1 pan</em> for <em>3 min</em>."
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let recipe = parse("Salt & pepper <to taste>.").unwrap();
        assert_eq!(
            render_step(&recipe.steps[0]),
            "Salt &amp; pepper &lt;to taste&gt;."
        );
    }

    #[test]
    fn test_document() {
        let recipe = parse(
            "---\ntitle: Eggs\nimage: eggs.jpg\n---\n\n= Cook =\n\nBoil @egg{2} in a #pot.",
        )
        .unwrap();

        let expected = [
            "<h1>Eggs</h1>",
            r#"<img src="eggs.jpg" alt="Recipe Image for Eggs"/>"#,
            "<h2>Ingredients</h2>",
            "<ul>",
            "<li>2 egg</li>",
            "</ul>",
            "<h2>Equipment</h2>",
            "<ul>",
            "<li>pot</li>",
            "</ul>",
            "<h2>Instructions</h2>",
            "<h3>Cook</h3>",
            "<p>Boil <strong>2 egg</strong> in a <em>pot</em>.</p>",
        ]
        .join("\n");
        assert_eq!(render(&recipe, None), expected);
    }

    #[test]
    fn test_explicit_image_overrides_metadata() {
        let recipe = parse("---\nimage: old.png\n---\nServe.").unwrap();
        let html = HtmlRenderer::with_image("new.webp").render(&recipe).unwrap();
        assert!(html.contains(r#"<img src="new.webp" alt="Recipe Image for Recipe"/>"#));
        assert!(!html.contains("old.png"));
    }

    #[test]
    fn test_no_image_without_metadata() {
        let recipe = parse("Serve.").unwrap();
        assert_eq!(render(&recipe, None), "<h2>Instructions</h2>\n<p>Serve.</p>");
    }
}
