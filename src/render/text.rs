use crate::error::CookError;
use crate::model::{Recipe, Step, TokenKind};

use super::Renderer;

/// Plain text without markup or summary lists
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, recipe: &Recipe) -> Result<String, CookError> {
        Ok(render(recipe))
    }
}

/// The title followed by one paragraph per step. Steps that render empty,
/// such as comment-only steps, are skipped.
pub fn render(recipe: &Recipe) -> String {
    let mut paragraphs: Vec<String> = Vec::new();
    if let Some(title) = &recipe.title {
        paragraphs.push(title.clone());
    }
    paragraphs.extend(
        recipe
            .steps
            .iter()
            .map(|step| render_step(step).trim().to_string())
            .filter(|text| !text.is_empty()),
    );
    paragraphs.join("\n\n")
}

pub fn render_step(step: &Step) -> String {
    step.tokens
        .iter()
        .map(|token| match &token.kind {
            TokenKind::Text => token.text.clone(),
            TokenKind::Ingredient(ingredient) => ingredient.to_string(),
            TokenKind::Cookware(cookware) => cookware.to_string(),
            TokenKind::Timer(timer) => timer.to_string(),
            TokenKind::Comment(_) => String::new(),
            TokenKind::Note(note) => note.text.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_plain_step() {
        let recipe = parse("Simmer @stock{500%ml} in a #pot{2} for ~{20%min} -- covered").unwrap();
        assert_eq!(
            render_step(&recipe.steps[0]),
            "Simmer 500 ml stock in a 2 pot for 20 min"
        );
    }

    #[test]
    fn test_comment_only_steps_are_skipped() {
        let recipe = parse("---\ntitle: Soup\n---\n\n-- just a remark\n\nServe hot.").unwrap();
        assert_eq!(render(&recipe), "Soup\n\nServe hot.");
    }

    #[test]
    fn test_preparation_is_kept() {
        let recipe = parse("Add @garlic{2%cloves}(crushed).").unwrap();
        assert_eq!(render(&recipe), "Add 2 cloves garlic (crushed).");
    }
}
