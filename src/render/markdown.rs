use crate::error::CookError;
use crate::model::{Recipe, Step, TokenKind};

use super::{heading_level, layout, Block, Renderer};

/// Which parts of the recipe to include
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    pub include_ingredients: bool,
    pub include_cookware: bool,
    pub include_instructions: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            include_ingredients: true,
            include_cookware: true,
            include_instructions: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    pub options: MarkdownOptions,
}

impl MarkdownRenderer {
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, recipe: &Recipe) -> Result<String, CookError> {
        Ok(render(recipe, &self.options))
    }
}

/// Render a recipe as a Markdown document
pub fn render(recipe: &Recipe, options: &MarkdownOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(title) = &recipe.title {
        lines.push(format!("# {title}"));
        lines.push(String::new());
    }

    let ingredients = recipe.ingredients();
    if options.include_ingredients && !ingredients.is_empty() {
        lines.push("## Ingredients".to_string());
        lines.push(String::new());
        lines.extend(ingredients.iter().map(|ingredient| format!("- {ingredient}")));
        lines.push(String::new());
    }

    let cookware = recipe.cookware();
    if options.include_cookware && !cookware.is_empty() {
        lines.push("## Equipment".to_string());
        lines.push(String::new());
        lines.extend(cookware.iter().map(|item| format!("- {item}")));
        lines.push(String::new());
    }

    if options.include_instructions && (!recipe.steps.is_empty() || !recipe.sections.is_empty()) {
        lines.push("## Instructions".to_string());
        lines.push(String::new());

        for block in layout(recipe) {
            let rendered = match block {
                Block::Section(section) => {
                    let level = heading_level(section, &recipe.settings, 3, 2, 6);
                    format!("{} {}", "#".repeat(level), section.title)
                }
                Block::Step(step) => render_step(step).trim().to_string(),
            };
            if !rendered.is_empty() {
                lines.push(rendered);
                lines.push(String::new());
            }
        }
    }

    lines.join("\n").trim().to_string()
}

/// Inline Markdown for one step
pub fn render_step(step: &Step) -> String {
    let mut out = String::new();
    for token in &step.tokens {
        match &token.kind {
            TokenKind::Text => out.push_str(&token.text),
            TokenKind::Ingredient(ingredient) => {
                out.push_str(&format!("**{}**", ingredient.amount_and_name()));
                if let Some(preparation) = &ingredient.preparation {
                    out.push_str(&format!(" *({preparation})*"));
                }
            }
            TokenKind::Cookware(cookware) => out.push_str(&format!("*{}*", cookware.name)),
            TokenKind::Timer(timer) => {
                let duration = timer.to_string();
                if !duration.is_empty() {
                    out.push_str(&format!("**{duration}**"));
                }
            }
            TokenKind::Comment(comment) if comment.is_block => {
                out.push_str(&format!("<!-- {} -->", comment.text))
            }
            TokenKind::Comment(comment) => out.push_str(&format!("*({})*", comment.text)),
            TokenKind::Note(note) => out.push_str(&format!("> {}", note.text)),
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
        let recipe =
            parse("Add @onion{1}(diced) to a #pan{} for ~{5%min} -- stir often").unwrap();
        assert_eq!(
            render_step(&recipe.steps[0]),
            "Add **1 onion** *(diced)* to a *pan* for **5 min***(stir often)*"
        );
    }

    #[test]
    fn test_block_comment_and_note() {
        let recipe = parse("> Use ripe fruit\nBlend [- or mash -] well.").unwrap();
        assert_eq!(
            render_step(&recipe.steps[0]),
            "> Use ripe fruit\nBlend <!-- or mash --> well."
        );
    }

    #[test]
    fn test_durationless_timer_renders_nothing() {
        let recipe = parse("Rest ~dough{} overnight.").unwrap();
        assert_eq!(render_step(&recipe.steps[0]), "Rest  overnight.");
    }

    #[test]
    fn test_document_layout() {
        let recipe = parse(
            "---\ntitle: Toast\n---\n\nToast @bread{2%slices} in a #toaster.\n\nButter it with @butter.",
        )
        .unwrap();

        let expected = "# Toast\n\n\
            ## Ingredients\n\n- 2 slices bread\n- butter\n\n\
            ## Equipment\n\n- toaster\n\n\
            ## Instructions\n\n\
            Toast **2 slices bread** in a *toaster*.\n\n\
            Butter it with **butter**.";
        assert_eq!(render(&recipe, &MarkdownOptions::default()), expected);
    }

    #[test]
    fn test_options_drop_parts() {
        let recipe = parse("Toast @bread{2} in a #toaster.").unwrap();
        let options = MarkdownOptions {
            include_ingredients: false,
            include_cookware: false,
            include_instructions: true,
        };
        assert_eq!(
            render(&recipe, &options),
            "## Instructions\n\nToast **2 bread** in a *toaster*."
        );

        let only_lists = MarkdownOptions {
            include_instructions: false,
            ..Default::default()
        };
        let rendered = render(&recipe, &only_lists);
        assert!(rendered.contains("## Ingredients"));
        assert!(!rendered.contains("## Instructions"));
    }

    #[test]
    fn test_section_depth() {
        let mut recipe = parse("= Dough =\n\nKnead.\n\n=== Topping ===\n\nSpread.").unwrap();
        let flat = render(&recipe, &MarkdownOptions::default());
        assert!(flat.contains("### Dough\n"));
        assert!(flat.contains("### Topping\n"));

        recipe.settings.ignore_section_depth = false;
        let nested = render(&recipe, &MarkdownOptions::default());
        assert!(nested.contains("### Dough\n"));
        assert!(nested.contains("##### Topping\n"));
    }
}
