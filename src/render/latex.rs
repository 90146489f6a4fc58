//! LaTeX output for the `recipe` environment of a cookbook template.

use log::debug;

use crate::error::CookError;
use crate::model::{join_words, Ingredient, Recipe, Step, TokenKind};

use super::{heading_level, layout, Block, Renderer};

/// Template block replaced by the rendered recipes
pub const RECIPE_PLACEHOLDER: &str = "%% RECIPE";

const HEADINGS: [&str; 3] = ["section", "subsection", "subsubsection"];

#[derive(Debug, Clone, Copy, Default)]
pub struct LatexRenderer;

impl Renderer for LatexRenderer {
    fn render(&self, recipe: &Recipe) -> Result<String, CookError> {
        Ok(render(recipe))
    }
}

/// Escape the characters LaTeX treats specially
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// One recipe wrapped in a `recipe` environment
pub fn render(recipe: &Recipe) -> String {
    let title = recipe.title.as_deref().unwrap_or("Recipe");
    let mut out = format!("\n\\begin{{recipe}}{{{}}}{{}}\n\n", escape(title));

    for block in layout(recipe) {
        match block {
            Block::Section(section) => {
                let level = heading_level(section, &recipe.settings, 1, 0, HEADINGS.len());
                out.push_str(&format!(
                    "\\{}{{{}}}\n",
                    HEADINGS[level.max(1) - 1],
                    escape(&section.title)
                ));
            }
            Block::Step(step) => out.push_str(&render_step(step)),
        }
    }

    out.push_str("\\end{recipe}\n\\cleardoublepage\n\n");
    out
}

/// `\ingredient[quantity]{unit}{name}`
pub fn ingredient_macro(ingredient: &Ingredient) -> String {
    let quantity = ingredient
        .quantity
        .as_ref()
        .map(|q| escape(&q.to_string()))
        .unwrap_or_default();
    format!(
        "\\ingredient[{}]{{{}}}{{{}}}",
        quantity,
        escape(ingredient.unit.as_deref().unwrap_or_default()),
        escape(&ingredient.name)
    )
}

/// A step's ingredient macros, then its prose
pub fn render_step(step: &Step) -> String {
    let mut out = String::new();
    for ingredient in step.ingredients() {
        out.push_str(&ingredient_macro(ingredient));
        out.push('\n');
    }

    for token in &step.tokens {
        match &token.kind {
            TokenKind::Text => out.push_str(&escape(&token.text)),
            TokenKind::Ingredient(ingredient) => {
                let quantity = ingredient.quantity.as_ref().map(ToString::to_string);
                let text = join_words([
                    Some(ingredient.name.as_str()),
                    quantity.as_deref(),
                    ingredient.unit.as_deref(),
                ]);
                out.push_str(&format!("\\textbf{{{}}}", escape(&text)));
            }
            TokenKind::Cookware(cookware) => {
                out.push_str(&format!("\\textit{{{}}}", escape(&cookware.to_string())))
            }
            TokenKind::Timer(timer) => {
                let duration = timer.to_string();
                if !duration.is_empty() {
                    out.push_str(&format!("\\textbf{{{}}}", escape(&duration)));
                }
            }
            TokenKind::Comment(comment) if comment.is_block => {
                // `%` comments out the rest of the line
                out.push_str(&format!("% {}\n", comment.text.replace('\n', " ")));
            }
            TokenKind::Comment(comment) => {
                out.push_str(&format!("\\textit{{({})}}", escape(&comment.text)))
            }
            TokenKind::Note(note) => out.push_str(&format!(
                "\\begin{{quote}}\n{}\n\\end{{quote}}",
                escape(&note.text)
            )),
        }
    }

    out.push_str("\n\n");
    out
}

/// Assemble a full document from template blocks.
///
/// Every block whose trimmed text is [`RECIPE_PLACEHOLDER`] is replaced by
/// all recipes in order. Each block is followed by a newline.
pub fn latex_document<S: AsRef<str>>(blocks: &[S], recipes: &[Recipe]) -> Result<String, CookError> {
    if !blocks
        .iter()
        .any(|block| block.as_ref().trim() == RECIPE_PLACEHOLDER)
    {
        return Err(CookError::MissingPlaceholder);
    }

    debug!(
        "Assembling LaTeX document from {} blocks and {} recipes",
        blocks.len(),
        recipes.len()
    );

    let mut document = String::new();
    for block in blocks {
        let block = block.as_ref();
        if block.trim() == RECIPE_PLACEHOLDER {
            for recipe in recipes {
                document.push_str(&render(recipe));
            }
        } else {
            document.push_str(block);
        }
        document.push('\n');
    }
    Ok(document)
}
