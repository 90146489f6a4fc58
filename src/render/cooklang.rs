use crate::error::CookError;
use crate::model::{Metadata, Recipe, Step, TokenKind};

use super::{layout, Block, Renderer};

/// Re-emits Cooklang source that parses back to an equivalent recipe
#[derive(Debug, Clone, Copy, Default)]
pub struct CooklangRenderer;

impl Renderer for CooklangRenderer {
    fn render(&self, recipe: &Recipe) -> Result<String, CookError> {
        render(recipe)
    }
}

pub fn render(recipe: &Recipe) -> Result<String, CookError> {
    let mut blocks: Vec<String> = Vec::new();

    let mut metadata = recipe.metadata.clone();
    if let Some(title) = &recipe.title {
        metadata
            .entry("title".to_string())
            .or_insert_with(|| serde_yaml::Value::String(title.clone()));
    }
    if !metadata.is_empty() {
        blocks.push(front_matter(&metadata)?);
    }

    for block in layout(recipe) {
        blocks.push(match block {
            Block::Section(section) => {
                let markers = "=".repeat(section.level);
                format!("{markers} {} {markers}", section.title)
            }
            Block::Step(step) => source_text(step),
        });
    }

    let mut out = blocks.join("\n\n");
    out.push('\n');
    Ok(out)
}

fn front_matter(metadata: &Metadata) -> Result<String, CookError> {
    let yaml = serde_yaml::to_string(metadata)?;
    Ok(format!("---\n{yaml}---"))
}

/// Token texts in order.
///
/// Dropped whitespace gaps come back as a single space, or as a newline
/// where a line-bound construct (a note or an inline comment) sits on
/// either side. Tokens nested inside an earlier one are written only once.
pub fn source_text(step: &Step) -> String {
    let mut out = String::new();
    // End offset written so far, and whether the token reaching it ends its line
    let mut previous: Option<(usize, bool)> = None;
    for token in &step.tokens {
        let text = match previous {
            Some((end, _)) if token.span.end <= end => continue,
            Some((end, _)) if token.span.start < end => {
                token.text.get(end - token.span.start..).unwrap_or_default()
            }
            Some((end, line_ended)) => {
                if end < token.span.start {
                    let next_is_note = matches!(token.kind, TokenKind::Note(_));
                    out.push(if line_ended || next_is_note { '\n' } else { ' ' });
                }
                token.text.as_str()
            }
            None => token.text.as_str(),
        };
        out.push_str(text);
        previous = Some((token.span.end, ends_line(&token.kind)));
    }
    out
}

fn ends_line(kind: &TokenKind) -> bool {
    match kind {
        TokenKind::Note(_) => true,
        TokenKind::Comment(comment) => !comment.is_block,
        _ => false,
    }
}
