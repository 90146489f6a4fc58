//! Output formats for a parsed [`Recipe`].
//!
//! Every renderer is a pure function of the recipe and its settings.
//! Section headings are laid out by [`layout`], which walks the flat
//! section list alongside the steps so headers without steps still appear.

use std::fmt;
use std::str::FromStr;

use crate::config::RecipeSettings;
use crate::error::CookError;
use crate::model::{Recipe, Section, Step};

pub mod cooklang;
pub mod html;
pub mod json;
pub mod latex;
pub mod markdown;
pub mod text;

pub use self::cooklang::CooklangRenderer;
pub use self::html::HtmlRenderer;
pub use self::json::JsonRenderer;
pub use self::latex::{latex_document, LatexRenderer, RECIPE_PLACEHOLDER};
pub use self::markdown::{MarkdownOptions, MarkdownRenderer};
pub use self::text::TextRenderer;

pub trait Renderer {
    fn render(&self, recipe: &Recipe) -> Result<String, CookError>;
}

/// One item of the instruction body in output order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Block<'r> {
    Section(&'r Section),
    Step(&'r Step),
}

/// Interleave sections and steps in document order.
///
/// When a step points at a section ahead of the current one, every section
/// up to and including it is emitted first. Sections left over after the
/// last step are flushed at the end.
pub fn layout(recipe: &Recipe) -> Vec<Block<'_>> {
    let mut blocks = Vec::with_capacity(recipe.steps.len() + recipe.sections.len());
    let mut emitted = 0;

    for step in &recipe.steps {
        if let Some(target) = step.section {
            while emitted <= target && emitted < recipe.sections.len() {
                blocks.push(Block::Section(&recipe.sections[emitted]));
                emitted += 1;
            }
        }
        blocks.push(Block::Step(step));
    }

    blocks.extend(recipe.sections[emitted..].iter().map(Block::Section));
    blocks
}

/// Heading depth for a section.
///
/// With `ignore_section_depth` every section gets `fixed`, otherwise the
/// source level shifted by `offset` and capped at `max`.
pub fn heading_level(
    section: &Section,
    settings: &RecipeSettings,
    fixed: usize,
    offset: usize,
    max: usize,
) -> usize {
    if settings.ignore_section_depth {
        fixed
    } else {
        (section.level + offset).min(max)
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Markdown,
    Html,
    Text,
    Latex,
    Cooklang,
    Json,
}

impl Format {
    pub const ALL: [Format; 6] = [
        Format::Markdown,
        Format::Html,
        Format::Text,
        Format::Latex,
        Format::Cooklang,
        Format::Json,
    ];

    /// File extension used when writing this format
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Markdown => "md",
            Format::Html => "html",
            Format::Text => "txt",
            Format::Latex => "tex",
            Format::Cooklang => "cook",
            Format::Json => "json",
        }
    }

    /// Renderer with default options for this format
    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            Format::Markdown => Box::new(MarkdownRenderer::default()),
            Format::Html => Box::new(HtmlRenderer::default()),
            Format::Text => Box::new(TextRenderer),
            Format::Latex => Box::new(LatexRenderer),
            Format::Cooklang => Box::new(CooklangRenderer),
            Format::Json => Box::new(JsonRenderer),
        }
    }

    pub fn render(&self, recipe: &Recipe) -> Result<String, CookError> {
        self.renderer().render(recipe)
    }
}

impl FromStr for Format {
    type Err = CookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(Format::Markdown),
            "html" => Ok(Format::Html),
            "text" | "txt" => Ok(Format::Text),
            "latex" | "tex" => Ok(Format::Latex),
            "cooklang" | "cook" => Ok(Format::Cooklang),
            "json" => Ok(Format::Json),
            _ => Err(CookError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Markdown => "markdown",
            Format::Html => "html",
            Format::Text => "text",
            Format::Latex => "latex",
            Format::Cooklang => "cooklang",
            Format::Json => "json",
        };
        f.write_str(name)
    }
}
