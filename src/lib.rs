//! Parser and renderers for the Cooklang recipe markup language.
//!
//! ```
//! use cooklang_parse::{parse, Format};
//!
//! let recipe = parse("---\ntitle: Test\n---\n\nBoil @water{1%L} in a #pot{}.").unwrap();
//! assert_eq!(recipe.title.as_deref(), Some("Test"));
//!
//! let markdown = Format::Markdown.render(&recipe).unwrap();
//! assert!(markdown.contains("- 1 L water"));
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
pub mod render;
pub mod units;

pub use builder::{ConvertResult, InputSource, OutputMode, RecipeConverter, RecipeConverterBuilder};
pub use crate::config::{load_config, CookConfig, LoaderOptions, ParserOptions, RecipeSettings};
pub use error::CookError;
pub use loader::{find_related_image, read_cook, read_cook_with};
pub use model::{
    Comment, Cookware, Ingredient, Metadata, Note, Quantity, Recipe, Section, Span, Step, Timer,
    Token, TokenKind,
};
pub use parser::{parse, CooklangParser};
pub use render::{latex_document, Format, MarkdownOptions, Renderer};
pub use units::Unit;
