use std::path::PathBuf;

use log::debug;

use crate::config::{LoaderOptions, ParserOptions, RecipeSettings};
use crate::loader::read_cook_with;
use crate::parser::CooklangParser;
use crate::render::{Format, HtmlRenderer, Renderer};
use crate::{CookError, Recipe};

/// Represents the input source for a recipe
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Cooklang source held in memory
    Text(String),
    /// Path to a `.cook` file
    File(PathBuf),
}

/// Represents the desired output
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputMode {
    /// Render to a [`Format`] (default)
    #[default]
    Rendered,
    /// Return the parsed Recipe without rendering
    Recipe,
}

/// Result of a conversion
#[derive(Debug, Clone)]
pub enum ConvertResult {
    /// Rendered document
    Rendered(String),
    /// Parsed recipe
    Recipe(Recipe),
}

/// Builder for configuring and executing recipe conversions
#[derive(Debug, Default)]
pub struct RecipeConverterBuilder {
    source: Option<InputSource>,
    mode: OutputMode,
    format: Format,
    settings: RecipeSettings,
    options: ParserOptions,
    loader: LoaderOptions,
    image: Option<PathBuf>,
}

impl RecipeConverterBuilder {
    /// Set the input source to Cooklang text
    ///
    /// # Example
    /// ```
    /// use cooklang_parse::RecipeConverter;
    ///
    /// let builder = RecipeConverter::builder()
    ///     .text("Boil @water{1%L} in a #pot{}.");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Set the input source to a `.cook` file
    ///
    /// Files get title inference and image lookup, see [`crate::read_cook`].
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::File(path.into()));
        self
    }

    /// Set the output format (Markdown by default)
    ///
    /// # Example
    /// ```
    /// use cooklang_parse::{Format, RecipeConverter};
    ///
    /// let builder = RecipeConverter::builder()
    ///     .text("Boil @water{1%L}.")
    ///     .format(Format::Html);
    /// ```
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Return the parsed Recipe instead of rendering it
    pub fn parse_only(mut self) -> Self {
        self.mode = OutputMode::Recipe;
        self
    }

    /// Render every section heading at one level (`true`, the default) or
    /// mirror the number of `=` markers (`false`)
    pub fn ignore_section_depth(mut self, ignore: bool) -> Self {
        self.settings.ignore_section_depth = ignore;
        self
    }

    /// Reject timers without a duration
    pub fn strict_timers(mut self) -> Self {
        self.options.strict_timers = true;
        self
    }

    /// Reject units outside the known vocabulary
    pub fn strict_units(mut self) -> Self {
        self.options.strict_units = true;
        self
    }

    /// File loading behaviour for [`InputSource::File`]
    pub fn loader(mut self, loader: LoaderOptions) -> Self {
        self.loader = loader;
        self
    }

    /// Image shown in HTML output, overriding any `image` metadata
    pub fn image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image = Some(path.into());
        self
    }

    /// Build and execute the conversion
    ///
    /// # Errors
    /// Returns `CookError` if:
    /// - No input source was specified, or the text is empty
    /// - The file is missing or unreadable
    /// - Strict parsing rejects the recipe
    ///
    /// # Example
    /// ```
    /// use cooklang_parse::{ConvertResult, RecipeConverter};
    ///
    /// let result = RecipeConverter::builder()
    ///     .text("Boil @water{1%L}.")
    ///     .build()
    ///     .unwrap();
    /// assert!(matches!(result, ConvertResult::Rendered(_)));
    /// ```
    pub fn build(self) -> Result<ConvertResult, CookError> {
        let source = self.source.ok_or_else(|| {
            CookError::BuilderError("No input source specified. Use .text() or .file()".to_string())
        })?;

        let parser = CooklangParser::new()
            .with_settings(self.settings)
            .with_options(self.options);

        let recipe = match source {
            InputSource::Text(text) => {
                if text.trim().is_empty() {
                    return Err(CookError::BuilderError(
                        "Recipe text cannot be empty".to_string(),
                    ));
                }
                parser.parse(&text)?
            }
            InputSource::File(path) => read_cook_with(&path, &self.loader, &parser)?,
        };

        match self.mode {
            OutputMode::Recipe => Ok(ConvertResult::Recipe(recipe)),
            OutputMode::Rendered => {
                debug!("Rendering recipe as {}", self.format);
                let rendered = match (self.format, self.image) {
                    (Format::Html, Some(image)) => HtmlRenderer::with_image(image).render(&recipe)?,
                    (format, _) => format.render(&recipe)?,
                };
                Ok(ConvertResult::Rendered(rendered))
            }
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeConverter;

impl RecipeConverter {
    /// Creates a new builder for converting recipes
    ///
    /// # Example
    /// ```
    /// use cooklang_parse::RecipeConverter;
    ///
    /// let builder = RecipeConverter::builder();
    /// ```
    pub fn builder() -> RecipeConverterBuilder {
        RecipeConverterBuilder::default()
    }
}
