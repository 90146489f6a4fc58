mod blocks;
mod metadata;
mod tokenizer;

use log::debug;

use crate::config::{ParserOptions, RecipeSettings};
use crate::error::CookError;
use crate::model::{scalar_to_string, Recipe, Step, TokenKind};
use crate::units::Unit;

pub use blocks::{parse_section, split_paragraphs};
pub use metadata::extract_front_matter;
pub use tokenizer::tokenize;

/// Parser for Cooklang recipe markup.
///
/// Recognises ingredients (`@`), cookware (`#`), timers (`~`), comments
/// (`--` and `[- -]`), notes (`>`) and section headers (`==`).
///
/// ```
/// use cooklang_parse::CooklangParser;
///
/// let recipe = CooklangParser::new()
///     .parse("---\ntitle: Simple Recipe\n---\n\nHeat @oil{2%tbsp} in a #pan{}.")
///     .unwrap();
/// assert_eq!(recipe.title.as_deref(), Some("Simple Recipe"));
/// assert_eq!(recipe.ingredients()[0].name, "oil");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CooklangParser {
    settings: RecipeSettings,
    options: ParserOptions,
}

impl CooklangParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendering settings copied onto every parsed recipe
    pub fn with_settings(mut self, settings: RecipeSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse a whole recipe.
    ///
    /// In the default lenient mode this never fails. Strict timers or
    /// strict units turn the corresponding violations into errors.
    pub fn parse(&self, text: &str) -> Result<Recipe, CookError> {
        let (body, metadata) = extract_front_matter(text);

        let mut recipe = Recipe {
            title: metadata.get("title").and_then(scalar_to_string),
            metadata,
            settings: self.settings,
            ..Default::default()
        };

        let paragraphs = split_paragraphs(&body);
        debug!("Parsing {} paragraphs", paragraphs.len());

        for paragraph in paragraphs {
            if let Some(section) = parse_section(paragraph) {
                recipe.sections.push(section);
                continue;
            }

            let mut step = tokenize(paragraph);
            if self.options.strict_timers || self.options.strict_units {
                self.enforce_strict(&mut step)?;
            }
            step.section = recipe.sections.len().checked_sub(1);
            recipe.steps.push(step);
        }

        debug!(
            "Parsed {} steps in {} sections",
            recipe.steps.len(),
            recipe.sections.len()
        );
        Ok(recipe)
    }

    fn enforce_strict(&self, step: &mut Step) -> Result<(), CookError> {
        for token in &mut step.tokens {
            match &mut token.kind {
                TokenKind::Ingredient(ingredient) if self.options.strict_units => {
                    normalize_unit(&mut ingredient.unit)?;
                }
                TokenKind::Timer(timer) => {
                    if self.options.strict_timers && timer.duration.is_none() {
                        return Err(CookError::TimerWithoutDuration(token.text.clone()));
                    }
                    if self.options.strict_units {
                        normalize_unit(&mut timer.unit)?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn normalize_unit(unit: &mut Option<String>) -> Result<(), CookError> {
    if let Some(raw) = unit {
        *raw = raw.parse::<Unit>()?.symbol().to_string();
    }
    Ok(())
}

/// Parse a recipe with the default settings
pub fn parse(text: &str) -> Result<Recipe, CookError> {
    CooklangParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Quantity, Section};

    #[test]
    fn test_steps_reference_latest_section() {
        let recipe = parse("Prep first.\n\n= Dough =\n\nKnead.\n\n== Sauce ==\n\nSimmer.").unwrap();

        assert_eq!(recipe.sections, vec![Section::new("Dough", 1), Section::new("Sauce", 2)]);
        assert_eq!(recipe.steps.len(), 3);
        assert_eq!(recipe.steps[0].section, None);
        assert_eq!(recipe.steps[1].section, Some(0));
        assert_eq!(recipe.section_of(&recipe.steps[2]), Some(&recipe.sections[1]));
    }

    #[test]
    fn test_title_comes_from_metadata() {
        let recipe = parse("---\ntitle: Pancakes\n---\nMix.").unwrap();
        assert_eq!(recipe.title.as_deref(), Some("Pancakes"));

        let untitled = parse("Mix.").unwrap();
        assert_eq!(untitled.title, None);
    }

    #[test]
    fn test_settings_are_copied_onto_recipe() {
        let settings = RecipeSettings {
            ignore_section_depth: false,
        };
        let recipe = CooklangParser::new().with_settings(settings).parse("Mix.").unwrap();
        assert_eq!(recipe.settings, settings);
    }

    #[test]
    fn test_lenient_mode_accepts_durationless_timer() {
        let recipe = parse("Rest ~dough{}.").unwrap();
        assert_eq!(recipe.timers()[0].name.as_deref(), Some("dough"));
        assert_eq!(recipe.timers()[0].duration, None);
    }

    #[test]
    fn test_strict_timers_reject_missing_duration() {
        let parser = CooklangParser::new().with_options(ParserOptions {
            strict_timers: true,
            ..Default::default()
        });

        let err = parser.parse("Rest ~dough{}.").unwrap_err();
        assert!(matches!(err, CookError::TimerWithoutDuration(ref t) if t == "~dough{}"));
        assert!(parser.parse("Rest ~dough{10%min}.").is_ok());
    }

    #[test]
    fn test_strict_units_normalize_and_reject() {
        let parser = CooklangParser::new().with_options(ParserOptions {
            strict_units: true,
            ..Default::default()
        });

        let recipe = parser.parse("Add @water{1%L} and wait ~{5%minutes}.").unwrap();
        assert_eq!(recipe.ingredients()[0].unit.as_deref(), Some("l"));
        assert_eq!(recipe.timers()[0].unit.as_deref(), Some("min"));
        assert_eq!(recipe.timers()[0].duration, Some(Quantity::Integer(5)));

        let err = parser.parse("Add @flour{2%cups}.").unwrap_err();
        assert!(matches!(err, CookError::UnknownUnit(ref u) if u == "cups"));
    }
}
