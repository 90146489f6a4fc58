use serde::Serialize;

use crate::error::CookError;
use crate::model::{Cookware, Ingredient, Metadata, Recipe, Section, Step, Timer};

use super::Renderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, recipe: &Recipe) -> Result<String, CookError> {
        render(recipe)
    }
}

/// The recipe with its aggregated lists alongside the raw steps
#[derive(Debug, Serialize)]
struct RecipeDocument<'r> {
    title: Option<&'r str>,
    metadata: &'r Metadata,
    ingredients: Vec<Ingredient>,
    cookware: Vec<Cookware>,
    timers: Vec<Timer>,
    sections: &'r [Section],
    steps: &'r [Step],
}

pub fn render(recipe: &Recipe) -> Result<String, CookError> {
    let document = RecipeDocument {
        title: recipe.title.as_deref(),
        metadata: &recipe.metadata,
        ingredients: recipe.ingredients(),
        cookware: recipe.cookware(),
        timers: recipe.timers(),
        sections: &recipe.sections,
        steps: &recipe.steps,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
