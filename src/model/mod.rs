mod items;
mod token;

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use serde::Serialize;

use crate::config::RecipeSettings;

pub(crate) use items::join_words;
pub use items::{Comment, Cookware, Ingredient, Note, Quantity, Timer};
pub use token::{Span, Token, TokenKind};

/// Front matter key/value pairs. Values may be scalars or lists.
pub type Metadata = BTreeMap<String, serde_yaml::Value>;

/// Metadata key holding the path or URL of the recipe image
pub const IMAGE_KEY: &str = "image";

/// A section header. Sections form a flat list; `level` is the number of
/// leading `=` markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub level: usize,
}

impl Section {
    pub fn new(title: impl Into<String>, level: usize) -> Self {
        Self {
            title: title.into(),
            level,
        }
    }
}

/// One instruction paragraph as an ordered token sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Step {
    pub tokens: Vec<Token>,
    /// Index into [`Recipe::sections`] of the section active when this
    /// step was parsed
    pub section: Option<usize>,
}

impl Step {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            section: None,
        }
    }

    /// The source text, joined from the token texts
    pub fn text(&self) -> String {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }

    pub fn ingredients(&self) -> Vec<&Ingredient> {
        self.tokens
            .iter()
            .filter_map(|token| match &token.kind {
                TokenKind::Ingredient(ingredient) => Some(ingredient),
                _ => None,
            })
            .collect()
    }

    pub fn cookware(&self) -> Vec<&Cookware> {
        self.tokens
            .iter()
            .filter_map(|token| match &token.kind {
                TokenKind::Cookware(cookware) => Some(cookware),
                _ => None,
            })
            .collect()
    }

    pub fn timers(&self) -> Vec<&Timer> {
        self.tokens
            .iter()
            .filter_map(|token| match &token.kind {
                TokenKind::Timer(timer) => Some(timer),
                _ => None,
            })
            .collect()
    }

    pub fn comments(&self) -> Vec<&Comment> {
        self.tokens
            .iter()
            .filter_map(|token| match &token.kind {
                TokenKind::Comment(comment) => Some(comment),
                _ => None,
            })
            .collect()
    }

    pub fn notes(&self) -> Vec<&Note> {
        self.tokens
            .iter()
            .filter_map(|token| match &token.kind {
                TokenKind::Note(note) => Some(note),
                _ => None,
            })
            .collect()
    }

    /// True when every token is a comment
    pub fn is_comment(&self) -> bool {
        self.tokens.iter().all(Token::is_comment)
    }
}

/// A fully parsed recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recipe {
    pub title: Option<String>,
    pub metadata: Metadata,
    pub steps: Vec<Step>,
    /// Section headers in the order they were encountered
    pub sections: Vec<Section>,
    #[serde(skip)]
    pub settings: RecipeSettings,
}

impl Recipe {
    /// All ingredients in step order, first occurrence of each
    /// (name, unit, preparation, quantity) kept
    pub fn ingredients(&self) -> Vec<Ingredient> {
        dedup_by(self.steps.iter().flat_map(Step::ingredients), |i| {
            (&i.name, &i.unit, &i.preparation, &i.quantity)
        })
    }

    /// All cookware, deduplicated by name
    pub fn cookware(&self) -> Vec<Cookware> {
        dedup_by(self.steps.iter().flat_map(Step::cookware), |c| &c.name)
    }

    /// All timers, deduplicated by (name, duration, unit)
    pub fn timers(&self) -> Vec<Timer> {
        dedup_by(self.steps.iter().flat_map(Step::timers), |t| {
            (&t.name, &t.duration, &t.unit)
        })
    }

    /// Number of steps, not counting comment-only ones
    pub fn step_count(&self) -> usize {
        self.steps.iter().filter(|step| !step.is_comment()).count()
    }

    pub fn has_content(&self) -> bool {
        !self.steps.is_empty()
            || !self.metadata.is_empty()
            || !self.sections.is_empty()
            || self.title.is_some()
    }

    /// The section a step was parsed under
    pub fn section_of(&self, step: &Step) -> Option<&Section> {
        step.section.and_then(|index| self.sections.get(index))
    }

    /// Metadata value as a plain string, for scalar values only
    pub fn metadata_str(&self, key: &str) -> Option<String> {
        self.metadata.get(key).and_then(scalar_to_string)
    }
}

pub(crate) fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Stable dedup: keeps the first item for every key, in input order.
fn dedup_by<'a, T, K, F>(items: impl Iterator<Item = &'a T>, key: F) -> Vec<T>
where
    T: Clone + 'a,
    K: Eq + Hash,
    F: Fn(&'a T) -> K,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for item in items {
        if seen.insert(key(item)) {
            result.push(item.clone());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient_step(ingredients: &[Ingredient]) -> Step {
        let tokens = ingredients
            .iter()
            .enumerate()
            .map(|(i, ingredient)| {
                Token::new(
                    Span::new(i * 10, i * 10 + 5),
                    format!("@{}", ingredient.name),
                    TokenKind::Ingredient(ingredient.clone()),
                )
            })
            .collect();
        Step::new(tokens)
    }

    #[test]
    fn test_ingredient_dedup_keeps_first_occurrence() {
        let a = Ingredient::new("salt");
        let b = Ingredient::new("pepper");
        let recipe = Recipe {
            steps: vec![
                ingredient_step(&[a.clone(), b.clone()]),
                ingredient_step(&[a.clone()]),
            ],
            ..Default::default()
        };

        assert_eq!(recipe.ingredients(), vec![a, b]);
    }

    #[test]
    fn test_ingredients_differing_in_quantity_are_distinct() {
        let one = Ingredient::new("egg").with_quantity(Quantity::Integer(1), None);
        let two = Ingredient::new("egg").with_quantity(Quantity::Integer(2), None);
        let recipe = Recipe {
            steps: vec![ingredient_step(&[one, two])],
            ..Default::default()
        };

        assert_eq!(recipe.ingredients().len(), 2);
    }

    #[test]
    fn test_cookware_dedup_ignores_quantity() {
        let mut two_pots = Cookware::new("pot");
        two_pots.quantity = Some(Quantity::Integer(2));
        let step = Step::new(vec![
            Token::new(Span::new(0, 4), "#pot", TokenKind::Cookware(Cookware::new("pot"))),
            Token::new(Span::new(5, 12), "#pot{2}", TokenKind::Cookware(two_pots)),
        ]);
        let recipe = Recipe {
            steps: vec![step],
            ..Default::default()
        };

        let cookware = recipe.cookware();
        assert_eq!(cookware.len(), 1);
        assert_eq!(cookware[0].quantity, None);
    }

    #[test]
    fn test_comment_only_steps_are_not_counted() {
        let comment = Step::new(vec![Token::new(
            Span::new(0, 9),
            "-- a note",
            TokenKind::Comment(Comment {
                text: "a note".into(),
                is_block: false,
            }),
        )]);
        let recipe = Recipe {
            steps: vec![comment, ingredient_step(&[Ingredient::new("salt")])],
            ..Default::default()
        };

        assert!(recipe.steps[0].is_comment());
        assert_eq!(recipe.step_count(), 1);
    }

    #[test]
    fn test_has_content() {
        assert!(!Recipe::default().has_content());

        let titled = Recipe {
            title: Some("Soup".into()),
            ..Default::default()
        };
        assert!(titled.has_content());

        let sectioned = Recipe {
            sections: vec![Section::new("Dough", 1)],
            ..Default::default()
        };
        assert!(sectioned.has_content());
    }
}
