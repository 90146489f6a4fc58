//! Inline markup recognition for a single paragraph.
//!
//! Every matcher scans the whole paragraph on its own. The matches are then
//! merged by start offset and the gaps between them become plain text
//! tokens. Whitespace-only gaps are dropped, so joining the token texts
//! reproduces the paragraph up to the whitespace between adjacent markup.

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::model::{
    Comment, Cookware, Ingredient, Note, Quantity, Span, Step, Timer, Token, TokenKind,
};

/// Characters allowed in a braced ingredient, cookware or timer name
const NAME: &str = r"[\w\s()\\/\-]";

/// `@name{amount%unit}(preparation)` or `@word`
static INGREDIENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"@(?P<name>{NAME}+)\{{(?P<amount>[\d./\-]+)?%*(?P<unit>[A-Za-z]+)?\}}(?:\((?P<preparation>[\w\s]+)\))?|@(?P<simple>\w+)"
    ))
    .unwrap()
});

/// `#name{quantity}` or `#word`
static COOKWARE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"#(?P<name>{NAME}+)\{{(?P<quantity>[^{{}}]*)\}}|#(?P<simple>\w+)"
    ))
    .unwrap()
});

/// `~name{amount%unit}`. The bare `~word` alternative is matched only so it
/// can be skipped: it never makes a timer.
static TIMER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"~(?P<name>{NAME}*)\{{(?P<amount>[\d./\-]+)?%*(?P<unit>[A-Za-z]+)?\}}|~(?P<simple>\w+)"
    ))
    .unwrap()
});

static INLINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)--(.*)$").unwrap());

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[-\s*(.*?)\s*-\]").unwrap());

static NOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^>\s*(.*)$").unwrap());

/// A recognised construct before it becomes a token
struct Match<'t> {
    start: usize,
    end: usize,
    text: &'t str,
    kind: TokenKind,
}

impl<'t> Match<'t> {
    fn new(captures: &Captures<'t>, kind: TokenKind) -> Option<Self> {
        let whole = captures.get(0)?;
        Some(Self {
            start: whole.start(),
            end: whole.end(),
            text: whole.as_str(),
            kind,
        })
    }
}

fn group<'t>(captures: &Captures<'t>, name: &str) -> Option<&'t str> {
    captures
        .name(name)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

fn ingredient_matches(text: &str) -> Vec<Match<'_>> {
    INGREDIENT
        .captures_iter(text)
        .filter_map(|captures| {
            let ingredient = match group(&captures, "simple") {
                Some(simple) => Ingredient::new(simple.trim()),
                None => Ingredient {
                    name: group(&captures, "name").unwrap_or_default().trim().to_string(),
                    quantity: group(&captures, "amount").map(Quantity::parse),
                    unit: group(&captures, "unit").map(str::to_string),
                    preparation: group(&captures, "preparation").map(str::to_string),
                },
            };
            Match::new(&captures, TokenKind::Ingredient(ingredient))
        })
        .collect()
}

fn cookware_matches(text: &str) -> Vec<Match<'_>> {
    COOKWARE
        .captures_iter(text)
        .filter_map(|captures| {
            let cookware = match group(&captures, "simple") {
                Some(simple) => Cookware::new(simple.trim()),
                None => Cookware {
                    name: group(&captures, "name").unwrap_or_default().trim().to_string(),
                    quantity: group(&captures, "quantity")
                        .map(str::trim)
                        .filter(|q| !q.is_empty())
                        .map(Quantity::parse_count),
                },
            };
            Match::new(&captures, TokenKind::Cookware(cookware))
        })
        .collect()
}

fn timer_matches(text: &str) -> Vec<Match<'_>> {
    TIMER
        .captures_iter(text)
        .filter_map(|captures| {
            if let Some(simple) = group(&captures, "simple") {
                debug!("Skipping '~{}': a timer needs a {{duration}}", simple);
                return None;
            }
            let name = group(&captures, "name")
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string);
            let timer = Timer {
                name,
                duration: group(&captures, "amount").map(Quantity::parse),
                unit: group(&captures, "unit").map(str::to_string),
            };
            Match::new(&captures, TokenKind::Timer(timer))
        })
        .collect()
}

fn note_matches(text: &str) -> Vec<Match<'_>> {
    NOTE.captures_iter(text)
        .filter_map(|captures| {
            let note = Note {
                text: captures.get(1).map_or("", |m| m.as_str()).trim().to_string(),
            };
            Match::new(&captures, TokenKind::Note(note))
        })
        .collect()
}

fn comment_matches<'t>(text: &'t str, pattern: &Regex, is_block: bool) -> Vec<Match<'t>> {
    pattern
        .captures_iter(text)
        .filter_map(|captures| {
            let comment = Comment {
                text: captures.get(1).map_or("", |m| m.as_str()).trim().to_string(),
                is_block,
            };
            Match::new(&captures, TokenKind::Comment(comment))
        })
        .collect()
}

/// Split a paragraph into its ordered token sequence.
pub fn tokenize(text: &str) -> Step {
    let mut matches: Vec<Match<'_>> = [
        ingredient_matches(text),
        cookware_matches(text),
        timer_matches(text),
        note_matches(text),
        comment_matches(text, &INLINE_COMMENT, false),
        comment_matches(text, &BLOCK_COMMENT, true),
    ]
    .into_iter()
    .flatten()
    .collect();

    // Stable: matches starting at the same offset keep matcher order
    matches.sort_by_key(|m| m.start);

    let mut tokens = Vec::with_capacity(matches.len() * 2 + 1);
    let mut position = 0;
    for m in matches {
        if position < m.start {
            push_gap(&mut tokens, text, position, m.start);
        }
        trace!("{:?} at {}..{}", m.kind, m.start, m.end);
        tokens.push(Token::new(Span::new(m.start, m.end), m.text, m.kind));
        position = position.max(m.end);
    }
    if position < text.len() {
        push_gap(&mut tokens, text, position, text.len());
    }

    Step::new(tokens)
}

fn push_gap(tokens: &mut Vec<Token>, text: &str, start: usize, end: usize) {
    let gap = &text[start..end];
    if !gap.trim().is_empty() {
        tokens.push(Token::plain(Span::new(start, end), gap));
    }
}
