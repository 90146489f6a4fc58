use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Section;

/// One or more blank (or whitespace-only) lines
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// `== Title ==`: leading markers, title, optional decorative markers
static SECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(=+)\s*(.*?)\s*(=*)$").unwrap());

/// Split text into trimmed, non-empty paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text.trim())
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

/// Recognise a section header on the first line of a paragraph.
///
/// The level is the number of leading `=`; trailing markers only decorate.
pub fn parse_section(paragraph: &str) -> Option<Section> {
    let first_line = paragraph.lines().next()?;
    let captures = SECTION_HEADER.captures(first_line)?;
    let level = captures.get(1)?.as_str().len();
    let title = captures.get(2).map_or("", |m| m.as_str()).trim();
    Some(Section::new(title, level))
}
