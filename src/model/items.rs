use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// A parsed amount, duration or count.
///
/// Malformed numerals are never rejected: they are kept verbatim as
/// [`Quantity::Text`].
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Quantity {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Quantity {
    /// Parse an amount or duration captured from markup.
    ///
    /// `a/b` is divided as floating point, values with a `.` are floats,
    /// everything else is tried as an integer. Any failure keeps the
    /// original string.
    pub fn parse(value: &str) -> Quantity {
        if let Some((numerator, denominator)) = value.split_once('/') {
            return match (numerator.parse::<f64>(), denominator.parse::<f64>()) {
                (Ok(n), Ok(d)) if d != 0.0 => Quantity::Float(n / d),
                _ => Quantity::Text(value.to_string()),
            };
        }

        let parsed = if value.contains('.') {
            value.parse::<f64>().ok().map(Quantity::Float)
        } else {
            value.parse::<i64>().ok().map(Quantity::Integer)
        };
        parsed.unwrap_or_else(|| Quantity::Text(value.to_string()))
    }

    /// Parse a cookware count: an integer, or the raw text.
    pub fn parse_count(value: &str) -> Quantity {
        value
            .parse::<i64>()
            .map(Quantity::Integer)
            .unwrap_or_else(|_| Quantity::Text(value.to_string()))
    }

    /// The value as an integer when it is one, including whole floats
    fn whole(&self) -> Option<i64> {
        match self {
            Quantity::Integer(n) => Some(*n),
            Quantity::Float(x)
                if x.fract() == 0.0 && *x >= i64::MIN as f64 && *x < i64::MAX as f64 =>
            {
                Some(*x as i64)
            }
            _ => None,
        }
    }
}

/// Numbers compare by value, so `1` and `1.0` are the same quantity.
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.whole(), other.whole()) {
            return a == b;
        }
        match (self, other) {
            (Quantity::Float(a), Quantity::Float(b)) => a.to_bits() == b.to_bits(),
            (Quantity::Text(a), Quantity::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Quantity {}

impl Hash for Quantity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Some(n) = self.whole() {
            0u8.hash(state);
            n.hash(state);
            return;
        }
        match self {
            Quantity::Float(f) => {
                1u8.hash(state);
                f.to_bits().hash(state);
            }
            Quantity::Text(s) => {
                2u8.hash(state);
                s.hash(state);
            }
            Quantity::Integer(n) => n.hash(state),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Integer(n) => write!(f, "{n}"),
            // Whole floats keep their decimal point: 1/1 is "1.0", not "1"
            Quantity::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{x:.1}")
            }
            Quantity::Float(x) => write!(f, "{x}"),
            Quantity::Text(s) => f.write_str(s),
        }
    }
}

/// Joins the present parts with single spaces.
pub(crate) fn join_words<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A recipe ingredient with optional quantity, unit and preparation.
///
/// Two ingredients are the same entry when all four fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: Option<Quantity>,
    pub unit: Option<String>,
    pub preparation: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            unit: None,
            preparation: None,
        }
    }

    pub fn with_quantity(mut self, quantity: Quantity, unit: Option<&str>) -> Self {
        self.quantity = Some(quantity);
        self.unit = unit.map(str::to_string);
        self
    }

    pub fn with_preparation(mut self, preparation: impl Into<String>) -> Self {
        self.preparation = Some(preparation.into());
        self
    }

    /// "quantity unit name" with absent parts left out
    pub fn amount_and_name(&self) -> String {
        match &self.quantity {
            Some(quantity) => join_words([
                Some(quantity.to_string().as_str()),
                self.unit.as_deref(),
                Some(self.name.as_str()),
            ]),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.amount_and_name())?;
        if let Some(preparation) = &self.preparation {
            write!(f, " ({preparation})")?;
        }
        Ok(())
    }
}

/// Cookware or equipment. Entries are deduplicated by name only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cookware {
    pub name: String,
    pub quantity: Option<Quantity>,
}

impl Cookware {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
        }
    }
}

impl fmt::Display for Cookware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.quantity {
            Some(quantity) => write!(f, "{quantity} {}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// A cooking timer. Anonymous timers have no name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Timer {
    pub name: Option<String>,
    pub duration: Option<Quantity>,
    pub unit: Option<String>,
}

impl fmt::Display for Timer {
    /// "duration unit", or nothing when the timer has no duration
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.duration {
            Some(duration) => f.write_str(&join_words([
                Some(duration.to_string().as_str()),
                self.unit.as_deref(),
            ])),
            None => Ok(()),
        }
    }
}

/// An inline (`--`) or block (`[- -]`) comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub text: String,
    pub is_block: bool,
}

/// A `>` note line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub text: String,
}
