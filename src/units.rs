use std::fmt;
use std::str::FromStr;

use crate::error::CookError;

/// The unit vocabulary recognised in strict mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Gram,
    Kilogram,
    Milligram,
    Liter,
    Milliliter,
    Second,
    Minute,
    Hour,
    Pinch,
    Teaspoon,
    Tablespoon,
    Can,
    Clove,
    Leave,
    Pack,
    Pod,
}

impl Unit {
    pub const ALL: [Unit; 16] = [
        Unit::Gram,
        Unit::Kilogram,
        Unit::Milligram,
        Unit::Liter,
        Unit::Milliliter,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Pinch,
        Unit::Teaspoon,
        Unit::Tablespoon,
        Unit::Can,
        Unit::Clove,
        Unit::Leave,
        Unit::Pack,
        Unit::Pod,
    ];

    /// Canonical short symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Milligram => "mg",
            Unit::Liter => "l",
            Unit::Milliliter => "ml",
            Unit::Second => "s",
            Unit::Minute => "min",
            Unit::Hour => "h",
            Unit::Pinch => "pinch",
            Unit::Teaspoon => "tsp",
            Unit::Tablespoon => "tbsp",
            Unit::Can => "can",
            Unit::Clove => "clove",
            Unit::Leave => "leave",
            Unit::Pack => "pack",
            Unit::Pod => "pod",
        }
    }

    /// Long name, also accepted when parsing
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Gram => "gram",
            Unit::Kilogram => "kilogram",
            Unit::Milligram => "milligram",
            Unit::Liter => "liter",
            Unit::Milliliter => "milliliter",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Pinch => "pinch",
            Unit::Teaspoon => "teaspoon",
            Unit::Tablespoon => "tablespoon",
            Unit::Can => "can",
            Unit::Clove => "clove",
            Unit::Leave => "leave",
            Unit::Pack => "pack",
            Unit::Pod => "pod",
        }
    }
}

impl FromStr for Unit {
    type Err = CookError;

    /// Case-insensitive lookup by symbol or long name. One trailing `s` is
    /// dropped, so "minutes" and "cans" resolve, but "s" stays seconds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let singular = match lowered.strip_suffix('s') {
            Some(stem) if !stem.is_empty() => stem,
            _ => lowered.as_str(),
        };

        Unit::ALL
            .into_iter()
            .find(|unit| unit.name() == singular || unit.symbol() == singular)
            .ok_or_else(|| CookError::UnknownUnit(s.to_string()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
