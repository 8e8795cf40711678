use crate::{
    Error,
    digits::{self, Growth, Lowercase, Radix},
};
use std::{fmt::Display, str::FromStr};

/// A file name counting in base 26 with the letters 'a' to 'z', least
/// significant letter first. The name gains a letter each time every letter
/// rolls over, so "zz" is followed by "aaa" rather than "aa". This keeps names
/// unique for as long as the counter runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName {
    name: String,
}

impl FileName {
    /// Wraps `name` without checking its symbols. Symbols outside the alphabet
    /// are reported when an increment reaches them.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Like `new` but checks every symbol up front. The name must have at
    /// least one symbol.
    pub fn parse(name: &str) -> Result<Self, Error> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if let Some(symbol) = name.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(Error::InvalidSymbol {
                name: name.to_string(),
                symbol,
            });
        }
        Ok(Self::new(name))
    }

    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }

    /// Advances to the next name. On failure the name is left unchanged.
    pub fn increment(&mut self) -> Result<(), Error> {
        self.name = increment_name(&self.name)?;
        Ok(())
    }
}

impl Default for FileName {
    fn default() -> Self {
        Self::new(Lowercase::MIN)
    }
}

impl Display for FileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl FromStr for FileName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns the name following `name`. Letters are only checked as the carry
/// reaches them, so "b1" becomes "c1" while "z1" is an error.
pub fn increment_name(name: &str) -> Result<String, Error> {
    let mut digits = name.chars().collect::<Vec<_>>();
    digits::increment::<Lowercase>(&mut digits, Growth::OnOverflow).map_err(
        |symbol| Error::InvalidSymbol {
            name: name.to_string(),
            symbol,
        },
    )?;
    Ok(digits.into_iter().collect())
}
