//! Validated hero names.
//!
//! A [`HeroName`] is never blank: [`HeroName::parse`] trims surrounding
//! whitespace and rejects what is left if it is empty. Any request that
//! creates a hero takes a [`HeroName`], so blank names are stopped before
//! they can reach the data-access layer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Reasons a raw string is not an acceptable hero name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidHeroName {
    /// The name was empty or contained only whitespace.
    #[error("hero name must not be blank")]
    Blank,
}

/// A hero name that is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "String", into = "String")]
#[ts(export, export_to = "bindings/")]
pub struct HeroName(String);

impl HeroName {
    /// Trim `raw` and accept it if anything is left.
    pub fn parse(raw: &str) -> Result<Self, InvalidHeroName> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidHeroName::Blank);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for HeroName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HeroName {
    type Error = InvalidHeroName;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<HeroName> for String {
    fn from(name: HeroName) -> Self {
        name.0
    }
}
