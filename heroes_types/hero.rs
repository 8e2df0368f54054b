use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::HeroError;

/// Effectiveness rating, always within `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Effectiveness(u8);

impl Effectiveness {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn new(value: i32) -> Result<Self, HeroError> {
        if (Self::MIN as i32..=Self::MAX as i32).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(HeroError::EffectivenessOutOfRange(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Effectiveness {
    type Error = HeroError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Effectiveness> for u8 {
    fn from(value: Effectiveness) -> Self {
        value.0
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: String,
    /// Display name, stored upper-cased.
    pub name: String,
    pub real_name: Option<String>,
    pub powers: Vec<String>,
    pub weaknesses: Vec<String>,
    pub effectiveness: Effectiveness,
    pub is_alive: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hero {
    /// Case-insensitive name comparison, ignoring surrounding whitespace.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    /// Substring match of an already lower-cased term against name and real name.
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term)
            || self
                .real_name
                .as_ref()
                .is_some_and(|real_name| real_name.to_lowercase().contains(term))
    }

    /// Merges the provided changes and refreshes `updated_at`.
    pub fn apply(&mut self, changes: HeroChanges, now: DateTime<Utc>) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(real_name) = changes.real_name {
            self.real_name = real_name;
        }
        if let Some(powers) = changes.powers {
            self.powers = powers;
        }
        if let Some(weaknesses) = changes.weaknesses {
            self.weaknesses = weaknesses;
        }
        if let Some(effectiveness) = changes.effectiveness {
            self.effectiveness = effectiveness;
        }
        if let Some(is_alive) = changes.is_alive {
            self.is_alive = is_alive;
        }
        if let Some(image_url) = changes.image_url {
            self.image_url = image_url;
        }
        self.updated_at = now;
    }
}

/// A validated hero, ready to be stored. The store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
    pub real_name: Option<String>,
    pub powers: Vec<String>,
    pub weaknesses: Vec<String>,
    pub effectiveness: Effectiveness,
    pub is_alive: bool,
    pub image_url: Option<String>,
}

/// Partial update. `None` leaves a field untouched; for the optional
/// fields `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroChanges {
    pub name: Option<String>,
    pub real_name: Option<Option<String>>,
    pub powers: Option<Vec<String>>,
    pub weaknesses: Option<Vec<String>>,
    pub effectiveness: Option<Effectiveness>,
    pub is_alive: Option<bool>,
    pub image_url: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHeroRequest {
    pub name: String,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub powers: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    pub effectiveness: i32,
    #[serde(default = "default_alive")]
    pub is_alive: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_alive() -> bool {
    true
}

impl CreateHeroRequest {
    /// Checks the creation rules in order; the first failure wins.
    pub fn validate(&self, existing: &[Hero]) -> Result<(), HeroError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(HeroError::NameRequired);
        }
        Effectiveness::new(self.effectiveness)?;
        if normalize_list(&self.powers).is_empty() {
            return Err(HeroError::PowersRequired);
        }
        if existing.iter().any(|hero| hero.has_name(name)) {
            return Err(HeroError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Trims every field, upper-cases the name and drops blank entries.
    pub fn into_new_hero(self) -> Result<NewHero, HeroError> {
        let name = normalize_name(&self.name).ok_or(HeroError::NameRequired)?;
        let effectiveness = Effectiveness::new(self.effectiveness)?;
        let powers = normalize_list(&self.powers);
        if powers.is_empty() {
            return Err(HeroError::PowersRequired);
        }

        Ok(NewHero {
            name,
            real_name: normalize_optional(self.real_name),
            powers,
            weaknesses: normalize_list(&self.weaknesses),
            effectiveness,
            is_alive: self.is_alive,
            image_url: normalize_optional(self.image_url),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateHeroRequest {
    pub id: String,
    pub name: Option<String>,
    pub real_name: Option<Option<String>>,
    pub powers: Option<Vec<String>>,
    pub weaknesses: Option<Vec<String>>,
    pub effectiveness: Option<i32>,
    pub is_alive: Option<bool>,
    pub image_url: Option<Option<String>>,
}

impl UpdateHeroRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Applies the creation rules to the fields that are present. The
    /// uniqueness check ignores the hero being updated.
    pub fn validate(&self, existing: &[Hero]) -> Result<(), HeroError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(HeroError::NameRequired);
            }
        }
        if let Some(effectiveness) = self.effectiveness {
            Effectiveness::new(effectiveness)?;
        }
        if let Some(powers) = &self.powers {
            if normalize_list(powers).is_empty() {
                return Err(HeroError::PowersRequired);
            }
        }
        if let Some(name) = &self.name {
            let taken = existing
                .iter()
                .any(|hero| hero.id != self.id && hero.has_name(name));
            if taken {
                return Err(HeroError::DuplicateName(name.trim().to_string()));
            }
        }
        Ok(())
    }

    pub fn into_changes(self) -> Result<(String, HeroChanges), HeroError> {
        let name = match self.name {
            Some(name) => Some(normalize_name(&name).ok_or(HeroError::NameRequired)?),
            None => None,
        };
        let effectiveness = self.effectiveness.map(Effectiveness::new).transpose()?;
        let powers = match self.powers {
            Some(powers) => {
                let powers = normalize_list(&powers);
                if powers.is_empty() {
                    return Err(HeroError::PowersRequired);
                }
                Some(powers)
            }
            None => None,
        };

        let changes = HeroChanges {
            name,
            real_name: self.real_name.map(normalize_optional),
            powers,
            weaknesses: self.weaknesses.map(|w| normalize_list(&w)),
            effectiveness,
            is_alive: self.is_alive,
            image_url: self.image_url.map(normalize_optional),
        };
        Ok((self.id, changes))
    }
}

fn normalize_name(name: &str) -> Option<String> {
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_uppercase())
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
