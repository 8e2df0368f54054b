use std::collections::BTreeMap;

use thiserror::Error;
use url::Url;

use heroes_types::hero::{CreateHeroRequest, Effectiveness, Hero, UpdateHeroRequest};

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;
pub const REAL_NAME_MAX_LEN: usize = 50;
pub const DEFAULT_EFFECTIVENESS: i32 = 50;

/// Per-field validation failure, rendered next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} is too short")]
    TooShort(&'static str),

    #[error("{0} is too long")]
    TooLong(&'static str),

    #[error("Value too low")]
    ValueTooLow,

    #[error("Value too high")]
    ValueTooHigh,

    #[error("Please enter a valid URL")]
    InvalidUrl,

    #[error("This {0} already exists")]
    Duplicate(&'static str),

    #[error("Only letters and spaces are allowed")]
    LettersOnly,

    #[error("A hero must have at least one power")]
    PowersRequired,
}

pub type FormErrors = BTreeMap<&'static str, FieldError>;

/// What a valid form produces, depending on its mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroSubmission {
    Create(CreateHeroRequest),
    Update(UpdateHeroRequest),
}

/// Editable hero form. Created empty for new heroes or from an existing
/// hero for edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroForm {
    pub name: String,
    pub real_name: String,
    pub image_url: String,
    pub effectiveness: i32,
    pub is_alive: bool,
    powers: Vec<String>,
    weaknesses: Vec<String>,
    editing: Option<Hero>,
}

impl HeroForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            real_name: String::new(),
            image_url: String::new(),
            effectiveness: DEFAULT_EFFECTIVENESS,
            is_alive: true,
            powers: Vec::new(),
            weaknesses: Vec::new(),
            editing: None,
        }
    }

    pub fn from_hero(hero: &Hero) -> Self {
        let mut form = Self::new();
        form.editing = Some(hero.clone());
        form.load(hero);
        form
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn powers(&self) -> &[String] {
        &self.powers
    }

    pub fn weaknesses(&self) -> &[String] {
        &self.weaknesses
    }

    pub fn add_power(&mut self, power: &str) -> Result<(), FieldError> {
        push_unique(&mut self.powers, power, "power")
    }

    pub fn remove_power(&mut self, index: usize) {
        if index < self.powers.len() {
            self.powers.remove(index);
        }
    }

    pub fn add_weakness(&mut self, weakness: &str) -> Result<(), FieldError> {
        push_unique(&mut self.weaknesses, weakness, "weakness")
    }

    pub fn remove_weakness(&mut self, index: usize) {
        if index < self.weaknesses.len() {
            self.weaknesses.remove(index);
        }
    }

    /// Back to the hero being edited, or to an empty form.
    pub fn reset(&mut self) {
        match self.editing.clone() {
            Some(hero) => self.load(&hero),
            None => *self = Self::new(),
        }
    }

    pub fn errors(&self) -> FormErrors {
        let mut errors = FormErrors::new();

        let name_len = self.name.trim().chars().count();
        if name_len == 0 {
            errors.insert("name", FieldError::Required("name"));
        } else if name_len < NAME_MIN_LEN {
            errors.insert("name", FieldError::TooShort("name"));
        } else if name_len > NAME_MAX_LEN {
            errors.insert("name", FieldError::TooLong("name"));
        }

        let real_name = self.real_name.trim();
        if real_name.chars().count() > REAL_NAME_MAX_LEN {
            errors.insert("realName", FieldError::TooLong("realName"));
        } else if !real_name
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace())
        {
            errors.insert("realName", FieldError::LettersOnly);
        }

        let image_url = self.image_url.trim();
        if !image_url.is_empty() && Url::parse(image_url).is_err() {
            errors.insert("imageUrl", FieldError::InvalidUrl);
        }

        if self.powers.is_empty() {
            errors.insert("powers", FieldError::PowersRequired);
        }

        if self.effectiveness < i32::from(Effectiveness::MIN) {
            errors.insert("effectiveness", FieldError::ValueTooLow);
        } else if self.effectiveness > i32::from(Effectiveness::MAX) {
            errors.insert("effectiveness", FieldError::ValueTooHigh);
        }

        errors
    }

    pub fn field_error(&self, field: &str) -> Option<FieldError> {
        self.errors().remove(field)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Produces a create or update request with trimmed values, or every
    /// failing field.
    pub fn submit(&self) -> Result<HeroSubmission, FormErrors> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        let name = self.name.trim().to_string();
        let real_name = non_blank(&self.real_name);
        let image_url = non_blank(&self.image_url);

        let submission = match &self.editing {
            Some(hero) => HeroSubmission::Update(UpdateHeroRequest {
                id: hero.id.clone(),
                name: Some(name),
                real_name: Some(real_name),
                powers: Some(self.powers.clone()),
                weaknesses: Some(self.weaknesses.clone()),
                effectiveness: Some(self.effectiveness),
                is_alive: Some(self.is_alive),
                image_url: Some(image_url),
            }),
            None => HeroSubmission::Create(CreateHeroRequest {
                name,
                real_name,
                powers: self.powers.clone(),
                weaknesses: self.weaknesses.clone(),
                effectiveness: self.effectiveness,
                is_alive: self.is_alive,
                image_url,
            }),
        };
        Ok(submission)
    }

    fn load(&mut self, hero: &Hero) {
        self.name = hero.name.clone();
        self.real_name = hero.real_name.clone().unwrap_or_default();
        self.image_url = hero.image_url.clone().unwrap_or_default();
        self.effectiveness = i32::from(hero.effectiveness.value());
        self.is_alive = hero.is_alive;
        self.powers = hero.powers.clone();
        self.weaknesses = hero.weaknesses.clone();
    }
}

impl Default for HeroForm {
    fn default() -> Self {
        Self::new()
    }
}

fn push_unique(values: &mut Vec<String>, value: &str, field: &'static str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    let lowered = value.to_lowercase();
    if values.iter().any(|v| v.to_lowercase() == lowered) {
        return Err(FieldError::Duplicate(field));
    }
    values.push(value.to_string());
    Ok(())
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
