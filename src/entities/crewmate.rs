use chrono::{DateTime, Utc};
use derive_more::{From, Into};
use std::fmt;
use thiserror::Error;

use super::{Category, CategoryAttributes, Color, Speed, SpeedLabel, Swatch};

/// Opaque id assigned by the store.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, From, Into)]
pub struct CrewmateId(String);

impl CrewmateId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CrewmateId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for CrewmateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Into)]
pub struct CrewmateName(String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrewmateNameTryFromError {
    #[error("Crewmate name must not be blank")]
    Blank,
}

impl TryFrom<String> for CrewmateName {
    type Error = CrewmateNameTryFromError;

    // the name is kept as typed, only the blank check looks at the trimmed value
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            Err(CrewmateNameTryFromError::Blank)
        } else {
            Ok(Self(value))
        }
    }
}

impl CrewmateName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The four client-chosen fields sent to the store on create and update.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CrewmateFields {
    pub name: CrewmateName,
    pub speed: Speed,
    pub color: Color,
    pub category: Category,
}

/// A record as the store returns it.
///
/// The store never re-validates speed/color against the category, so the values
/// are kept raw; [`Crewmate::satisfies_category_constraints`] tells whether an
/// out-of-band write broke them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Crewmate {
    pub id: CrewmateId,
    pub name: String,
    pub speed: i32,
    pub color: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Crewmate {
    pub fn resolved_category(&self) -> Category {
        Category::resolve(&self.category)
    }

    pub fn attributes(&self) -> &'static CategoryAttributes {
        CategoryAttributes::lookup(&self.category)
    }

    pub fn speed_label(&self) -> SpeedLabel {
        SpeedLabel::from_value(self.speed)
    }

    pub fn swatch(&self) -> Swatch {
        Swatch::for_token(&self.color)
    }

    pub fn satisfies_category_constraints(&self) -> bool {
        let attributes = self.attributes();
        attributes.allows_speed(self.speed) && attributes.allows_color_token(&self.color)
    }

    pub fn is_engineer(&self) -> bool {
        self.category == Category::Engineer.as_str()
    }

    // substring match, so "Impostor"-like custom roles count too
    pub fn is_impostor(&self) -> bool {
        self.category.contains(Category::Impostor.as_str())
    }

    pub fn efficiency_rating(&self) -> i32 {
        (f64::from(self.speed) * 18.5).floor() as i32
    }

    pub fn role_description(&self) -> &'static str {
        Category::describe_token(&self.category)
    }
}
