use std::fmt;
use thiserror::Error;

use super::CategoryAttributes;

#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Copy)]
pub enum Category {
    Crewmate,
    Engineer,
    Scientist,
    GuardianAngel,
    Impostor,
    Shapeshifter,
    Detective,
    Medic,
}

#[derive(Error, Debug, Clone)]
pub enum CategoryTryFromError {
    #[error("Unknown category: {0}")]
    Unknown(String),
}

const UNKNOWN_CATEGORY_DESCRIPTION: &str = "Unique crew member with special abilities.";

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Crewmate,
        Category::Engineer,
        Category::Scientist,
        Category::GuardianAngel,
        Category::Impostor,
        Category::Shapeshifter,
        Category::Detective,
        Category::Medic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Crewmate => "Crewmate",
            Category::Engineer => "Engineer",
            Category::Scientist => "Scientist",
            Category::GuardianAngel => "Guardian Angel",
            Category::Impostor => "Impostor",
            Category::Shapeshifter => "Shapeshifter",
            Category::Detective => "Detective",
            Category::Medic => "Medic",
        }
    }

    /// Lenient lookup: anything that is not one of the eight tokens is a Crewmate.
    pub fn resolve(token: &str) -> Category {
        Category::try_from(token).unwrap_or(Category::Crewmate)
    }

    pub fn attributes(self) -> &'static CategoryAttributes {
        CategoryAttributes::of(self)
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Crewmate => {
                "Standard crew member capable of completing tasks and maintaining the ship."
            }
            Category::Engineer => {
                "Specialized in technical tasks and can vent through the ship's systems."
            }
            Category::Scientist => "Expert in research and analysis, crucial for mission success.",
            Category::GuardianAngel => "Protective spirit that watches over the crew from beyond.",
            Category::Impostor => {
                "Dangerous saboteur hidden among the crew. Exercise extreme caution!"
            }
            Category::Shapeshifter => "Advanced impostor with the ability to change appearance.",
            Category::Detective => "Investigative specialist skilled at uncovering deception.",
            Category::Medic => "Medical expert responsible for crew health and emergency treatment.",
        }
    }

    /// Unlike [`Category::resolve`], unknown tokens get a generic text instead of the
    /// Crewmate one.
    pub fn describe_token(token: &str) -> &'static str {
        Category::try_from(token)
            .map(Category::description)
            .unwrap_or(UNKNOWN_CATEGORY_DESCRIPTION)
    }
}

impl TryFrom<&str> for Category {
    type Error = CategoryTryFromError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| CategoryTryFromError::Unknown(value.to_string()))
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
