use thiserror::Error;

use super::{
    Category, CategoryAttributes, Color, Crewmate, CrewmateFields, CrewmateName,
    CrewmateNameTryFromError, Speed,
};

const DEFAULT_SPEED: i32 = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Speed {speed} is not available for {category}")]
    SpeedNotAllowed { speed: i32, category: Category },
    #[error("Color {color} is not available for {category}")]
    ColorNotAllowed { color: String, category: Category },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    Name(#[from] CrewmateNameTryFromError),
}

/// In-progress state of the creation/edit form.
///
/// Category changes go through [`CrewmateDraft::select_category`], which clamps
/// speed and color once. Speed and color picks are restricted to what the current
/// category offers and never re-run the clamp.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CrewmateDraft {
    name: String,
    speed: Speed,
    color: Color,
    category: Category,
}

impl Default for CrewmateDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            speed: Speed::new_unchecked(DEFAULT_SPEED),
            color: Color::Blue,
            category: Category::Crewmate,
        }
    }
}

impl CrewmateDraft {
    /// Rebuilds a draft from raw values (a stored record or a posted form).
    ///
    /// Values are normalized onto the types but not clamped to the category:
    /// the category is resolved leniently, the speed is pinned to the dial and an
    /// unknown color token becomes the category's first color.
    pub fn restore(name: String, speed: i32, color: &str, category: &str) -> Self {
        let category = Category::resolve(category);
        let color = Color::try_from(color).unwrap_or_else(|_| category.attributes().default_color());
        Self {
            name,
            speed: Speed::saturating(speed),
            color,
            category,
        }
    }

    pub fn from_crewmate(crewmate: &Crewmate) -> Self {
        Self::restore(
            crewmate.name.clone(),
            crewmate.speed,
            &crewmate.color,
            &crewmate.category,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn attributes(&self) -> &'static CategoryAttributes {
        self.category.attributes()
    }

    pub fn speed_options(&self) -> Vec<Speed> {
        self.attributes().speeds().collect()
    }

    pub fn color_options(&self) -> &'static [Color] {
        self.attributes().colors()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn select_category(&mut self, category: Category) {
        let (speed, color) = category.attributes().clamp(self.speed, self.color);
        self.category = category;
        self.speed = speed;
        self.color = color;
    }

    pub fn select_category_token(&mut self, token: &str) {
        self.select_category(Category::resolve(token));
    }

    pub fn select_speed(&mut self, speed: i32) -> Result<(), DraftError> {
        if !self.attributes().allows_speed(speed) {
            return Err(DraftError::SpeedNotAllowed {
                speed,
                category: self.category,
            });
        }
        self.speed = Speed::new_unchecked(speed);
        Ok(())
    }

    pub fn select_color(&mut self, color: &str) -> Result<(), DraftError> {
        match Color::try_from(color) {
            Ok(color) if self.attributes().allows_color(color) => {
                self.color = color;
                Ok(())
            }
            _ => Err(DraftError::ColorNotAllowed {
                color: color.to_string(),
                category: self.category,
            }),
        }
    }

    /// False only for drafts restored from values the category does not offer.
    pub fn satisfies_category_constraints(&self) -> bool {
        let attributes = self.attributes();
        attributes.allows_speed(self.speed.value()) && attributes.allows_color(self.color)
    }

    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn submit(&self) -> Result<CrewmateFields, ValidationError> {
        Ok(CrewmateFields {
            name: CrewmateName::try_from(self.name.clone())?,
            speed: self.speed,
            color: self.color,
            category: self.category,
        })
    }
}
