use std::ops::RangeInclusive;

use super::{Category, Color, Speed};

/*
Per-category constraints for the creation/edit form.
speed range is inclusive, colors keep the order shown to the user; the first one is
the replacement color when a category change invalidates the current color.
*/
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CategoryAttributes {
    category: Category,
    min_speed: Speed,
    max_speed: Speed,
    colors: &'static [Color],
}

const fn attributes(
    category: Category,
    min_speed: i32,
    max_speed: i32,
    colors: &'static [Color],
) -> CategoryAttributes {
    CategoryAttributes {
        category,
        min_speed: Speed::new_unchecked(min_speed),
        max_speed: Speed::new_unchecked(max_speed),
        colors,
    }
}

static CREWMATE: CategoryAttributes = attributes(Category::Crewmate, 2, 5, &Color::ALL);
static ENGINEER: CategoryAttributes = attributes(
    Category::Engineer,
    3,
    6,
    &[Color::Blue, Color::Cyan, Color::Green, Color::White],
);
static SCIENTIST: CategoryAttributes = attributes(
    Category::Scientist,
    2,
    4,
    &[Color::White, Color::Blue, Color::Green, Color::Purple],
);
static GUARDIAN_ANGEL: CategoryAttributes = attributes(
    Category::GuardianAngel,
    4,
    6,
    &[Color::White, Color::Yellow, Color::Cyan, Color::Pink],
);
static IMPOSTOR: CategoryAttributes = attributes(
    Category::Impostor,
    3,
    6,
    &[Color::Red, Color::Black, Color::Purple, Color::Brown],
);
static SHAPESHIFTER: CategoryAttributes = attributes(
    Category::Shapeshifter,
    4,
    6,
    &[Color::Black, Color::Purple, Color::Red, Color::Brown],
);
static DETECTIVE: CategoryAttributes = attributes(
    Category::Detective,
    3,
    5,
    &[Color::Blue, Color::Green, Color::Brown, Color::Black],
);
static MEDIC: CategoryAttributes = attributes(
    Category::Medic,
    2,
    4,
    &[Color::White, Color::Pink, Color::Green, Color::Cyan],
);

impl CategoryAttributes {
    pub fn of(category: Category) -> &'static CategoryAttributes {
        match category {
            Category::Crewmate => &CREWMATE,
            Category::Engineer => &ENGINEER,
            Category::Scientist => &SCIENTIST,
            Category::GuardianAngel => &GUARDIAN_ANGEL,
            Category::Impostor => &IMPOSTOR,
            Category::Shapeshifter => &SHAPESHIFTER,
            Category::Detective => &DETECTIVE,
            Category::Medic => &MEDIC,
        }
    }

    /// Unknown tokens get the Crewmate entry.
    pub fn lookup(token: &str) -> &'static CategoryAttributes {
        Self::of(Category::resolve(token))
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn min_speed(&self) -> Speed {
        self.min_speed
    }

    pub fn max_speed(&self) -> Speed {
        self.max_speed
    }

    pub fn speed_range(&self) -> RangeInclusive<i32> {
        self.min_speed.value()..=self.max_speed.value()
    }

    pub fn speeds(&self) -> impl Iterator<Item = Speed> {
        self.speed_range().map(Speed::new_unchecked)
    }

    pub fn colors(&self) -> &'static [Color] {
        self.colors
    }

    pub fn default_color(&self) -> Color {
        self.colors[0]
    }

    pub fn allows_speed(&self, speed: i32) -> bool {
        self.speed_range().contains(&speed)
    }

    pub fn allows_color(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Raw-token variant used when checking stored records.
    pub fn allows_color_token(&self, token: &str) -> bool {
        Color::try_from(token)
            .map(|color| self.allows_color(color))
            .unwrap_or(false)
    }

    /// Correction applied when this category becomes the selected one.
    pub fn clamp(&self, speed: Speed, color: Color) -> (Speed, Color) {
        let speed = if speed < self.min_speed {
            self.min_speed
        } else if speed > self.max_speed {
            self.max_speed
        } else {
            speed
        };
        let color = if self.allows_color(color) {
            color
        } else {
            self.default_color()
        };
        (speed, color)
    }
}
