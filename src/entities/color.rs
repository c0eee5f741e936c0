use std::fmt;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Copy)]
pub enum Color {
    Red,
    Blue,
    Green,
    Pink,
    Orange,
    Yellow,
    Black,
    White,
    Purple,
    Brown,
    Cyan,
    Lime,
}

#[derive(Error, Debug, Clone)]
pub enum ColorTryFromError {
    #[error("Unknown color: {0}")]
    Unknown(String),
}

/// Display color (css hex) for a suit.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Copy)]
pub struct Swatch(&'static str);

impl Swatch {
    pub const DEFAULT: Swatch = Swatch("#6366f1");

    pub fn css(self) -> &'static str {
        self.0
    }

    /// Unrecognized tokens get [`Swatch::DEFAULT`].
    pub fn for_token(token: &str) -> Swatch {
        Color::try_from(token)
            .map(Color::swatch)
            .unwrap_or(Swatch::DEFAULT)
    }
}

impl Color {
    pub const ALL: [Color; 12] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Pink,
        Color::Orange,
        Color::Yellow,
        Color::Black,
        Color::White,
        Color::Purple,
        Color::Brown,
        Color::Cyan,
        Color::Lime,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Pink => "pink",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Black => "black",
            Color::White => "white",
            Color::Purple => "purple",
            Color::Brown => "brown",
            Color::Cyan => "cyan",
            Color::Lime => "lime",
        }
    }

    pub fn swatch(self) -> Swatch {
        Swatch(match self {
            Color::Red => "#ef4444",
            Color::Blue => "#3b82f6",
            Color::Green => "#22c55e",
            Color::Pink => "#ec4899",
            Color::Orange => "#f97316",
            Color::Yellow => "#eab308",
            Color::Black => "#111827",
            Color::White => "#f3f4f6",
            Color::Purple => "#a855f7",
            Color::Brown => "#b45309",
            Color::Cyan => "#06b6d4",
            Color::Lime => "#84cc16",
        })
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorTryFromError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::ALL
            .into_iter()
            .find(|color| color.as_str() == value)
            .ok_or_else(|| ColorTryFromError::Unknown(value.to_string()))
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
