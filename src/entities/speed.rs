use derive_more::Into;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Into, Copy)]
pub struct Speed(i32);

pub const MIN_SPEED: i32 = 1;
pub const MAX_SPEED: i32 = 6;

#[derive(Error, Debug, Clone)]
pub enum SpeedTryFromError {
    #[error("Speed must be less than or equal to {}", MAX_SPEED)]
    TooLarge,
    #[error("Speed must be greater than or equal to {}", MIN_SPEED)]
    TooSmall,
}

impl TryFrom<i32> for Speed {
    type Error = SpeedTryFromError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value > MAX_SPEED {
            Err(SpeedTryFromError::TooLarge)
        } else if value < MIN_SPEED {
            Err(SpeedTryFromError::TooSmall)
        } else {
            Ok(Self(value))
        }
    }
}

impl Speed {
    // only for the static category table, values are checked by tests
    pub(crate) const fn new_unchecked(value: i32) -> Self {
        Self(value)
    }

    /// Pins an arbitrary stored value onto the 1..=6 dial.
    pub fn saturating(value: i32) -> Self {
        Self(value.clamp(MIN_SPEED, MAX_SPEED))
    }

    pub fn value(self) -> i32 {
        self.0
    }

    pub fn label(self) -> SpeedLabel {
        SpeedLabel::from_value(self.0)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Copy)]
pub enum SpeedLabel {
    Slow,
    Normal,
    Fast,
}

impl SpeedLabel {
    /// Works on raw values so that out-of-range stored speeds still get a label.
    pub fn from_value(speed: i32) -> Self {
        if speed <= 2 {
            Self::Slow
        } else if speed <= 4 {
            Self::Normal
        } else {
            Self::Fast
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Normal => "Normal",
            Self::Fast => "Fast",
        }
    }

    /// Badge tone used on the detail page.
    pub fn tone(self) -> &'static str {
        match self {
            Self::Slow => "#ef4444",
            Self::Normal => "#eab308",
            Self::Fast => "#22c55e",
        }
    }
}

impl fmt::Display for SpeedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
