use indexmap::IndexMap;
use std::fmt;

use super::Crewmate;

const MAX_SUCCESS_SCORE: f64 = 100.0;

#[derive(Clone, Debug, Copy, PartialEq, Eq, Hash)]
pub enum SuccessLevel {
    Legendary,
    Elite,
    Capable,
    Rookie,
}

impl SuccessLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Legendary
        } else if score >= 60.0 {
            Self::Elite
        } else if score >= 40.0 {
            Self::Capable
        } else {
            Self::Rookie
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legendary => "Legendary Crew",
            Self::Elite => "Elite Crew",
            Self::Capable => "Capable Crew",
            Self::Rookie => "Rookie Crew",
        }
    }

    pub fn tone(self) -> &'static str {
        match self {
            Self::Legendary => "#facc15",
            Self::Elite => "#60a5fa",
            Self::Capable => "#4ade80",
            Self::Rookie => "#9ca3af",
        }
    }
}

impl fmt::Display for SuccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregates shown on top of the gallery.
#[derive(Clone, Debug, PartialEq)]
pub struct CrewStatistics {
    pub total: usize,
    /// Rounded to one decimal.
    pub average_speed: f64,
    pub most_popular_color: String,
    /// Keyed by category token, in order of first appearance.
    pub category_distribution: IndexMap<String, usize>,
    pub success_score: f64,
    pub success_level: SuccessLevel,
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn count_by<'a>(values: impl Iterator<Item = &'a str>) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for value in values {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    counts
}

impl CrewStatistics {
    /// `None` for an empty crew; the gallery shows no statistics then.
    pub fn from_crewmates(crewmates: &[Crewmate]) -> Option<Self> {
        if crewmates.is_empty() {
            return None;
        }

        let total = crewmates.len();
        let speed_sum: i64 = crewmates.iter().map(|c| i64::from(c.speed)).sum();
        let average_speed = round_to_tenth(speed_sum as f64 / total as f64);

        let color_distribution = count_by(crewmates.iter().map(|c| c.color.as_str()));
        // ties go to the color seen first
        let mut most_popular_color: Option<(&String, usize)> = None;
        for (color, &count) in &color_distribution {
            if most_popular_color.map_or(true, |(_, best)| count > best) {
                most_popular_color = Some((color, count));
            }
        }
        let most_popular_color = most_popular_color
            .map(|(color, _)| color.clone())
            .unwrap_or_default();

        let category_distribution = count_by(crewmates.iter().map(|c| c.category.as_str()));

        let engineers = crewmates.iter().filter(|c| c.is_engineer()).count();
        let impostors = crewmates.iter().filter(|c| c.is_impostor()).count();
        let success_score = MAX_SUCCESS_SCORE.min(
            average_speed * 15.0 + engineers as f64 * 10.0 + total as f64 * 5.0
                - impostors as f64 * 20.0,
        );

        Some(Self {
            total,
            average_speed,
            most_popular_color,
            category_distribution,
            success_score,
            success_level: SuccessLevel::from_score(success_score),
        })
    }

    /// Whole-number percentage of the crew in a category bucket.
    pub fn share_percent(&self, count: usize) -> u32 {
        (count as f64 / self.total as f64 * 100.0).round() as u32
    }
}
