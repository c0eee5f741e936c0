use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::entities;

/// Row shape shared by the REST and Postgres adapters.
#[derive(Debug, Clone, Deserialize, sqlx::FromRow)]
pub struct CrewmateModel {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub speed: i32,
    pub color: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

// hosted tables are created with either uuid or bigint identity keys
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

impl CrewmateModel {
    pub fn into_entity(self) -> entities::Crewmate {
        entities::Crewmate {
            id: entities::CrewmateId::from(self.id),
            name: self.name,
            speed: self.speed,
            color: self.color,
            category: self.category,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CrewmatePayload<'a> {
    pub name: &'a str,
    pub speed: i32,
    pub color: &'a str,
    pub category: &'a str,
}

impl<'a> From<&'a entities::CrewmateFields> for CrewmatePayload<'a> {
    fn from(fields: &'a entities::CrewmateFields) -> Self {
        Self {
            name: fields.name.as_str(),
            speed: fields.speed.value(),
            color: fields.color.as_str(),
            category: fields.category.as_str(),
        }
    }
}
