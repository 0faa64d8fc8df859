//! Trail DTOs and the difficulty rating used in API requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::model::national_park::NationalParkDto;

/// Difficulty rating for a trail.
///
/// Stored as a string column in the database; `as_str` and `FromStr` define
/// the canonical mapping in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
    Experienced,
}

impl Difficulty {
    /// Returns the canonical string form used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Difficult => "Difficult",
            Difficulty::Experienced => "Experienced",
        }
    }
}

/// Error returned when a stored difficulty string has no matching rating.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown trail difficulty: {0}")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Moderate" => Ok(Difficulty::Moderate),
            "Difficult" => Ok(Difficulty::Difficult),
            "Experienced" => Ok(Difficulty::Experienced),
            other => Err(UnknownDifficulty(other.to_string())),
        }
    }
}

/// Trail as returned by the API.
///
/// Read endpoints embed the owning national park so clients can render
/// trail listings without a second round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrailDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub distance: f64,
    pub elevation: f64,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    pub national_park_id: i32,
    #[serde(default)]
    pub national_park: Option<NationalParkDto>,
}

/// Payload for creating a trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrailCreateDto {
    pub name: String,
    pub distance: f64,
    pub elevation: f64,
    pub difficulty: Difficulty,
    pub national_park_id: i32,
}

/// Payload for updating a trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrailUpdateDto {
    pub id: i32,
    pub name: String,
    pub distance: f64,
    pub elevation: f64,
    pub difficulty: Difficulty,
    pub national_park_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_round_trips_through_storage_form() {
        for difficulty in [
            Difficulty::Easy,
            Difficulty::Moderate,
            Difficulty::Difficult,
            Difficulty::Experienced,
        ] {
            let stored = difficulty.as_str();
            assert_eq!(stored.parse::<Difficulty>().unwrap(), difficulty);
        }
    }

    #[test]
    fn unknown_difficulty_string_is_rejected() {
        let err = "Impossible".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, UnknownDifficulty("Impossible".to_string()));
    }

    #[test]
    fn difficulty_serializes_as_plain_string() {
        let json = serde_json::to_string(&Difficulty::Moderate).unwrap();
        assert_eq!(json, "\"Moderate\"");
    }
}
