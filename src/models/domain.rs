use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::MatchError;

/// A point on the Earth's surface in decimal degrees
///
/// Coordinates are checked on construction, including when deserialized,
/// so a `GeoPoint` always yields a finite haversine distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, MatchError> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lng_ok = lng.is_finite() && (-180.0..=180.0).contains(&lng);

        if lat_ok && lng_ok {
            Ok(Self { lat, lng })
        } else {
            Err(MatchError::InvalidCoordinates { lat, lng })
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

#[derive(Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = MatchError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.lat, raw.lng)
    }
}

/// One entry of a worker's employment history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub category: String,
    #[serde(alias = "duration", default)]
    pub duration_months: u32,
}

impl ExperienceEntry {
    pub fn new(category: impl Into<String>, duration_months: u32) -> Self {
        Self {
            category: category.into(),
            duration_months,
        }
    }
}

/// How soon a worker can start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Immediate,
    WithinWeek,
    WithinMonth,
    #[serde(other)]
    Other,
}

/// When a job expects its hire to start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartDateType {
    #[default]
    Immediate,
    #[serde(other)]
    Other,
}

/// Working shift, used both for job postings and worker preferences
///
/// Unrecognised values keep their original text so two sides naming the
/// same custom shift still match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Shift {
    #[default]
    Day,
    Night,
    Rotational,
    Flexible,
    Other(String),
}

impl From<String> for Shift {
    fn from(value: String) -> Self {
        match value.as_str() {
            "day" => Shift::Day,
            "night" => Shift::Night,
            "rotational" => Shift::Rotational,
            "flexible" => Shift::Flexible,
            _ => Shift::Other(value),
        }
    }
}

impl From<Shift> for String {
    fn from(shift: Shift) -> Self {
        match shift {
            Shift::Day => "day".to_string(),
            Shift::Night => "night".to_string(),
            Shift::Rotational => "rotational".to_string(),
            Shift::Flexible => "flexible".to_string(),
            Shift::Other(value) => value,
        }
    }
}

fn default_shifts() -> Vec<Shift> {
    vec![Shift::Day]
}

/// Job seeker profile as consumed by the scorer
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct WorkerProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[validate(length(min = 1))]
    pub district: String,
    #[serde(default)]
    pub expected_salary_min: Option<u32>,
    #[serde(default)]
    pub expected_salary_max: Option<u32>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default = "default_shifts")]
    pub preferred_shifts: Vec<Shift>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default)]
    pub nid_verified: bool,
    #[serde(default)]
    #[validate(range(max = 100))]
    pub profile_completeness: u8,
}

impl WorkerProfile {
    /// Expected salary range, if the worker has set a usable one
    ///
    /// Zero is treated the same as a missing bound.
    pub fn expected_salary(&self) -> Option<(u32, u32)> {
        match (self.expected_salary_min, self.expected_salary_max) {
            (Some(min), Some(max)) if min > 0 && max > 0 => Some((min, max)),
            _ => None,
        }
    }
}

/// Job posting as consumed by the scorer
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct JobPosting {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[validate(length(min = 1))]
    pub district: String,
    pub salary_min: u32,
    pub salary_max: u32,
    #[serde(alias = "experience_required", default)]
    pub experience_required_months: u32,
    pub category: String,
    #[serde(default)]
    pub start_date_type: StartDateType,
    #[serde(default)]
    pub shift: Shift,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

/// Factor weights as integer percentages
///
/// Held as percentages rather than fractions so the sum is exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringWeights {
    skills: u8,
    location: u8,
    experience: u8,
    salary: u8,
    availability: u8,
}

impl ScoringWeights {
    pub fn new(
        skills: u8,
        location: u8,
        experience: u8,
        salary: u8,
        availability: u8,
    ) -> Result<Self, MatchError> {
        let weights = Self {
            skills,
            location,
            experience,
            salary,
            availability,
        };

        let sum = weights.sum();
        if sum != 100 {
            return Err(MatchError::InvalidWeights { sum });
        }

        Ok(weights)
    }

    pub fn sum(&self) -> u32 {
        [
            self.skills,
            self.location,
            self.experience,
            self.salary,
            self.availability,
        ]
        .iter()
        .map(|w| u32::from(*w))
        .sum()
    }

    pub fn skills(&self) -> u8 {
        self.skills
    }

    pub fn location(&self) -> u8 {
        self.location
    }

    pub fn experience(&self) -> u8 {
        self.experience
    }

    pub fn salary(&self) -> u8 {
        self.salary
    }

    pub fn availability(&self) -> u8 {
        self.availability
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 30,
            location: 25,
            experience: 20,
            salary: 15,
            availability: 10,
        }
    }
}

/// One factor of a score breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub score: f64,
    /// Weight as a percentage
    pub weight: u8,
    pub weighted: f64,
}

impl FactorScore {
    pub fn new(score: f64, weight: u8) -> Self {
        Self {
            score,
            weight,
            weighted: score * f64::from(weight) / 100.0,
        }
    }
}

/// Explanation of a match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: FactorScore,
    pub location: FactorScore,
    pub experience: FactorScore,
    pub salary: FactorScore,
    pub availability: FactorScore,
    pub bonus: u8,
    pub total: u8,
}

impl ScoreBreakdown {
    pub fn factors(&self) -> [&FactorScore; 5] {
        [
            &self.skills,
            &self.location,
            &self.experience,
            &self.salary,
            &self.availability,
        ]
    }

    /// Weighted sum of the five factors, before the bonus
    pub fn weighted_sum(&self) -> f64 {
        self.factors().iter().map(|f| f.weighted).sum()
    }
}

/// A worker ranked against a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub worker_id: Option<String>,
    pub match_score: u8,
    pub breakdown: ScoreBreakdown,
}

/// A job ranked for a worker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedJob {
    pub job_id: Option<String>,
    pub match_score: u8,
    pub breakdown: ScoreBreakdown,
}
