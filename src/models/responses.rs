use serde::{Deserialize, Serialize};
use crate::models::domain::{RankedJob, RankedMatch, ScoreBreakdown};

/// Response for the single-pair scoring endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateScoreResponse {
    pub match_score: u8,
    pub details: ScoreBreakdown,
}

/// Response for candidate search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindCandidatesResponse {
    pub matches: Vec<RankedMatch>,
}

/// Response for job search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindJobsResponse {
    pub matches: Vec<RankedJob>,
}

/// Neighbouring districts lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyDistrictsResponse {
    pub district: String,
    pub nearby: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
