//! KajKori Match - explainable worker/job matching engine
//!
//! This library scores a worker profile against a job posting with a fixed
//! five-factor weighted model plus a trust bonus, and ranks pools of workers
//! or jobs by that score. Scoring is pure and synchronous.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{haversine_distance, DistrictAdjacency, Ranker, Scorer, ScoringConfig};
pub use error::MatchError;
pub use models::{GeoPoint, JobPosting, RankedJob, RankedMatch, ScoreBreakdown, ScoringWeights, WorkerProfile};
