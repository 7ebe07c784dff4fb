// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Availability, ExperienceEntry, FactorScore, GeoPoint, JobPosting, RankedJob, RankedMatch,
    ScoreBreakdown, ScoringWeights, Shift, StartDateType, WorkerProfile,
};
pub use requests::{CalculateScoreRequest, FindCandidatesRequest, FindJobsRequest};
pub use responses::{
    CalculateScoreResponse, ErrorResponse, FindCandidatesResponse, FindJobsResponse,
    HealthResponse, NearbyDistrictsResponse,
};
