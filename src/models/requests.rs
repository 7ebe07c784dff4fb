use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{JobPosting, WorkerProfile};

/// Request to score a single worker/job pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CalculateScoreRequest {
    #[validate(nested)]
    pub worker: WorkerProfile,
    #[validate(nested)]
    pub job: JobPosting,
}

/// Request to rank a pool of workers against one job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindCandidatesRequest {
    #[validate(nested)]
    pub job: JobPosting,
    #[serde(default)]
    #[validate(nested)]
    pub workers: Vec<WorkerProfile>,
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

/// Request to rank a pool of jobs for one worker
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindJobsRequest {
    #[validate(nested)]
    pub worker: WorkerProfile,
    #[serde(default)]
    #[validate(nested)]
    pub jobs: Vec<JobPosting>,
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}
