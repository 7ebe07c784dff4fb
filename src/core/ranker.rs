use crate::core::scorer::{Scorer, ScoringConfig};
use crate::models::{JobPosting, RankedJob, RankedMatch, WorkerProfile};

/// Scores below this are never returned
pub const MIN_MATCH_SCORE: u8 = 40;

/// Number of results returned when the caller gives no limit
pub const DEFAULT_LIMIT: usize = 20;

/// Top-K selection over a pool of workers or jobs
///
/// # Pipeline Stages
/// 1. Score every pair with the [`Scorer`]
/// 2. Drop pairs below [`MIN_MATCH_SCORE`]
/// 3. Stable sort by score, descending (ties keep input order)
/// 4. Truncate to the limit
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    scorer: Scorer,
}

impl Ranker {
    pub fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self::new(Scorer::new(config))
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Best workers for a job
    ///
    /// # Arguments
    /// * `job` - The job being filled
    /// * `workers` - Candidate pool, in caller order
    /// * `limit` - Maximum number of matches to return
    pub fn rank(&self, job: &JobPosting, workers: &[WorkerProfile], limit: usize) -> Vec<RankedMatch> {
        let scored = workers
            .iter()
            .map(|worker| {
                let breakdown = self.scorer.breakdown(worker, job);
                RankedMatch {
                    worker_id: worker.id.clone(),
                    match_score: breakdown.total,
                    breakdown,
                }
            })
            .collect();

        let matches = select_top(scored, |m| m.match_score, limit);

        tracing::debug!(
            "Ranked {} workers for job {:?}: returning {}",
            workers.len(),
            job.id,
            matches.len()
        );

        matches
    }

    /// Best jobs for a worker
    pub fn rank_jobs(&self, worker: &WorkerProfile, jobs: &[JobPosting], limit: usize) -> Vec<RankedJob> {
        let scored = jobs
            .iter()
            .map(|job| {
                let breakdown = self.scorer.breakdown(worker, job);
                RankedJob {
                    job_id: job.id.clone(),
                    match_score: breakdown.total,
                    breakdown,
                }
            })
            .collect();

        let matches = select_top(scored, |m| m.match_score, limit);

        tracing::debug!(
            "Ranked {} jobs for worker {:?}: returning {}",
            jobs.len(),
            worker.id,
            matches.len()
        );

        matches
    }
}

fn select_top<T>(scored: Vec<T>, score: impl Fn(&T) -> u8, limit: usize) -> Vec<T> {
    let mut viable: Vec<T> = scored
        .into_iter()
        .filter(|item| score(item) >= MIN_MATCH_SCORE)
        .collect();

    // sort_by is stable, equal scores keep their input order
    viable.sort_by(|a, b| score(b).cmp(&score(a)));
    viable.truncate(limit);

    viable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceEntry, Shift};

    fn create_worker(id: &str, district: &str, skills: &[&str]) -> WorkerProfile {
        WorkerProfile {
            id: Some(id.to_string()),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: vec![ExperienceEntry::new("delivery", 12)],
            district: district.to_string(),
            preferred_shifts: vec![Shift::Day],
            ..Default::default()
        }
    }

    fn create_job() -> JobPosting {
        JobPosting {
            id: Some("job-1".to_string()),
            required_skills: vec!["driving".to_string(), "navigation".to_string()],
            district: "Dhaka".to_string(),
            salary_min: 12000,
            salary_max: 18000,
            experience_required_months: 6,
            category: "delivery".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_rank_basic() {
        let ranker = Ranker::default();
        let workers = vec![
            create_worker("1", "Dhaka", &["driving", "navigation"]),
            create_worker("2", "Khulna", &[]),
            create_worker("3", "Gazipur", &["driving"]),
        ];

        let matches = ranker.rank(&create_job(), &workers, DEFAULT_LIMIT);

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].worker_id.as_deref(), Some("1"));
        assert_eq!(matches[1].worker_id.as_deref(), Some("3"));
    }

    #[test]
    fn test_rank_filters_below_threshold() {
        let ranker = Ranker::default();
        let mut weak = create_worker("weak", "Khulna", &["cooking"]);
        weak.experience.clear();
        weak.expected_salary_min = Some(50000);
        weak.expected_salary_max = Some(60000);
        weak.preferred_shifts = vec![Shift::Night];

        let matches = ranker.rank(&create_job(), &[weak], DEFAULT_LIMIT);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let ranker = Ranker::default();
        let workers: Vec<WorkerProfile> = ["a", "b", "c", "d"]
            .iter()
            .map(|id| create_worker(id, "Dhaka", &["driving"]))
            .collect();

        let matches = ranker.rank(&create_job(), &workers, DEFAULT_LIMIT);
        let ids: Vec<_> = matches.iter().filter_map(|m| m.worker_id.as_deref()).collect();

        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_respects_limit() {
        let ranker = Ranker::default();
        let workers: Vec<WorkerProfile> = (0..10)
            .map(|i| create_worker(&i.to_string(), "Dhaka", &["driving", "navigation"]))
            .collect();

        assert_eq!(ranker.rank(&create_job(), &workers, 5).len(), 5);
        assert!(ranker.rank(&create_job(), &workers, 0).is_empty());
    }

    #[test]
    fn test_empty_pool() {
        assert!(Ranker::default().rank(&create_job(), &[], DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn test_rank_jobs() {
        let ranker = Ranker::default();
        let worker = create_worker("w", "Dhaka", &["driving", "navigation"]);

        let mut far_job = create_job();
        far_job.id = Some("far".to_string());
        far_job.district = "Sylhet".to_string();

        let near_job = create_job();

        let matches = ranker.rank_jobs(&worker, &[far_job, near_job], DEFAULT_LIMIT);

        assert_eq!(matches[0].job_id.as_deref(), Some("job-1"));
        assert!(matches.windows(2).all(|w| w[0].match_score >= w[1].match_score));
        assert!(matches.iter().all(|m| m.match_score >= MIN_MATCH_SCORE));
    }
}
