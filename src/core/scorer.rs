use crate::core::{
    districts::DistrictAdjacency,
    scoring::{
        calculate_availability_score, calculate_bonus, calculate_experience_score,
        calculate_location_score, calculate_salary_score, calculate_skill_score,
    },
};
use crate::models::{FactorScore, JobPosting, ScoreBreakdown, ScoringWeights, WorkerProfile};

/// Highest score a pair can be published with
pub const MAX_SCORE: u8 = 100;

/// Read-only inputs of the scoring model
#[derive(Debug, Clone, Default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub adjacency: DistrictAdjacency,
}

/// Weighted multi-factor scorer for one worker/job pair
///
/// Score formula:
/// ```text
/// total = min(round(
///     skills       * 0.30 +
///     location     * 0.25 +
///     experience   * 0.20 +
///     salary       * 0.15 +
///     availability * 0.10 +
///     bonus
/// ), 100)
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Final match score in `0..=100`
    pub fn score(&self, worker: &WorkerProfile, job: &JobPosting) -> u8 {
        self.breakdown(worker, job).total
    }

    /// Every factor of the score, with the same total as [`Scorer::score`]
    pub fn breakdown(&self, worker: &WorkerProfile, job: &JobPosting) -> ScoreBreakdown {
        let weights = &self.config.weights;

        let skills = FactorScore::new(calculate_skill_score(worker, job), weights.skills());
        let location = FactorScore::new(
            calculate_location_score(worker, job, &self.config.adjacency),
            weights.location(),
        );
        let experience =
            FactorScore::new(calculate_experience_score(worker, job), weights.experience());
        let salary = FactorScore::new(calculate_salary_score(worker, job), weights.salary());
        let availability = FactorScore::new(
            calculate_availability_score(worker, job),
            weights.availability(),
        );
        let bonus = calculate_bonus(worker);

        let weighted = skills.weighted
            + location.weighted
            + experience.weighted
            + salary.weighted
            + availability.weighted;

        ScoreBreakdown {
            skills,
            location,
            experience,
            salary,
            availability,
            bonus,
            total: combine(weighted, bonus),
        }
    }
}

/// Round the weighted sum plus bonus and cap it at [`MAX_SCORE`]
#[inline]
fn combine(weighted: f64, bonus: u8) -> u8 {
    let total = (weighted + f64::from(bonus)).round();
    total.clamp(0.0, f64::from(MAX_SCORE)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, ExperienceEntry, GeoPoint, Shift};

    fn strong_worker() -> WorkerProfile {
        WorkerProfile {
            id: Some("w1".to_string()),
            skills: vec!["Sewing".to_string(), "cutting".to_string()],
            experience: vec![ExperienceEntry::new("garments", 24)],
            district: "Dhaka".to_string(),
            expected_salary_min: Some(12000),
            expected_salary_max: Some(16000),
            availability: Availability::Immediate,
            preferred_shifts: vec![Shift::Day],
            location: Some(GeoPoint::new(23.8103, 90.4125).unwrap()),
            rating: 4.8,
            nid_verified: true,
            profile_completeness: 90,
        }
    }

    fn garments_job() -> JobPosting {
        JobPosting {
            id: Some("j1".to_string()),
            title: Some("Sewing operator".to_string()),
            required_skills: vec!["sewing".to_string(), "cutting".to_string()],
            district: "Dhaka".to_string(),
            salary_min: 10000,
            salary_max: 15000,
            experience_required_months: 12,
            category: "garments".to_string(),
            location: Some(GeoPoint::new(23.8203, 90.4225).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_perfect_match_is_capped() {
        let scorer = Scorer::default();
        let breakdown = scorer.breakdown(&strong_worker(), &garments_job());

        assert_eq!(breakdown.weighted_sum(), 100.0);
        assert_eq!(breakdown.bonus, 10);
        assert_eq!(breakdown.total, 100);
    }

    #[test]
    fn test_score_matches_breakdown_total() {
        let scorer = Scorer::default();
        let mut worker = strong_worker();
        worker.district = "Gazipur".to_string();
        worker.skills = vec!["sewing".to_string()];
        worker.nid_verified = false;

        let job = garments_job();
        assert_eq!(scorer.score(&worker, &job), scorer.breakdown(&worker, &job).total);
    }

    #[test]
    fn test_breakdown_weights_sum_to_100() {
        let breakdown = Scorer::default().breakdown(&strong_worker(), &garments_job());
        let sum: u32 = breakdown.factors().iter().map(|f| u32::from(f.weight)).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn test_sparse_worker_scores_without_failing() {
        let worker = WorkerProfile {
            district: "Khulna".to_string(),
            ..Default::default()
        };
        let score = Scorer::default().score(&worker, &garments_job());

        // skills 30, location 10, experience 40, salary 70, availability 40 + 20
        // 9 + 2.5 + 8 + 10.5 + 6 = 36
        assert_eq!(score, 36);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoringWeights::new(100, 0, 0, 0, 0).unwrap();
        let scorer = Scorer::new(ScoringConfig {
            weights,
            ..Default::default()
        });

        let mut worker = strong_worker();
        worker.skills = vec!["sewing".to_string()];
        worker.nid_verified = false;
        worker.rating = 0.0;
        worker.profile_completeness = 0;

        assert_eq!(scorer.score(&worker, &garments_job()), 50);
    }

    #[test]
    fn test_combine_rounds_and_caps() {
        assert_eq!(combine(42.5, 0), 43);
        assert_eq!(combine(42.49, 0), 42);
        assert_eq!(combine(98.0, 10), 100);
        assert_eq!(combine(0.0, 0), 0);
    }
}
