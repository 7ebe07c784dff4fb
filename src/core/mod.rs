// Core algorithm exports
pub mod distance;
pub mod districts;
pub mod ranker;
pub mod scorer;
pub mod scoring;

pub use distance::haversine_distance;
pub use districts::DistrictAdjacency;
pub use ranker::{Ranker, DEFAULT_LIMIT, MIN_MATCH_SCORE};
pub use scorer::{Scorer, ScoringConfig, MAX_SCORE};
pub use scoring::{
    calculate_availability_score, calculate_bonus, calculate_experience_score,
    calculate_location_score, calculate_salary_score, calculate_skill_score,
};
