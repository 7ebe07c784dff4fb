use std::collections::HashSet;

use crate::core::{distance::haversine_distance, districts::DistrictAdjacency};
use crate::models::{Availability, JobPosting, Shift, StartDateType, WorkerProfile};

/// Skill overlap (0-100)
///
/// Both sides are lowercased and deduplicated, so repeated entries on the
/// worker's list cannot push the ratio past 100.
pub fn calculate_skill_score(worker: &WorkerProfile, job: &JobPosting) -> f64 {
    let required: HashSet<String> = job
        .required_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    if required.is_empty() {
        return 100.0;
    }

    if worker.skills.is_empty() {
        return 30.0;
    }

    let matching = worker
        .skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect::<HashSet<_>>()
        .intersection(&required)
        .count();

    matching as f64 / required.len() as f64 * 100.0
}

/// Location proximity (0-100)
///
/// Same district: distance bands when both sides have coordinates, flat 60
/// otherwise. Different districts: 30 if the worker's district neighbours
/// the job's, 10 if not.
pub fn calculate_location_score(
    worker: &WorkerProfile,
    job: &JobPosting,
    adjacency: &DistrictAdjacency,
) -> f64 {
    if worker.district == job.district {
        return match (&worker.location, &job.location) {
            (Some(from), Some(to)) => distance_band_score(haversine_distance(from, to)),
            _ => 60.0,
        };
    }

    if adjacency.is_adjacent(&job.district, &worker.district) {
        30.0
    } else {
        10.0
    }
}

#[inline]
fn distance_band_score(distance_km: f64) -> f64 {
    match distance_km {
        d if d <= 5.0 => 100.0,
        d if d <= 10.0 => 80.0,
        d if d <= 20.0 => 60.0,
        d if d <= 30.0 => 40.0,
        _ => 20.0,
    }
}

/// Experience against the job's requirement (0-100)
pub fn calculate_experience_score(worker: &WorkerProfile, job: &JobPosting) -> f64 {
    let (total_months, relevant_months) =
        worker
            .experience
            .iter()
            .fold((0u64, 0u64), |(total, relevant), entry| {
                let months = u64::from(entry.duration_months);
                if entry.category == job.category {
                    (total + months, relevant + months)
                } else {
                    (total + months, relevant)
                }
            });

    let required = u64::from(job.experience_required_months);

    if required == 0 {
        return if total_months > 0 { 80.0 } else { 70.0 };
    }

    if total_months >= required {
        return if relevant_months >= required { 100.0 } else { 90.0 };
    }

    let percentage = total_months as f64 / required as f64 * 100.0;
    if percentage >= 50.0 {
        70.0
    } else {
        40.0
    }
}

/// Salary expectation against the offered range (0-100)
pub fn calculate_salary_score(worker: &WorkerProfile, job: &JobPosting) -> f64 {
    let Some((worker_min, worker_max)) = worker.expected_salary() else {
        // No expectations set, stay neutral
        return 70.0;
    };

    if worker_min <= job.salary_max && worker_max >= job.salary_min {
        return 100.0;
    }

    let worker_min = f64::from(worker_min);
    let job_max = f64::from(job.salary_max);

    if worker_min <= job_max * 1.2 {
        70.0
    } else if worker_min <= job_max * 1.3 {
        40.0
    } else {
        20.0
    }
}

/// Start date and shift compatibility (0-100)
///
/// Start date contributes up to 40 points and shift up to 60.
pub fn calculate_availability_score(worker: &WorkerProfile, job: &JobPosting) -> f64 {
    let start = match (worker.availability, job.start_date_type) {
        (Availability::Immediate, StartDateType::Immediate) => 40.0,
        (Availability::WithinWeek, _) => 30.0,
        (Availability::WithinMonth, _) => 20.0,
        _ => 10.0,
    };

    let shift = if worker.preferred_shifts.contains(&job.shift) {
        60.0
    } else if job.shift == Shift::Flexible || worker.preferred_shifts.contains(&Shift::Flexible) {
        40.0
    } else {
        20.0
    };

    start + shift
}

/// Trust bonus added on top of the weighted score (0-10)
pub fn calculate_bonus(worker: &WorkerProfile) -> u8 {
    let mut bonus = 0;

    if worker.nid_verified {
        bonus += 5;
    }

    if worker.rating >= 4.5 {
        bonus += 3;
    } else if worker.rating >= 4.0 {
        bonus += 2;
    }

    if worker.profile_completeness >= 80 {
        bonus += 2;
    } else if worker.profile_completeness >= 60 {
        bonus += 1;
    }

    bonus
}
