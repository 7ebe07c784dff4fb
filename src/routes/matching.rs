use actix_web::{web, HttpResponse, Responder};
use validator::{Validate, ValidationErrors};
use crate::config::MatchingSettings;
use crate::core::Ranker;
use crate::models::{
    CalculateScoreRequest, CalculateScoreResponse, ErrorResponse, FindCandidatesRequest,
    FindCandidatesResponse, FindJobsRequest, FindJobsResponse, HealthResponse,
    NearbyDistrictsResponse,
};

/// Application state shared across all handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub ranker: Ranker,
    pub matching: MatchingSettings,
}

/// Configure all matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matching/calculate-score", web::post().to(calculate_score))
        .route("/matching/find-candidates", web::post().to(find_candidates))
        .route("/matching/find-jobs", web::post().to(find_jobs))
        .route("/districts/{district}/nearby", web::get().to(nearby_districts));
}

fn validation_failed(errors: ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed: field_errors={:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score a single worker/job pair
///
/// POST /api/v1/matching/calculate-score
///
/// Request body:
/// ```json
/// {
///   "worker": { "district": "Dhaka", "skills": ["sewing"], ... },
///   "job": { "district": "Dhaka", "salary_min": 10000, "salary_max": 15000, "category": "garments", ... }
/// }
/// ```
async fn calculate_score(
    state: web::Data<AppState>,
    req: web::Json<CalculateScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let details = state.ranker.scorer().breakdown(&req.worker, &req.job);

    tracing::info!(
        "Scored worker {:?} against job {:?}: {}",
        req.worker.id,
        req.job.id,
        details.total
    );

    HttpResponse::Ok().json(CalculateScoreResponse {
        match_score: details.total,
        details,
    })
}

/// Rank candidate workers for a job
///
/// POST /api/v1/matching/find-candidates
///
/// Request body:
/// ```json
/// {
///   "job": { ... },
///   "workers": [{ ... }],
///   "limit": 20
/// }
/// ```
async fn find_candidates(
    state: web::Data<AppState>,
    req: web::Json<FindCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let limit = state.matching.effective_limit(req.limit);

    tracing::info!(
        "Finding candidates for job {:?}: pool={}, limit={}",
        req.job.id,
        req.workers.len(),
        limit
    );

    let matches = state.ranker.rank(&req.job, &req.workers, limit);

    tracing::info!(
        "Returning {} candidates for job {:?}",
        matches.len(),
        req.job.id
    );

    HttpResponse::Ok().json(FindCandidatesResponse { matches })
}

/// Rank jobs for a worker
///
/// POST /api/v1/matching/find-jobs
///
/// Request body:
/// ```json
/// {
///   "worker": { ... },
///   "jobs": [{ ... }],
///   "limit": 20
/// }
/// ```
async fn find_jobs(
    state: web::Data<AppState>,
    req: web::Json<FindJobsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let limit = state.matching.effective_limit(req.limit);

    tracing::info!(
        "Finding jobs for worker {:?}: pool={}, limit={}",
        req.worker.id,
        req.jobs.len(),
        limit
    );

    let matches = state.ranker.rank_jobs(&req.worker, &req.jobs, limit);

    HttpResponse::Ok().json(FindJobsResponse { matches })
}

/// Neighbouring districts
///
/// GET /api/v1/districts/{district}/nearby
async fn nearby_districts(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let district = path.into_inner();
    let nearby = state
        .ranker
        .scorer()
        .config()
        .adjacency
        .neighbors(&district)
        .to_vec();

    HttpResponse::Ok().json(NearbyDistrictsResponse { district, nearby })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    fn app_state() -> web::Data<AppState> {
        web::Data::new(AppState::default())
    }

    fn job_json() -> Value {
        json!({
            "id": "job-1",
            "required_skills": ["sewing"],
            "district": "Dhaka",
            "salary_min": 10000,
            "salary_max": 15000,
            "experience_required": 0,
            "category": "garments"
        })
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/health").to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_calculate_score_keys() {
        let app = test::init_service(
            App::new().app_data(app_state()).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matching/calculate-score")
            .set_json(json!({
                "worker": { "district": "Dhaka", "skills": ["Sewing"] },
                "job": job_json()
            }))
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["match_score"], body["details"]["total"]);
        assert_eq!(body["details"]["skills"]["score"], 100.0);
        assert_eq!(body["details"]["skills"]["weight"], 30);
    }

    #[actix_web::test]
    async fn test_calculate_score_custom_shift_matches() {
        let app = test::init_service(
            App::new().app_data(app_state()).configure(configure),
        )
        .await;

        let mut job = job_json();
        job["shift"] = json!("evening");

        let req = test::TestRequest::post()
            .uri("/matching/calculate-score")
            .set_json(json!({
                "worker": { "district": "Dhaka", "preferred_shifts": ["evening"] },
                "job": job
            }))
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["details"]["availability"]["score"], 100.0);
    }

    #[actix_web::test]
    async fn test_calculate_score_rejects_bad_rating() {
        let app = test::init_service(
            App::new().app_data(app_state()).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matching/calculate-score")
            .set_json(json!({
                "worker": { "district": "Dhaka", "rating": 7.5 },
                "job": job_json()
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_nearby_districts() {
        let app = test::init_service(
            App::new().app_data(app_state()).configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/districts/Gazipur/nearby").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["district"], "Gazipur");
        assert_eq!(body["nearby"], json!(["Dhaka", "Mymensingh", "Tangail"]));
    }

    #[actix_web::test]
    async fn test_nearby_unmapped_district() {
        let app = test::init_service(
            App::new().app_data(app_state()).configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/districts/Cox's%20Bazar/nearby")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["district"], "Cox's Bazar");
        assert_eq!(body["nearby"], json!([]));
    }
}
