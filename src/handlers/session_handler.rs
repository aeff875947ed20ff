use actix_web::{delete, get, post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{SubmitAnswersRequest, SubmitProfileRequest},
    services::badge_resolver::BADGE_TIERS,
};

#[get("/api/badges")]
pub async fn get_badges() -> HttpResponse {
    HttpResponse::Ok().json(BADGE_TIERS)
}

#[post("/api/sessions")]
pub async fn create_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = state.session_service.create_session().await?;
    Ok(HttpResponse::Created().json(session))
}

#[get("/api/sessions/{id}")]
pub async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.get_session(&id).await?;
    Ok(HttpResponse::Ok().json(session))
}

#[delete("/api/sessions/{id}")]
pub async fn delete_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.session_service.delete_session(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/api/sessions/{id}/profile")]
pub async fn submit_profile(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<SubmitProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state
        .session_service
        .submit_profile(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(session))
}

#[post("/api/sessions/{id}/answers")]
pub async fn submit_answers(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<SubmitAnswersRequest>,
) -> Result<HttpResponse, AppError> {
    let results = state
        .session_service
        .submit_answers(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(results))
}

#[post("/api/sessions/{id}/retake")]
pub async fn retake_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.retake(&id).await?;
    Ok(HttpResponse::Ok().json(session))
}

#[post("/api/sessions/{id}/reset")]
pub async fn reset_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.reset(&id).await?;
    Ok(HttpResponse::Ok().json(session))
}

#[get("/api/sessions/{id}/results")]
pub async fn get_results(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let results = state.session_service.get_results(&id).await?;
    Ok(HttpResponse::Ok().json(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        handlers::configure,
        test_utils::{fixtures::generated_quiz_text, stubs::FixedGenerator},
    };
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::with_generator(
            Config::test_config(),
            Arc::new(FixedGenerator(generated_quiz_text(5))),
        )
    }

    #[actix_web::test]
    async fn test_get_badges_lists_tiers_in_order() {
        let app = test::init_service(App::new().service(get_badges)).await;

        let req = test::TestRequest::get().uri("/api/badges").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0], json!({ "name": "Beginner", "min_score": 0 }));
        assert_eq!(body[4], json!({ "name": "Master", "min_score": 10 }));
    }

    #[actix_web::test]
    async fn test_session_flow_over_http() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/sessions").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["phase"], "CollectingProfile");
        let id = created["id"].as_str().expect("id should be a string").to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/profile", id))
            .set_json(json!({ "field": "Chemistry", "role": "Lab Technician" }))
            .to_request();
        let started: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(started["phase"], "QuizInProgress");
        assert_eq!(started["questions"].as_array().map(Vec::len), Some(5));

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/answers", id))
            .set_json(json!({ "answers": ["A", "B", "C", "D", "A"] }))
            .to_request();
        let results: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(results["score"], 5);
        assert_eq!(results["badge"], "Intermediate");
        assert_eq!(results["review"][3]["correct_answer"], "D");

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/retake", id))
            .to_request();
        let retaken: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(retaken["phase"], "CollectingProfile");
        assert_eq!(retaken["profile"]["field"], "Chemistry");
    }

    #[actix_web::test]
    async fn test_empty_field_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/sessions").to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().expect("id should be a string").to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/profile", id))
            .set_json(json!({ "name": "Ada", "field": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["kind"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_answers_before_profile_is_conflict() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/sessions").to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().expect("id should be a string").to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/answers", id))
            .set_json(json!({ "answers": ["A"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get()
            .uri(&format!("/api/sessions/{}/results", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_unknown_session_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/sessions/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
