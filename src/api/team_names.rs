//! Team name endpoints

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use serde_json::Value;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    AddTeamNameRequest, ApiError, AvailabilityResponse, Json, SubmissionResponse,
    TeamNameResponse,
};

/// GET /teamnames
pub async fn list_team_names(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let names = state
        .team_name_service
        .list_names()
        .await
        .map_err(ApiError::from)?;

    Ok(([(header::CACHE_CONTROL, "no-cache")], Json(names)))
}

/// POST /teamnames
///
/// The name is canonicalized before the duplicate check; the canonical form
/// is returned.
pub async fn add_team_name(
    State(state): State<AppState>,
    Json(request): Json<AddTeamNameRequest>,
) -> Result<Json<TeamNameResponse>, ApiError> {
    debug!(raw = %request.teamname, "Adding team name");

    let teamname = state
        .team_name_service
        .add_name(&request.teamname)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(TeamNameResponse { teamname }))
}

/// GET /teamnames/{name}
pub async fn get_team_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let availability = state
        .team_name_service
        .is_available(&name)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(AvailabilityResponse::from(availability)))
}

/// POST /teamform
pub async fn submit_team_form(
    State(state): State<AppState>,
    Json(data): Json<Value>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let submission_id = state
        .team_form_service
        .submit(data)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(SubmissionResponse { submission_id }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use mockall::predicate::{always, eq};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::router::create_router;
    use crate::api::state::AppState;
    use crate::domain::team_name::mock::MockOptionStore;
    use crate::domain::team_name::MockFormSubmitter;
    use crate::domain::DomainError;
    use crate::infrastructure::team_name::{NameListLocation, NameRegistry, TeamFormService};

    const FORM: &str = "reg-form";
    const QUESTION: &str = "7";

    fn create_app(store: Arc<MockOptionStore>, submitter: MockFormSubmitter) -> Router {
        let registry = NameRegistry::new(store, NameListLocation::new(FORM, QUESTION));
        let state = AppState {
            team_name_service: Arc::new(registry),
            team_form_service: Arc::new(TeamFormService::new(
                Arc::new(submitter),
                Some("add-team-form".to_string()),
            )),
        };
        create_router(state)
    }

    fn app_with(options: &str) -> (Arc<MockOptionStore>, Router) {
        let store = Arc::new(MockOptionStore::with_options(FORM, QUESTION, options));
        let app = create_app(store.clone(), MockFormSubmitter::new());
        (store, app)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, headers, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_team_names() {
        let (_, app) = app_with("Walk Tall|Alpha");

        let (status, headers, body) = send(&app, get("/teamnames")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["Alpha", "Walk Tall"]));
        assert_eq!(headers["cache-control"], "no-cache");
        assert_eq!(headers["content-type"], "application/json");
    }

    #[tokio::test]
    async fn test_list_team_names_remote_unavailable() {
        let (store, app) = app_with("Alpha");
        store.set_fail_reads(true);

        let (status, _, body) = send(&app, get("/teamnames")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_add_team_name() {
        let (store, app) = app_with("");

        let (status, _, body) =
            send(&app, post_json("/teamnames", json!({"teamname": "fast!!hombres"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"teamname": "Fast__Hombres"}));
        assert_eq!(store.stored(FORM, QUESTION).unwrap(), "Fast__Hombres");
    }

    #[tokio::test]
    async fn test_add_duplicate_team_name() {
        let (_, app) = app_with("");

        send(&app, post_json("/teamnames", json!({"teamname": "Walk Tall"}))).await;
        let (status, _, body) =
            send(&app, post_json("/teamnames", json!({"teamname": "walk  tall"}))).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, json!({"error": "Team name Walk Tall is already in use."}));

        let (_, _, list) = send(&app, get("/teamnames")).await;
        assert_eq!(list, json!(["Walk Tall"]));
    }

    #[tokio::test]
    async fn test_add_blank_team_name() {
        let (store, app) = app_with("Alpha");

        let (status, _, body) =
            send(&app, post_json("/teamnames", json!({"teamname": "   "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "No name supplied"}));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_add_without_teamname_field() {
        let (_, app) = app_with("");

        let (status, _, body) = send(&app, post_json("/teamnames", json!({"name": "x"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_add_write_failure() {
        let (store, app) = app_with("Alpha");
        store.set_fail_writes(true);

        let (status, _, _) = send(&app, post_json("/teamnames", json!({"teamname": "Beta"}))).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        store.set_fail_writes(false);
        let (_, _, list) = send(&app, get("/teamnames")).await;
        assert_eq!(list, json!(["Alpha"]));
    }

    #[tokio::test]
    async fn test_get_team_name_availability() {
        let (_, app) = app_with("Walk Tall");

        let (status, _, body) = send(&app, get("/teamnames/walk%20%20TALL")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"teamname": "Walk Tall", "available": "no"}));

        let (status, _, body) = send(&app, get("/teamnames/fast!!hombres")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"teamname": "Fast__Hombres", "available": "yes"}));
    }

    #[tokio::test]
    async fn test_get_team_name_blank() {
        let (_, app) = app_with("Alpha");

        let (status, _, body) = send(&app, get("/teamnames/%20%20")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "No name supplied"}));
    }

    #[tokio::test]
    async fn test_submit_team_form() {
        let store = Arc::new(MockOptionStore::with_options(FORM, QUESTION, ""));
        let mut submitter = MockFormSubmitter::new();
        submitter
            .expect_submit()
            .with(eq("add-team-form"), always())
            .returning(|_, _| Ok(Some("5512345".to_string())));
        let app = create_app(store, submitter);

        let (status, _, body) = send(&app, post_json("/teamform/", json!({"3": "Walk Tall"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"submission_id": "5512345"}));
    }

    #[tokio::test]
    async fn test_submit_team_form_upstream_status() {
        let store = Arc::new(MockOptionStore::with_options(FORM, QUESTION, ""));
        let mut submitter = MockFormSubmitter::new();
        submitter
            .expect_submit()
            .returning(|_, _| Err(DomainError::upstream(403, "Forbidden")));
        let app = create_app(store, submitter);

        let (status, _, body) = send(&app, post_json("/teamform", json!({"3": "x"}))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({"error": "Could not submit team form"}));
        assert!(!body.to_string().contains("Forbidden"));
    }
}
