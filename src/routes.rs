use axum::{
    extract::State,
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{auth, fixture, league, player, results, shared::AppState, stats};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub environment: String,
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online".to_string(),
        message: "eFootball League API is running".to_string(),
        timestamp: Utc::now(),
        environment: state.environment.clone(),
    })
}

/// Full API surface. Reads are public; every mutation sits behind the admin guard.
pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/api/health", get(health))
        .route("/api/league-table", get(league::get_league_table))
        .route("/api/players", get(player::list_players))
        .route("/api/results", get(results::list_results))
        .route("/api/fixtures", get(fixture::list_fixtures))
        .route("/api/stats/players/:id", get(stats::get_player_stats))
        .route("/api/stats/compare", get(stats::compare_players_stats))
        .route("/api/stats/teams", get(stats::get_team_stats))
        .route("/api/stats/leaders", get(stats::get_leaders))
        .route("/api/stats/metrics", get(stats::get_league_metrics))
        .route("/api/admin/login", post(auth::admin_login));

    let admin = Router::new()
        .route("/api/players", post(player::create_player))
        .route(
            "/api/players/:id",
            put(player::update_player).delete(player::delete_player),
        )
        .route("/api/results", post(results::create_result))
        .route(
            "/api/results/:id",
            put(results::update_result).delete(results::delete_result),
        )
        .route("/api/fixtures", post(fixture::create_fixture))
        .route("/api/fixtures/generate", post(fixture::generate_fixtures))
        .route(
            "/api/fixtures/:id",
            put(fixture::update_fixture).delete(fixture::delete_fixture),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::admin_auth,
        ));

    public
        .merge(admin)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::{admin_token, AppStateBuilder};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt; // for `oneshot`

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = build_router(AppStateBuilder::new().build())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "online");
        assert_eq!(health.environment, "test");
    }

    #[tokio::test]
    async fn test_reads_are_public_and_writes_are_guarded() {
        let state = AppStateBuilder::new().build();

        let read = Request::builder()
            .uri("/api/players")
            .body(Body::empty())
            .unwrap();
        let response = build_router(state.clone()).oneshot(read).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = r#"{"name": "New", "team": "Lyon", "strength": 50}"#;
        let anonymous = Request::builder()
            .method("POST")
            .uri("/api/players")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let response = build_router(state.clone()).oneshot(anonymous).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let authorised = Request::builder()
            .method("POST")
            .uri("/api/players")
            .header("content-type", "application/json")
            .header("Authorization", format!("Bearer {}", admin_token(&state)))
            .body(Body::from(body))
            .unwrap();
        let response = build_router(state).oneshot(authorised).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_generate_route_is_not_shadowed_by_id_route() {
        let state = AppStateBuilder::new().build();
        let request = Request::builder()
            .method("DELETE")
            .uri("/api/fixtures/generate")
            .header("Authorization", format!("Bearer {}", admin_token(&state)))
            .body(Body::empty())
            .unwrap();
        let response = build_router(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_fixture_edit_requires_admin() {
        let state = AppStateBuilder::new().build();
        let edit = |token: Option<String>| {
            let mut builder = Request::builder()
                .method("PUT")
                .uri("/api/fixtures/1")
                .header("content-type", "application/json");
            if let Some(token) = token {
                builder = builder.header("Authorization", format!("Bearer {}", token));
            }
            builder.body(Body::from(r#"{"played": true}"#)).unwrap()
        };

        let response = build_router(state.clone()).oneshot(edit(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let token = admin_token(&state);
        let response = build_router(state).oneshot(edit(Some(token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
