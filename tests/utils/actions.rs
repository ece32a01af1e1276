#![allow(dead_code)] // Test utilities may not all be used in every test

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

use super::setup::{TestApp, ADMIN_PASSWORD};

pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

// ============================================================================
// Request Helpers
// ============================================================================

impl TestApp {
    /// Send a request through the router and decode the JSON body
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> ApiResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        ApiResponse { status, body }
    }

    pub async fn get(&self, uri: &str) -> ApiResponse {
        self.send("GET", uri, None, None).await
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    /// Log in through the API and return the bearer token
    pub async fn login(&self) -> String {
        let response = self
            .send(
                "POST",
                "/api/admin/login",
                Some(json!({ "password": ADMIN_PASSWORD })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "admin login failed");
        response.body["token"].as_str().unwrap().to_string()
    }

    /// Record a result as admin and return its match id
    pub async fn record_result(
        &self,
        token: &str,
        home: i64,
        away: i64,
        home_score: i32,
        away_score: i32,
        date: &str,
    ) -> i64 {
        let response = self
            .send(
                "POST",
                "/api/results",
                Some(json!({
                    "home_player_id": home,
                    "away_player_id": away,
                    "home_score": home_score,
                    "away_score": away_score,
                    "date": date,
                })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["result"]["match_id"].as_i64().unwrap()
    }

    pub async fn league_table(&self) -> Vec<Value> {
        let response = self.get("/api/league-table").await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["league_table"].as_array().unwrap().clone()
    }
}
