#![allow(dead_code)] // Test utilities may not all be used in every test

use std::sync::Arc;

use efootball_league::{
    auth::{AdminAuthService, TokenConfig},
    build_router,
    fixture::repository::InMemoryFixtureRepository,
    player::repository::InMemoryPlayerRepository,
    results::repository::InMemoryResultRepository,
    AppState, Player,
};

pub const ADMIN_PASSWORD: &str = "integration-password";

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// A fully wired router over in-memory stores
pub struct TestApp {
    pub state: AppState,
    pub router: axum::Router,
}

pub struct TestAppBuilder {
    players: Vec<Player>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self { players: vec![] }
    }

    pub fn with_players(mut self, players: Vec<(&str, &str, f64)>) -> Self {
        self.players = players
            .into_iter()
            .enumerate()
            .map(|(index, (name, team, strength))| Player {
                id: index as i64 + 1,
                name: name.to_string(),
                team: team.to_string(),
                strength,
                team_color: None,
                photo_url: None,
            })
            .collect();
        self
    }

    pub fn with_four_players(self) -> Self {
        self.with_players(vec![
            ("alice", "Chelsea", 3100.0),
            ("bob", "Everton", 2790.0),
            ("charlie", "Chelsea", 3040.0),
            ("david", "Liverpool", 2700.0),
        ])
    }

    pub fn with_default_roster(mut self) -> Self {
        self.players = efootball_league::default_roster();
        self
    }

    pub fn build(self) -> TestApp {
        let state = AppState::new(
            Arc::new(InMemoryPlayerRepository::with_players(self.players)),
            Arc::new(InMemoryResultRepository::new()),
            Arc::new(InMemoryFixtureRepository::new()),
            Arc::new(AdminAuthService::new(
                ADMIN_PASSWORD.to_string(),
                TokenConfig::new("integration-secret".to_string(), 1),
            )),
            "test".to_string(),
        );
        let router = build_router(state.clone());

        TestApp { state, router }
    }
}
