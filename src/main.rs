use efootball_league::{
    auth::{AdminAuthService, TokenConfig},
    build_router, default_roster,
    fixture::repository::{
        FixtureRepository, InMemoryFixtureRepository, PostgresFixtureRepository,
    },
    player::{
        models::NewPlayer,
        repository::{InMemoryPlayerRepository, PlayerRepository, PostgresPlayerRepository},
    },
    results::repository::{InMemoryResultRepository, PostgresResultRepository, ResultRepository},
    AppConfig, AppError, AppState,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
enum StartupError {
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("seeding failed: {0}")]
    Seed(#[from] AppError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

type Repositories = (
    Arc<dyn PlayerRepository>,
    Arc<dyn ResultRepository>,
    Arc<dyn FixtureRepository>,
);

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "efootball_league=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(AppConfig::from_env()).await {
        error!(error = %e, "Server stopped");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), StartupError> {
    info!(environment = %config.environment, "Starting eFootball league server");

    let (player_repository, result_repository, fixture_repository) = match &config.database_url {
        Some(url) => postgres_repositories(url).await?,
        None => {
            warn!("DATABASE_URL not set, using in-memory storage seeded with the default roster");
            in_memory_repositories()
        }
    };

    let admin_auth = Arc::new(AdminAuthService::new(
        config.admin_password.clone(),
        TokenConfig::new(config.jwt_secret.clone(), config.admin_token_hours),
    ));

    let app_state = AppState::new(
        player_repository,
        result_repository,
        fixture_repository,
        admin_auth,
        config.environment.clone(),
    );

    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Server running on http://localhost:{}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}

fn in_memory_repositories() -> Repositories {
    (
        Arc::new(InMemoryPlayerRepository::with_players(default_roster())),
        Arc::new(InMemoryResultRepository::new()),
        Arc::new(InMemoryFixtureRepository::new()),
    )
}

async fn postgres_repositories(url: &str) -> Result<Repositories, StartupError> {
    let pool = sqlx::PgPool::connect(url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database connected and migrated");

    let players = PostgresPlayerRepository::new(pool.clone());
    if players.list_players().await?.is_empty() {
        for player in default_roster() {
            players
                .create_player(NewPlayer {
                    name: player.name,
                    team: player.team,
                    strength: player.strength,
                    team_color: player.team_color,
                    photo_url: player.photo_url,
                })
                .await?;
        }
        info!("Seeded empty player table with the default roster");
    }

    Ok((
        Arc::new(players),
        Arc::new(PostgresResultRepository::new(pool.clone())),
        Arc::new(PostgresFixtureRepository::new(pool)),
    ))
}
