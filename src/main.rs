use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use online_library::infrastructure::AppState;
use online_library::{config, db, seed, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "online_library=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize database
    let db = match db::init_db(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database {}: {}", config.database_url, e);
            std::process::exit(1);
        }
    };

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        if let Err(e) = seed::seed_demo_data(&db).await {
            tracing::error!("Failed to seed data: {}", e);
        }
    }

    let state = match AppState::new(db) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    server::spawn_session_reaper(&state, config.session_idle_timeout);

    if let Err(e) = server::serve(state, config.port).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
