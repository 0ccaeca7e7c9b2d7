use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub seed_demo: bool,
    pub session_idle_timeout: Duration,
}

/// Minutes from `SESSION_IDLE_MINUTES`; 60 when unset, zero or unparsable
fn session_idle_timeout(raw: Option<&str>) -> Duration {
    let minutes = raw
        .and_then(|m| m.trim().parse::<u64>().ok())
        .filter(|m| *m > 0)
        .unwrap_or(60);
    Duration::from_secs(minutes.saturating_mul(60))
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://online_library.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            seed_demo: env::var("SEED_DEMO").is_ok(),
            session_idle_timeout: session_idle_timeout(
                env::var("SESSION_IDLE_MINUTES").ok().as_deref(),
            ),
        }
    }
}
