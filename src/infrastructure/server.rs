// Server module - router assembly and the listening loop used by main.rs

use axum::Router;
use std::net::{SocketAddr, TcpListener};
use std::time::Duration;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::infrastructure::AppState;

/// Build the full router: HTML pages at the root, JSON under /api
pub fn build_router(state: AppState) -> Router {
    api::router(state).layer(TraceLayer::new_for_http())
}

/// Find an available port starting from the preferred port on a specific IP
pub fn find_available_port_on_ip(preferred_port: u16, ip: &str) -> Option<u16> {
    // Try preferred port first
    if TcpListener::bind((ip, preferred_port)).is_ok() {
        return Some(preferred_port);
    }

    // Scan next 100 ports
    (preferred_port.saturating_add(1)..preferred_port.saturating_add(100))
        .find(|&port| TcpListener::bind((ip, port)).is_ok())
}

/// Find an available port starting from the preferred port (127.0.0.1)
pub fn find_available_port(preferred_port: u16) -> Option<u16> {
    find_available_port_on_ip(preferred_port, "127.0.0.1")
}

/// Periodically discard sessions idle for longer than `max_idle`
pub fn spawn_session_reaper(state: &AppState, max_idle: Duration) {
    let sessions = state.sessions.clone();
    let period = (max_idle / 4).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            sessions.prune_idle(max_idle);
        }
    });
}

/// Serve until Ctrl-C. Returns once the listener has shut down.
pub async fn serve(state: AppState, preferred_port: u16) -> Result<(), String> {
    let port = find_available_port(preferred_port)
        .ok_or_else(|| "Failed to find available port".to_string())?;

    if port != preferred_port {
        tracing::warn!(
            "Preferred port {} was not available, using port {} instead",
            preferred_port,
            port
        );
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Online library listening on http://{}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down");
        })
        .await
        .map_err(|e| format!("HTTP server error: {}", e))
}
