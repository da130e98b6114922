//! HTTP server implementation using axum.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use futures_util::stream::StreamExt;
use futures_util::SinkExt;
use serde::Deserialize;
use tokio::sync::broadcast;
use tokio::sync::Semaphore;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

use pulse_core::Settings;

use crate::config::ServerConfig;
use crate::state::DashboardState;
use crate::types::DashboardMessage;

/// Shared application state for axum handlers.
#[derive(Clone)]
pub struct AppState {
    dashboard_state: DashboardState,
    broadcast_tx: broadcast::Sender<String>,
    /// Caps concurrent WebSocket connections; permits are held for the
    /// lifetime of each connection.
    ws_slots: Arc<Semaphore>,
}

impl AppState {
    pub fn new(
        dashboard_state: DashboardState,
        broadcast_tx: broadcast::Sender<String>,
        config: &ServerConfig,
    ) -> Self {
        Self {
            dashboard_state,
            broadcast_tx,
            ws_slots: Arc::new(Semaphore::new(config.max_connections)),
        }
    }
}

/// Create the axum router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/snapshot", get(get_snapshot))
        .route("/api/stats", get(get_stats))
        .route("/api/users", get(get_users))
        .route("/api/logs", get(get_logs))
        .route("/api/settings", get(get_settings).put(put_settings))
        .route("/ws", get(ws_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Full dashboard snapshot.
async fn get_snapshot(State(state): State<AppState>) -> Json<crate::types::DashboardSnapshot> {
    Json(state.dashboard_state.collect_snapshot())
}

/// Latest stats overview. 503 until the first refresh has completed.
async fn get_stats(State(state): State<AppState>) -> Response {
    match state.dashboard_state.latest_stats() {
        Some(stats) => Json(stats).into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "Stats not loaded yet").into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct UsersQuery {
    /// Substring filter over name and email.
    #[serde(default)]
    search: String,
}

/// User table, optionally filtered by `?search=`.
async fn get_users(
    State(state): State<AppState>,
    Query(query): Query<UsersQuery>,
) -> Json<Vec<pulse_core::User>> {
    Json(state.dashboard_state.users_matching(&query.search))
}

/// Current activity log, newest first.
async fn get_logs(State(state): State<AppState>) -> Json<Vec<crate::types::LogRecordView>> {
    let logs = state
        .dashboard_state
        .log_feed()
        .snapshot()
        .iter()
        .map(crate::types::LogRecordView::from)
        .collect();
    Json(logs)
}

/// Current settings.
async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    Json(state.dashboard_state.settings())
}

/// Replace the settings.
async fn put_settings(
    State(state): State<AppState>,
    Json(settings): Json<Settings>,
) -> Json<Settings> {
    state.dashboard_state.update_settings(settings);
    Json(state.dashboard_state.settings())
}

/// WebSocket upgrade handler.
async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    let permit = match state.ws_slots.clone().try_acquire_owned() {
        Ok(permit) => permit,
        Err(_) => {
            warn!("WebSocket connection limit reached");
            return (StatusCode::SERVICE_UNAVAILABLE, "Too many connections").into_response();
        }
    };

    info!(
        available = state.ws_slots.available_permits(),
        "New WebSocket connection"
    );

    ws.on_upgrade(move |socket| async move {
        handle_ws_connection(socket, state).await;
        drop(permit);
    })
}

/// Handle one WebSocket connection: initial snapshot, then broadcasts.
async fn handle_ws_connection(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();

    let mut broadcast_rx = state.broadcast_tx.subscribe();

    // Initial snapshot so the client renders without waiting for a change.
    let initial = DashboardMessage::Snapshot(state.dashboard_state.collect_snapshot());
    if let Ok(json) = serde_json::to_string(&initial) {
        if sender.send(Message::Text(json.into())).await.is_err() {
            debug!("Failed to send initial snapshot, client disconnected");
            return;
        }
    }

    // Drain incoming frames so close and ping are honored.
    let mut incoming_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(Message::Close(_)) => {
                    debug!("Client sent close frame");
                    break;
                }
                Err(e) => {
                    debug!(error = %e, "WebSocket receive error");
                    break;
                }
                _ => {}
            }
        }
    });

    loop {
        tokio::select! {
            result = broadcast_rx.recv() => {
                match result {
                    Ok(msg) => {
                        if sender.send(Message::Text(msg.into())).await.is_err() {
                            debug!("Failed to send message, client disconnected");
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!(skipped = n, "WebSocket client lagged, catching up");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        debug!("Broadcast channel closed");
                        break;
                    }
                }
            }
            _ = &mut incoming_task => {
                debug!("Incoming task completed, closing connection");
                break;
            }
        }
    }

    info!("WebSocket connection closed");
}

/// Run the dashboard HTTP server.
///
/// Spawns the broadcaster task and serves until the process exits.
pub async fn run_server(
    dashboard_state: DashboardState,
    config: ServerConfig,
) -> Result<(), crate::error::DashboardError> {
    // Feed updates arrive every few seconds; a small buffer absorbs slow
    // clients without unbounded growth.
    let (broadcast_tx, _) = broadcast::channel::<String>(32);

    let state = AppState::new(dashboard_state.clone(), broadcast_tx.clone(), &config);
    let app = create_router(state);

    tokio::spawn(async move {
        crate::broadcast::run_broadcaster(dashboard_state, broadcast_tx).await;
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(port = config.port, "Starting dashboard server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(crate::error::DashboardError::Bind)?;
    axum::serve(listener, app)
        .await
        .map_err(crate::error::DashboardError::Serve)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_slots_exhaust() {
        let slots = Arc::new(Semaphore::new(2));

        let a = slots.clone().try_acquire_owned().unwrap();
        let _b = slots.clone().try_acquire_owned().unwrap();
        assert!(slots.clone().try_acquire_owned().is_err());

        drop(a);
        assert!(slots.clone().try_acquire_owned().is_ok());
    }
}
